use yew::prelude::*;

use crate::components::icons::{icon_check, icon_x};
use crate::stats::{password_report, PasswordReport};

#[derive(Properties, PartialEq)]
pub struct PasswordMeterProps {
    pub password: String,
}

fn bar_class(report: PasswordReport) -> &'static str {
    match report.score() {
        0..=2 => "bg-rose-500",
        3..=4 => "bg-amber-500",
        _ => "bg-emerald-500",
    }
}

fn label_class(report: PasswordReport) -> &'static str {
    match report.score() {
        0..=2 => "text-rose-600",
        3..=4 => "text-amber-600",
        _ => "text-emerald-600",
    }
}

#[function_component(PasswordMeter)]
pub fn password_meter(props: &PasswordMeterProps) -> Html {
    let report = password_report(&props.password);
    let requirements = [
        ("Almeno 8 caratteri", report.long_enough),
        ("Una lettera maiuscola", report.has_upper),
        ("Una lettera minuscola", report.has_lower),
        ("Un numero", report.has_digit),
        ("Un carattere speciale", report.has_special),
    ];

    html! {
        <div class="space-y-3 mt-2">
            <div class="h-2 w-full bg-slate-100 rounded-full overflow-hidden">
                <div
                    class={format!("h-full transition-all duration-300 {}", bar_class(report))}
                    style={format!("width: {}%", report.score() as u32 * 20)}
                />
            </div>
            <p class="text-xs font-medium text-slate-500 text-right">
                {"Forza: "}
                <span class={label_class(report)}>{ report.label() }</span>
            </p>
            <ul class="space-y-1">
                { for requirements.iter().map(|(label, met)| html! {
                    <li class="flex items-center space-x-2 text-xs">
                        <span class={if *met { "text-emerald-500" } else { "text-slate-300" }}>
                            { if *met { icon_check() } else { icon_x() } }
                        </span>
                        <span class={if *met { "text-slate-700" } else { "text-slate-400" }}>
                            { *label }
                        </span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
