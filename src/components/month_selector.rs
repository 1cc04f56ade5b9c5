use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_api;
use crate::components::icons::{icon_calendar, icon_chevron_left, icon_chevron_right};
use crate::format::{self, MONTHS_SHORT};
use crate::models::AvailableYears;

#[derive(Properties, PartialEq)]
pub struct MonthSelectorProps {
    pub month: u32,
    pub year: i32,
    pub on_change: Callback<(u32, i32)>,
    #[prop_or(false)]
    pub compact: bool,
}

#[function_component(MonthSelector)]
pub fn month_selector(props: &MonthSelectorProps) -> Html {
    let api = use_api();
    let available_years = use_state(|| vec![format::today().year()]);

    {
        let available_years = available_years.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api
                        .get::<AvailableYears>("/dashboard/available-years", &[])
                        .await
                    {
                        Ok(payload) if !payload.years.is_empty() => {
                            available_years.set(payload.years);
                        }
                        Ok(_) => {}
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("available-years fetch failed: {}", err).into(),
                            );
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let (prev_year, next_year) = format::year_neighbors(&available_years, props.year);

    let on_prev_year = {
        let on_change = props.on_change.clone();
        let month = props.month;
        Callback::from(move |_| {
            if let Some(year) = prev_year {
                on_change.emit((month, year));
            }
        })
    };
    let on_next_year = {
        let on_change = props.on_change.clone();
        let month = props.month;
        Callback::from(move |_| {
            if let Some(year) = next_year {
                on_change.emit((month, year));
            }
        })
    };

    let month_buttons = |grid_class: &'static str, button_classes: (&'static str, &'static str)| {
        let (active, idle) = button_classes;
        html! {
            <div class={grid_class}>
                { for MONTHS_SHORT.iter().enumerate().map(|(index, label)| {
                    let month_number = index as u32 + 1;
                    let is_selected = month_number == props.month;
                    let on_change = props.on_change.clone();
                    let year = props.year;
                    html! {
                        <button
                            onclick={Callback::from(move |_| on_change.emit((month_number, year)))}
                            class={if is_selected { active } else { idle }}
                        >
                            { *label }
                        </button>
                    }
                }) }
            </div>
        }
    };

    if props.compact {
        return html! {
            <div class="bg-white rounded-2xl shadow-sm border border-slate-100 p-4 h-fit sticky top-6">
                <div class="flex items-center space-x-2 mb-4 pb-4 border-b border-slate-100">
                    <div class="p-2 bg-emerald-50 rounded-lg text-emerald-600">{ icon_calendar() }</div>
                    <div class="flex-1">
                        <h3 class="text-sm font-semibold text-slate-600">{"Periodo"}</h3>
                        <p class="text-xs text-slate-400">{ format::month_full(props.month) }</p>
                    </div>
                </div>
                <div class="flex items-center justify-between mb-3">
                    <button onclick={on_prev_year} disabled={prev_year.is_none()} class="p-1.5 rounded-lg text-slate-600 hover:bg-slate-100 disabled:opacity-30 disabled:cursor-not-allowed transition-all">
                        { icon_chevron_left() }
                    </button>
                    <span class="text-lg font-bold text-slate-800">{ props.year }</span>
                    <button onclick={on_next_year} disabled={next_year.is_none()} class="p-1.5 rounded-lg text-slate-600 hover:bg-slate-100 disabled:opacity-30 disabled:cursor-not-allowed transition-all">
                        { icon_chevron_right() }
                    </button>
                </div>
                { month_buttons(
                    "grid grid-cols-3 gap-1.5",
                    (
                        "py-2.5 px-2 rounded-lg font-medium text-xs bg-emerald-600 text-white shadow-md transition-all duration-200",
                        "py-2.5 px-2 rounded-lg font-medium text-xs bg-slate-50 text-slate-600 hover:bg-emerald-50 hover:text-emerald-700 transition-all duration-200",
                    ),
                ) }
            </div>
        };
    }

    html! {
        <div>
            <div class="flex items-center space-x-3 mb-6">
                <div class="p-2 bg-emerald-50 rounded-lg text-emerald-600">{ icon_calendar() }</div>
                <h3 class="text-xl font-bold text-slate-800">
                    { format!("{} {}", format::month_full(props.month), props.year) }
                </h3>
            </div>
            { month_buttons(
                "grid grid-cols-6 md:grid-cols-12 gap-2 mb-4",
                (
                    "py-3 px-2 rounded-lg font-medium text-sm bg-emerald-600 text-white shadow-md transition-all duration-200",
                    "py-3 px-2 rounded-lg font-medium text-sm bg-slate-50 text-slate-600 hover:bg-slate-100 transition-all duration-200",
                ),
            ) }
            <div class="flex items-center justify-between pt-4 border-t border-slate-100">
                <button onclick={on_prev_year} disabled={prev_year.is_none()} class="p-2 rounded-lg text-slate-600 hover:bg-slate-100 disabled:opacity-30 disabled:cursor-not-allowed transition-all">
                    { icon_chevron_left() }
                </button>
                <div class="flex items-center space-x-2">
                    <span class="text-sm font-medium text-slate-500">{"Anno:"}</span>
                    <span class="text-lg font-bold text-slate-800">{ props.year }</span>
                </div>
                <button onclick={on_next_year} disabled={next_year.is_none()} class="p-2 rounded-lg text-slate-600 hover:bg-slate-100 disabled:opacity-30 disabled:cursor-not-allowed transition-all">
                    { icon_chevron_right() }
                </button>
            </div>
        </div>
    }
}
