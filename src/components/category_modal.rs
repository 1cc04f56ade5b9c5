use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{use_api, use_fetch_seq};
use crate::components::icons::{icon_trending_down, icon_trending_up, icon_x};
use crate::format;
use crate::models::{Movement, MovementType};

#[derive(Properties, PartialEq)]
pub struct CategoryModalProps {
    pub open: bool,
    pub category: Option<String>,
    #[prop_or_default]
    pub month: Option<u32>,
    #[prop_or_default]
    pub year: Option<i32>,
    pub on_close: Callback<()>,
}

/// Drill-down over one category: its movements for the selected period
/// (or all time) with total and count.
#[function_component(CategoryModal)]
pub fn category_modal(props: &CategoryModalProps) -> Html {
    let api = use_api();
    let seq = use_fetch_seq();
    let movements = use_state(Vec::<Movement>::new);
    let loading = use_state(|| false);

    {
        let api = api.clone();
        let seq = seq.clone();
        let movements = movements.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |(open, category, month, year): &(bool, Option<String>, Option<u32>, Option<i32>)| {
                if *open {
                    if let Some(category) = category.clone() {
                        let mut query: Vec<(&str, String)> =
                            vec![("category", category.clone())];
                        if let Some(month) = month {
                            query.push(("month", month.to_string()));
                        }
                        if let Some(year) = year {
                            query.push(("year", year.to_string()));
                        }
                        loading.set(true);
                        let ticket = seq.issue();
                        let api = api.clone();
                        let seq = seq.clone();
                        let movements = movements.clone();
                        let loading = loading.clone();
                        spawn_local(async move {
                            match api.get::<Vec<Movement>>("/movements", &query).await {
                                Ok(list) if seq.is_current(ticket) => {
                                    // the name match is kept client-side too, in case the
                                    // server ignores the category filter
                                    movements.set(
                                        list.into_iter()
                                            .filter(|m| m.category == category)
                                            .collect(),
                                    );
                                    loading.set(false);
                                }
                                Ok(_) => {}
                                Err(err) => {
                                    if seq.is_current(ticket) {
                                        web_sys::console::error_1(
                                            &format!("movements fetch failed: {}", err).into(),
                                        );
                                        loading.set(false);
                                    }
                                }
                            }
                        });
                    }
                }
                || ()
            },
            (
                props.open,
                props.category.clone(),
                props.month,
                props.year,
            ),
        );
    }

    if !props.open {
        return html! {};
    }
    let Some(category) = props.category.clone() else {
        return html! {};
    };

    let total: f64 = movements.iter().map(|m| m.amount).sum();
    let period = match (props.month, props.year) {
        (Some(month), Some(year)) => format!("{} {}", format::month_full(month), year),
        _ => "Tutti i periodi".to_string(),
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-4">
            <div class="bg-white rounded-2xl shadow-2xl w-full max-w-3xl max-h-[80vh] flex flex-col">
                <div class="p-6 border-b border-slate-200">
                    <div class="flex items-center justify-between">
                        <div>
                            <h2 class="text-2xl font-bold text-slate-800">{ format!("Movimenti: {}", category) }</h2>
                            <p class="text-sm text-slate-500 mt-1">{ period }</p>
                        </div>
                        <button onclick={on_close} class="p-2 hover:bg-slate-100 rounded-lg transition-colors">
                            { icon_x() }
                        </button>
                    </div>
                    <div class="mt-4 grid grid-cols-2 gap-4">
                        <div class="bg-gradient-to-br from-blue-50 to-indigo-50 p-4 rounded-xl">
                            <p class="text-xs text-slate-600 mb-1">{"Totale"}</p>
                            <p class="text-2xl font-bold text-slate-800">{ format::eur(total) }</p>
                        </div>
                        <div class="bg-gradient-to-br from-emerald-50 to-teal-50 p-4 rounded-xl">
                            <p class="text-xs text-slate-600 mb-1">{"Movimenti"}</p>
                            <p class="text-2xl font-bold text-slate-800">{ movements.len() }</p>
                        </div>
                    </div>
                </div>
                <div class="flex-1 overflow-y-auto p-6">
                    if *loading {
                        <div class="text-center py-8 text-slate-500">{"Caricamento..."}</div>
                    } else if movements.is_empty() {
                        <div class="text-center py-8 text-slate-400">{"Nessun movimento per questa categoria"}</div>
                    } else {
                        <div class="divide-y divide-slate-100">
                            { for movements.iter().map(|movement| {
                                let is_income = movement.kind == MovementType::Income;
                                html! {
                                    <div class="py-3 flex items-center justify-between">
                                        <div class="flex items-center space-x-3">
                                            <div class={if is_income { "p-2 rounded-full bg-emerald-100 text-emerald-600" } else { "p-2 rounded-full bg-rose-100 text-rose-600" }}>
                                                { if is_income { icon_trending_up() } else { icon_trending_down() } }
                                            </div>
                                            <div>
                                                <p class="text-sm font-medium text-slate-800">{ format::date_medium(movement.date) }</p>
                                                if let Some(description) = &movement.description {
                                                    <p class="text-xs text-slate-500">{ description }</p>
                                                }
                                            </div>
                                        </div>
                                        <span class={if is_income { "font-bold text-emerald-600" } else { "font-bold text-slate-700" }}>
                                            { if is_income { format::eur(movement.amount) } else { format!("-{}", format::eur(movement.amount)) } }
                                        </span>
                                    </div>
                                }
                            }) }
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
