use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{use_api, use_fetch_seq};
use crate::bus::{publish, set_date_context, use_bus, Topic};
use crate::auth::use_session;
use crate::components::category_modal::CategoryModal;
use crate::components::icons::{
    icon_alert_circle, icon_target, icon_trending_down, icon_trending_up, icon_wallet,
};
use crate::components::month_selector::MonthSelector;
use crate::components::movement_card::MovementCard;
use crate::format;
use crate::models::{BudgetStatusEntry, BudgetStatusResponse, Movement, Summary};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_api();
    let bus = use_bus();
    let session = use_session();
    let seq = use_fetch_seq();

    let today = format::today();
    let month = use_state(|| today.month());
    let year = use_state(|| today.year());
    let summary = use_state(Summary::default);
    let budget_status = use_state(Vec::<BudgetStatusEntry>::new);
    let movements = use_state(Vec::<Movement>::new);
    let transitioning = use_state(|| false);
    let modal_category = use_state(|| None::<String>);

    // the quick-add form proposes today while the dashboard is in view
    {
        let bus = bus.clone();
        use_effect_with_deps(
            move |_| {
                set_date_context(&bus, format::today());
                || ()
            },
            (),
        );
    }

    {
        let api = api.clone();
        let seq = seq.clone();
        let summary = summary.clone();
        let budget_status = budget_status.clone();
        let movements = movements.clone();
        let transitioning = transitioning.clone();
        use_effect_with_deps(
            move |(month, year, _, _): &(u32, i32, u64, u64)| {
                let query = vec![("month", month.to_string()), ("year", year.to_string())];
                transitioning.set(true);
                let ticket = seq.issue();
                spawn_local(async move {
                    let summary_res = api.get::<Summary>("/dashboard/summary", &query).await;
                    let status_res = api
                        .get::<BudgetStatusResponse>("/dashboard/budget-status", &query)
                        .await;
                    let movements_res = api.get::<Vec<Movement>>("/movements", &query).await;
                    if !seq.is_current(ticket) {
                        return;
                    }
                    match summary_res {
                        Ok(payload) => summary.set(payload),
                        Err(err) => web_sys::console::error_1(
                            &format!("summary fetch failed: {}", err).into(),
                        ),
                    }
                    match status_res {
                        Ok(payload) => budget_status.set(payload.budgets),
                        Err(err) => web_sys::console::error_1(
                            &format!("budget-status fetch failed: {}", err).into(),
                        ),
                    }
                    match movements_res {
                        Ok(payload) => movements.set(payload),
                        Err(err) => web_sys::console::error_1(
                            &format!("movements fetch failed: {}", err).into(),
                        ),
                    }
                    transitioning.set(false);
                });
                || ()
            },
            (
                *month,
                *year,
                (*bus).stamp(Topic::Movements),
                (*bus).stamp(Topic::Budgets),
            ),
        );
    }

    let on_month_change = {
        let month = month.clone();
        let year = year.clone();
        Callback::from(move |(new_month, new_year): (u32, i32)| {
            month.set(new_month);
            year.set(new_year);
        })
    };

    let on_movement_changed = {
        let bus = bus.clone();
        Callback::from(move |_| publish(&bus, Topic::Movements))
    };

    let fade = if *transitioning {
        "transition-opacity duration-200 opacity-50"
    } else {
        "transition-opacity duration-200 opacity-100"
    };

    let balance_positive = summary.balance >= 0.0;

    html! {
        <>
            <div class="flex flex-col md:flex-row gap-6">
                <div class="w-full md:w-64 flex-shrink-0">
                    <div class={format!("md:sticky md:top-24 space-y-3 {}", fade)}>
                        if let Some(user) = &session.user {
                            <div class="bg-white p-4 rounded-xl shadow-sm border border-slate-100">
                                <p class="text-xs text-slate-500 mb-1">{"Benvenuto,"}</p>
                                <h3 class="font-bold text-slate-800 truncate">{ user.display_name() }</h3>
                            </div>
                        }

                        <div class="bg-gradient-to-br from-blue-600 to-indigo-700 p-4 rounded-xl shadow-md text-white">
                            <div class="p-2 rounded-lg bg-white/20 w-fit mb-2">{ icon_wallet() }</div>
                            <p class="text-xs font-medium text-blue-100 mb-1">{"Saldo Attuale"}</p>
                            <h3 class="text-2xl font-bold">{ format::eur(summary.balance) }</h3>
                            <div class="mt-3 pt-3 border-t border-white/20">
                                <span class={if balance_positive { "text-xs font-semibold text-emerald-300" } else { "text-xs font-semibold text-rose-300" }}>
                                    { if balance_positive { "In attivo" } else { "In passivo" } }
                                </span>
                            </div>
                        </div>

                        <div class="grid grid-cols-2 md:grid-cols-1 gap-3">
                            <div class="bg-white p-4 rounded-xl shadow-sm border border-slate-100 hover:shadow-md transition-all">
                                <div class="p-2 rounded-lg bg-rose-50 text-rose-600 w-fit mb-2">{ icon_trending_down() }</div>
                                <p class="text-xs font-medium text-slate-500 mb-1">{"Spese Totali"}</p>
                                <h3 class="text-lg md:text-2xl font-bold text-rose-600 truncate">{ format::eur(summary.expense) }</h3>
                            </div>
                            <div class="bg-white p-4 rounded-xl shadow-sm border border-slate-100 hover:shadow-md transition-all">
                                <div class="p-2 rounded-lg bg-emerald-50 text-emerald-600 w-fit mb-2">{ icon_trending_up() }</div>
                                <p class="text-xs font-medium text-slate-500 mb-1">{"Entrate Totali"}</p>
                                <h3 class="text-lg md:text-2xl font-bold text-emerald-600 truncate">{ format::eur(summary.income) }</h3>
                            </div>
                        </div>
                    </div>
                </div>

                <div class={format!("flex-1 {}", fade)}>
                    <div class="space-y-6">
                        <div class="bg-white p-4 rounded-2xl shadow-sm border border-slate-100">
                            <MonthSelector month={*month} year={*year} on_change={on_month_change} />
                        </div>

                        <div class="bg-white rounded-2xl shadow-sm border border-slate-100 overflow-hidden">
                            <div class="p-4 border-b border-slate-100 flex justify-between items-center bg-slate-50/50">
                                <h3 class="font-bold text-slate-800">{"Ultimi Movimenti"}</h3>
                                <span class="text-xs font-medium text-slate-500 bg-slate-100 px-2 py-1 rounded-full">
                                    { format!("{} transazioni", movements.len()) }
                                </span>
                            </div>
                            <div class="max-h-96 overflow-y-auto">
                                if movements.is_empty() {
                                    <div class="p-8 text-center text-slate-400 text-sm">{"Nessun movimento in questo periodo"}</div>
                                } else {
                                    { for movements.iter().map(|movement| html! {
                                        <MovementCard
                                            key={movement.id}
                                            movement={movement.clone()}
                                            on_changed={on_movement_changed.clone()}
                                        />
                                    }) }
                                }
                            </div>
                        </div>

                        if budget_status.is_empty() {
                            <div class="bg-white p-12 rounded-2xl shadow-sm border border-slate-100 text-center">
                                <div class="p-4 bg-slate-50 rounded-full w-20 h-20 mx-auto mb-4 flex items-center justify-center text-slate-300">
                                    { icon_target() }
                                </div>
                                <h3 class="text-lg font-semibold text-slate-700 mb-2">{"Nessun Budget Configurato"}</h3>
                                <p class="text-slate-500 text-sm">{"Imposta i tuoi limiti di spesa mensili per monitorare le finanze"}</p>
                            </div>
                        } else {
                            <div class="bg-white p-8 rounded-2xl shadow-sm border border-slate-100">
                                <div class="flex items-center justify-between mb-8">
                                    <div>
                                        <h2 class="text-2xl font-bold text-slate-800">{"Andamento Budget"}</h2>
                                        <p class="text-slate-500 text-sm mt-1">{"Monitora i tuoi limiti di spesa mensili"}</p>
                                    </div>
                                    <div class="p-3 bg-emerald-50 rounded-xl text-emerald-600">{ icon_target() }</div>
                                </div>
                                <div class="space-y-6">
                                    { for budget_status.iter().map(|entry| {
                                        let modal_category = modal_category.clone();
                                        let category = entry.category.clone();
                                        let open_modal = Callback::from(move |_| modal_category.set(Some(category.clone())));
                                        html! { <BudgetStatusCard entry={entry.clone()} on_open={open_modal} /> }
                                    }) }
                                </div>
                            </div>
                        }
                    </div>
                </div>
            </div>

            <CategoryModal
                open={modal_category.is_some()}
                category={(*modal_category).clone()}
                month={Some(*month)}
                year={Some(*year)}
                on_close={{
                    let modal_category = modal_category.clone();
                    Callback::from(move |_| modal_category.set(None))
                }}
            />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct BudgetStatusCardProps {
    entry: BudgetStatusEntry,
    on_open: Callback<MouseEvent>,
}

// colour steps follow the server-reported percentage, unclamped for the
// label, clamped for the bar width
#[function_component(BudgetStatusCard)]
fn budget_status_card(props: &BudgetStatusCardProps) -> Html {
    let entry = &props.entry;
    let pct = entry.percentage;
    let bar = if pct < 75.0 {
        "bg-emerald-500"
    } else if pct < 90.0 {
        "bg-yellow-500"
    } else {
        "bg-rose-500"
    };
    let text = if pct < 75.0 {
        "text-emerald-600"
    } else if pct < 90.0 {
        "text-yellow-600"
    } else {
        "text-rose-600"
    };
    let background = if pct < 75.0 {
        "bg-emerald-50"
    } else if pct < 90.0 {
        "bg-yellow-50"
    } else {
        "bg-rose-50"
    };
    let border = if pct >= 90.0 {
        "border-rose-200"
    } else {
        "border-slate-100"
    };
    let remaining_ok = entry.remaining >= 0.0;

    html! {
        <div
            onclick={props.on_open.clone()}
            class={format!("p-6 rounded-xl border-2 {} {} transition-all cursor-pointer hover:shadow-md", border, background)}
        >
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-lg font-bold text-slate-800">{ &entry.category }</h3>
                <div class="flex items-center space-x-3">
                    if pct >= 90.0 {
                        <span class="text-rose-500">{ icon_alert_circle() }</span>
                    }
                    <span class={format!("text-2xl font-bold {}", text)}>{ format!("{:.0}%", pct) }</span>
                </div>
            </div>
            <div class="mb-4">
                <div class="h-4 bg-white/60 rounded-full overflow-hidden shadow-inner">
                    <div
                        class={format!("h-full {} transition-all duration-500 rounded-full", bar)}
                        style={format!("width: {}%", pct.min(100.0))}
                    />
                </div>
            </div>
            <div class="flex justify-between items-center text-sm">
                <div>
                    <span class="text-slate-600 font-medium">{"Speso: "}</span>
                    <span class="text-slate-800 font-bold">{ format::eur(entry.spent) }</span>
                    <span class="text-slate-400 mx-2">{"/"}</span>
                    <span class="text-slate-600">{ format::eur(entry.limit) }</span>
                </div>
                <div class={if remaining_ok { "font-bold text-emerald-600" } else { "font-bold text-rose-600" }}>
                    { if remaining_ok { "Rimanenti: " } else { "Superato di: " } }
                    { format::eur(entry.remaining.abs()) }
                </div>
            </div>
        </div>
    }
}
