use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{use_api, use_fetch_seq, ApiError};
use crate::bus::{publish, use_bus, Topic};
use crate::components::category_modal::CategoryModal;
use crate::components::icons::{
    icon_alert_circle, icon_chevron_right, icon_edit, icon_pie_chart, icon_plus, icon_trash,
    icon_wallet, icon_x,
};
use crate::components::toast::{show_error, use_toast};
use crate::components::{bind_input, bind_select, confirm};
use crate::format;
use crate::models::{
    parse_amount, Budget, BudgetPayload, Category, CategoryAmount, ChartData, Movement, Summary,
};
use crate::stats::{
    budget_health, budget_overrun, budget_progress, reassign_targets, spent_for, BudgetHealth,
};

#[function_component(BudgetsPage)]
pub fn budgets_page() -> Html {
    let api = use_api();
    let bus = use_bus();
    let toast = use_toast();
    let seq = use_fetch_seq();

    let budgets = use_state(Vec::<Budget>::new);
    let expenses = use_state(Vec::<CategoryAmount>::new);
    let categories = use_state(Vec::<Category>::new);
    let summary = use_state(Summary::default);

    // create/edit form
    let form_open = use_state(|| false);
    let editing_id = use_state(|| None::<i64>);
    let form_category = use_state(String::new);
    let form_amount = use_state(String::new);
    let all_months = use_state(|| true);
    let selected_months = use_state(Vec::<u32>::new);

    // delete flow
    let delete_target = use_state(|| None::<(Budget, Vec<Movement>)>);
    let reassign_to = use_state(|| None::<String>);

    let drill_category = use_state(|| None::<String>);

    {
        let api = api.clone();
        let seq = seq.clone();
        let budgets = budgets.clone();
        let expenses = expenses.clone();
        let categories = categories.clone();
        let summary = summary.clone();
        use_effect_with_deps(
            move |_: &(u64, u64)| {
                let ticket = seq.issue();
                spawn_local(async move {
                    let budgets_res = api.get::<Vec<Budget>>("/budgets", &[]).await;
                    let chart_res = api.get::<ChartData>("/dashboard/chart-data", &[]).await;
                    let categories_res = api.get::<Vec<Category>>("/categories", &[]).await;
                    let summary_res = api.get::<Summary>("/dashboard/summary", &[]).await;
                    if !seq.is_current(ticket) {
                        return;
                    }
                    match budgets_res {
                        Ok(payload) => budgets.set(payload),
                        Err(err) => web_sys::console::error_1(
                            &format!("budgets fetch failed: {}", err).into(),
                        ),
                    }
                    match chart_res {
                        Ok(payload) => expenses.set(payload.expenses_by_category),
                        Err(err) => web_sys::console::error_1(
                            &format!("chart-data fetch failed: {}", err).into(),
                        ),
                    }
                    match categories_res {
                        Ok(payload) => categories.set(payload),
                        Err(err) => web_sys::console::error_1(
                            &format!("categories fetch failed: {}", err).into(),
                        ),
                    }
                    match summary_res {
                        Ok(payload) => summary.set(payload),
                        Err(err) => web_sys::console::error_1(
                            &format!("summary fetch failed: {}", err).into(),
                        ),
                    }
                });
                || ()
            },
            (
                (*bus).stamp(Topic::Budgets),
                (*bus).stamp(Topic::Movements),
            ),
        );
    }

    let open_create = {
        let form_open = form_open.clone();
        let editing_id = editing_id.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let all_months = all_months.clone();
        let selected_months = selected_months.clone();
        let categories = categories.clone();
        Callback::from(move |_| {
            editing_id.set(None);
            form_category.set(
                categories
                    .first()
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
            );
            form_amount.set(String::new());
            all_months.set(true);
            selected_months.set(Vec::new());
            form_open.set(true);
        })
    };

    let open_edit = {
        let form_open = form_open.clone();
        let editing_id = editing_id.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let all_months = all_months.clone();
        let selected_months = selected_months.clone();
        Callback::from(move |budget: Budget| {
            editing_id.set(Some(budget.id));
            form_category.set(budget.category.clone());
            form_amount.set(budget.amount.to_string());
            match &budget.applicable_months {
                Some(months) => {
                    all_months.set(false);
                    selected_months.set(months.clone());
                }
                None => {
                    all_months.set(true);
                    selected_months.set(Vec::new());
                }
            }
            form_open.set(true);
        })
    };

    let on_save = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        let form_open = form_open.clone();
        let form_category = form_category.clone();
        let form_amount = form_amount.clone();
        let all_months = all_months.clone();
        let selected_months = selected_months.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let amount = match parse_amount(&form_amount) {
                Ok(amount) => amount,
                Err(message) => {
                    show_error(&toast, message);
                    return;
                }
            };
            if form_category.is_empty() {
                show_error(&toast, "Seleziona una categoria");
                return;
            }
            if !*all_months && selected_months.is_empty() {
                show_error(&toast, "Seleziona almeno un mese");
                return;
            }
            let payload = BudgetPayload {
                category: (*form_category).clone(),
                amount,
                applicable_months: if *all_months {
                    None
                } else {
                    Some((*selected_months).clone())
                },
            };
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            let form_open = form_open.clone();
            spawn_local(async move {
                match api.post::<_, Budget>("/budgets", &payload).await {
                    Ok(_) => {
                        form_open.set(false);
                        publish(&bus, Topic::Budgets);
                    }
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    // check dependent expenses first: zero means a plain confirm,
    // nonzero opens the reassignment choice; if even the check fails
    // the user still gets the direct-delete prompt
    let on_delete_click = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        let delete_target = delete_target.clone();
        let reassign_to = reassign_to.clone();
        Callback::from(move |budget: Budget| {
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            let delete_target = delete_target.clone();
            let reassign_to = reassign_to.clone();
            spawn_local(async move {
                let dependents = api
                    .get::<Vec<Movement>>(&format!("/budgets/{}/expenses", budget.id), &[])
                    .await;
                match dependents {
                    Ok(expenses) if !expenses.is_empty() => {
                        reassign_to.set(None);
                        delete_target.set(Some((budget, expenses)));
                    }
                    Ok(_) => {
                        if confirm(&format!(
                            "Sei sicuro di voler eliminare il budget per {}?",
                            budget.category
                        )) {
                            if let Err(err) =
                                api.delete(&format!("/budgets/{}", budget.id)).await
                            {
                                show_error(&toast, err.to_string());
                            } else {
                                publish(&bus, Topic::Budgets);
                            }
                        }
                    }
                    Err(check_err) => {
                        web_sys::console::error_1(
                            &format!("dependent-expense check failed: {}", check_err).into(),
                        );
                        // availability over precision: still offer the delete
                        if confirm(&format!(
                            "Sei sicuro di voler eliminare il budget per {}?",
                            budget.category
                        )) {
                            if let Err(err) =
                                api.delete(&format!("/budgets/{}", budget.id)).await
                            {
                                show_error(&toast, err.to_string());
                            } else {
                                publish(&bus, Topic::Budgets);
                            }
                        }
                    }
                }
            });
        })
    };

    let on_confirm_delete = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        let delete_target = delete_target.clone();
        let reassign_to = reassign_to.clone();
        Callback::from(move |_| {
            let Some((budget, _)) = (*delete_target).clone() else {
                return;
            };
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            let delete_target = delete_target.clone();
            let reassign = (*reassign_to).clone();
            spawn_local(async move {
                // one combined server call for the reassignment path, so a
                // partial failure cannot leave the two halves disagreeing
                let outcome: Result<(), ApiError> = match reassign {
                    Some(new_category) => api
                        .post_empty::<serde_json::Value>(
                            &format!("/budgets/reassign-and-delete/{}", budget.id),
                            &[("new_category", new_category)],
                        )
                        .await
                        .map(|_| ()),
                    None => api.delete(&format!("/budgets/{}", budget.id)).await,
                };
                match outcome {
                    Ok(()) => {
                        delete_target.set(None);
                        publish(&bus, Topic::Budgets);
                    }
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let total_budget: f64 = budgets.iter().map(|b| b.amount).sum();
    let difference = summary.income - total_budget;

    html! {
        <div class="space-y-6 relative">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-slate-800">{"Budget Mensili"}</h1>
                    <p class="text-slate-500 text-sm">{"Imposta i limiti di spesa per categoria"}</p>
                </div>
                <button onclick={open_create.clone()} class="bg-emerald-600 text-white px-5 py-2.5 rounded-xl flex items-center space-x-2 hover:bg-emerald-700 transition-all shadow-sm hover:shadow-md">
                    { icon_plus() }
                    <span>{"Nuovo Budget"}</span>
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div class="bg-white p-5 rounded-2xl shadow-sm border border-slate-100 flex items-center gap-4">
                    <div class="p-3 bg-blue-50 rounded-xl text-blue-600">{ icon_wallet() }</div>
                    <div>
                        <p class="text-sm text-slate-500 font-medium">{"Budget Allocato"}</p>
                        <h3 class="text-2xl font-bold text-slate-800">{ format::eur(total_budget) }</h3>
                    </div>
                </div>
                <div class="bg-white p-5 rounded-2xl shadow-sm border border-slate-100 flex items-center gap-4">
                    <div class="p-3 bg-emerald-50 rounded-xl text-emerald-600">{ icon_pie_chart() }</div>
                    <div>
                        <p class="text-sm text-slate-500 font-medium">{"Entrate Mensili"}</p>
                        <h3 class="text-2xl font-bold text-slate-800">{ format::eur(summary.income) }</h3>
                    </div>
                </div>
                <div class="bg-white p-5 rounded-2xl shadow-sm border border-slate-100 flex items-center gap-4">
                    <div class={if difference >= 0.0 { "p-3 rounded-xl bg-indigo-50 text-indigo-600" } else { "p-3 rounded-xl bg-rose-50 text-rose-600" }}>
                        { icon_wallet() }
                    </div>
                    <div>
                        <p class="text-sm text-slate-500 font-medium">{"Disponibile"}</p>
                        <h3 class={if difference >= 0.0 { "text-2xl font-bold text-indigo-600" } else { "text-2xl font-bold text-rose-600" }}>
                            { format::eur(difference) }
                        </h3>
                    </div>
                </div>
            </div>

            if *form_open {
                <div class="bg-white p-6 rounded-2xl shadow-lg border border-slate-100">
                    <h2 class="text-lg font-semibold mb-4 text-slate-800">
                        { if editing_id.is_some() { "Modifica Budget" } else { "Nuovo Budget" } }
                    </h2>
                    <form onsubmit={on_save} class="space-y-6">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Categoria"}</label>
                                <select
                                    disabled={editing_id.is_some()}
                                    onchange={bind_select(form_category.clone())}
                                    class="w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2.5 px-3"
                                >
                                    { for categories.iter().map(|cat| html! {
                                        <option value={cat.name.clone()} selected={*form_category == cat.name}>{ &cat.name }</option>
                                    }) }
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Limite Mensile (€)"}</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    required=true
                                    value={(*form_amount).clone()}
                                    oninput={bind_input(form_amount.clone())}
                                    class="w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2.5 px-3"
                                />
                            </div>
                        </div>

                        <div class="border-t border-slate-200 pt-4">
                            <label class="flex items-center space-x-2 cursor-pointer mb-3">
                                <input
                                    type="checkbox"
                                    checked={*all_months}
                                    onchange={{
                                        let all_months = all_months.clone();
                                        let selected_months = selected_months.clone();
                                        Callback::from(move |e: Event| {
                                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                            all_months.set(input.checked());
                                            if input.checked() {
                                                selected_months.set(Vec::new());
                                            }
                                        })
                                    }}
                                    class="rounded border-slate-300 text-emerald-600"
                                />
                                <span class="text-sm font-medium text-slate-700">{"Applica a tutti i mesi"}</span>
                            </label>

                            if !*all_months {
                                <div class="bg-slate-50 p-4 rounded-xl border border-slate-200">
                                    <p class="text-xs font-medium text-slate-600 mb-3">{"Seleziona i mesi in cui applicare questo budget:"}</p>
                                    <div class="grid grid-cols-3 gap-2">
                                        { for format::MONTHS_SHORT.iter().enumerate().map(|(index, label)| {
                                            let month_number = index as u32 + 1;
                                            let checked = selected_months.contains(&month_number);
                                            let selected_months = selected_months.clone();
                                            let on_toggle = Callback::from(move |e: Event| {
                                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                                let mut months = (*selected_months).clone();
                                                if input.checked() {
                                                    months.push(month_number);
                                                    months.sort_unstable();
                                                } else {
                                                    months.retain(|m| *m != month_number);
                                                }
                                                selected_months.set(months);
                                            });
                                            html! {
                                                <label class={if checked {
                                                    "flex items-center space-x-2 p-2 rounded-lg border cursor-pointer transition-all bg-emerald-50 border-emerald-300"
                                                } else {
                                                    "flex items-center space-x-2 p-2 rounded-lg border cursor-pointer transition-all bg-white border-slate-200 hover:border-emerald-200"
                                                }}>
                                                    <input type="checkbox" checked={checked} onchange={on_toggle} class="rounded border-slate-300 text-emerald-600" />
                                                    <span class="text-sm font-medium text-slate-700">{ *label }</span>
                                                </label>
                                            }
                                        }) }
                                    </div>
                                </div>
                            }
                        </div>

                        <div class="flex justify-end space-x-3 pt-2">
                            <button
                                type="button"
                                onclick={{
                                    let form_open = form_open.clone();
                                    Callback::from(move |_| form_open.set(false))
                                }}
                                class="px-5 py-2.5 text-slate-600 hover:bg-slate-100 rounded-xl font-medium transition-colors"
                            >
                                {"Annulla"}
                            </button>
                            <button type="submit" class="px-5 py-2.5 bg-emerald-600 text-white rounded-xl hover:bg-emerald-700 font-medium shadow-sm hover:shadow-md transition-all">
                                {"Salva"}
                            </button>
                        </div>
                    </form>
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for budgets.iter().map(|budget| {
                    let spent = spent_for(&expenses, &budget.category);
                    let percentage = budget_progress(spent, budget.amount);
                    let health = budget_health(spent, budget.amount);
                    let open_edit = open_edit.clone();
                    let edit_target = budget.clone();
                    let on_delete_click = on_delete_click.clone();
                    let delete_budget = budget.clone();
                    let drill_category = drill_category.clone();
                    let drill_name = budget.category.clone();
                    let (badge, bar) = match health {
                        BudgetHealth::Superato => ("text-rose-600 bg-rose-100", "bg-rose-500"),
                        BudgetHealth::Attenzione => ("text-amber-600 bg-amber-100", "bg-amber-500"),
                        BudgetHealth::InLinea => ("text-emerald-600 bg-emerald-100", "bg-emerald-500"),
                    };
                    html! {
                        <div
                            key={budget.id}
                            onclick={Callback::from(move |_| drill_category.set(Some(drill_name.clone())))}
                            class="bg-white p-6 rounded-2xl shadow-sm border border-slate-100 hover:shadow-md transition-shadow duration-200 group cursor-pointer"
                        >
                            <div class="flex justify-between items-start mb-4">
                                <div>
                                    <h3 class="font-bold text-slate-800 text-lg">{ &budget.category }</h3>
                                    if let Some(months) = &budget.applicable_months {
                                        <p class="text-xs text-slate-500 mt-1">
                                            { months.iter().map(|m| format::month_short(*m)).collect::<Vec<_>>().join(", ") }
                                        </p>
                                    }
                                    <p class="text-sm text-slate-500 mt-1">
                                        <span class="font-medium text-slate-700">{ format::eur(spent) }</span>
                                        <span class="mx-1">{"/"}</span>
                                        { format::eur(budget.amount) }
                                    </p>
                                </div>
                                <div class="flex space-x-1">
                                    <button
                                        title="Modifica"
                                        onclick={Callback::from(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            open_edit.emit(edit_target.clone());
                                        })}
                                        class="text-slate-300 hover:text-emerald-600 p-2 hover:bg-emerald-50 rounded-lg transition-colors"
                                    >
                                        { icon_edit() }
                                    </button>
                                    <button
                                        title="Elimina"
                                        onclick={Callback::from(move |e: MouseEvent| {
                                            e.stop_propagation();
                                            on_delete_click.emit(delete_budget.clone());
                                        })}
                                        class="text-slate-300 hover:text-rose-600 p-2 hover:bg-rose-50 rounded-lg transition-colors"
                                    >
                                        { icon_trash() }
                                    </button>
                                </div>
                            </div>

                            <div class="relative pt-2">
                                <div class="flex mb-2 items-center justify-between">
                                    <span class={format!("text-xs font-semibold inline-block py-1 px-2 uppercase rounded-full {}", badge)}>
                                        { health.label() }
                                    </span>
                                    <span class={if health == BudgetHealth::Superato { "text-xs font-semibold text-rose-600" } else { "text-xs font-semibold text-slate-600" }}>
                                        { format!("{:.0}%", percentage) }
                                    </span>
                                </div>
                                <div class="overflow-hidden h-2.5 mb-4 rounded-full bg-slate-100">
                                    <div class={format!("h-full transition-all duration-500 {}", bar)} style={format!("width: {}%", percentage)} />
                                </div>
                            </div>

                            if health == BudgetHealth::Superato {
                                <div class="flex items-center space-x-2 text-rose-600 text-xs mt-2 bg-rose-50 p-2 rounded-lg">
                                    { icon_alert_circle() }
                                    <span>{ format!("Hai superato il budget di {}", format::eur(budget_overrun(spent, budget.amount))) }</span>
                                </div>
                            }
                        </div>
                    }
                }) }

                <button
                    onclick={open_create}
                    class="border-2 border-dashed border-slate-200 rounded-2xl p-6 flex flex-col items-center justify-center text-slate-400 hover:border-emerald-400 hover:text-emerald-600 hover:bg-emerald-50/50 transition-all duration-200 min-h-[200px]"
                >
                    <div class="p-3 bg-slate-50 rounded-full mb-3">{ icon_plus() }</div>
                    <span class="font-medium">{"Aggiungi Budget"}</span>
                </button>
            </div>

            if let Some((budget, dependents)) = &*delete_target {
                <DeleteBudgetModal
                    budget={budget.clone()}
                    dependents={dependents.len()}
                    categories={reassign_targets(&categories, &budget.category).into_iter().cloned().collect::<Vec<_>>()}
                    reassign_to={(*reassign_to).clone()}
                    on_choose={{
                        let reassign_to = reassign_to.clone();
                        Callback::from(move |choice: Option<String>| reassign_to.set(choice))
                    }}
                    on_cancel={{
                        let delete_target = delete_target.clone();
                        Callback::from(move |_| delete_target.set(None))
                    }}
                    on_confirm={on_confirm_delete}
                />
            }

            <CategoryModal
                open={drill_category.is_some()}
                category={(*drill_category).clone()}
                on_close={{
                    let drill_category = drill_category.clone();
                    Callback::from(move |_| drill_category.set(None))
                }}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DeleteBudgetModalProps {
    budget: Budget,
    dependents: usize,
    categories: Vec<Category>,
    reassign_to: Option<String>,
    on_choose: Callback<Option<String>>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
}

#[function_component(DeleteBudgetModal)]
fn delete_budget_modal(props: &DeleteBudgetModalProps) -> Html {
    let keep = props.reassign_to.is_none();
    let first_target = props.categories.first().map(|c| c.name.clone());

    let choose_keep = {
        let on_choose = props.on_choose.clone();
        Callback::from(move |_| on_choose.emit(None))
    };
    let choose_reassign = {
        let on_choose = props.on_choose.clone();
        let first_target = first_target.clone();
        Callback::from(move |_| on_choose.emit(first_target.clone()))
    };
    let on_select_target = {
        let on_choose = props.on_choose.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_choose.emit(Some(select.value()));
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-slate-900/50 backdrop-blur-sm flex items-center justify-center z-50 p-4">
            <div class="bg-white rounded-2xl shadow-2xl max-w-lg w-full overflow-hidden">
                <div class="p-6 border-b border-slate-100 flex justify-between items-center">
                    <h3 class="text-lg font-bold text-slate-800">{ format!("Elimina Budget: {}", props.budget.category) }</h3>
                    <button onclick={on_cancel.clone()} class="text-slate-400 hover:text-slate-600">{ icon_x() }</button>
                </div>

                <div class="p-6">
                    <div class="bg-amber-50 text-amber-800 p-4 rounded-xl mb-6 flex items-start space-x-3">
                        <span class="flex-shrink-0 mt-0.5">{ icon_alert_circle() }</span>
                        <div class="text-sm">
                            <p class="font-medium">{ format!("Ci sono {} spese associate a questo budget.", props.dependents) }</p>
                            <p class="mt-1 opacity-90">{"Puoi scegliere di riassegnarle a un'altra categoria o mantenerle con la categoria attuale (senza budget)."}</p>
                        </div>
                    </div>

                    <div class="space-y-3">
                        <label class="flex items-center p-3 border border-slate-200 rounded-xl cursor-pointer hover:bg-slate-50 transition-colors">
                            <input type="radio" name="action" checked={keep} onchange={choose_keep} class="h-4 w-4 text-emerald-600 border-slate-300" />
                            <div class="ml-3">
                                <span class="block text-sm font-medium text-slate-900">{"Elimina solo il budget"}</span>
                                <span class="block text-xs text-slate-500">
                                    { format!("Le spese rimarranno con la categoria \"{}\"", props.budget.category) }
                                </span>
                            </div>
                        </label>

                        <label class="flex items-center p-3 border border-slate-200 rounded-xl cursor-pointer hover:bg-slate-50 transition-colors">
                            <input type="radio" name="action" checked={!keep} onchange={choose_reassign} class="h-4 w-4 text-emerald-600 border-slate-300" />
                            <div class="ml-3 flex-1">
                                <span class="block text-sm font-medium text-slate-900">{"Riassegna spese e elimina"}</span>
                                <span class="block text-xs text-slate-500">{"Sposta tutte le spese in una nuova categoria"}</span>
                            </div>
                        </label>

                        if let Some(current) = &props.reassign_to {
                            <div class="pl-7">
                                <label class="block text-xs font-medium text-slate-500 mb-1 uppercase tracking-wider">{"Nuova Categoria"}</label>
                                <div class="flex items-center space-x-2">
                                    { icon_chevron_right() }
                                    <select onchange={on_select_target} class="block w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2 px-3 text-sm">
                                        { for props.categories.iter().map(|cat| html! {
                                            <option value={cat.name.clone()} selected={*current == cat.name}>{ &cat.name }</option>
                                        }) }
                                    </select>
                                </div>
                            </div>
                        }
                    </div>
                </div>

                <div class="p-6 bg-slate-50 border-t border-slate-100 flex justify-end space-x-3">
                    <button onclick={on_cancel} class="px-5 py-2.5 text-slate-600 hover:bg-white hover:shadow-sm rounded-xl font-medium transition-all">
                        {"Annulla"}
                    </button>
                    <button onclick={on_confirm} class="px-5 py-2.5 bg-rose-600 text-white rounded-xl hover:bg-rose-700 font-medium shadow-sm hover:shadow-md transition-all flex items-center space-x-2">
                        { icon_trash() }
                        <span>{"Conferma Eliminazione"}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}
