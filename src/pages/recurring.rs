use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{use_api, use_fetch_seq};
use crate::bus::{publish_all, use_bus, Topic};
use crate::components::icons::{icon_calendar, icon_edit, icon_plus, icon_repeat, icon_trash};
use crate::components::toast::{show_error, use_toast};
use crate::components::{bind_input, bind_select, confirm};
use crate::format;
use crate::models::{Category, RecurringExpense, RecurringPayload};

#[function_component(RecurringPage)]
pub fn recurring_page() -> Html {
    let api = use_api();
    let bus = use_bus();
    let toast = use_toast();
    let seq = use_fetch_seq();

    let recurring = use_state(Vec::<RecurringExpense>::new);
    let categories = use_state(Vec::<Category>::new);

    let show_form = use_state(|| false);
    let editing_id = use_state(|| None::<i64>);
    let form_name = use_state(String::new);
    let form_amount = use_state(String::new);
    let form_category = use_state(String::new);
    let form_description = use_state(String::new);
    let form_day = use_state(|| "1".to_string());
    let form_start = use_state(|| format::iso(format::today()));
    let form_end = use_state(String::new);

    {
        let api = api.clone();
        let seq = seq.clone();
        let recurring = recurring.clone();
        let categories = categories.clone();
        use_effect_with_deps(
            move |_: &u64| {
                let ticket = seq.issue();
                spawn_local(async move {
                    let recurring_res = api.get::<Vec<RecurringExpense>>("/recurring", &[]).await;
                    let categories_res = api.get::<Vec<Category>>("/categories", &[]).await;
                    if !seq.is_current(ticket) {
                        return;
                    }
                    match recurring_res {
                        Ok(list) => recurring.set(list),
                        Err(err) => web_sys::console::error_1(
                            &format!("recurring fetch failed: {}", err).into(),
                        ),
                    }
                    match categories_res {
                        Ok(list) => categories.set(list),
                        Err(err) => web_sys::console::error_1(
                            &format!("categories fetch failed: {}", err).into(),
                        ),
                    }
                });
                || ()
            },
            (*bus).stamp(Topic::Recurring),
        );
    }

    let reset_form = {
        let editing_id = editing_id.clone();
        let form_name = form_name.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_description = form_description.clone();
        let form_day = form_day.clone();
        let form_start = form_start.clone();
        let form_end = form_end.clone();
        move || {
            editing_id.set(None);
            form_name.set(String::new());
            form_amount.set(String::new());
            form_category.set(String::new());
            form_description.set(String::new());
            form_day.set("1".to_string());
            form_start.set(format::iso(format::today()));
            form_end.set(String::new());
        }
    };

    let on_new = {
        let reset_form = reset_form.clone();
        let show_form = show_form.clone();
        Callback::from(move |_| {
            reset_form();
            show_form.set(true);
        })
    };

    let on_edit = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let form_name = form_name.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_description = form_description.clone();
        let form_day = form_day.clone();
        let form_start = form_start.clone();
        let form_end = form_end.clone();
        Callback::from(move |expense: RecurringExpense| {
            editing_id.set(Some(expense.id));
            form_name.set(expense.name.clone());
            form_amount.set(expense.amount.to_string());
            form_category.set(expense.category.clone());
            form_description.set(expense.description.clone().unwrap_or_default());
            form_day.set(expense.day_of_month.to_string());
            form_start.set(
                expense
                    .start_date
                    .map(format::iso)
                    .unwrap_or_else(|| format::iso(format::today())),
            );
            form_end.set(expense.end_date.map(format::iso).unwrap_or_default());
            show_form.set(true);
        })
    };

    let on_submit = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let form_name = form_name.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_description = form_description.clone();
        let form_day = form_day.clone();
        let form_start = form_start.clone();
        let form_end = form_end.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match RecurringPayload::from_form(
                &form_name,
                &form_amount,
                &form_category,
                &form_description,
                &form_day,
                &form_start,
                &form_end,
            ) {
                Ok(payload) => payload,
                Err(message) => {
                    show_error(&toast, message);
                    return;
                }
            };
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            let show_form = show_form.clone();
            let editing = *editing_id;
            let reset_form = reset_form.clone();
            spawn_local(async move {
                let outcome = match editing {
                    Some(id) => {
                        api.put::<_, RecurringExpense>(&format!("/recurring/{}", id), &payload)
                            .await
                    }
                    None => api.post::<_, RecurringExpense>("/recurring", &payload).await,
                };
                match outcome {
                    Ok(_) => {
                        show_form.set(false);
                        reset_form();
                        // the server regenerates the unconfirmed occurrences
                        publish_all(&bus, &[Topic::Recurring, Topic::Movements]);
                    }
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        Callback::from(move |id: i64| {
            // the server keeps confirmed occurrences and removes the rest
            if !confirm(
                "Eliminare questa spesa ricorrente? Le spese confermate rimarranno, quelle non confermate saranno eliminate.",
            ) {
                return;
            }
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match api.delete(&format!("/recurring/{}", id)).await {
                    Ok(()) => publish_all(&bus, &[Topic::Recurring, Topic::Movements]),
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let field_class = "w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2.5 px-3";

    html! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-slate-800">{"Spese Ricorrenti"}</h1>
                    <p class="text-slate-500 text-sm">{"Rate, abbonamenti e spese fisse generate ogni mese"}</p>
                </div>
                <button onclick={on_new} class="bg-blue-600 text-white px-5 py-2.5 rounded-xl flex items-center space-x-2 hover:bg-blue-700 transition-all shadow-sm hover:shadow-md">
                    { icon_plus() }
                    <span>{"Nuova Ricorrente"}</span>
                </button>
            </div>

            if *show_form {
                <div class="bg-white p-6 rounded-2xl shadow-lg border border-slate-100">
                    <h2 class="text-lg font-semibold mb-4 text-slate-800">
                        { if editing_id.is_some() { "Modifica Spesa Ricorrente" } else { "Nuova Spesa Ricorrente" } }
                    </h2>
                    <form onsubmit={on_submit} class="space-y-6">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Nome"}</label>
                                <input type="text" required=true placeholder="es. Rata Macchina" value={(*form_name).clone()} oninput={bind_input(form_name.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Importo"}</label>
                                <input type="number" step="0.01" required=true placeholder="0.00" value={(*form_amount).clone()} oninput={bind_input(form_amount.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Categoria"}</label>
                                <select required=true onchange={bind_select(form_category.clone())} class={field_class}>
                                    <option value="" selected={form_category.is_empty()}>{"Seleziona..."}</option>
                                    { for categories.iter().map(|cat| html! {
                                        <option value={cat.name.clone()} selected={*form_category == cat.name}>{ &cat.name }</option>
                                    }) }
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Giorno del Mese"}</label>
                                <input type="number" min="1" max="31" required=true value={(*form_day).clone()} oninput={bind_input(form_day.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Data Inizio"}</label>
                                <input type="date" required=true value={(*form_start).clone()} oninput={bind_input(form_start.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Data Fine (opzionale)"}</label>
                                <input type="date" value={(*form_end).clone()} oninput={bind_input(form_end.clone())} class={field_class} />
                            </div>
                            <div class="md:col-span-2">
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Descrizione (opzionale)"}</label>
                                <input type="text" placeholder="Note..." value={(*form_description).clone()} oninput={bind_input(form_description.clone())} class={field_class} />
                            </div>
                        </div>
                        <div class="flex justify-end space-x-3 pt-2">
                            <button
                                type="button"
                                onclick={{
                                    let show_form = show_form.clone();
                                    Callback::from(move |_| show_form.set(false))
                                }}
                                class="px-5 py-2.5 text-slate-600 hover:bg-slate-100 rounded-xl font-medium transition-colors"
                            >
                                {"Annulla"}
                            </button>
                            <button type="submit" class="px-5 py-2.5 bg-blue-600 text-white rounded-xl hover:bg-blue-700 font-medium shadow-sm hover:shadow-md transition-all">
                                {"Salva"}
                            </button>
                        </div>
                    </form>
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for recurring.iter().map(|expense| {
                    let on_edit = on_edit.clone();
                    let edit_target = expense.clone();
                    let on_delete = on_delete.clone();
                    let expense_id = expense.id;
                    let range = match (expense.start_date, expense.end_date) {
                        (Some(start), Some(end)) => format!("{} → {}", format::date_medium(start), format::date_medium(end)),
                        (Some(start), None) => format!("dal {}", format::date_medium(start)),
                        _ => String::new(),
                    };
                    html! {
                        <div key={expense.id} class="bg-white p-6 rounded-2xl shadow-sm border border-slate-100 hover:shadow-md transition-shadow duration-200">
                            <div class="flex justify-between items-start mb-4">
                                <div class="flex items-center space-x-3">
                                    <div class="p-2 bg-purple-100 text-purple-600 rounded-lg">{ icon_repeat() }</div>
                                    <div>
                                        <h3 class="font-bold text-slate-800">{ &expense.name }</h3>
                                        <p class="text-xs text-slate-500">{ &expense.category }</p>
                                    </div>
                                </div>
                                <div class="flex space-x-1">
                                    <button
                                        onclick={Callback::from(move |_| on_edit.emit(edit_target.clone()))}
                                        class="text-slate-300 hover:text-emerald-600 p-2 hover:bg-emerald-50 rounded-lg transition-colors"
                                    >
                                        { icon_edit() }
                                    </button>
                                    <button
                                        onclick={Callback::from(move |_| on_delete.emit(expense_id))}
                                        class="text-slate-300 hover:text-rose-600 p-2 hover:bg-rose-50 rounded-lg transition-colors"
                                    >
                                        { icon_trash() }
                                    </button>
                                </div>
                            </div>
                            <p class="text-2xl font-bold text-slate-800 mb-3">{ format::eur(expense.amount) }</p>
                            <div class="space-y-1 text-sm text-slate-500">
                                <p class="flex items-center space-x-2">
                                    <span class="text-slate-400">{ icon_calendar() }</span>
                                    <span>{ format!("Ogni {} del mese", expense.day_of_month) }</span>
                                </p>
                                if !range.is_empty() {
                                    <p class="text-xs text-slate-400">{ range }</p>
                                }
                                if let Some(description) = &expense.description {
                                    <p class="text-xs text-slate-400 italic">{ description }</p>
                                }
                            </div>
                        </div>
                    }
                }) }
            </div>

            if recurring.is_empty() {
                <div class="bg-white p-12 rounded-2xl shadow-sm border border-slate-100 text-center">
                    <div class="p-4 bg-slate-50 rounded-full w-20 h-20 mx-auto mb-4 flex items-center justify-center text-slate-300">
                        { icon_repeat() }
                    </div>
                    <h3 class="text-lg font-semibold text-slate-700 mb-2">{"Nessuna Spesa Ricorrente"}</h3>
                    <p class="text-slate-500 text-sm">{"Aggiungi rate e abbonamenti per generarli automaticamente ogni mese"}</p>
                </div>
            }
        </div>
    }
}

