use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{use_api, use_fetch_seq};
use crate::bus::{publish, publish_all, set_date_context, use_bus, Topic};
use crate::components::icons::{
    icon_check, icon_edit, icon_plus, icon_repeat, icon_trash, icon_trending_down,
    icon_trending_up,
};
use crate::components::toast::{show_error, use_toast};
use crate::components::{bind_checkbox, bind_input, bind_select, confirm};
use crate::format;
use crate::models::{
    Category, Movement, MovementPayload, MovementType, RecurringExpense, RecurringPayload,
};

#[function_component(MovementsPage)]
pub fn movements_page() -> Html {
    let api = use_api();
    let bus = use_bus();
    let toast = use_toast();
    let seq = use_fetch_seq();

    let today = format::today();
    let month = use_state(|| today.month());
    let year = use_state(|| today.year());
    let movements = use_state(Vec::<Movement>::new);
    let categories = use_state(Vec::<Category>::new);
    let type_filter = use_state(String::new);
    let include_planned = use_state(|| true);

    let show_movement_modal = use_state(|| false);
    let editing_id = use_state(|| None::<i64>);
    let form_kind = use_state(|| "EXPENSE".to_string());
    let form_date = use_state(|| format::iso(format::today()));
    let form_amount = use_state(String::new);
    let form_category = use_state(String::new);
    let form_description = use_state(String::new);
    let form_planned = use_state(|| false);

    let show_recurring_modal = use_state(|| false);
    let rec_name = use_state(String::new);
    let rec_amount = use_state(String::new);
    let rec_category = use_state(String::new);
    let rec_description = use_state(String::new);
    let rec_day = use_state(|| "1".to_string());
    let rec_start = use_state(|| format::iso(format::today()));
    let rec_end = use_state(String::new);

    // quick-add proposes the first of the viewed month; back to today on leave
    {
        let bus = bus.clone();
        use_effect_with_deps(
            move |(month, year): &(u32, i32)| {
                set_date_context(&bus, format::first_of_month(*year, *month));
                move || set_date_context(&bus, format::today())
            },
            (*month, *year),
        );
    }

    {
        let api = api.clone();
        let categories = categories.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api.get::<Vec<Category>>("/categories", &[]).await {
                        Ok(list) => categories.set(list),
                        Err(err) => web_sys::console::error_1(
                            &format!("categories fetch failed: {}", err).into(),
                        ),
                    }
                });
                || ()
            },
            (),
        );
    }

    {
        let api = api.clone();
        let seq = seq.clone();
        let movements = movements.clone();
        use_effect_with_deps(
            move |(month, year, type_filter, include_planned, _): &(u32, i32, String, bool, u64)| {
                let mut query = vec![("month", month.to_string()), ("year", year.to_string())];
                if !type_filter.is_empty() {
                    query.push(("type", type_filter.clone()));
                }
                if !include_planned {
                    query.push(("include_planned", "false".to_string()));
                }
                let ticket = seq.issue();
                spawn_local(async move {
                    match api.get::<Vec<Movement>>("/movements", &query).await {
                        Ok(list) if seq.is_current(ticket) => movements.set(list),
                        Ok(_) => {}
                        Err(err) => web_sys::console::error_1(
                            &format!("movements fetch failed: {}", err).into(),
                        ),
                    }
                });
                || ()
            },
            (
                *month,
                *year,
                (*type_filter).clone(),
                *include_planned,
                (*bus).stamp(Topic::Movements),
            ),
        );
    }

    let reset_movement_form = {
        let editing_id = editing_id.clone();
        let form_kind = form_kind.clone();
        let form_date = form_date.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_description = form_description.clone();
        let form_planned = form_planned.clone();
        move || {
            editing_id.set(None);
            form_kind.set("EXPENSE".to_string());
            form_date.set(format::iso(format::today()));
            form_amount.set(String::new());
            form_category.set(String::new());
            form_description.set(String::new());
            form_planned.set(false);
        }
    };

    let on_new_movement = {
        let reset_movement_form = reset_movement_form.clone();
        let show_movement_modal = show_movement_modal.clone();
        Callback::from(move |_| {
            reset_movement_form();
            show_movement_modal.set(true);
        })
    };

    let on_edit = {
        let editing_id = editing_id.clone();
        let form_kind = form_kind.clone();
        let form_date = form_date.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_description = form_description.clone();
        let form_planned = form_planned.clone();
        let show_movement_modal = show_movement_modal.clone();
        Callback::from(move |movement: Movement| {
            editing_id.set(Some(movement.id));
            form_kind.set(movement.kind.as_query().to_string());
            form_date.set(format::iso(movement.date));
            form_amount.set(movement.amount.to_string());
            form_category.set(movement.category.clone());
            form_description.set(movement.description.clone().unwrap_or_default());
            form_planned.set(movement.is_planned);
            show_movement_modal.set(true);
        })
    };

    let on_movement_submit = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        let editing_id = editing_id.clone();
        let form_kind = form_kind.clone();
        let form_date = form_date.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_description = form_description.clone();
        let form_planned = form_planned.clone();
        let show_movement_modal = show_movement_modal.clone();
        let reset_movement_form = reset_movement_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let kind = if *form_kind == "INCOME" {
                MovementType::Income
            } else {
                MovementType::Expense
            };
            let payload = match MovementPayload::from_form(
                kind,
                &form_date,
                &form_amount,
                &form_category,
                &form_description,
                *form_planned,
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
            let editing = *editing_id;
            let show_movement_modal = show_movement_modal.clone();
            let reset_movement_form = reset_movement_form.clone();
            spawn_local(async move {
                let outcome = match editing {
                    Some(id) => {
                        api.put::<_, Movement>(&format!("/movements/{}", id), &payload)
                            .await
                    }
                    None => api.post::<_, Movement>("/movements", &payload).await,
                };
                match outcome {
                    Ok(_) => {
                        show_movement_modal.set(false);
                        reset_movement_form();
                        publish(&bus, Topic::Movements);
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
            if !confirm("Eliminare questo movimento?") {
                return;
            }
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match api.delete(&format!("/movements/{}", id)).await {
                    Ok(()) => publish(&bus, Topic::Movements),
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let on_confirm_occurrence = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        Callback::from(move |id: i64| {
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match api
                    .post_empty::<Movement>(&format!("/recurring/movements/{}/confirm", id), &[])
                    .await
                {
                    Ok(_) => publish(&bus, Topic::Movements),
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let on_recurring_submit = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        let show_recurring_modal = show_recurring_modal.clone();
        let rec_name = rec_name.clone();
        let rec_amount = rec_amount.clone();
        let rec_category = rec_category.clone();
        let rec_description = rec_description.clone();
        let rec_day = rec_day.clone();
        let rec_start = rec_start.clone();
        let rec_end = rec_end.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match RecurringPayload::from_form(
                &rec_name,
                &rec_amount,
                &rec_category,
                &rec_description,
                &rec_day,
                &rec_start,
                &rec_end,
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
            let show_recurring_modal = show_recurring_modal.clone();
            let rec_name = rec_name.clone();
            let rec_amount = rec_amount.clone();
            let rec_description = rec_description.clone();
            spawn_local(async move {
                match api.post::<_, RecurringExpense>("/recurring", &payload).await {
                    Ok(_) => {
                        show_recurring_modal.set(false);
                        rec_name.set(String::new());
                        rec_amount.set(String::new());
                        rec_description.set(String::new());
                        // the server spawns the occurrences right away
                        publish_all(&bus, &[Topic::Recurring, Topic::Movements]);
                    }
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let on_month_change = {
        let month = month.clone();
        let year = year.clone();
        Callback::from(move |(new_month, new_year): (u32, i32)| {
            month.set(new_month);
            year.set(new_year);
        })
    };

    let field_class = "w-full rounded-lg border border-slate-200 px-4 py-2.5 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500";

    html! {
        <div class="flex flex-col lg:flex-row gap-6">
            <div class="w-full lg:w-1/3 space-y-4">
                <MiniCalendar month={*month} year={*year} on_change={on_month_change} />

                <div class="bg-white rounded-2xl shadow-sm border border-slate-100 p-4 space-y-3">
                    <div>
                        <label class="block text-xs font-medium text-slate-500 mb-1">{"Tipo"}</label>
                        <select onchange={bind_select(type_filter.clone())} class="w-full rounded-lg border border-slate-200 px-3 py-2 text-sm">
                            <option value="" selected={type_filter.is_empty()}>{"Tutti"}</option>
                            <option value="INCOME" selected={*type_filter == "INCOME"}>{"Entrate"}</option>
                            <option value="EXPENSE" selected={*type_filter == "EXPENSE"}>{"Spese"}</option>
                        </select>
                    </div>
                    <label class="flex items-center space-x-2 cursor-pointer text-sm text-slate-600">
                        <input type="checkbox" checked={*include_planned} onchange={bind_checkbox(include_planned.clone())} class="rounded border-slate-300 text-emerald-600" />
                        <span>{"Includi movimenti previsti"}</span>
                    </label>
                </div>

                <div class="space-y-3">
                    <button onclick={on_new_movement} class="w-full bg-emerald-600 text-white px-5 py-3 rounded-xl flex items-center justify-center space-x-2 hover:bg-emerald-700 transition-all shadow-md hover:shadow-lg">
                        { icon_plus() }
                        <span class="font-semibold">{"Aggiungi Movimento"}</span>
                    </button>
                    <button
                        onclick={{
                            let show_recurring_modal = show_recurring_modal.clone();
                            Callback::from(move |_| show_recurring_modal.set(true))
                        }}
                        class="w-full bg-blue-600 text-white px-5 py-3 rounded-xl flex items-center justify-center space-x-2 hover:bg-blue-700 transition-all shadow-md hover:shadow-lg"
                    >
                        { icon_repeat() }
                        <span class="font-semibold">{"Aggiungi Spesa Ricorrente"}</span>
                    </button>
                </div>
            </div>

            <div class="flex-1">
                <div class="bg-white rounded-2xl shadow-sm border border-slate-100 overflow-hidden">
                    <div class="p-6 border-b border-slate-100 flex justify-between items-center bg-slate-50/50">
                        <div>
                            <h2 class="text-xl font-bold text-slate-800">{"Movimenti"}</h2>
                            <p class="text-sm text-slate-500 mt-1">{ format!("{} transazioni", movements.len()) }</p>
                        </div>
                    </div>
                    <div class="divide-y divide-slate-100 max-h-[calc(100vh-200px)] overflow-y-auto">
                        if movements.is_empty() {
                            <div class="p-12 text-center text-slate-400">{"Nessun movimento in questo periodo"}</div>
                        } else {
                            { for movements.iter().map(|movement| {
                                let is_income = movement.kind == MovementType::Income;
                                let on_edit = on_edit.clone();
                                let edit_target = movement.clone();
                                let on_delete = on_delete.clone();
                                let on_confirm_occurrence = on_confirm_occurrence.clone();
                                let movement_id = movement.id;
                                html! {
                                    <div key={movement.id} class="p-4 hover:bg-slate-50 transition-colors flex items-center justify-between">
                                        <div class="flex items-center space-x-3 flex-1">
                                            <div class={if is_income { "p-2 rounded-full bg-emerald-100 text-emerald-600" } else { "p-2 rounded-full bg-rose-100 text-rose-600" }}>
                                                { if is_income { icon_trending_up() } else { icon_trending_down() } }
                                            </div>
                                            <div class="flex-1">
                                                <p class="font-medium text-slate-800">{ &movement.category }</p>
                                                <p class="text-xs text-slate-500">
                                                    { format::date_medium(movement.date) }
                                                    { movement.description.as_ref().map(|d| format!(" • {}", d)).unwrap_or_default() }
                                                </p>
                                            </div>
                                        </div>
                                        <div class="flex items-center space-x-3">
                                            <div class="text-right">
                                                <p class={if is_income { "font-bold text-emerald-600" } else { "font-bold text-slate-700" }}>
                                                    { if is_income { format::eur(movement.amount) } else { format!("-{}", format::eur(movement.amount)) } }
                                                </p>
                                                if movement.is_planned {
                                                    <span class="text-[10px] font-medium bg-blue-50 text-blue-600 px-1.5 py-0.5 rounded">{"Prevista"}</span>
                                                }
                                            </div>
                                            <div class="flex space-x-1">
                                                if movement.awaits_confirmation() {
                                                    <button
                                                        onclick={Callback::from(move |_| on_confirm_occurrence.emit(movement_id))}
                                                        title="Conferma la spesa"
                                                        class="p-2 text-emerald-600 hover:bg-emerald-50 rounded-lg transition-colors"
                                                    >
                                                        { icon_check() }
                                                    </button>
                                                }
                                                <button
                                                    onclick={Callback::from(move |_| on_edit.emit(edit_target.clone()))}
                                                    class="p-2 text-blue-600 hover:bg-blue-50 rounded-lg transition-colors"
                                                >
                                                    { icon_edit() }
                                                </button>
                                                <button
                                                    onclick={Callback::from(move |_| on_delete.emit(movement_id))}
                                                    class="p-2 text-rose-600 hover:bg-rose-50 rounded-lg transition-colors"
                                                >
                                                    { icon_trash() }
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }) }
                        }
                    </div>
                </div>
            </div>

            if *show_movement_modal {
                <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4">
                    <div class="bg-white rounded-2xl shadow-2xl p-6 w-full max-w-md max-h-[90vh] overflow-y-auto">
                        <h3 class="text-xl font-bold text-slate-800 mb-4">
                            { if editing_id.is_some() { "Modifica Movimento" } else { "Nuovo Movimento" } }
                        </h3>
                        <form onsubmit={on_movement_submit} class="space-y-4">
                            <div class="flex gap-2">
                                <button
                                    type="button"
                                    onclick={{
                                        let form_kind = form_kind.clone();
                                        Callback::from(move |_| form_kind.set("EXPENSE".to_string()))
                                    }}
                                    class={if *form_kind == "EXPENSE" { "flex-1 py-2 rounded-lg font-medium transition-all bg-rose-600 text-white" } else { "flex-1 py-2 rounded-lg font-medium transition-all bg-slate-100 text-slate-600" }}
                                >
                                    {"Spesa"}
                                </button>
                                <button
                                    type="button"
                                    onclick={{
                                        let form_kind = form_kind.clone();
                                        Callback::from(move |_| form_kind.set("INCOME".to_string()))
                                    }}
                                    class={if *form_kind == "INCOME" { "flex-1 py-2 rounded-lg font-medium transition-all bg-emerald-600 text-white" } else { "flex-1 py-2 rounded-lg font-medium transition-all bg-slate-100 text-slate-600" }}
                                >
                                    {"Entrata"}
                                </button>
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
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Data"}</label>
                                <input type="date" required=true value={(*form_date).clone()} oninput={bind_input(form_date.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Descrizione (opzionale)"}</label>
                                <input type="text" placeholder="Note..." value={(*form_description).clone()} oninput={bind_input(form_description.clone())} class={field_class} />
                            </div>
                            <label class="flex items-center space-x-2 cursor-pointer text-sm text-slate-600">
                                <input type="checkbox" checked={*form_planned} onchange={bind_checkbox(form_planned.clone())} class="rounded border-slate-300 text-emerald-600" />
                                <span>{"Movimento previsto (non ancora effettuato)"}</span>
                            </label>
                            <div class="flex justify-end space-x-3 pt-2">
                                <button
                                    type="button"
                                    onclick={{
                                        let show_movement_modal = show_movement_modal.clone();
                                        Callback::from(move |_| show_movement_modal.set(false))
                                    }}
                                    class="px-5 py-2.5 text-slate-600 hover:bg-slate-100 rounded-lg font-medium transition-colors"
                                >
                                    {"Annulla"}
                                </button>
                                <button type="submit" class="px-5 py-2.5 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 font-medium shadow-sm hover:shadow-md transition-all">
                                    {"Salva"}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }

            if *show_recurring_modal {
                <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4">
                    <div class="bg-white rounded-2xl shadow-2xl p-6 w-full max-w-md max-h-[90vh] overflow-y-auto">
                        <h3 class="text-xl font-bold text-slate-800 mb-4">{"Nuova Spesa Ricorrente"}</h3>
                        <form onsubmit={on_recurring_submit} class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Nome"}</label>
                                <input type="text" required=true placeholder="es. Rata Macchina" value={(*rec_name).clone()} oninput={bind_input(rec_name.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Importo"}</label>
                                <input type="number" step="0.01" required=true placeholder="0.00" value={(*rec_amount).clone()} oninput={bind_input(rec_amount.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Categoria"}</label>
                                <select required=true onchange={bind_select(rec_category.clone())} class={field_class}>
                                    <option value="" selected={rec_category.is_empty()}>{"Seleziona..."}</option>
                                    { for categories.iter().map(|cat| html! {
                                        <option value={cat.name.clone()} selected={*rec_category == cat.name}>{ &cat.name }</option>
                                    }) }
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Giorno del Mese"}</label>
                                <input type="number" min="1" max="31" required=true value={(*rec_day).clone()} oninput={bind_input(rec_day.clone())} class={field_class} />
                                <p class="text-xs text-slate-500 mt-1">{"Es: 5 = ogni 5 del mese"}</p>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Data Inizio"}</label>
                                <input type="date" required=true value={(*rec_start).clone()} oninput={bind_input(rec_start.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Data Fine (opzionale)"}</label>
                                <input type="date" value={(*rec_end).clone()} oninput={bind_input(rec_end.clone())} class={field_class} />
                                <p class="text-xs text-slate-500 mt-1">{"Lascia vuoto per ricorrenza indefinita"}</p>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Descrizione (opzionale)"}</label>
                                <input type="text" placeholder="Note..." value={(*rec_description).clone()} oninput={bind_input(rec_description.clone())} class={field_class} />
                            </div>
                            <div class="flex justify-end space-x-3 pt-2">
                                <button
                                    type="button"
                                    onclick={{
                                        let show_recurring_modal = show_recurring_modal.clone();
                                        Callback::from(move |_| show_recurring_modal.set(false))
                                    }}
                                    class="px-5 py-2.5 text-slate-600 hover:bg-slate-100 rounded-lg font-medium transition-colors"
                                >
                                    {"Annulla"}
                                </button>
                                <button type="submit" class="px-5 py-2.5 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium shadow-sm hover:shadow-md transition-all">
                                    {"Salva"}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MiniCalendarProps {
    month: u32,
    year: i32,
    on_change: Callback<(u32, i32)>,
}

#[function_component(MiniCalendar)]
fn mini_calendar(props: &MiniCalendarProps) -> Html {
    let today = format::today();
    let is_current_month = props.month == today.month() && props.year == today.year();
    let blanks = format::leading_blanks(props.year, props.month);
    let days = format::days_in_month(props.year, props.month);

    let on_prev = {
        let on_change = props.on_change.clone();
        let target = format::prev_month(props.month, props.year);
        Callback::from(move |_| on_change.emit(target))
    };
    let on_next = {
        let on_change = props.on_change.clone();
        let target = format::next_month(props.month, props.year);
        Callback::from(move |_| on_change.emit(target))
    };

    html! {
        <div class="bg-white rounded-2xl shadow-sm border border-slate-100 p-6">
            <div class="flex items-center justify-between mb-4">
                <button onclick={on_prev} class="p-2 hover:bg-slate-100 rounded-lg transition-colors">{"←"}</button>
                <h3 class="font-bold text-slate-800">
                    { format!("{} {}", format::month_short(props.month), props.year) }
                </h3>
                <button onclick={on_next} class="p-2 hover:bg-slate-100 rounded-lg transition-colors">{"→"}</button>
            </div>

            <div class="grid grid-cols-7 gap-1 mb-2">
                { for ["L", "M", "M", "G", "V", "S", "D"].iter().map(|day| html! {
                    <div class="text-center text-xs font-medium text-slate-500 py-1">{ *day }</div>
                }) }
            </div>

            <div class="grid grid-cols-7 gap-1">
                { for (0..blanks).map(|_| html! { <div class="aspect-square" /> }) }
                { for (1..=days).map(|day| {
                    let is_today = is_current_month && day == today.day();
                    html! {
                        <div class={if is_today {
                            "aspect-square flex items-center justify-center text-sm rounded-lg bg-emerald-600 text-white font-bold"
                        } else {
                            "aspect-square flex items-center justify-center text-sm rounded-lg text-slate-700 hover:bg-slate-100 transition-colors"
                        }}>
                            { day }
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

