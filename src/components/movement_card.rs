use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_api;
use crate::components::icons::{
    icon_check, icon_chevron_down, icon_chevron_up, icon_edit, icon_trash, icon_trending_down,
    icon_trending_up,
};
use crate::components::toast::{show_error, use_toast};
use crate::components::{bind_input, bind_select, confirm};
use crate::format;
use crate::models::{Category, Movement, MovementPayload, MovementType};

#[derive(Properties, PartialEq)]
pub struct MovementCardProps {
    pub movement: Movement,
    pub on_changed: Callback<()>,
}

/// Collapsed row that expands into detail view and inline edit form.
#[function_component(MovementCard)]
pub fn movement_card(props: &MovementCardProps) -> Html {
    let api = use_api();
    let toast = use_toast();
    let movement = props.movement.clone();

    let expanded = use_state(|| false);
    let editing = use_state(|| false);
    let categories = use_state(Vec::<Category>::new);

    let form_kind = use_state(|| movement.kind.as_query().to_string());
    let form_date = use_state(|| format::iso(movement.date));
    let form_amount = use_state(|| movement.amount.to_string());
    let form_category = use_state(|| movement.category.clone());
    let form_description = use_state(|| movement.description.clone().unwrap_or_default());

    let on_toggle = {
        let api = api.clone();
        let expanded = expanded.clone();
        let editing = editing.clone();
        let categories = categories.clone();
        Callback::from(move |_| {
            // lazy category fetch, only the first time the card opens
            if !*expanded && categories.is_empty() {
                let api = api.clone();
                let categories = categories.clone();
                spawn_local(async move {
                    match api.get::<Vec<Category>>("/categories", &[]).await {
                        Ok(list) => categories.set(list),
                        Err(err) => web_sys::console::error_1(
                            &format!("categories fetch failed: {}", err).into(),
                        ),
                    }
                });
            }
            expanded.set(!*expanded);
            editing.set(false);
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            editing.set(true);
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        let movement = movement.clone();
        let form_kind = form_kind.clone();
        let form_date = form_date.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_description = form_description.clone();
        Callback::from(move |_| {
            form_kind.set(movement.kind.as_query().to_string());
            form_date.set(format::iso(movement.date));
            form_amount.set(movement.amount.to_string());
            form_category.set(movement.category.clone());
            form_description.set(movement.description.clone().unwrap_or_default());
            editing.set(false);
        })
    };

    let on_save = {
        let api = api.clone();
        let toast = toast.clone();
        let on_changed = props.on_changed.clone();
        let expanded = expanded.clone();
        let editing = editing.clone();
        let movement_id = movement.id;
        let movement_planned = movement.is_planned;
        let form_kind = form_kind.clone();
        let form_date = form_date.clone();
        let form_amount = form_amount.clone();
        let form_category = form_category.clone();
        let form_description = form_description.clone();
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
                movement_planned,
            ) {
                Ok(payload) => payload,
                Err(message) => {
                    show_error(&toast, message);
                    return;
                }
            };
            let api = api.clone();
            let toast = toast.clone();
            let on_changed = on_changed.clone();
            let expanded = expanded.clone();
            let editing = editing.clone();
            spawn_local(async move {
                match api
                    .put::<_, Movement>(&format!("/movements/{}", movement_id), &payload)
                    .await
                {
                    Ok(_) => {
                        editing.set(false);
                        expanded.set(false);
                        on_changed.emit(());
                    }
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let toast = toast.clone();
        let on_changed = props.on_changed.clone();
        let movement_id = movement.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !confirm("Eliminare questo movimento?") {
                return;
            }
            let api = api.clone();
            let toast = toast.clone();
            let on_changed = on_changed.clone();
            spawn_local(async move {
                match api.delete(&format!("/movements/{}", movement_id)).await {
                    Ok(()) => on_changed.emit(()),
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    // one-way: a planned occurrence becomes a real expense
    let on_confirm = {
        let api = api.clone();
        let toast = toast.clone();
        let on_changed = props.on_changed.clone();
        let movement_id = movement.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let api = api.clone();
            let toast = toast.clone();
            let on_changed = on_changed.clone();
            spawn_local(async move {
                match api
                    .post_empty::<Movement>(
                        &format!("/recurring/movements/{}/confirm", movement_id),
                        &[],
                    )
                    .await
                {
                    Ok(_) => on_changed.emit(()),
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let is_income = movement.kind == MovementType::Income;
    let badge_class = if is_income {
        "p-2 rounded-full bg-emerald-100 text-emerald-600"
    } else {
        "p-2 rounded-full bg-rose-100 text-rose-600"
    };
    let amount_class = if is_income {
        "font-bold text-sm text-emerald-600"
    } else {
        "font-bold text-sm text-slate-700"
    };
    let amount_label = if is_income {
        format::eur(movement.amount)
    } else {
        format!("-{}", format::eur(movement.amount))
    };

    html! {
        <div class="border-b border-slate-100 last:border-0">
            <div onclick={on_toggle} class="p-4 hover:bg-slate-50 transition-colors cursor-pointer flex items-center justify-between">
                <div class="flex items-center space-x-3 flex-1">
                    <div class={badge_class}>
                        { if is_income { icon_trending_up() } else { icon_trending_down() } }
                    </div>
                    <div class="flex-1">
                        <p class="font-medium text-slate-800 text-sm">{ &movement.category }</p>
                        <p class="text-xs text-slate-500">
                            { format::date_short(movement.date) }
                            { movement.description.as_ref().map(|d| format!(" • {}", d)).unwrap_or_default() }
                        </p>
                    </div>
                </div>
                <div class="flex items-center space-x-3">
                    <div class="text-right">
                        <p class={amount_class}>{ amount_label }</p>
                        if movement.is_planned {
                            <span class="text-[10px] font-medium bg-blue-50 text-blue-600 px-1.5 py-0.5 rounded border border-blue-100">
                                {"Prevista"}
                            </span>
                        }
                    </div>
                    if movement.awaits_confirmation() {
                        <button
                            onclick={on_confirm}
                            title="Conferma la spesa"
                            class="p-2 text-emerald-600 hover:bg-emerald-50 rounded-lg transition-colors"
                        >
                            { icon_check() }
                        </button>
                    }
                    <div class="text-slate-400">
                        { if *expanded { icon_chevron_up() } else { icon_chevron_down() } }
                    </div>
                </div>
            </div>

            if *expanded {
                <div class="px-4 pb-4 bg-slate-50/50">
                    if !*editing {
                        <div class="space-y-3">
                            <div class="grid grid-cols-2 gap-3 text-sm">
                                <div>
                                    <span class="text-slate-500 font-medium">{"Tipo:"}</span>
                                    <p class="text-slate-800">{ movement.kind.label() }</p>
                                </div>
                                <div>
                                    <span class="text-slate-500 font-medium">{"Data:"}</span>
                                    <p class="text-slate-800">{ format::date_long(movement.date) }</p>
                                </div>
                                <div>
                                    <span class="text-slate-500 font-medium">{"Categoria:"}</span>
                                    <p class="text-slate-800">{ &movement.category }</p>
                                </div>
                                <div>
                                    <span class="text-slate-500 font-medium">{"Importo:"}</span>
                                    <p class={if is_income { "font-bold text-emerald-600" } else { "font-bold text-rose-600" }}>
                                        { format::eur(movement.amount) }
                                    </p>
                                </div>
                            </div>
                            if let Some(description) = &movement.description {
                                <div class="text-sm">
                                    <span class="text-slate-500 font-medium">{"Descrizione:"}</span>
                                    <p class="text-slate-800 mt-1">{ description }</p>
                                </div>
                            }
                            <div class="flex space-x-2 pt-2">
                                <button onclick={on_edit} class="flex-1 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors flex items-center justify-center space-x-2 text-sm font-medium">
                                    { icon_edit() }
                                    <span>{"Modifica"}</span>
                                </button>
                                <button onclick={on_delete} class="flex-1 bg-rose-600 text-white px-4 py-2 rounded-lg hover:bg-rose-700 transition-colors flex items-center justify-center space-x-2 text-sm font-medium">
                                    { icon_trash() }
                                    <span>{"Elimina"}</span>
                                </button>
                            </div>
                        </div>
                    } else {
                        <form onsubmit={on_save} class="space-y-3">
                            <div class="grid grid-cols-2 gap-3">
                                <div>
                                    <label class="block text-xs font-medium text-slate-700 mb-1">{"Tipo"}</label>
                                    <select
                                        onchange={bind_select(form_kind.clone())}
                                        class="w-full rounded-lg border border-slate-200 px-3 py-2 text-sm focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500"
                                    >
                                        <option value="EXPENSE" selected={*form_kind == "EXPENSE"}>{"Spesa"}</option>
                                        <option value="INCOME" selected={*form_kind == "INCOME"}>{"Entrata"}</option>
                                    </select>
                                </div>
                                <div>
                                    <label class="block text-xs font-medium text-slate-700 mb-1">{"Data"}</label>
                                    <input
                                        type="date"
                                        value={(*form_date).clone()}
                                        oninput={bind_input(form_date.clone())}
                                        class="w-full rounded-lg border border-slate-200 px-3 py-2 text-sm focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500"
                                    />
                                </div>
                                <div>
                                    <label class="block text-xs font-medium text-slate-700 mb-1">{"Categoria"}</label>
                                    <select
                                        onchange={bind_select(form_category.clone())}
                                        class="w-full rounded-lg border border-slate-200 px-3 py-2 text-sm focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500"
                                    >
                                        { for categories.iter().map(|cat| html! {
                                            <option value={cat.name.clone()} selected={*form_category == cat.name}>{ &cat.name }</option>
                                        }) }
                                    </select>
                                </div>
                                <div>
                                    <label class="block text-xs font-medium text-slate-700 mb-1">{"Importo"}</label>
                                    <input
                                        type="number"
                                        step="0.01"
                                        value={(*form_amount).clone()}
                                        oninput={bind_input(form_amount.clone())}
                                        class="w-full rounded-lg border border-slate-200 px-3 py-2 text-sm focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500"
                                    />
                                </div>
                            </div>
                            <div>
                                <label class="block text-xs font-medium text-slate-700 mb-1">{"Descrizione"}</label>
                                <input
                                    type="text"
                                    placeholder="Note..."
                                    value={(*form_description).clone()}
                                    oninput={bind_input(form_description.clone())}
                                    class="w-full rounded-lg border border-slate-200 px-3 py-2 text-sm focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500"
                                />
                            </div>
                            <div class="flex space-x-2 pt-2">
                                <button type="button" onclick={on_cancel} class="flex-1 bg-slate-200 text-slate-700 px-4 py-2 rounded-lg hover:bg-slate-300 transition-colors text-sm font-medium">
                                    {"Annulla"}
                                </button>
                                <button type="submit" class="flex-1 bg-emerald-600 text-white px-4 py-2 rounded-lg hover:bg-emerald-700 transition-colors text-sm font-medium">
                                    {"Salva"}
                                </button>
                            </div>
                        </form>
                    }
                </div>
            }
        </div>
    }
}
