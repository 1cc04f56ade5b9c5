use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_api;
use crate::bus::{publish, use_bus, Topic};
use crate::components::icons::{icon_plus, icon_x};
use crate::components::toast::{show_error, use_toast};
use crate::components::{bind_input, bind_select};
use crate::format;
use crate::models::{Category, Movement, MovementPayload, MovementType};

/// Floating quick-add button: one movement form reachable from every
/// page, pre-filled with the month the user is currently looking at.
#[function_component(QuickAdd)]
pub fn quick_add() -> Html {
    let api = use_api();
    let bus = use_bus();
    let toast = use_toast();

    let show_modal = use_state(|| false);
    let categories = use_state(Vec::<Category>::new);
    let kind = use_state(|| MovementType::Expense);
    let date = use_state(|| format::iso((*bus).quick_add_date()));
    let amount = use_state(String::new);
    let category = use_state(String::new);
    let description = use_state(String::new);
    let saving = use_state(|| false);

    // follow the viewed month when the user navigates
    {
        let date = date.clone();
        use_effect_with_deps(
            move |context_date| {
                date.set(format::iso(*context_date));
                || ()
            },
            (*bus).quick_add_date(),
        );
    }

    // categories are fetched lazily, when the modal opens
    {
        let api = api.clone();
        let categories = categories.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    spawn_local(async move {
                        match api.get::<Vec<Category>>("/categories", &[]).await {
                            Ok(list) => categories.set(list),
                            Err(err) => web_sys::console::error_1(
                                &format!("categories fetch failed: {}", err).into(),
                            ),
                        }
                    });
                }
                || ()
            },
            *show_modal,
        );
    }

    let on_open = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(true))
    };
    let on_close = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let on_submit = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        let show_modal = show_modal.clone();
        let kind = kind.clone();
        let date = date.clone();
        let amount = amount.clone();
        let category = category.clone();
        let description = description.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match MovementPayload::from_form(
                *kind,
                &date,
                &amount,
                &category,
                &description,
                false,
            ) {
                Ok(payload) => payload,
                Err(message) => {
                    show_error(&toast, message);
                    return;
                }
            };

            saving.set(true);
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            let show_modal = show_modal.clone();
            let amount = amount.clone();
            let category = category.clone();
            let description = description.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match api.post::<_, Movement>("/movements", &payload).await {
                    Ok(_) => {
                        show_modal.set(false);
                        amount.set(String::new());
                        category.set(String::new());
                        description.set(String::new());
                        publish(&bus, Topic::Movements);
                    }
                    Err(err) => show_error(&toast, err.to_string()),
                }
                saving.set(false);
            });
        })
    };

    let type_button = |target: MovementType, label: &'static str, active: &'static str| {
        let kind_state = kind.clone();
        let is_active = *kind == target;
        let class = if is_active {
            format!("flex-1 py-2 rounded-lg font-medium transition-all text-white {}", active)
        } else {
            "flex-1 py-2 rounded-lg font-medium transition-all bg-slate-100 text-slate-600".to_string()
        };
        html! {
            <button type="button" class={class} onclick={Callback::from(move |_| kind_state.set(target))}>
                { label }
            </button>
        }
    };

    html! {
        <>
            <button
                onclick={on_open}
                title="Nuovo Movimento"
                class="fixed bottom-8 right-8 bg-emerald-600 text-white p-5 rounded-full shadow-2xl hover:bg-emerald-700 hover:scale-110 transition-all duration-300 z-[60]"
            >
                { icon_plus() }
            </button>

            if *show_modal {
                <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50">
                    <div class="bg-white rounded-2xl shadow-2xl p-6 w-full max-w-md mx-4">
                        <div class="flex items-center justify-between mb-6">
                            <h3 class="text-xl font-bold text-slate-800">{"Nuovo Movimento"}</h3>
                            <button onclick={on_close} class="p-2 hover:bg-slate-100 rounded-lg transition-colors">
                                { icon_x() }
                            </button>
                        </div>

                        <form onsubmit={on_submit} class="space-y-4">
                            <div class="flex gap-2">
                                { type_button(MovementType::Expense, "Spesa", "bg-rose-600") }
                                { type_button(MovementType::Income, "Entrata", "bg-emerald-600") }
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Importo"}</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    required=true
                                    placeholder="0.00"
                                    value={(*amount).clone()}
                                    oninput={bind_input(amount.clone())}
                                    class="w-full rounded-lg border border-slate-200 px-4 py-2.5 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500"
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Categoria"}</label>
                                <select
                                    required=true
                                    value={(*category).clone()}
                                    onchange={bind_select(category.clone())}
                                    class="w-full rounded-lg border border-slate-200 px-4 py-2.5 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500"
                                >
                                    <option value="" selected={category.is_empty()}>{"Seleziona..."}</option>
                                    { for categories.iter().map(|cat| html! {
                                        <option value={cat.name.clone()} selected={*category == cat.name}>{ &cat.name }</option>
                                    }) }
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Data"}</label>
                                <input
                                    type="date"
                                    required=true
                                    value={(*date).clone()}
                                    oninput={bind_input(date.clone())}
                                    class="w-full rounded-lg border border-slate-200 px-4 py-2.5 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500"
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Descrizione (opzionale)"}</label>
                                <input
                                    type="text"
                                    placeholder="Note..."
                                    value={(*description).clone()}
                                    oninput={bind_input(description.clone())}
                                    class="w-full rounded-lg border border-slate-200 px-4 py-2.5 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500"
                                />
                            </div>
                            <button
                                type="submit"
                                disabled={*saving}
                                class="w-full bg-emerald-600 text-white py-3 rounded-lg font-semibold hover:bg-emerald-700 transition-colors shadow-md disabled:opacity-50"
                            >
                                { if *saving { "Salvataggio..." } else { "Aggiungi Movimento" } }
                            </button>
                        </form>
                    </div>
                </div>
            }
        </>
    }
}
