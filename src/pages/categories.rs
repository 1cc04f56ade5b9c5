use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{use_api, use_fetch_seq};
use crate::bus::{publish, use_bus, Topic};
use crate::components::category_modal::CategoryModal;
use crate::components::icons::{icon_edit, icon_plus, icon_tag, icon_trash};
use crate::components::toast::{show_error, use_toast};
use crate::components::{bind_input, confirm};
use crate::models::{Category, CategoryPayload};

const DEFAULT_COLOR: &str = "#10b981";

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let api = use_api();
    let bus = use_bus();
    let toast = use_toast();
    let seq = use_fetch_seq();

    let categories = use_state(Vec::<Category>::new);
    let show_form = use_state(|| false);
    let editing_id = use_state(|| None::<i64>);
    let form_name = use_state(String::new);
    let form_color = use_state(|| DEFAULT_COLOR.to_string());
    let drill_category = use_state(|| None::<String>);

    {
        let api = api.clone();
        let seq = seq.clone();
        let categories = categories.clone();
        use_effect_with_deps(
            move |_: &u64| {
                let ticket = seq.issue();
                spawn_local(async move {
                    match api.get::<Vec<Category>>("/categories", &[]).await {
                        Ok(list) if seq.is_current(ticket) => categories.set(list),
                        Ok(_) => {}
                        Err(err) => web_sys::console::error_1(
                            &format!("categories fetch failed: {}", err).into(),
                        ),
                    }
                });
                || ()
            },
            (*bus).stamp(Topic::Categories),
        );
    }

    let on_new = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let form_name = form_name.clone();
        let form_color = form_color.clone();
        Callback::from(move |_| {
            editing_id.set(None);
            form_name.set(String::new());
            form_color.set(DEFAULT_COLOR.to_string());
            show_form.set(!*show_form);
        })
    };

    let on_edit = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let form_name = form_name.clone();
        let form_color = form_color.clone();
        Callback::from(move |category: Category| {
            editing_id.set(Some(category.id));
            form_name.set(category.name.clone());
            form_color.set(category.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()));
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
        let form_color = form_color.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = form_name.trim().to_string();
            if name.is_empty() {
                show_error(&toast, "Il nome della categoria è obbligatorio");
                return;
            }
            let payload = CategoryPayload {
                name,
                color: (*form_color).clone(),
            };
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            let show_form = show_form.clone();
            let editing = *editing_id;
            spawn_local(async move {
                let outcome = match editing {
                    Some(id) => {
                        api.put::<_, Category>(&format!("/categories/{}", id), &payload)
                            .await
                    }
                    None => api.post::<_, Category>("/categories", &payload).await,
                };
                match outcome {
                    Ok(_) => {
                        show_form.set(false);
                        publish(&bus, Topic::Categories);
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
            if !confirm("Sei sicuro di voler eliminare questa categoria?") {
                return;
            }
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match api.delete(&format!("/categories/{}", id)).await {
                    Ok(()) => publish(&bus, Topic::Categories),
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-slate-800">{"Categorie"}</h1>
                    <p class="text-slate-500 text-sm">{"Gestisci le categorie di spesa"}</p>
                </div>
                <button onclick={on_new} class="bg-emerald-600 text-white px-5 py-2.5 rounded-xl flex items-center space-x-2 hover:bg-emerald-700 transition-all shadow-sm hover:shadow-md">
                    { icon_plus() }
                    <span>{"Nuova Categoria"}</span>
                </button>
            </div>

            if *show_form {
                <div class="bg-white p-6 rounded-2xl shadow-lg border border-slate-100">
                    <h2 class="text-lg font-semibold mb-4 text-slate-800">
                        { if editing_id.is_some() { "Modifica Categoria" } else { "Nuova Categoria" } }
                    </h2>
                    <form onsubmit={on_submit} class="flex flex-col md:flex-row gap-4 items-end">
                        <div class="flex-1 w-full">
                            <label class="block text-sm font-medium text-slate-700 mb-2">{"Nome"}</label>
                            <input
                                type="text"
                                required=true
                                placeholder="Es. Ristoranti"
                                value={(*form_name).clone()}
                                oninput={bind_input(form_name.clone())}
                                class="w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2.5 px-3"
                            />
                        </div>
                        <div class="w-full md:w-32">
                            <label class="block text-sm font-medium text-slate-700 mb-2">{"Colore"}</label>
                            <input
                                type="color"
                                value={(*form_color).clone()}
                                oninput={bind_input(form_color.clone())}
                                class="w-full h-[46px] rounded-xl border border-slate-200 shadow-sm cursor-pointer"
                            />
                        </div>
                        <div class="flex space-x-3 w-full md:w-auto">
                            <button
                                type="button"
                                onclick={{
                                    let show_form = show_form.clone();
                                    Callback::from(move |_| show_form.set(false))
                                }}
                                class="flex-1 md:flex-none px-5 py-2.5 text-slate-600 hover:bg-slate-100 rounded-xl font-medium transition-colors"
                            >
                                {"Annulla"}
                            </button>
                            <button type="submit" class="flex-1 md:flex-none px-5 py-2.5 bg-emerald-600 text-white rounded-xl hover:bg-emerald-700 font-medium shadow-sm hover:shadow-md transition-all">
                                {"Salva"}
                            </button>
                        </div>
                    </form>
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                { for categories.iter().map(|category| {
                    let on_edit = on_edit.clone();
                    let edit_target = category.clone();
                    let on_delete = on_delete.clone();
                    let category_id = category.id;
                    let drill_category = drill_category.clone();
                    let drill_name = category.name.clone();
                    let swatch = category.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string());
                    html! {
                        <div
                            key={category.id}
                            onclick={Callback::from(move |_| drill_category.set(Some(drill_name.clone())))}
                            class="bg-white p-4 rounded-xl shadow-sm border border-slate-100 flex justify-between items-center group hover:shadow-md transition-all cursor-pointer"
                        >
                            <div class="flex items-center space-x-3">
                                <div class="p-2 rounded-lg" style={format!("background-color: {}20; color: {}", swatch, swatch)}>
                                    { icon_tag() }
                                </div>
                                <span class="font-medium text-slate-700">{ &category.name }</span>
                            </div>
                            <div class="flex space-x-2 opacity-0 group-hover:opacity-100 transition-opacity">
                                <button
                                    onclick={Callback::from(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        on_edit.emit(edit_target.clone());
                                    })}
                                    class="p-2 text-slate-400 hover:text-emerald-600 hover:bg-emerald-50 rounded-lg transition-colors"
                                >
                                    { icon_edit() }
                                </button>
                                <button
                                    onclick={Callback::from(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        on_delete.emit(category_id);
                                    })}
                                    class="p-2 text-slate-400 hover:text-rose-600 hover:bg-rose-50 rounded-lg transition-colors"
                                >
                                    { icon_trash() }
                                </button>
                            </div>
                        </div>
                    }
                }) }
            </div>

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
