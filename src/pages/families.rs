use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_api;
use crate::components::icons::{icon_plus, icon_users, icon_x};
use crate::components::toast::{show_error, use_toast};
use crate::components::bind_input;
use crate::format;
use crate::models::{Family, FamilyPayload};

#[function_component(FamiliesPage)]
pub fn families_page() -> Html {
    let api = use_api();
    let toast = use_toast();

    let families = use_state(Vec::<Family>::new);
    let loading = use_state(|| true);
    let refresh = use_state(|| 0u32);
    let show_modal = use_state(|| false);
    let form_name = use_state(String::new);

    {
        let api = api.clone();
        let families = families.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_: &u32| {
                loading.set(true);
                spawn_local(async move {
                    match api.get::<Vec<Family>>("/families", &[]).await {
                        Ok(list) => families.set(list),
                        Err(err) => web_sys::console::error_1(
                            &format!("families fetch failed: {}", err).into(),
                        ),
                    }
                    loading.set(false);
                });
                || ()
            },
            *refresh,
        );
    }

    let on_submit = {
        let api = api.clone();
        let toast = toast.clone();
        let show_modal = show_modal.clone();
        let form_name = form_name.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = form_name.trim().to_string();
            if name.is_empty() {
                show_error(&toast, "Il nome della famiglia è obbligatorio");
                return;
            }
            let api = api.clone();
            let toast = toast.clone();
            let show_modal = show_modal.clone();
            let form_name = form_name.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match api
                    .post::<_, Family>("/families", &FamilyPayload { name })
                    .await
                {
                    Ok(_) => {
                        show_modal.set(false);
                        form_name.set(String::new());
                        refresh.set(*refresh + 1);
                    }
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let on_cancel = {
        let show_modal = show_modal.clone();
        let form_name = form_name.clone();
        Callback::from(move |_| {
            show_modal.set(false);
            form_name.set(String::new());
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-slate-800">{"Gestione Famiglie"}</h1>
                    <p class="text-slate-500 text-sm">{"Ogni famiglia condivide movimenti, budget e categorie"}</p>
                </div>
                <button
                    onclick={{
                        let show_modal = show_modal.clone();
                        Callback::from(move |_| show_modal.set(true))
                    }}
                    class="bg-emerald-600 text-white px-5 py-2.5 rounded-xl flex items-center space-x-2 hover:bg-emerald-700 transition-all shadow-sm hover:shadow-md"
                >
                    { icon_plus() }
                    <span>{"Nuova Famiglia"}</span>
                </button>
            </div>

            <div class="bg-white rounded-2xl shadow-sm border border-slate-100 overflow-hidden">
                if *loading {
                    <div class="p-12 text-center text-slate-400">{"Caricamento..."}</div>
                } else {
                    <table class="w-full text-left">
                        <thead>
                            <tr class="bg-slate-50/50 text-slate-500 text-xs uppercase tracking-wider border-b border-slate-100">
                                <th class="px-6 py-4 font-semibold">{"ID"}</th>
                                <th class="px-6 py-4 font-semibold">{"Nome Famiglia"}</th>
                                <th class="px-6 py-4 font-semibold">{"Data Creazione"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-100">
                            if families.is_empty() {
                                <tr>
                                    <td colspan="3" class="px-6 py-12 text-center text-slate-400">{"Nessuna famiglia trovata"}</td>
                                </tr>
                            } else {
                                { for families.iter().map(|family| html! {
                                    <tr key={family.id} class="text-sm hover:bg-slate-50 transition-colors">
                                        <td class="px-6 py-4 text-slate-500">{ family.id }</td>
                                        <td class="px-6 py-4">
                                            <div class="flex items-center space-x-2">
                                                <span class="text-slate-400">{ icon_users() }</span>
                                                <span class="font-medium text-slate-800">{ &family.name }</span>
                                            </div>
                                        </td>
                                        <td class="px-6 py-4 text-slate-500">{ format::date_medium(family.created_at.date()) }</td>
                                    </tr>
                                }) }
                            }
                        </tbody>
                    </table>
                }
            </div>

            if *show_modal {
                <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4">
                    <div class="bg-white rounded-2xl shadow-2xl p-6 w-full max-w-md">
                        <div class="flex items-center justify-between mb-6">
                            <h2 class="text-xl font-bold text-slate-800">{"Nuova Famiglia"}</h2>
                            <button onclick={on_cancel.clone()} class="p-2 hover:bg-slate-100 rounded-lg transition-colors">
                                { icon_x() }
                            </button>
                        </div>
                        <form onsubmit={on_submit} class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Nome Famiglia *"}</label>
                                <input
                                    type="text"
                                    required=true
                                    placeholder="es. Famiglia Verdi"
                                    value={(*form_name).clone()}
                                    oninput={bind_input(form_name.clone())}
                                    class="w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2.5 px-3"
                                />
                            </div>
                            <div class="flex justify-end space-x-3 pt-2">
                                <button type="button" onclick={on_cancel} class="px-5 py-2.5 text-slate-600 hover:bg-slate-100 rounded-xl font-medium transition-colors">
                                    {"Annulla"}
                                </button>
                                <button type="submit" class="px-5 py-2.5 bg-emerald-600 text-white rounded-xl hover:bg-emerald-700 font-medium shadow-sm hover:shadow-md transition-all">
                                    {"Crea Famiglia"}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        </div>
    }
}
