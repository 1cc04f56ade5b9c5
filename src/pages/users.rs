use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_api;
use crate::components::icons::{icon_plus, icon_shield, icon_user, icon_x};
use crate::components::password_meter::PasswordMeter;
use crate::components::toast::{show_error, use_toast};
use crate::components::bind_input;
use crate::models::{User, UserPayload};

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let api = use_api();
    let toast = use_toast();

    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let refresh = use_state(|| 0u32);
    let show_modal = use_state(|| false);
    let form_username = use_state(String::new);
    let form_email = use_state(String::new);
    let form_first_name = use_state(String::new);
    let form_last_name = use_state(String::new);
    let form_password = use_state(String::new);

    {
        let api = api.clone();
        let users = users.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_: &u32| {
                loading.set(true);
                spawn_local(async move {
                    match api.get::<Vec<User>>("/users", &[]).await {
                        Ok(list) => users.set(list),
                        Err(err) => web_sys::console::error_1(
                            &format!("users fetch failed: {}", err).into(),
                        ),
                    }
                    loading.set(false);
                });
                || ()
            },
            *refresh,
        );
    }

    let close_modal = {
        let show_modal = show_modal.clone();
        let form_username = form_username.clone();
        let form_email = form_email.clone();
        let form_first_name = form_first_name.clone();
        let form_last_name = form_last_name.clone();
        let form_password = form_password.clone();
        Callback::from(move |_: ()| {
            show_modal.set(false);
            form_username.set(String::new());
            form_email.set(String::new());
            form_first_name.set(String::new());
            form_last_name.set(String::new());
            form_password.set(String::new());
        })
    };

    let on_submit = {
        let api = api.clone();
        let toast = toast.clone();
        let form_username = form_username.clone();
        let form_email = form_email.clone();
        let form_first_name = form_first_name.clone();
        let form_last_name = form_last_name.clone();
        let form_password = form_password.clone();
        let refresh = refresh.clone();
        let close_modal = close_modal.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = form_username.trim().to_string();
            if username.is_empty() {
                show_error(&toast, "Lo username è obbligatorio");
                return;
            }
            if form_password.chars().count() < 8 {
                show_error(&toast, "La password deve avere almeno 8 caratteri");
                return;
            }
            let optional = |value: &str| {
                let value = value.trim();
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            };
            let payload = UserPayload {
                username,
                email: optional(&form_email),
                first_name: optional(&form_first_name),
                last_name: optional(&form_last_name),
                password: (*form_password).clone(),
            };
            let api = api.clone();
            let toast = toast.clone();
            let refresh = refresh.clone();
            let close_modal = close_modal.clone();
            spawn_local(async move {
                match api.post::<_, User>("/users", &payload).await {
                    Ok(_) => {
                        close_modal.emit(());
                        refresh.set(*refresh + 1);
                    }
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
                    <h1 class="text-2xl font-bold text-slate-800">{"Gestione Utenti"}</h1>
                    <p class="text-slate-500 text-sm">{"Gli account che accedono a questa istanza"}</p>
                </div>
                <button
                    onclick={{
                        let show_modal = show_modal.clone();
                        Callback::from(move |_| show_modal.set(true))
                    }}
                    class="bg-emerald-600 text-white px-5 py-2.5 rounded-xl flex items-center space-x-2 hover:bg-emerald-700 transition-all shadow-sm hover:shadow-md"
                >
                    { icon_plus() }
                    <span>{"Nuovo Utente"}</span>
                </button>
            </div>

            <div class="bg-white rounded-2xl shadow-sm border border-slate-100 overflow-hidden">
                if *loading {
                    <div class="p-12 text-center text-slate-400">{"Caricamento..."}</div>
                } else {
                    <table class="w-full text-left">
                        <thead>
                            <tr class="bg-slate-50/50 text-slate-500 text-xs uppercase tracking-wider border-b border-slate-100">
                                <th class="px-6 py-4 font-semibold">{"Utente"}</th>
                                <th class="px-6 py-4 font-semibold">{"Email"}</th>
                                <th class="px-6 py-4 font-semibold">{"Nome"}</th>
                                <th class="px-6 py-4 font-semibold">{"Ruolo"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-100">
                            if users.is_empty() {
                                <tr>
                                    <td colspan="4" class="px-6 py-12 text-center text-slate-400">{"Nessun utente trovato"}</td>
                                </tr>
                            } else {
                                { for users.iter().map(|user| html! {
                                    <tr key={user.id} class="text-sm hover:bg-slate-50 transition-colors">
                                        <td class="px-6 py-4">
                                            <div class="flex items-center space-x-2">
                                                <div class="bg-slate-100 p-1.5 rounded-full text-slate-500">{ icon_user() }</div>
                                                <span class="font-medium text-slate-800">{ &user.username }</span>
                                            </div>
                                        </td>
                                        <td class="px-6 py-4 text-slate-500">{ user.email.clone().unwrap_or_default() }</td>
                                        <td class="px-6 py-4 text-slate-500">{ user.display_name() }</td>
                                        <td class="px-6 py-4">
                                            if user.is_superuser {
                                                <span class="inline-flex items-center space-x-1 px-2 py-1 bg-amber-100 text-amber-800 text-xs font-medium rounded-full">
                                                    { icon_shield() }
                                                    <span>{"Amministratore"}</span>
                                                </span>
                                            } else {
                                                <span class="px-2 py-1 bg-slate-100 text-slate-600 text-xs font-medium rounded-full">{"Utente"}</span>
                                            }
                                        </td>
                                    </tr>
                                }) }
                            }
                        </tbody>
                    </table>
                }
            </div>

            if *show_modal {
                <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4">
                    <div class="bg-white rounded-2xl shadow-2xl p-6 w-full max-w-md max-h-[90vh] overflow-y-auto">
                        <div class="flex items-center justify-between mb-6">
                            <h2 class="text-xl font-bold text-slate-800">{"Nuovo Utente"}</h2>
                            <button
                                onclick={{
                                    let close_modal = close_modal.clone();
                                    Callback::from(move |_| close_modal.emit(()))
                                }}
                                class="p-2 hover:bg-slate-100 rounded-lg transition-colors"
                            >
                                { icon_x() }
                            </button>
                        </div>
                        <form onsubmit={on_submit} class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Username *"}</label>
                                <input type="text" required=true value={(*form_username).clone()} oninput={bind_input(form_username.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Email"}</label>
                                <input type="email" value={(*form_email).clone()} oninput={bind_input(form_email.clone())} class={field_class} />
                            </div>
                            <div class="grid grid-cols-2 gap-4">
                                <div>
                                    <label class="block text-sm font-medium text-slate-700 mb-2">{"Nome"}</label>
                                    <input type="text" value={(*form_first_name).clone()} oninput={bind_input(form_first_name.clone())} class={field_class} />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-slate-700 mb-2">{"Cognome"}</label>
                                    <input type="text" value={(*form_last_name).clone()} oninput={bind_input(form_last_name.clone())} class={field_class} />
                                </div>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Password *"}</label>
                                <input type="password" required=true value={(*form_password).clone()} oninput={bind_input(form_password.clone())} class={field_class} />
                                <PasswordMeter password={(*form_password).clone()} />
                            </div>
                            <div class="flex justify-end space-x-3 pt-2">
                                <button
                                    type="button"
                                    onclick={{
                                        let close_modal = close_modal.clone();
                                        Callback::from(move |_| close_modal.emit(()))
                                    }}
                                    class="px-5 py-2.5 text-slate-600 hover:bg-slate-100 rounded-xl font-medium transition-colors"
                                >
                                    {"Annulla"}
                                </button>
                                <button type="submit" class="px-5 py-2.5 bg-emerald-600 text-white rounded-xl hover:bg-emerald-700 font-medium shadow-sm hover:shadow-md transition-all">
                                    {"Crea Utente"}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        </div>
    }
}
