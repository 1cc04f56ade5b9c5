use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_api;
use crate::auth::use_session;
use crate::components::icons::{icon_lock, icon_mail, icon_server, icon_shield};
use crate::components::password_meter::PasswordMeter;
use crate::components::toast::{show_error, show_success, use_toast};
use crate::components::{bind_checkbox, bind_input};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Password,
    Smtp,
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let session = use_session();
    let active_tab = use_state(|| Tab::Password);
    let is_superuser = session
        .user
        .as_ref()
        .map(|u| u.is_superuser)
        .unwrap_or(false);

    let tab_button = |tab: Tab, label: &'static str| {
        let active_tab = active_tab.clone();
        let class = if *active_tab == tab {
            "flex-1 py-4 text-sm font-medium text-center transition-colors text-emerald-600 border-b-2 border-emerald-600 bg-emerald-50/50"
        } else {
            "flex-1 py-4 text-sm font-medium text-center transition-colors text-slate-500 hover:text-slate-700 hover:bg-slate-50"
        };
        html! {
            <button class={class} onclick={Callback::from(move |_| active_tab.set(tab))}>
                { label }
            </button>
        }
    };

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-slate-800">{"Impostazioni"}</h1>
                <p class="text-slate-500 text-sm">{"Gestisci le preferenze del tuo account e del sistema"}</p>
            </div>

            <div class="bg-white rounded-2xl shadow-sm border border-slate-100 overflow-hidden">
                <div class="flex border-b border-slate-100">
                    { tab_button(Tab::Password, "Sicurezza") }
                    if is_superuser {
                        { tab_button(Tab::Smtp, "Configurazione Email (SMTP)") }
                    }
                </div>

                <div class="p-6">
                    {
                        match (*active_tab, is_superuser) {
                            (Tab::Smtp, true) => html! { <SmtpTab /> },
                            _ => html! { <PasswordTab /> },
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(PasswordTab)]
fn password_tab() -> Html {
    let api = use_api();
    let toast = use_toast();
    let old_password = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let busy = use_state(|| false);

    let on_submit = {
        let api = api.clone();
        let toast = toast.clone();
        let old_password = old_password.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *new_password != *confirm_password {
                show_error(&toast, "Le nuove password non coincidono");
                return;
            }
            busy.set(true);
            let api = api.clone();
            let toast = toast.clone();
            let old_password_state = old_password.clone();
            let new_password_state = new_password.clone();
            let confirm_password_state = confirm_password.clone();
            let old_val = (*old_password).clone();
            let new_val = (*new_password).clone();
            let busy = busy.clone();
            spawn_local(async move {
                match api
                    .post_empty::<serde_json::Value>(
                        "/config/change-password",
                        &[("old_password", old_val), ("new_password", new_val)],
                    )
                    .await
                {
                    Ok(_) => {
                        show_success(&toast, "Password aggiornata con successo!");
                        old_password_state.set(String::new());
                        new_password_state.set(String::new());
                        confirm_password_state.set(String::new());
                    }
                    Err(err) => show_error(&toast, err.to_string()),
                }
                busy.set(false);
            });
        })
    };

    let field_class = "w-full rounded-xl border border-slate-200 bg-slate-50 px-4 py-2.5 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500 focus:bg-white transition-all";

    html! {
        <div class="max-w-md mx-auto">
            <h3 class="text-lg font-semibold text-slate-800 mb-4">{"Cambia Password"}</h3>
            <form onsubmit={on_submit} class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Password Attuale"}</label>
                    <input type="password" required=true value={(*old_password).clone()} oninput={bind_input(old_password.clone())} class={field_class} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Nuova Password"}</label>
                    <input type="password" required=true value={(*new_password).clone()} oninput={bind_input(new_password.clone())} class={field_class} />
                    <PasswordMeter password={(*new_password).clone()} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Conferma Nuova Password"}</label>
                    <input type="password" required=true value={(*confirm_password).clone()} oninput={bind_input(confirm_password.clone())} class={field_class} />
                </div>
                <button
                    type="submit"
                    disabled={*busy}
                    class="w-full bg-emerald-600 text-white py-2.5 rounded-xl hover:bg-emerald-700 transition-colors font-medium disabled:opacity-50"
                >
                    { if *busy { "Aggiornamento..." } else { "Aggiorna Password" } }
                </button>
            </form>
        </div>
    }
}

#[function_component(SmtpTab)]
fn smtp_tab() -> Html {
    let api = use_api();
    let toast = use_toast();

    let config_id = use_state(|| None::<i64>);
    let server = use_state(String::new);
    let port = use_state(|| "587".to_string());
    let username = use_state(String::new);
    let password = use_state(String::new);
    let from_email = use_state(String::new);
    let use_tls = use_state(|| true);
    let test_email = use_state(String::new);
    let busy = use_state(|| false);

    {
        let api = api.clone();
        let config_id = config_id.clone();
        let server = server.clone();
        let port = port.clone();
        let username = username.clone();
        let from_email = from_email.clone();
        let use_tls = use_tls.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api
                        .get::<crate::models::SmtpConfig>("/config/smtp", &[])
                        .await
                    {
                        Ok(config) => {
                            config_id.set(config.id);
                            server.set(config.smtp_server);
                            port.set(config.smtp_port.to_string());
                            username.set(config.smtp_username);
                            from_email.set(config.from_email);
                            use_tls.set(config.use_tls);
                            // the password field is write-only and never pre-filled
                        }
                        Err(err) => web_sys::console::error_1(
                            &format!("smtp config fetch failed: {}", err).into(),
                        ),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_save = {
        let api = api.clone();
        let toast = toast.clone();
        let config_id = config_id.clone();
        let server = server.clone();
        let port = port.clone();
        let username = username.clone();
        let password = password.clone();
        let from_email = from_email.clone();
        let use_tls = use_tls.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let smtp_port: u16 = match port.trim().parse() {
                Ok(port) => port,
                Err(_) => {
                    show_error(&toast, "La porta SMTP non è valida");
                    return;
                }
            };
            let payload = crate::models::SmtpConfig {
                id: *config_id,
                smtp_server: server.trim().to_string(),
                smtp_port,
                smtp_username: (*username).clone(),
                smtp_password: (*password).clone(),
                from_email: from_email.trim().to_string(),
                use_tls: *use_tls,
            };
            busy.set(true);
            let api = api.clone();
            let toast = toast.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match api
                    .put::<_, serde_json::Value>("/config/smtp", &payload)
                    .await
                {
                    Ok(_) => show_success(&toast, "Configurazione salvata con successo!"),
                    Err(err) => show_error(&toast, err.to_string()),
                }
                busy.set(false);
            });
        })
    };

    let on_test = {
        let api = api.clone();
        let toast = toast.clone();
        let test_email = test_email.clone();
        let busy = busy.clone();
        Callback::from(move |_| {
            let address = test_email.trim().to_string();
            if address.is_empty() {
                return;
            }
            busy.set(true);
            let api = api.clone();
            let toast = toast.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match api
                    .post_empty::<serde_json::Value>(
                        "/config/smtp/test",
                        &[("test_email", address)],
                    )
                    .await
                {
                    Ok(_) => show_success(&toast, "Email di test inviata con successo!"),
                    Err(err) => show_error(&toast, err.to_string()),
                }
                busy.set(false);
            });
        })
    };

    let field_class = "w-full rounded-xl border border-slate-200 bg-slate-50 px-4 py-2.5 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500 focus:bg-white transition-all";
    let password_placeholder = if config_id.is_some() {
        "•••••••• (Lascia vuoto per non cambiare)"
    } else {
        ""
    };

    html! {
        <div class="max-w-2xl mx-auto">
            <div class="flex items-center justify-between mb-6">
                <h3 class="text-lg font-semibold text-slate-800">{"Configurazione Server SMTP"}</h3>
                <span class="px-3 py-1 bg-amber-100 text-amber-800 text-xs font-medium rounded-full flex items-center space-x-1">
                    { icon_shield() }
                    <span>{"Area Protetta"}</span>
                </span>
            </div>

            <form onsubmit={on_save} class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="md:col-span-2">
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Server SMTP"}</label>
                    <div class="relative">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">{ icon_server() }</span>
                        <input type="text" required=true placeholder="smtp.gmail.com" value={(*server).clone()} oninput={bind_input(server.clone())} class={format!("pl-10 {}", field_class)} />
                    </div>
                </div>

                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Porta"}</label>
                    <input type="number" required=true placeholder="587" value={(*port).clone()} oninput={bind_input(port.clone())} class={field_class} />
                </div>

                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Usa TLS"}</label>
                    <label class="flex items-center h-[42px] space-x-2 cursor-pointer">
                        <input type="checkbox" checked={*use_tls} onchange={bind_checkbox(use_tls.clone())} class="rounded border-slate-300 text-emerald-600" />
                        <span class="text-sm font-medium text-slate-700">{"Attivo"}</span>
                    </label>
                </div>

                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Username SMTP"}</label>
                    <input type="text" required=true value={(*username).clone()} oninput={bind_input(username.clone())} class={field_class} />
                </div>

                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Password SMTP"}</label>
                    <div class="relative">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">{ icon_lock() }</span>
                        <input
                            type="password"
                            required={config_id.is_none()}
                            placeholder={password_placeholder}
                            value={(*password).clone()}
                            oninput={bind_input(password.clone())}
                            class={format!("pl-10 {}", field_class)}
                        />
                    </div>
                </div>

                <div class="md:col-span-2">
                    <label class="block text-sm font-medium text-slate-700 mb-1">{"Email Mittente"}</label>
                    <div class="relative">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">{ icon_mail() }</span>
                        <input type="email" required=true placeholder="noreply@spesecasa.com" value={(*from_email).clone()} oninput={bind_input(from_email.clone())} class={format!("pl-10 {}", field_class)} />
                    </div>
                </div>

                <div class="md:col-span-2 pt-4 flex items-center justify-between border-t border-slate-100 mt-4">
                    <div class="flex-1 mr-4">
                        <div class="flex space-x-2">
                            <input
                                type="email"
                                placeholder="Email per test..."
                                value={(*test_email).clone()}
                                oninput={bind_input(test_email.clone())}
                                class="flex-1 rounded-xl border border-slate-200 bg-slate-50 px-4 py-2 text-sm focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500 focus:bg-white transition-all"
                            />
                            <button
                                type="button"
                                onclick={on_test}
                                disabled={test_email.is_empty() || *busy}
                                class="px-4 py-2 bg-slate-100 text-slate-600 rounded-xl hover:bg-slate-200 text-sm font-medium transition-colors disabled:opacity-50"
                            >
                                {"Invia Test"}
                            </button>
                        </div>
                    </div>
                    <button
                        type="submit"
                        disabled={*busy}
                        class="px-6 py-2.5 bg-emerald-600 text-white rounded-xl hover:bg-emerald-700 font-medium shadow-sm hover:shadow-md transition-all disabled:opacity-50"
                    >
                        { if *busy { "Salvataggio..." } else { "Salva Configurazione" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
