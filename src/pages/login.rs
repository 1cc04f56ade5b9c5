use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::use_api;
use crate::auth::{login, use_session};
use crate::components::bind_input;
use crate::components::icons::{icon_check_circle, icon_lock, icon_mail, icon_user, icon_wallet};
use crate::components::password_meter::PasswordMeter;

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    SignIn,
    Forgot,
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let view = use_state(|| View::SignIn);

    let to_forgot = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Forgot))
    };
    let to_sign_in = {
        let view = view.clone();
        Callback::from(move |_: ()| view.set(View::SignIn))
    };

    html! {
        <div class="min-h-screen bg-slate-50 flex items-center justify-center p-4">
            <div class="max-w-md w-full bg-white rounded-2xl shadow-xl p-8 border border-slate-100">
                <div class="flex flex-col items-center mb-8">
                    <div class="bg-emerald-600 p-3 rounded-xl text-white mb-4 shadow-lg shadow-emerald-200">
                        { icon_wallet() }
                    </div>
                    <h1 class="text-2xl font-bold text-slate-800">{"SpeseCasa"}</h1>
                    <p class="text-slate-500">{"Accedi per gestire le tue finanze"}</p>
                </div>
                {
                    match *view {
                        View::SignIn => html! { <SignInForm on_forgot={to_forgot} /> },
                        View::Forgot => html! { <ForgotForm on_back={to_sign_in} /> },
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SignInFormProps {
    on_forgot: Callback<MouseEvent>,
}

#[function_component(SignInForm)]
fn sign_in_form(props: &SignInFormProps) -> Html {
    let api = use_api();
    let session = use_session();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_submit = {
        let api = api.clone();
        let session = session.clone();
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            busy.set(true);
            let api = api.clone();
            let session = session.clone();
            let username_val = (*username).clone();
            let password_val = (*password).clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                if login(&api, session, &username_val, &password_val)
                    .await
                    .is_err()
                {
                    error.set(Some("Credenziali non valide".to_string()));
                }
                busy.set(false);
            });
        })
    };

    html! {
        <>
            if let Some(message) = &*error {
                <div class="bg-rose-50 text-rose-600 p-3 rounded-lg text-sm mb-6 text-center border border-rose-100">
                    { message.clone() }
                </div>
            }
            <form onsubmit={on_submit} class="space-y-6">
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-2">{"Username"}</label>
                    <div class="relative">
                        <span class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none text-slate-400">{ icon_user() }</span>
                        <input
                            type="text"
                            required=true
                            placeholder="admin"
                            value={(*username).clone()}
                            oninput={bind_input(username.clone())}
                            class="pl-10 w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2.5"
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-2">{"Password"}</label>
                    <div class="relative">
                        <span class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none text-slate-400">{ icon_lock() }</span>
                        <input
                            type="password"
                            required=true
                            placeholder="••••••••"
                            value={(*password).clone()}
                            oninput={bind_input(password.clone())}
                            class="pl-10 w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2.5"
                        />
                    </div>
                    <div class="flex justify-end mt-2">
                        <button type="button" onclick={props.on_forgot.clone()} class="text-sm text-emerald-600 hover:text-emerald-500 font-medium">
                            {"Password dimenticata?"}
                        </button>
                    </div>
                </div>
                <button
                    type="submit"
                    disabled={*busy}
                    class="w-full bg-emerald-600 text-white py-2.5 rounded-xl font-medium hover:bg-emerald-700 transition-colors shadow-md hover:shadow-lg disabled:opacity-50"
                >
                    { if *busy { "Accesso..." } else { "Accedi" } }
                </button>
            </form>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ForgotFormProps {
    on_back: Callback<()>,
}

#[function_component(ForgotForm)]
fn forgot_form(props: &ForgotFormProps) -> Html {
    let api = use_api();
    let email = use_state(String::new);
    let sent = use_state(|| false);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_submit = {
        let api = api.clone();
        let email = email.clone();
        let sent = sent.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            error.set(None);
            busy.set(true);
            let api = api.clone();
            let email_val = (*email).clone();
            let sent = sent.clone();
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match api
                    .post_empty::<serde_json::Value>(
                        "/config/forgot-password",
                        &[("email", email_val)],
                    )
                    .await
                {
                    Ok(_) => sent.set(true),
                    Err(_) => {
                        error.set(Some("Si è verificato un errore. Riprova più tardi.".to_string()))
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    if *sent {
        return html! {
            <div class="text-center">
                <div class="mx-auto flex items-center justify-center h-12 w-12 rounded-full bg-emerald-100 mb-4 text-emerald-600">
                    { icon_check_circle() }
                </div>
                <h3 class="text-lg font-medium text-slate-900">{"Controlla la tua email"}</h3>
                <p class="mt-2 text-sm text-slate-500">
                    {"Se l'indirizzo email è registrato, riceverai un link per reimpostare la password."}
                </p>
                <button onclick={on_back} class="mt-6 w-full py-2.5 px-4 rounded-xl shadow-sm text-sm font-medium text-white bg-emerald-600 hover:bg-emerald-700 transition-all">
                    {"Torna al login"}
                </button>
            </div>
        };
    }

    html! {
        <>
            <h2 class="text-lg font-semibold text-slate-800 mb-2">{"Password dimenticata?"}</h2>
            <p class="text-sm text-slate-500 mb-6">{"Inserisci la tua email e ti invieremo un link per reimpostarla."}</p>
            if let Some(message) = &*error {
                <div class="bg-rose-50 text-rose-600 p-3 rounded-lg text-sm mb-4 text-center border border-rose-100">
                    { message.clone() }
                </div>
            }
            <form onsubmit={on_submit} class="space-y-6">
                <div>
                    <label class="block text-sm font-medium text-slate-700 mb-2">{"Indirizzo Email"}</label>
                    <div class="relative">
                        <span class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none text-slate-400">{ icon_mail() }</span>
                        <input
                            type="email"
                            required=true
                            placeholder="nome@esempio.com"
                            value={(*email).clone()}
                            oninput={bind_input(email.clone())}
                            class="pl-10 w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2.5"
                        />
                    </div>
                </div>
                <button
                    type="submit"
                    disabled={*busy}
                    class="w-full bg-emerald-600 text-white py-2.5 rounded-xl font-medium hover:bg-emerald-700 transition-colors shadow-md disabled:opacity-50"
                >
                    { if *busy { "Invio..." } else { "Invia link di reset" } }
                </button>
                <button type="button" onclick={on_back} class="w-full text-sm text-slate-500 hover:text-slate-700 font-medium">
                    {"Torna al login"}
                </button>
            </form>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResetPasswordPageProps {
    pub token: String,
    pub on_done: Callback<()>,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page(props: &ResetPasswordPageProps) -> Html {
    let api = use_api();
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let done = use_state(|| false);
    let busy = use_state(|| false);

    let on_submit = {
        let api = api.clone();
        let token = props.token.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let done = done.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *new_password != *confirm_password {
                error.set(Some("Le password non coincidono".to_string()));
                return;
            }
            error.set(None);
            busy.set(true);
            let api = api.clone();
            let token = token.clone();
            let password_val = (*new_password).clone();
            let error = error.clone();
            let done = done.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match api
                    .post_empty::<serde_json::Value>(
                        "/config/reset-password",
                        &[("token", token), ("new_password", password_val)],
                    )
                    .await
                {
                    Ok(_) => done.set(true),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let on_done = {
        let on_done = props.on_done.clone();
        Callback::from(move |_| on_done.emit(()))
    };

    html! {
        <div class="min-h-screen bg-slate-50 flex items-center justify-center p-4">
            <div class="max-w-md w-full bg-white rounded-2xl shadow-xl p-8 border border-slate-100">
                <div class="flex flex-col items-center mb-8">
                    <div class="bg-emerald-600 p-3 rounded-xl text-white mb-4 shadow-lg shadow-emerald-200">
                        { icon_wallet() }
                    </div>
                    <h1 class="text-2xl font-bold text-slate-800">{"Reimposta la password"}</h1>
                </div>

                if *done {
                    <div class="text-center">
                        <div class="mx-auto flex items-center justify-center h-12 w-12 rounded-full bg-emerald-100 mb-4 text-emerald-600">
                            { icon_check_circle() }
                        </div>
                        <h3 class="text-lg font-medium text-slate-900">{"Password aggiornata"}</h3>
                        <p class="mt-2 text-sm text-slate-500">{"Ora puoi accedere con la nuova password."}</p>
                        <button onclick={on_done} class="mt-6 w-full py-2.5 px-4 rounded-xl shadow-sm text-sm font-medium text-white bg-emerald-600 hover:bg-emerald-700 transition-all">
                            {"Vai al login"}
                        </button>
                    </div>
                } else {
                    <>
                        if let Some(message) = &*error {
                            <div class="bg-rose-50 text-rose-600 p-3 rounded-lg text-sm mb-4 text-center border border-rose-100">
                                { message.clone() }
                            </div>
                        }
                        <form onsubmit={on_submit} class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-1">{"Nuova Password"}</label>
                                <input
                                    type="password"
                                    required=true
                                    value={(*new_password).clone()}
                                    oninput={bind_input(new_password.clone())}
                                    class="w-full rounded-xl border border-slate-200 bg-slate-50 px-4 py-2.5 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500 focus:bg-white transition-all"
                                />
                                <PasswordMeter password={(*new_password).clone()} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-1">{"Conferma Password"}</label>
                                <input
                                    type="password"
                                    required=true
                                    value={(*confirm_password).clone()}
                                    oninput={bind_input(confirm_password.clone())}
                                    class="w-full rounded-xl border border-slate-200 bg-slate-50 px-4 py-2.5 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500 focus:bg-white transition-all"
                                />
                            </div>
                            <button
                                type="submit"
                                disabled={*busy}
                                class="w-full bg-emerald-600 text-white py-2.5 rounded-xl font-medium hover:bg-emerald-700 transition-colors shadow-md disabled:opacity-50"
                            >
                                { if *busy { "Aggiornamento..." } else { "Reimposta password" } }
                            </button>
                        </form>
                    </>
                }
            </div>
        </div>
    }
}
