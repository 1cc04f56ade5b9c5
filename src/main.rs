mod api;
mod auth;
mod bus;
mod components;
mod format;
mod guard;
mod models;
mod pages;
mod stats;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::auth::{stored_token, Session, SessionHandle};
use crate::bus::{Bus, BusHandle};
use crate::components::layout::Layout;
use crate::components::toast::{Toast, ToastHandle, ToastHost};
use crate::guard::Gate;
use crate::pages::budgets::BudgetsPage;
use crate::pages::categories::CategoriesPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::families::FamiliesPage;
use crate::pages::goals::GoalsPage;
use crate::pages::login::{LoginPage, ResetPasswordPage};
use crate::pages::movements::MovementsPage;
use crate::pages::recurring::RecurringPage;
use crate::pages::settings::SettingsPage;
use crate::pages::users::UsersPage;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Dashboard,
    Movements,
    Budgets,
    Recurring,
    Categories,
    Goals,
    Users,
    Families,
    Settings,
}

impl Page {
    pub fn requires_superuser(self) -> bool {
        matches!(self, Page::Users | Page::Families)
    }
}

// password-reset emails deep-link back with ?token=...
fn reset_token_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("token").filter(|token| !token.is_empty())
}

#[function_component(App)]
fn app() -> Html {
    let api = ApiClient::default();
    let session: SessionHandle = use_state(Session::boot);
    let bus: BusHandle = use_state(|| Bus::new(format::today()));
    let toast: ToastHandle = use_state(|| None::<Toast>);
    let page = use_state(|| Page::Dashboard);
    let reset_token = use_state(reset_token_from_url);

    // resolve a persisted token into a user on startup
    {
        let api = api.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                if stored_token().is_some() {
                    spawn_local(async move {
                        auth::restore_session(&api, session).await;
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_select = {
        let page = page.clone();
        Callback::from(move |next: Page| page.set(next))
    };

    let gate = guard::evaluate(&session, page.requires_superuser());

    let body = if let Some(token) = (*reset_token).clone() {
        let reset_token = reset_token.clone();
        html! {
            <ResetPasswordPage
                token={token}
                on_done={Callback::from(move |_| reset_token.set(None))}
            />
        }
    } else {
        match gate {
            Gate::Loading => html! {
                <div class="min-h-screen flex items-center justify-center bg-slate-50 text-slate-400">
                    {"Caricamento sessione..."}
                </div>
            },
            Gate::RedirectLogin => html! { <LoginPage /> },
            Gate::RedirectHome | Gate::Allow => {
                // a denied privileged page falls back to the dashboard
                let effective = if gate == Gate::RedirectHome {
                    Page::Dashboard
                } else {
                    *page
                };
                let content = match effective {
                    Page::Dashboard => html! { <DashboardPage /> },
                    Page::Movements => html! { <MovementsPage /> },
                    Page::Budgets => html! { <BudgetsPage /> },
                    Page::Recurring => html! { <RecurringPage /> },
                    Page::Categories => html! { <CategoriesPage /> },
                    Page::Goals => html! { <GoalsPage /> },
                    Page::Users => html! { <UsersPage /> },
                    Page::Families => html! { <FamiliesPage /> },
                    Page::Settings => html! { <SettingsPage /> },
                };
                html! {
                    <Layout active={effective} on_select={on_select}>
                        { content }
                    </Layout>
                }
            }
        }
    };

    html! {
        <ContextProvider<ApiClient> context={api}>
            <ContextProvider<SessionHandle> context={session.clone()}>
                <ContextProvider<BusHandle> context={bus.clone()}>
                    <ContextProvider<ToastHandle> context={toast.clone()}>
                        { body }
                        <ToastHost />
                    </ContextProvider<ToastHandle>>
                </ContextProvider<BusHandle>>
            </ContextProvider<SessionHandle>>
        </ContextProvider<ApiClient>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
