use yew::prelude::*;

use crate::auth::{logout, use_session};
use crate::components::icons::{
    icon_chevron_down, icon_layout_grid, icon_list, icon_log_out, icon_pie_chart, icon_repeat,
    icon_settings, icon_tag, icon_target, icon_user, icon_users, icon_wallet,
};
use crate::components::quick_add::QuickAdd;
use crate::components::search::GlobalSearch;
use crate::Page;

struct NavEntry {
    label: &'static str,
    page: Page,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let session = use_session();
    let user_menu_open = use_state(|| false);

    let nav_entries = vec![
        NavEntry {
            label: "Dashboard",
            page: Page::Dashboard,
            icon: icon_layout_grid,
        },
        NavEntry {
            label: "Movimenti",
            page: Page::Movements,
            icon: icon_list,
        },
        NavEntry {
            label: "Budget",
            page: Page::Budgets,
            icon: icon_pie_chart,
        },
        NavEntry {
            label: "Ricorrenti",
            page: Page::Recurring,
            icon: icon_repeat,
        },
        NavEntry {
            label: "Categorie",
            page: Page::Categories,
            icon: icon_tag,
        },
        NavEntry {
            label: "Obiettivi",
            page: Page::Goals,
            icon: icon_target,
        },
    ];

    let toggle_user_menu = {
        let user_menu_open = user_menu_open.clone();
        Callback::from(move |_| user_menu_open.set(!*user_menu_open))
    };

    let menu_select = |page: Page| {
        let on_select = props.on_select.clone();
        let user_menu_open = user_menu_open.clone();
        Callback::from(move |_| {
            user_menu_open.set(false);
            on_select.emit(page);
        })
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| logout(&session))
    };

    let user = session.user.clone();
    let is_superuser = user.as_ref().map(|u| u.is_superuser).unwrap_or(false);

    html! {
        <div class="min-h-screen flex flex-col">
            <nav class="bg-white/80 backdrop-blur-md border-b border-slate-200 sticky top-0 z-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16">
                        <div class="flex items-center space-x-3">
                            <div class="bg-emerald-600 p-2 rounded-lg text-white">{ icon_wallet() }</div>
                            <span class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-emerald-600 to-teal-500">
                                {"SpeseCasa"}
                            </span>
                        </div>

                        <div class="flex items-center space-x-6">
                            <div class="hidden md:flex items-center space-x-2">
                                { for nav_entries.iter().map(|entry| {
                                    let is_active = entry.page == props.active;
                                    let class = if is_active {
                                        "flex items-center space-x-2 px-4 py-2 rounded-full transition-all duration-200 bg-emerald-600 text-white shadow-md shadow-emerald-200"
                                    } else {
                                        "flex items-center space-x-2 px-4 py-2 rounded-full transition-all duration-200 text-slate-600 hover:bg-white hover:shadow-sm"
                                    };
                                    let on_select = props.on_select.clone();
                                    let page = entry.page;
                                    html! {
                                        <button class={class} onclick={Callback::from(move |_| on_select.emit(page))}>
                                            { (entry.icon)() }
                                            <span class="font-medium text-sm">{ entry.label }</span>
                                        </button>
                                    }
                                }) }
                            </div>

                            <div class="flex items-center space-x-4 pl-6 border-l border-slate-200 relative">
                                <GlobalSearch on_select={props.on_select.clone()} />
                                <button onclick={toggle_user_menu} class="flex items-center space-x-2 text-slate-600 hover:text-emerald-600 transition-colors focus:outline-none">
                                    <div class="bg-slate-100 p-1.5 rounded-full">{ icon_user() }</div>
                                    <span class="text-sm font-medium hidden sm:block">
                                        { user.as_ref().map(|u| u.username.clone()).unwrap_or_default() }
                                    </span>
                                    { icon_chevron_down() }
                                </button>

                                if *user_menu_open {
                                    <div class="absolute top-full right-0 mt-2 w-48 bg-white rounded-xl shadow-lg border border-slate-100 py-1 z-50">
                                        if is_superuser {
                                            <button onclick={menu_select(Page::Users)} class="w-full flex items-center space-x-2 px-4 py-2 text-sm text-slate-600 hover:bg-slate-50 hover:text-emerald-600 text-left">
                                                { icon_users() }
                                                <span>{"Gestione Utenti"}</span>
                                            </button>
                                            <button onclick={menu_select(Page::Families)} class="w-full flex items-center space-x-2 px-4 py-2 text-sm text-slate-600 hover:bg-slate-50 hover:text-emerald-600 text-left">
                                                { icon_users() }
                                                <span>{"Gestione Famiglie"}</span>
                                            </button>
                                        }
                                        <button onclick={menu_select(Page::Settings)} class="w-full flex items-center space-x-2 px-4 py-2 text-sm text-slate-600 hover:bg-slate-50 hover:text-emerald-600 text-left">
                                            { icon_settings() }
                                            <span>{"Impostazioni"}</span>
                                        </button>
                                        <button onclick={on_logout} class="w-full flex items-center space-x-2 px-4 py-2 text-sm text-slate-600 hover:bg-rose-50 hover:text-rose-600 text-left">
                                            { icon_log_out() }
                                            <span>{"Esci"}</span>
                                        </button>
                                    </div>
                                }
                            </div>
                        </div>
                    </div>
                </div>
            </nav>

            <main class="flex-grow bg-slate-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    { for props.children.iter() }
                </div>
            </main>

            <QuickAdd />
        </div>
    }
}
