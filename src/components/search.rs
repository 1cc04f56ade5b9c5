use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{use_api, use_fetch_seq};
use crate::components::icons::{
    icon_repeat, icon_search, icon_tag, icon_trending_down, icon_trending_up, icon_x,
};
use crate::format;
use crate::models::{MovementType, SearchResults};
use crate::Page;

// the two-character floor: anything shorter never hits the network
pub fn should_search(query: &str) -> bool {
    query.chars().count() >= 2
}

const DEBOUNCE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct GlobalSearchProps {
    pub on_select: Callback<Page>,
}

/// Query-as-you-type overlay over the unified search endpoint. One
/// request per quiet period; stale responses are discarded.
#[function_component(GlobalSearch)]
pub fn global_search(props: &GlobalSearchProps) -> Html {
    let api = use_api();
    let seq = use_fetch_seq();
    let open = use_state(|| false);
    let query = use_state(String::new);
    let results = use_state(|| None::<SearchResults>);
    let loading = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);
    let input_ref = use_node_ref();

    // focus the input when the overlay opens
    {
        let input_ref = input_ref.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                        let _ = input.focus();
                    }
                }
                || ()
            },
            *open,
        );
    }

    // debounce: every keystroke replaces the pending timer
    {
        let api = api.clone();
        let seq = seq.clone();
        let results = results.clone();
        let loading = loading.clone();
        let pending = pending.clone();
        use_effect_with_deps(
            move |query: &String| {
                pending.borrow_mut().take();
                if !should_search(query) {
                    results.set(None);
                    loading.set(false);
                } else {
                    let query = query.clone();
                    let timer = Timeout::new(DEBOUNCE_MS, move || {
                        loading.set(true);
                        let ticket = seq.issue();
                        spawn_local(async move {
                            let outcome = api
                                .get::<SearchResults>("/search", &[("q", query.clone())])
                                .await;
                            if !seq.is_current(ticket) {
                                return;
                            }
                            match outcome {
                                Ok(payload) => results.set(Some(payload)),
                                Err(err) => {
                                    web_sys::console::error_1(
                                        &format!("search failed: {}", err).into(),
                                    );
                                }
                            }
                            loading.set(false);
                        });
                    });
                    *pending.borrow_mut() = Some(timer);
                }
                move || {
                    pending.borrow_mut().take();
                }
            },
            (*query).clone(),
        );
    }

    let close = {
        let open = open.clone();
        let query = query.clone();
        let results = results.clone();
        Callback::from(move |_: ()| {
            open.set(false);
            query.set(String::new());
            results.set(None);
        })
    };

    let on_open = {
        let open = open.clone();
        Callback::from(move |_| open.set(true))
    };
    let on_close_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_keydown = {
        let close = close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                close.emit(());
            }
        })
    };
    let on_query = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };
    let navigate = |page: Page| {
        let close = close.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| {
            close.emit(());
            on_select.emit(page);
        })
    };

    html! {
        <>
            <button onclick={on_open} title="Cerca" class="p-2 text-slate-600 hover:bg-slate-100 rounded-lg transition-colors">
                { icon_search() }
            </button>

            if *open {
                <div class="fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-start justify-center pt-20 px-4" onkeydown={on_keydown}>
                    <div class="bg-white rounded-2xl shadow-2xl w-full max-w-2xl max-h-[600px] flex flex-col">
                        <div class="p-4 border-b border-slate-200">
                            <div class="relative">
                                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-slate-400">{ icon_search() }</span>
                                <input
                                    ref={input_ref.clone()}
                                    type="text"
                                    value={(*query).clone()}
                                    oninput={on_query}
                                    placeholder="Cerca movimenti, categorie, spese ricorrenti..."
                                    class="w-full pl-10 pr-10 py-3 rounded-lg border border-slate-200 focus:border-emerald-500 focus:ring-2 focus:ring-emerald-500 text-lg"
                                />
                                <button onclick={on_close_click} class="absolute right-3 top-1/2 -translate-y-1/2 text-slate-400 hover:text-slate-600">
                                    { icon_x() }
                                </button>
                            </div>
                        </div>

                        <div class="flex-1 overflow-y-auto p-4">
                            if *loading {
                                <div class="text-center py-8 text-slate-500">{"Ricerca in corso..."}</div>
                            } else if !should_search(&query) {
                                <div class="text-center py-8 text-slate-400">{"Digita almeno 2 caratteri per cercare"}</div>
                            } else if let Some(found) = &*results {
                                if found.total_results == 0 {
                                    <div class="text-center py-8 text-slate-400">
                                        { format!("Nessun risultato trovato per \"{}\"", *query) }
                                    </div>
                                } else {
                                    <div class="space-y-6">
                                        if !found.results.movements.is_empty() {
                                            <div>
                                                <h3 class="text-sm font-semibold text-slate-500 uppercase mb-2 flex items-center gap-2">
                                                    { icon_trending_down() }
                                                    { format!("Movimenti ({})", found.results.movements.len()) }
                                                </h3>
                                                <div class="space-y-1">
                                                    { for found.results.movements.iter().map(|movement| {
                                                        let is_income = movement.kind == MovementType::Income;
                                                        html! {
                                                            <button onclick={navigate(Page::Movements)} class="w-full text-left p-3 rounded-lg hover:bg-slate-50 transition-colors flex items-center justify-between">
                                                                <div class="flex items-center gap-3">
                                                                    <div class={if is_income { "p-2 rounded-full bg-emerald-100 text-emerald-600" } else { "p-2 rounded-full bg-rose-100 text-rose-600" }}>
                                                                        { if is_income { icon_trending_up() } else { icon_trending_down() } }
                                                                    </div>
                                                                    <div>
                                                                        <p class="font-medium text-slate-800">{ &movement.category }</p>
                                                                        <p class="text-xs text-slate-500">
                                                                            { format::date_medium(movement.date) }
                                                                            { movement.description.as_ref().map(|d| format!(" • {}", d)).unwrap_or_default() }
                                                                        </p>
                                                                    </div>
                                                                </div>
                                                                <span class={if is_income { "font-bold text-emerald-600" } else { "font-bold text-slate-700" }}>
                                                                    { if is_income { format::eur(movement.amount) } else { format!("-{}", format::eur(movement.amount)) } }
                                                                </span>
                                                            </button>
                                                        }
                                                    }) }
                                                </div>
                                            </div>
                                        }
                                        if !found.results.categories.is_empty() {
                                            <div>
                                                <h3 class="text-sm font-semibold text-slate-500 uppercase mb-2 flex items-center gap-2">
                                                    { icon_tag() }
                                                    { format!("Categorie ({})", found.results.categories.len()) }
                                                </h3>
                                                <div class="space-y-1">
                                                    { for found.results.categories.iter().map(|category| html! {
                                                        <button onclick={navigate(Page::Categories)} class="w-full text-left p-3 rounded-lg hover:bg-slate-50 transition-colors flex items-center gap-3">
                                                            <div class="p-2 bg-blue-100 text-blue-600 rounded-full">{ icon_tag() }</div>
                                                            <span class="font-medium text-slate-800">{ &category.name }</span>
                                                        </button>
                                                    }) }
                                                </div>
                                            </div>
                                        }
                                        if !found.results.recurring_expenses.is_empty() {
                                            <div>
                                                <h3 class="text-sm font-semibold text-slate-500 uppercase mb-2 flex items-center gap-2">
                                                    { icon_repeat() }
                                                    { format!("Spese Ricorrenti ({})", found.results.recurring_expenses.len()) }
                                                </h3>
                                                <div class="space-y-1">
                                                    { for found.results.recurring_expenses.iter().map(|recurring| html! {
                                                        <button onclick={navigate(Page::Recurring)} class="w-full text-left p-3 rounded-lg hover:bg-slate-50 transition-colors flex items-center justify-between">
                                                            <div class="flex items-center gap-3">
                                                                <div class="p-2 bg-purple-100 text-purple-600 rounded-full">{ icon_repeat() }</div>
                                                                <div>
                                                                    <p class="font-medium text-slate-800">{ &recurring.name }</p>
                                                                    <p class="text-xs text-slate-500">{ &recurring.category }</p>
                                                                </div>
                                                            </div>
                                                            <span class="font-bold text-slate-700">{ format::eur(recurring.amount) }</span>
                                                        </button>
                                                    }) }
                                                </div>
                                            </div>
                                        }
                                    </div>
                                }
                            }
                        </div>

                        <div class="p-3 border-t border-slate-200 bg-slate-50 text-xs text-slate-500 flex items-center justify-between">
                            <span>{"Premi ESC per chiudere"}</span>
                            if let Some(found) = &*results {
                                if found.total_results > 0 {
                                    <span>{ format!("{} risultati trovati", found.total_results) }</span>
                                }
                            }
                        </div>
                    </div>
                </div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::should_search;

    #[test]
    fn queries_below_two_characters_never_fire() {
        assert!(!should_search(""));
        assert!(!should_search("a"));
        assert!(should_search("af"));
        assert!(should_search("affitto"));
        // multi-byte input counts characters, not bytes
        assert!(!should_search("è"));
        assert!(should_search("èè"));
    }
}
