pub mod category_modal;
pub mod icons;
pub mod layout;
pub mod month_selector;
pub mod movement_card;
pub mod password_meter;
pub mod quick_add;
pub mod search;
pub mod toast;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

// the oninput/onchange plumbing every form field repeats
pub fn bind_input(state: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_select(state: UseStateHandle<String>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        state.set(select.value());
    })
}

pub fn bind_checkbox(state: UseStateHandle<bool>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.checked());
    })
}

// native confirmation prompt, the pattern used for every destructive action
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
