//! One banner for every mutating operation, instead of per-page ad hoc
//! error handling.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons::{icon_alert_circle, icon_check_circle, icon_x};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub serial: u64,
}

pub type ToastHandle = UseStateHandle<Option<Toast>>;

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("toast context not mounted")
}

fn show(handle: &ToastHandle, kind: ToastKind, message: String) {
    let serial = handle.as_ref().map(|toast| toast.serial + 1).unwrap_or(1);
    handle.set(Some(Toast {
        kind,
        message,
        serial,
    }));
}

pub fn show_error(handle: &ToastHandle, message: impl Into<String>) {
    show(handle, ToastKind::Error, message.into());
}

pub fn show_success(handle: &ToastHandle, message: impl Into<String>) {
    show(handle, ToastKind::Success, message.into());
}

#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toast = use_toast();

    // auto-dismiss, unless a newer toast replaced this one in the meantime
    {
        let toast = toast.clone();
        let serial_dep = toast.as_ref().map(|t| t.serial);
        use_effect_with_deps(
            move |serial: &Option<u64>| {
                let timer = serial.map(|serial| {
                    let toast = toast.clone();
                    Timeout::new(4_000, move || {
                        if toast.as_ref().map(|t| t.serial) == Some(serial) {
                            toast.set(None);
                        }
                    })
                });
                move || drop(timer)
            },
            serial_dep,
        );
    }

    let Some(current) = (*toast).clone() else {
        return html! {};
    };

    let (banner_class, icon) = match current.kind {
        ToastKind::Success => (
            "bg-emerald-50 text-emerald-800 border-emerald-200",
            icon_check_circle(),
        ),
        ToastKind::Error => (
            "bg-rose-50 text-rose-800 border-rose-200",
            icon_alert_circle(),
        ),
    };
    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    html! {
        <div class="fixed top-20 right-6 z-[70] max-w-sm w-full">
            <div class={format!("flex items-start space-x-3 p-4 rounded-xl border shadow-lg {}", banner_class)}>
                <span class="shrink-0 mt-0.5">{ icon }</span>
                <p class="text-sm flex-1">{ current.message }</p>
                <button onclick={on_dismiss} class="shrink-0 opacity-60 hover:opacity-100 transition-opacity">
                    { icon_x() }
                </button>
            </div>
        </div>
    }
}
