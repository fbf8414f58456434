//! Toast hub: a context-provided dispatcher plus a fixed-position stack.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    pub fn alert_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "alert alert-success",
            ToastLevel::Error => "alert alert-error",
            ToastLevel::Info => "alert alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub level: ToastLevel,
    pub message: String,
}

/// Handle for raising toasts from anywhere below the provider.
#[derive(Clone, PartialEq)]
pub struct ToastDispatcher {
    push: Callback<(ToastLevel, String)>,
}

impl ToastDispatcher {
    pub fn success(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Error, message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push.emit((ToastLevel::Info, message.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let next_id = use_state(|| 0usize);

    let push = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();
        Callback::from(move |(level, message): (ToastLevel, String)| {
            let id = *next_id;
            next_id.set(id + 1);

            let mut queue = (*toasts).clone();
            queue.push(Toast { id, level, message });
            toasts.set(queue);

            let toasts = toasts.clone();
            Timeout::new(DISMISS_AFTER_MS, move || {
                let mut queue = (*toasts).clone();
                queue.retain(|toast| toast.id != id);
                toasts.set(queue);
            })
            .forget();
        })
    };

    let dispatcher = ToastDispatcher { push };

    html! {
        <ContextProvider<ToastDispatcher> context={dispatcher}>
            {props.children.clone()}
            <div class="toast toast-end z-50">
                { for toasts.iter().map(|toast| html! {
                    <div key={toast.id} class={toast.level.alert_class()}>
                        <span>{toast.message.clone()}</span>
                    </div>
                }) }
            </div>
        </ContextProvider<ToastDispatcher>>
    }
}

/// The toast dispatcher from context.
#[hook]
pub fn use_toaster() -> ToastDispatcher {
    use_context::<ToastDispatcher>().expect("ToastProvider must wrap any component raising toasts")
}
