//! Toast notifications for failures that have no inline place to show,
//! such as a refused host removal.

use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 5000;

#[derive(Debug, Clone)]
struct Toast {
    id: u32,
    text: String,
}

/// Handle for pushing toasts, available through [`use_toasts`].
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toasts {
    /// Show an error toast. It dismisses itself after a few seconds.
    pub fn error(&self, text: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.list.update(|list| {
            list.push(Toast {
                id,
                text: text.into(),
            });
        });

        let toasts = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            toasts.dismiss(id);
        });
    }

    fn dismiss(&self, id: u32) {
        self.list.update(|list| list.retain(|t| t.id != id));
    }
}

/// Access the toasts of the enclosing [`ToastContainer`].
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Provides the toast context and renders active toasts over `children`.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let toasts = Toasts {
        list: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-container" role="alert">
            <For
                each=move || toasts.list.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast toast-error">
                            <button class="toast-dismiss" on:click=move |_| toasts.dismiss(id)>
                                "\u{00D7}"
                            </button>
                            {toast.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
