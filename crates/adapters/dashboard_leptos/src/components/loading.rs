use leptos::prelude::*;

/// Spinner with a caption, used as `Suspense` fallback and inside busy buttons.
#[component]
pub fn Loading(
    #[prop(default = "Loading\u{2026}".into(), into)] message: String,
) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="spinner"></span>
            <span>{message}</span>
        </div>
    }
}

/// Inline spinner shown next to a submitting form's button.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <span class="spinner spinner-inline" aria-hidden="true"></span> }
}
