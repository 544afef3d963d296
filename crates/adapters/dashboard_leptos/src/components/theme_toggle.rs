//! Dark/light theme: persisted in `localStorage`, applied as the `dark` class
//! on `<html>`, and read by the logo.

use std::sync::Arc;

use leptos::prelude::*;
use rackdash_app::config::ClientConfig;
use rackdash_domain::theme::Theme;

use crate::browser;

/// The active theme, shared through context.
#[derive(Clone, Copy)]
pub struct ThemeState(RwSignal<Theme>);

impl ThemeState {
    pub fn get(self) -> Theme {
        self.0.get()
    }
}

fn apply(theme: Theme, storage_key: &str) {
    browser::set_root_class("dark", theme.is_dark());
    browser::store(storage_key, theme.as_str());
}

/// Resolve the initial theme (stored preference, then OS preference),
/// apply it, and provide it to the tree.
pub fn provide_theme(config: &ClientConfig) {
    let storage_key = config.theme.storage_key.clone();
    let stored = browser::stored(&storage_key);
    let theme = Theme::resolve(stored.as_deref(), browser::prefers_dark());
    browser::set_root_class("dark", theme.is_dark());
    tracing::debug!(%theme, "theme resolved");
    provide_context(ThemeState(RwSignal::new(theme)));
}

pub fn use_theme() -> ThemeState {
    expect_context::<ThemeState>()
}

/// Logo matching the active theme.
#[component]
pub fn Logo() -> impl IntoView {
    let theme = use_theme();
    let config = expect_context::<Arc<ClientConfig>>();
    let src = move || {
        if theme.get().is_dark() {
            config.theme.logo_dark.clone()
        } else {
            config.theme.logo_light.clone()
        }
    };

    view! { <img class="logo" src=src alt="rackdash"/> }
}

/// Button switching between light and dark; each click persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeState(theme) = use_theme();
    let storage_key = expect_context::<Arc<ClientConfig>>().theme.storage_key.clone();

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();
        apply(next, &storage_key);
        theme.set(next);
    };

    view! {
        <button class="theme-toggle" on:click=toggle title="Toggle theme">
            {move || theme.get().toggle_icon()}
        </button>
    }
}
