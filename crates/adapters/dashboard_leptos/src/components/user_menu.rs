//! Signed-in user chip with its dropdown and the logout button.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use rackdash_app::config::ClientConfig;
use rackdash_app::services::auth_service::AuthService;
use rackdash_domain::controls::{ButtonPhase, LOGGING_OUT_LABEL, MenuState};

use crate::api::use_transport;
use crate::browser;

#[component]
pub fn UserMenu() -> impl IntoView {
    let transport = use_transport();
    let login_path = expect_context::<Arc<ClientConfig>>().session.login_path.clone();

    let user = LocalResource::new({
        let transport = transport.clone();
        move || {
            let transport = transport.clone();
            async move { AuthService::new(transport).current_user().await }
        }
    });
    // Generic labels until (and unless) the profile loads.
    let labels = move || user.get().flatten().unwrap_or_default();

    let menus = expect_context::<RwSignal<MenuState>>();
    let (phase, set_phase) = signal(ButtonPhase::Idle);

    let logout = move |_| {
        if phase.get_untracked().is_busy() {
            return;
        }
        set_phase.set(ButtonPhase::Busy);
        let transport = transport.clone();
        let login_path = login_path.clone();
        spawn_local(async move {
            if let Err(err) = AuthService::new(transport).logout().await {
                tracing::warn!(error = %err, "logout failed");
            }
            browser::redirect(&login_path);
        });
    };

    view! {
        <div class="user-menu dropdown">
            <button class="user-chip" on:click=move |_| menus.update(MenuState::toggle_user)>
                {move || labels().name}
            </button>
            <Show when=move || menus.with(MenuState::is_user_open)>
                <div class="user-dropdown">
                    <p class="user-full-name">{move || labels().full_name}</p>
                    <p class="user-email">{move || labels().email}</p>
                    <p class="user-role">{move || labels().role}</p>
                    <button
                        class="btn btn-logout"
                        on:click=logout.clone()
                        disabled=move || phase.get().is_busy()
                    >
                        {move || phase.get().label("Log out", LOGGING_OUT_LABEL)}
                    </button>
                </div>
            </Show>
        </div>
    }
}
