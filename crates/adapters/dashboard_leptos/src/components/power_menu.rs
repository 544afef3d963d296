//! Per-host power dropdown.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rackdash_app::services::host_service::{HostService, POWER_FAILED};
use rackdash_domain::controls::{MenuState, PowerMenuState};
use rackdash_domain::power::PowerStatus;

use crate::api::use_transport;

/// Power actions of one host.
///
/// While an action runs every button is disabled and the clicked one reads
/// "Processing...". A success hands the new status to `on_changed` and
/// closes the menus; a failure shows inline and leaves the status alone.
#[component]
pub fn PowerMenu(
    management_ip: String,
    /// Action labels, ordered by code.
    #[prop(into)]
    actions: Signal<Vec<String>>,
    #[prop(into)] on_changed: Callback<PowerStatus>,
) -> impl IntoView {
    let menus = expect_context::<RwSignal<MenuState>>();
    let transport = use_transport();
    let state = RwSignal::new(PowerMenuState::default());
    let management_ip = StoredValue::new(management_ip);

    let is_open =
        move || menus.with(|m| management_ip.with_value(|ip| m.is_power_open(ip)));

    let toggle = move |_| {
        state.update(PowerMenuState::reset);
        management_ip.with_value(|ip| menus.update(|m| m.toggle_power(ip)));
    };

    let run = move |action: String| {
        if state.with_untracked(PowerMenuState::is_busy) {
            return;
        }
        state.update(|s| s.begin(action.clone()));
        let service = HostService::new(transport.clone());
        let ip = management_ip.get_value();
        spawn_local(async move {
            match service.power(&ip, &action, &Local).await {
                Ok(status) => {
                    on_changed.run(status);
                    menus.update(MenuState::close_all);
                }
                Err(err) => {
                    tracing::warn!(management_ip = %ip, action = %action, error = %err, "power action failed");
                    state.update(|s| s.fail(err.user_message(POWER_FAILED)));
                }
            }
            state.update(PowerMenuState::finish);
        });
    };

    view! {
        <div class="power-menu dropdown">
            <button class="btn power-toggle" on:click=toggle>"Power"</button>
            <Show when=is_open>
                <div class="power-options">
                    <For
                        each=move || actions.get()
                        key=Clone::clone
                        children=move |action: String| {
                            let caption = action.clone();
                            let run = run.clone();
                            view! {
                                <button
                                    class="power-option"
                                    disabled=move || state.with(PowerMenuState::is_busy)
                                    on:click=move |_| run(action.clone())
                                >
                                    {move || state.with(|s| s.button_label(&caption).to_string())}
                                </button>
                            }
                        }
                    />
                    {move || {
                        state
                            .with(|s| s.error().map(str::to_string))
                            .map(|message| view! { <p class="power-error">{message}</p> })
                    }}
                </div>
            </Show>
        </div>
    }
}
