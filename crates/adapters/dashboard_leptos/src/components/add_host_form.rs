//! Add-host admin form with its management-type dropdown.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rackdash_app::services::host_service::{ADD_HOST_FAILED, HostService};
use rackdash_domain::controls::{AdminForm, AdminPanel, MenuState, PROCESSING_LABEL};

use super::Spinner;
use crate::api::use_transport;
use crate::browser;

const FORM: AdminForm = AdminForm::AddHost;

/// Enrolls a host. A success reloads the page so the new card appears with
/// its freshly discovered specs.
#[component]
pub fn AddHostForm(
    panel: RwSignal<AdminPanel>,
    /// Management-type labels offered by the dropdown.
    #[prop(into)]
    management_types: Signal<Vec<String>>,
) -> impl IntoView {
    let transport = use_transport();
    let menus = expect_context::<RwSignal<MenuState>>();

    let submitting = move || panel.with(|p| p.is_submitting(FORM));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        panel.update(|p| started = p.begin_submit(FORM));
        if !started {
            return;
        }
        menus.update(MenuState::close_management_type);
        let draft = panel.with_untracked(|p| p.draft.clone());
        let service = HostService::new(transport.clone());
        spawn_local(async move {
            match service.add_host(&draft).await {
                Ok(()) => browser::reload(),
                Err(err) => {
                    tracing::warn!(error = %err, "host enrollment failed");
                    panel.update(|p| p.fail(FORM, err.user_message(ADD_HOST_FAILED)));
                }
            }
        });
    };

    let cancel = move |_| {
        panel.update(|p| p.close(FORM));
        menus.update(MenuState::close_management_type);
    };

    view! {
        <Show when=move || panel.with(|p| p.is_open(FORM))>
            <form class="admin-form" id="hostForm" on:submit=on_submit.clone()>
                {move || {
                    panel
                        .with(|p| p.error(FORM).map(str::to_string))
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
                <label>
                    "Management IP"
                    <input
                        type="text"
                        name="management_ip"
                        placeholder="192.168.1.10"
                        prop:value=move || panel.with(|p| p.draft.address.clone())
                        on:input=move |ev| {
                            let address = event_target_value(&ev);
                            panel.update(|p| p.draft.address = address);
                        }
                    />
                </label>
                <div class="dropdown management-type">
                    <button
                        type="button"
                        class="dropdown-toggle"
                        on:click=move |_| menus.update(MenuState::toggle_management_type)
                    >
                        {move || panel.with(|p| p.draft.management_type_label().to_string())}
                    </button>
                    <Show when=move || menus.with(MenuState::is_management_type_open)>
                        <ul class="dropdown-menu">
                            <For
                                each=move || management_types.get()
                                key=Clone::clone
                                children=move |label: String| {
                                    let caption = label.clone();
                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                on:click=move |_| {
                                                    let label = label.clone();
                                                    panel.update(|p| p.draft.management_type = Some(label));
                                                    menus.update(MenuState::close_management_type);
                                                }
                                            >
                                                {caption}
                                            </button>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        <Show when=submitting>
                            <Spinner/>
                        </Show>
                        {move || if submitting() { PROCESSING_LABEL } else { "Add Host" }}
                    </button>
                    <button type="button" class="btn" on:click=cancel>"Cancel"</button>
                </div>
            </form>
        </Show>
    }
}
