//! Inventory page: admin toolbar, admin forms and the host grid.

use chrono::Local;
use leptos::prelude::*;
use rackdash_app::services::host_service::{HostService, LOAD_HOSTS_FAILED};
use rackdash_domain::controls::{AdminForm, AdminPanel, MenuState};

use crate::api::use_transport;
use crate::components::{AddHostForm, HostList, Loading, UploadIsoForm};

/// Dashboard page.
#[component]
pub fn Dashboard() -> impl IntoView {
    let transport = use_transport();
    let menus = expect_context::<RwSignal<MenuState>>();
    let panel = RwSignal::new(AdminPanel::default());

    let hosts = LocalResource::new({
        let transport = transport.clone();
        move || {
            let service = HostService::new(transport.clone());
            async move {
                service
                    .list(&Local)
                    .await
                    .map_err(|err| err.user_message(LOAD_HOSTS_FAILED))
            }
        }
    });

    let power_actions = LocalResource::new({
        let transport = transport.clone();
        move || {
            let service = HostService::new(transport.clone());
            async move {
                service.power_actions().await.unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "power actions unavailable");
                    Vec::new()
                })
            }
        }
    });
    let actions = Signal::derive(move || power_actions.get().unwrap_or_default());

    let management_types = LocalResource::new(move || {
        let service = HostService::new(transport.clone());
        async move {
            service.management_types().await.unwrap_or_else(|err| {
                tracing::warn!(error = %err, "management types unavailable");
                Vec::new()
            })
        }
    });
    let management_types = Signal::derive(move || management_types.get().unwrap_or_default());

    view! {
        <div class="dashboard">
            <div class="toolbar">
                <h1>"Hosts"</h1>
                <button
                    id="addHostTrigger"
                    class="btn"
                    on:click=move |_| {
                        menus.update(MenuState::close_management_type);
                        panel.update(|p| p.toggle(AdminForm::AddHost));
                    }
                >
                    "Add Host"
                </button>
                <button
                    id="uploadIsoTrigger"
                    class="btn"
                    on:click=move |_| {
                        menus.update(MenuState::close_management_type);
                        panel.update(|p| p.toggle(AdminForm::UploadIso));
                    }
                >
                    "Upload ISO"
                </button>
            </div>
            <AddHostForm panel management_types/>
            <UploadIsoForm panel/>
            <Suspense fallback=move || view! { <Loading message="Loading hosts\u{2026}"/> }>
                {move || {
                    hosts.read().as_ref().map(|result| match result {
                        Ok(list) => view! { <HostList initial=list.clone() actions/> }.into_any(),
                        Err(message) => view! { <p class="error">{message.clone()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
