//! Host detail page: one host, projected like its card.

use chrono::Local;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use rackdash_app::services::host_service::{HostService, LOAD_HOST_FAILED};

use crate::api::use_transport;
use crate::components::{HostSpecs, Loading, PowerBadge};

/// Host detail page.
#[component]
pub fn HostDetail() -> impl IntoView {
    let params = use_params_map();
    let management_ip = move || params.read().get("ip").unwrap_or_default();
    let transport = use_transport();

    let host = LocalResource::new(move || {
        let service = HostService::new(transport.clone());
        let management_ip = management_ip();
        async move {
            service
                .get(&management_ip, &Local)
                .await
                .map_err(|err| err.user_message(LOAD_HOST_FAILED))
        }
    });

    view! {
        <div>
            <h1>"Host Detail"</h1>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    host.read().as_ref().map(|result| match result {
                        Ok(host_view) => {
                            let status = host_view.power.clone();
                            view! {
                                <div class="card">
                                    <h2>{host_view.name.clone()}</h2>
                                    <PowerBadge status=Signal::stored(status)/>
                                    <p><strong>"Management IP: "</strong> {host_view.management_ip.clone()}</p>
                                    <p><strong>"Management type: "</strong> {host_view.management_type.clone()}</p>
                                    <p><strong>"Vendor: "</strong> {host_view.vendor.clone()}</p>
                                    <p><strong>"Form factor: "</strong> {host_view.form_factor.clone()}</p>
                                    <HostSpecs host=host_view.clone()/>
                                </div>
                            }
                            .into_any()
                        }
                        Err(message) => view! {
                            <p class="error">{message.clone()}</p>
                        }
                        .into_any(),
                    })
                }}
            </Suspense>

            <p><A href="/">"\u{2190} Back to Dashboard"</A></p>
        </div>
    }
}
