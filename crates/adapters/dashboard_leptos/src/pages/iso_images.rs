//! Stored ISO images, with the upload form.

use leptos::prelude::*;
use rackdash_app::services::iso_service::{IsoService, LOAD_IMAGES_FAILED};
use rackdash_domain::controls::{AdminForm, AdminPanel};
use rackdash_domain::iso::IsoImageView;

use crate::api::use_transport;
use crate::components::{Loading, UploadIsoForm};

/// ISO images page.
#[component]
pub fn IsoImages() -> impl IntoView {
    let transport = use_transport();
    let panel = RwSignal::new(AdminPanel::default());

    let images = LocalResource::new(move || {
        let service = IsoService::new(transport.clone());
        async move {
            service
                .list()
                .await
                .map_err(|err| err.user_message(LOAD_IMAGES_FAILED))
        }
    });

    view! {
        <div>
            <div class="toolbar">
                <h1>"ISO Images"</h1>
                <button class="btn" on:click=move |_| panel.update(|p| p.toggle(AdminForm::UploadIso))>
                    "Upload ISO"
                </button>
            </div>
            <UploadIsoForm panel on_uploaded=move |()| images.refetch()/>
            <Suspense fallback=move || view! { <Loading message="Loading images\u{2026}"/> }>
                {move || {
                    images.read().as_ref().map(|result| match result {
                        Ok(list) => view! { <IsoTable images=list.clone()/> }.into_any(),
                        Err(message) => view! { <p class="error">{message.clone()}</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn IsoTable(images: Vec<IsoImageView>) -> impl IntoView {
    if images.is_empty() {
        return view! { <p>"No ISO images uploaded yet."</p> }.into_any();
    }

    view! {
        <table>
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Distribution"</th>
                    <th>"Version"</th>
                    <th>"Size"</th>
                    <th>"Architecture"</th>
                    <th>"Preconfiguration"</th>
                </tr>
            </thead>
            <tbody>
                {images
                    .into_iter()
                    .map(|image| {
                        view! {
                            <tr>
                                <td>{image.name}</td>
                                <td>{image.distro}</td>
                                <td>{image.version}</td>
                                <td>{image.size}</td>
                                <td>{image.architecture}</td>
                                <td>{image.preconfigure_type}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
