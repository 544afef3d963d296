//! Upload-ISO admin form.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rackdash_app::services::iso_service::{IsoService, UPLOAD_FAILED};
use rackdash_domain::controls::{AdminForm, AdminPanel, PROCESSING_LABEL};

use super::Spinner;
use crate::api::use_transport;

const FORM: AdminForm = AdminForm::UploadIso;

/// Sends the selected image as multipart. Submitting without a file does
/// nothing; a success closes and resets the form.
#[component]
pub fn UploadIsoForm(
    panel: RwSignal<AdminPanel>,
    /// Called after a successful upload.
    #[prop(optional, into)]
    on_uploaded: Option<Callback<()>>,
) -> impl IntoView {
    let transport = use_transport();
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let submitting = move || panel.with(|p| p.is_submitting(FORM));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(file) = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
        else {
            return;
        };
        let mut started = false;
        panel.update(|p| started = p.begin_submit(FORM));
        if !started {
            return;
        }
        let service = IsoService::new(transport.clone());
        spawn_local(async move {
            match service.upload(file).await {
                Ok(()) => {
                    panel.update(|p| p.close(FORM));
                    if let Some(callback) = on_uploaded {
                        callback.run(());
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "upload failed");
                    panel.update(|p| p.fail(FORM, err.user_message(UPLOAD_FAILED)));
                }
            }
        });
    };

    view! {
        <Show when=move || panel.with(|p| p.is_open(FORM))>
            <form class="admin-form" id="isoForm" on:submit=on_submit.clone()>
                {move || {
                    panel
                        .with(|p| p.error(FORM).map(str::to_string))
                        .map(|message| view! { <p class="form-error">{message}</p> })
                }}
                <label>
                    "ISO image"
                    <input type="file" name="iso_image" accept=".iso" node_ref=file_input/>
                </label>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        <Show when=submitting>
                            <Spinner/>
                        </Show>
                        {move || if submitting() { PROCESSING_LABEL } else { "Upload" }}
                    </button>
                    <button type="button" class="btn" on:click=move |_| panel.update(|p| p.close(FORM))>
                        "Cancel"
                    </button>
                </div>
            </form>
        </Show>
    }
}
