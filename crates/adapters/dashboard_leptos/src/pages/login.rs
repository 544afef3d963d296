use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rackdash_app::services::auth_service::{AuthService, LOGIN_FAILED};
use rackdash_domain::controls::{ButtonPhase, PROCESSING_LABEL};

use crate::api::use_transport;
use crate::browser;

/// Login page. A success performs a full navigation to `/` so the session
/// cookie is picked up by every request.
#[component]
pub fn Login() -> impl IntoView {
    let transport = use_transport();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (phase, set_phase) = signal(ButtonPhase::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_busy() {
            return;
        }
        set_phase.set(ButtonPhase::Busy);
        set_error.set(None);
        let service = AuthService::new(transport.clone());
        let username = username.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match service.login(&username, &password).await {
                Ok(()) => browser::redirect("/"),
                Err(err) => {
                    set_error.set(Some(err.user_message(LOGIN_FAILED)));
                    set_phase.set(ButtonPhase::Idle);
                }
            }
        });
    };

    view! {
        <div class="login">
            <h1>"Sign in"</h1>
            <form on:submit=on_submit>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <label>
                    "Username"
                    <input
                        type="text"
                        name="username"
                        autocomplete="username"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" class="btn btn-primary" disabled=move || phase.get().is_busy()>
                    {move || phase.get().label("Sign in", PROCESSING_LABEL)}
                </button>
            </form>
        </div>
    }
}
