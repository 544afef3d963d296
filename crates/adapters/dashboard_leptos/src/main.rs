//! WASM entry point: load the embedded configuration, install logging and
//! mount the app on `<body>`.

use leptos::prelude::*;
use rackdash_app::config::ClientConfig;
use rackdash_dashboard::{App, config, logging};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (ClientConfig::default(), Some(err)),
    };
    logging::init(&config.logging.filter);
    if let Some(err) = config_error {
        tracing::error!(error = %err, "invalid embedded configuration, using defaults");
    }
    tracing::info!(base_url = %config.api.base_url, "starting dashboard");

    mount_to_body(move || view! { <App config=config.clone()/> });
}
