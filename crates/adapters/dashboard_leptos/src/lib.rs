use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use rackdash_app::config::ClientConfig;
use rackdash_domain::controls::MenuState;
use wasm_bindgen::JsCast;

pub mod api;
mod browser;
mod components;
pub mod config;
pub mod logging;
mod pages;

use api::GlooTransport;
use components::{Footer, Nav, ToastContainer, provide_theme};
use pages::{Dashboard, HostDetail, IsoImages, Login, NotFound};

/// Root application component.
///
/// Provides the configuration, the transport, the theme and the dropdown
/// menu state to every page.
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let config = Arc::new(config);
    provide_context(GlooTransport::new(Arc::clone(&config)));
    provide_theme(&config);
    provide_context(config);

    let menus = RwSignal::new(MenuState::default());
    provide_context(menus);

    // One listener for the whole app: a click outside every dropdown closes
    // all menus.
    let outside_click = window_event_listener(ev::click, move |event| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest(".dropdown").ok().flatten())
            .is_some();
        menus.update(|m| m.on_document_click(inside));
    });
    on_cleanup(move || outside_click.remove());

    view! {
        <ToastContainer>
            <Router>
                <Nav/>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Dashboard/>
                        <Route path=path!("hosts/:ip") view=HostDetail/>
                        <Route path=path!("iso-images") view=IsoImages/>
                        <Route path=path!("login") view=Login/>
                    </Routes>
                </main>
                <Footer/>
            </Router>
        </ToastContainer>
    }
}
