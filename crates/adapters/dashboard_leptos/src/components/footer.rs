use chrono::{Datelike, Local};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Local::now().year();

    view! {
        <footer class="site-footer">
            <p>"\u{00A9} " {year} " rackdash"</p>
        </footer>
    }
}
