use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use rackdash_domain::nav::NAV_ENTRIES;

use super::{Logo, ThemeToggle, UserMenu};

/// Top bar: logo, section links (the current one highlighted), theme toggle
/// and the user menu.
#[component]
pub fn Nav() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav>
            <A href="/"><Logo/></A>
            <ul>
                {NAV_ENTRIES
                    .into_iter()
                    .map(|entry| {
                        let active = move || pathname.with(|path| entry.is_active(path));
                        view! {
                            <li data-nav-id=entry.id class:active=active>
                                <a href=entry.href>{entry.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <ThemeToggle/>
            <UserMenu/>
        </nav>
    }
}
