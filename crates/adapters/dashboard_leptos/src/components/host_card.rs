//! Host cards: the inventory grid and the pieces shared with the detail page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use rackdash_app::services::host_service::{HostService, REMOVE_HOST_FAILED};
use rackdash_domain::controls::{ButtonPhase, MenuState, REMOVING_LABEL};
use rackdash_domain::power::PowerStatus;
use rackdash_domain::view::{HostListView, HostView};

use super::{PowerMenu, use_toasts};
use crate::api::use_transport;
use crate::browser;

/// Every enrolled host, or the empty state when there are none.
///
/// Removals drop cards locally without refetching.
#[component]
pub fn HostList(
    initial: HostListView,
    #[prop(into)] actions: Signal<Vec<String>>,
) -> impl IntoView {
    let list = RwSignal::new(initial);
    let on_removed = Callback::new(move |management_ip: String| {
        list.update(|l| {
            l.remove(&management_ip);
        });
    });

    view! {
        <Show
            when=move || !list.with(HostListView::is_empty)
            fallback=|| view! {
                <div id="empty" class="empty-state">
                    <p>"No hosts in the inventory yet."</p>
                </div>
            }
        >
            <div class="host-grid">
                <For
                    each=move || list.get().hosts
                    key=|host| host.management_ip.clone()
                    children=move |host: HostView| {
                        view! { <HostCard host actions on_removed/> }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn HostCard(
    host: HostView,
    #[prop(into)] actions: Signal<Vec<String>>,
    #[prop(into)] on_removed: Callback<String>,
) -> impl IntoView {
    let transport = use_transport();
    let toasts = use_toasts();
    let menus = expect_context::<RwSignal<MenuState>>();
    let power = RwSignal::new(host.power.clone());
    let (phase, set_phase) = signal(ButtonPhase::Idle);
    let management_ip = host.management_ip.clone();

    let remove = {
        let management_ip = management_ip.clone();
        move |_| {
            if phase.get_untracked().is_busy()
                || !browser::confirm(&format!("Remove host {management_ip} from inventory?"))
            {
                return;
            }
            set_phase.set(ButtonPhase::Busy);
            let service = HostService::new(transport.clone());
            let management_ip = management_ip.clone();
            spawn_local(async move {
                match service.remove_host(&management_ip).await {
                    Ok(()) => on_removed.run(management_ip),
                    Err(err) => {
                        tracing::warn!(%management_ip, error = %err, "host removal failed");
                        set_phase.set(ButtonPhase::Idle);
                        toasts.error(err.user_message(REMOVE_HOST_FAILED));
                    }
                }
                menus.update(MenuState::close_all);
            });
        }
    };

    view! {
        <section class="host-card">
            <header>
                <A href=format!("/hosts/{management_ip}")>
                    <h2 data-field="name">{host.name.clone()}</h2>
                </A>
                <span data-field="form_factor">{host.form_factor.clone()}</span>
                <PowerBadge status=power/>
            </header>
            <ul class="chips">
                <li data-field="ip">{management_ip.clone()}</li>
                <li data-field="mgmt_type">{host.management_type.clone()}</li>
                <li data-field="vendor">{host.vendor.clone()}</li>
            </ul>
            <HostSpecs host=host.clone()/>
            <footer class="host-actions">
                <PowerMenu
                    management_ip=management_ip.clone()
                    actions
                    on_changed=move |status: PowerStatus| power.set(status)
                />
                <button
                    class="btn btn-danger"
                    on:click=remove
                    disabled=move || phase.get().is_busy()
                >
                    {move || phase.get().label("Remove", REMOVING_LABEL)}
                </button>
            </footer>
        </section>
    }
}

/// Power label with its colored badge and the "as of" caption.
#[component]
pub fn PowerBadge(#[prop(into)] status: Signal<PowerStatus>) -> impl IntoView {
    view! {
        <div
            data-role="power-badge"
            class=move || format!("power-badge {}", status.with(|s| s.badge.css_class()))
        >
            <span data-field="power" class="power-state">{move || status.with(|s| s.label.clone())}</span>
            <span data-field="power-updated">
                {move || status.with(|s| s.as_of.clone().unwrap_or_default())}
            </span>
        </div>
    }
}

/// Memory, processor and storage sections of a host.
#[component]
pub fn HostSpecs(host: HostView) -> impl IntoView {
    let HostView {
        memory,
        processor,
        storage,
        ..
    } = host;

    view! {
        <div class="host-specs">
            <div class="spec-block">
                <h3>"Memory"</h3>
                <dl>
                    <dt>"DIMMs"</dt><dd data-field="num_dimms">{memory.num_dimms}</dd>
                    <dt>"Size (GB)"</dt><dd data-field="size_gb">{memory.size_gb}</dd>
                    <dt>"Speed (MHz)"</dt><dd data-field="speed_mhz">{memory.speed_mhz}</dd>
                </dl>
            </div>
            <div class="spec-block">
                <h3>"Processor"</h3>
                <dl>
                    <dt>"Manufacturer"</dt><dd data-field="manufacturer">{processor.manufacturer}</dd>
                    <dt>"SKU"</dt><dd data-field="sku">{processor.sku}</dd>
                    <dt>"Cores"</dt><dd data-field="cores">{processor.cores}</dd>
                    <dt>"Sockets"</dt><dd data-field="count">{processor.count}</dd>
                    <dt>"Threads"</dt><dd data-field="threads">{processor.threads}</dd>
                    <dt>"Speed (MHz)"</dt><dd data-field="processor_speed_mhz">{processor.speed_mhz}</dd>
                </dl>
            </div>
            <div class="spec-block">
                <h3>"Storage"</h3>
                <ul data-field="storage_list">
                    {storage.lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ul>
                <p>
                    <span data-field="storage_total">{storage.total}</span>
                    " \u{2022} "
                    <span data-field="storage_summary">{storage.summary}</span>
                </p>
            </div>
        </div>
    }
}
