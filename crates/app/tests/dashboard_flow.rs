//! End-to-end flow tests for the dashboard use-cases.
//!
//! Each test wires the real services to a scripted backend that answers
//! from a table of canned JSON bodies, then checks what the host cards
//! would display. No browser and no network are involved.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use chrono::Utc;
use rackdash_app::config::ClientConfig;
use rackdash_app::ports::{ApiResponse, ApiTransport, RawBody, TransportError};
use rackdash_app::services::host_service::HostService;
use rackdash_domain::controls::HostDraft;
use rackdash_domain::enums::PLACEHOLDER;
use rackdash_domain::power::PowerBadge;
use rackdash_domain::view::NO_STORAGE;
use serde_json::{Value, json};

/// Backend answering by path; writes are accepted and remembered.
#[derive(Default)]
struct ScriptedBackend {
    bodies: HashMap<String, Value>,
    writes: RefCell<Vec<(String, Value)>>,
}

impl ScriptedBackend {
    fn serve(mut self, path: &str, body: Value) -> Self {
        self.bodies.insert(path.to_string(), body);
        self
    }

    fn respond(&self, path: &str) -> Result<ApiResponse, TransportError> {
        Ok(match self.bodies.get(path) {
            Some(body) => ApiResponse::new(200, body.clone()),
            None => ApiResponse::new(404, json!({"message": "not found"})),
        })
    }
}

impl ApiTransport for ScriptedBackend {
    type File = ();

    fn get(
        &self,
        uri: &str,
        _params: &[(&str, &str)],
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        let result = self.respond(uri);
        async move { result }
    }

    fn post_json(
        &self,
        uri: &str,
        body: &Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        self.writes
            .borrow_mut()
            .push((uri.to_string(), body.clone()));
        async { Ok(ApiResponse::new(201, json!({}))) }
    }

    fn post_raw(
        &self,
        _uri: &str,
        _body: RawBody<()>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        async { Ok(ApiResponse::new(201, json!({}))) }
    }

    fn delete(
        &self,
        _uri: &str,
        _body: Option<&Value>,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> {
        async { Ok(ApiResponse::new(200, json!({}))) }
    }
}

fn backend() -> ScriptedBackend {
    ScriptedBackend::default()
        .serve("/api/enums/vendors", json!({"Dell": 1, "Supermicro": 2}))
        .serve("/api/enums/form-factors", json!({"1U": 1, "2U": 2}))
        .serve("/api/enums/management-types", json!({"IPMI": 1, "Redfish": 2}))
        .serve("/api/enums/power-states", json!({"On": 1, "Off": 2}))
}

// ---------------------------------------------------------------------------
// Host list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_render_power_label_and_badge_from_enum_table() {
    let backend = backend().serve(
        "/api/hosts",
        json!([{
            "management_ip": "10.0.0.1",
            "model": "R640",
            "vendor": 1,
            "form_factor": 1,
            "management_type": 2,
            "last_known_power_state": 1,
            "last_known_power_state_time": "2024-03-05T14:07:00Z",
            "specs": {
                "memory": {"num_dimms": 8, "size_gb": 256, "speed_mhz": 3200},
                "processor": {
                    "manufacturer": "Intel",
                    "sku": "Intel Xeon Gold 6248",
                    "cores": 20,
                    "count": 2,
                    "threads": 40,
                    "base_speed_mhz": 2500,
                    "max_speed_mhz": 3900
                },
                "storage": [
                    {"capacity_gb": 1024, "media_type": "ssd", "interface": "NVMe", "model": "PM983"},
                    {"capacity_gb": 512, "media_type": "hdd", "interface": "SATA"}
                ]
            }
        }]),
    );
    let service = HostService::new(Rc::new(backend));

    let view = service.list(&Utc).await.unwrap();

    assert_eq!(view.hosts.len(), 1);
    let host = &view.hosts[0];
    assert_eq!(host.power.label, "On");
    assert_eq!(host.power.badge, PowerBadge::On);
    assert_eq!(host.power.badge.css_class(), "power-on");
    assert_eq!(host.power.as_of.as_deref(), Some("As of 03/05/2024 14:07"));
    assert_eq!(host.vendor, "Dell");
    assert_eq!(host.form_factor, "1U");
    assert_eq!(host.management_type, "Redfish");
    assert_eq!(host.processor.sku, "Xeon Gold 6248");
    assert_eq!(host.processor.speed_mhz, "2500 / 3900");
    assert_eq!(
        host.storage.lines,
        vec![
            "1 TB • SSD • NVMe • PM983".to_string(),
            "512 GB • HDD • SATA".to_string(),
        ]
    );
    assert_eq!(host.storage.total, "1.5 TB");
    assert_eq!(host.storage.summary, "2 devices");
}

#[tokio::test]
async fn should_render_empty_state_for_empty_inventory() {
    let service = HostService::new(Rc::new(backend().serve("/api/hosts", json!([]))));

    let view = service.list(&Utc).await.unwrap();

    assert!(view.is_empty());
}

#[tokio::test]
async fn should_show_raw_code_for_unknown_vendor() {
    let backend = backend().serve(
        "/api/hosts",
        json!([{"management_ip": "10.0.0.2", "vendor": 99}]),
    );
    let service = HostService::new(Rc::new(backend));

    let view = service.list(&Utc).await.unwrap();

    let host = &view.hosts[0];
    assert_eq!(host.vendor, "99");
    assert_eq!(host.name, PLACEHOLDER);
    assert_eq!(host.power.label, PLACEHOLDER);
    assert_eq!(host.power.badge, PowerBadge::Unknown);
    assert_eq!(host.storage.lines, vec![NO_STORAGE.to_string()]);
}

#[tokio::test]
async fn should_show_raw_codes_when_enum_tables_are_unavailable() {
    let backend = ScriptedBackend::default().serve(
        "/api/hosts",
        json!([{"management_ip": "10.0.0.3", "vendor": 1, "last_known_power_state": 2}]),
    );
    let service = HostService::new(Rc::new(backend));

    let view = service.list(&Utc).await.unwrap();

    assert_eq!(view.hosts[0].vendor, "1");
    assert_eq!(view.hosts[0].power.label, "2");
}

#[tokio::test]
async fn should_render_host_with_malformed_fields() {
    let backend = backend().serve(
        "/api/hosts",
        json!([{
            "management_ip": "10.0.0.5",
            "vendor": {"id": 1},
            "form_factor": 2,
            "specs": {
                "storage": [
                    null,
                    {"capacity_gb": "960", "media_type": "ssd"},
                    {"media_type": "hdd", "model": "ST4000"}
                ]
            }
        }]),
    );
    let service = HostService::new(Rc::new(backend));

    let view = service.list(&Utc).await.unwrap();

    assert_eq!(view.hosts.len(), 1);
    let host = &view.hosts[0];
    assert_eq!(host.vendor, PLACEHOLDER);
    assert_eq!(host.form_factor, "2U");
    assert_eq!(
        host.storage.lines,
        vec![
            "Unknown device".to_string(),
            "960 GB • SSD".to_string(),
            "HDD • ST4000".to_string(),
        ]
    );
    assert_eq!(host.storage.total, "960 GB");
    assert_eq!(host.storage.summary, "3 devices");
}

// ---------------------------------------------------------------------------
// Enrollment and removal
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_enroll_host_then_drop_it_from_view_after_removal() {
    let backend = Rc::new(backend().serve(
        "/api/hosts",
        json!([{"management_ip": "10.0.0.4"}]),
    ));
    let service = HostService::new(Rc::clone(&backend));
    let draft = HostDraft {
        address: "10.0.0.4".to_string(),
        management_type: Some("IPMI".to_string()),
    };

    service.add_host(&draft).await.unwrap();
    let mut view = service.list(&Utc).await.unwrap();
    service.remove_host("10.0.0.4").await.unwrap();

    assert_eq!(
        backend.writes.borrow().as_slice(),
        &[(
            "/api/hosts".to_string(),
            json!({"management_ip": "10.0.0.4", "management_type": 1})
        )]
    );
    assert!(view.remove("10.0.0.4"));
    assert!(view.is_empty());
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn should_prefix_requests_with_configured_base_url() {
    let config = ClientConfig::load(
        "[api]\nbase_url = 'https://rack.example.com'",
        |_| None,
    )
    .unwrap();

    assert_eq!(
        config.url("/api/hosts"),
        "https://rack.example.com/api/hosts"
    );
}
