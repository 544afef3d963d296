//! Host view-models — every display string of a host card.
//!
//! Rendering is a pure projection `Host + enum labels → HostView`, so the
//! formatting rules are testable without a browser. Components only read
//! the strings produced here.

use std::fmt::Display;

use chrono::TimeZone;

use crate::enums::{LabelMap, PLACEHOLDER, resolve_label};
use crate::format::{clean_sku, device_count, pretty_capacity, storage_line, total_capacity};
use crate::host::Host;
use crate::power::PowerStatus;
use crate::time::as_of_caption;

/// Shown in the storage list of a host that reports no devices.
pub const NO_STORAGE: &str = "No storage info";

/// The reversed (code → label) enum maps needed to display hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumLabels {
    pub vendors: LabelMap,
    pub form_factors: LabelMap,
    pub management_types: LabelMap,
    pub power_states: LabelMap,
}

/// Display strings for one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostView {
    pub management_ip: String,
    pub name: String,
    pub form_factor: String,
    pub power: PowerStatus,
    pub management_type: String,
    pub vendor: String,
    pub memory: MemoryView,
    pub processor: ProcessorView,
    pub storage: StorageView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryView {
    pub num_dimms: String,
    pub size_gb: String,
    pub speed_mhz: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorView {
    pub manufacturer: String,
    pub sku: String,
    pub cores: String,
    pub count: String,
    pub threads: String,
    /// `"<base> / <max>"` in MHz.
    pub speed_mhz: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageView {
    /// One line per device, or [`NO_STORAGE`] alone.
    pub lines: Vec<String>,
    pub total: String,
    /// `"<n> device(s)"`.
    pub summary: String,
}

impl HostView {
    /// Project a host onto its display strings.
    ///
    /// `tz` is the viewer's time zone, used for the "as of" caption.
    #[must_use]
    pub fn project<Tz>(host: &Host, labels: &EnumLabels, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let power_label = resolve_label(&labels.power_states, host.last_known_power_state.as_ref());
        let as_of = host
            .last_known_power_state_time
            .as_ref()
            .map(|ts| as_of_caption(ts, tz));

        let memory = &host.specs.memory;
        let processor = &host.specs.processor;
        let storage = &host.specs.storage;

        let manufacturer = processor.manufacturer.as_deref().unwrap_or_default();
        let sku = processor.sku.as_deref().unwrap_or(PLACEHOLDER);

        let lines = if storage.is_empty() {
            vec![NO_STORAGE.to_string()]
        } else {
            storage.iter().map(storage_line).collect()
        };

        Self {
            management_ip: host.management_ip.clone(),
            name: text_or_placeholder(host.model.as_deref()),
            form_factor: resolve_label(&labels.form_factors, host.form_factor.as_ref()),
            power: PowerStatus::new(power_label, as_of),
            management_type: resolve_label(
                &labels.management_types,
                host.management_type.as_ref(),
            ),
            vendor: resolve_label(&labels.vendors, host.vendor.as_ref()),
            memory: MemoryView {
                num_dimms: number_or_placeholder(memory.num_dimms),
                size_gb: number_or_placeholder(memory.size_gb),
                speed_mhz: number_or_placeholder(memory.speed_mhz),
            },
            processor: ProcessorView {
                manufacturer: text_or_placeholder(processor.manufacturer.as_deref()),
                sku: clean_sku(manufacturer, sku),
                cores: number_or_placeholder(processor.cores),
                count: number_or_placeholder(processor.count),
                threads: number_or_placeholder(processor.threads),
                speed_mhz: format!(
                    "{} / {}",
                    number_or_placeholder(processor.base_speed_mhz),
                    number_or_placeholder(processor.max_speed_mhz)
                ),
            },
            storage: StorageView {
                lines,
                total: pretty_capacity(Some(total_capacity(storage))),
                summary: device_count(storage.len()),
            },
        }
    }
}

/// The projected host list. An empty list renders the empty state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostListView {
    pub hosts: Vec<HostView>,
}

impl HostListView {
    /// Project every host. An empty input performs no projection at all.
    #[must_use]
    pub fn project<Tz>(hosts: &[Host], labels: &EnumLabels, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            hosts: hosts
                .iter()
                .map(|host| HostView::project(host, labels, tz))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Drop a host after it was unenrolled. Returns whether it was present.
    pub fn remove(&mut self, management_ip: &str) -> bool {
        let before = self.hosts.len();
        self.hosts.retain(|h| h.management_ip != management_ip);
        self.hosts.len() != before
    }
}

fn text_or_placeholder(text: Option<&str>) -> String {
    text.map_or_else(|| PLACEHOLDER.to_string(), str::to_string)
}

fn number_or_placeholder(value: Option<f64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{EnumCode, EnumMap};
    use crate::power::PowerBadge;
    use chrono::Utc;
    use serde_json::json;

    fn labels() -> EnumLabels {
        EnumLabels {
            vendors: EnumMap::from_pairs([("Dell", 1), ("HPE", 2)]).labels(),
            form_factors: EnumMap::from_pairs([("Rackmount", 1)]).labels(),
            management_types: EnumMap::from_pairs([("IPMI", 1), ("Redfish", 2)]).labels(),
            power_states: EnumMap::from_pairs([("Unknown", 0), ("On", 1), ("Off", 2)]).labels(),
        }
    }

    fn host(value: serde_json::Value) -> Host {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn should_resolve_enum_fields_through_labels() {
        let view = HostView::project(
            &host(json!({
                "management_ip": "10.0.0.1",
                "model": "R640",
                "vendor": 1,
                "form_factor": 1,
                "management_type": 2,
                "last_known_power_state": 1
            })),
            &labels(),
            &Utc,
        );
        assert_eq!(view.name, "R640");
        assert_eq!(view.vendor, "Dell");
        assert_eq!(view.form_factor, "Rackmount");
        assert_eq!(view.management_type, "Redfish");
        assert_eq!(view.power.label, "On");
        assert_eq!(view.power.badge, PowerBadge::On);
    }

    #[test]
    fn should_show_raw_code_when_vendor_unknown() {
        let view = HostView::project(
            &host(json!({"management_ip": "10.0.0.2", "vendor": 99})),
            &labels(),
            &Utc,
        );
        assert_eq!(view.vendor, "99");
        assert_eq!(view.form_factor, PLACEHOLDER);
    }

    #[test]
    fn should_fill_placeholders_for_missing_specs() {
        let view = HostView::project(&host(json!({"management_ip": "10.0.0.3"})), &labels(), &Utc);
        assert_eq!(view.name, PLACEHOLDER);
        assert_eq!(view.memory.num_dimms, PLACEHOLDER);
        assert_eq!(view.processor.sku, PLACEHOLDER);
        assert_eq!(view.processor.speed_mhz, "\u{2014} / \u{2014}");
        assert_eq!(view.storage.lines, vec![NO_STORAGE.to_string()]);
        assert_eq!(view.storage.total, "0 GB");
        assert_eq!(view.storage.summary, "0 devices");
        assert!(view.power.as_of.is_none());
    }

    #[test]
    fn should_format_specs_and_storage_summary() {
        let view = HostView::project(
            &host(json!({
                "management_ip": "10.0.0.4",
                "last_known_power_state": 2,
                "last_known_power_state_time": "2024-02-03T04:05:06Z",
                "specs": {
                    "memory": {"num_dimms": 4, "size_gb": 64, "speed_mhz": 3200},
                    "processor": {
                        "manufacturer": "Intel",
                        "sku": "Intel Xeon Silver 4214",
                        "cores": 12, "count": 2, "threads": 24,
                        "base_speed_mhz": 2200, "max_speed_mhz": 3200
                    },
                    "storage": [
                        {"capacity_gb": 512, "media_type": "ssd"},
                        {"capacity_gb": 1024, "media_type": "hdd", "interface": "SAS"}
                    ]
                }
            })),
            &labels(),
            &Utc,
        );
        assert_eq!(view.memory.size_gb, "64");
        assert_eq!(view.processor.sku, "Xeon Silver 4214");
        assert_eq!(view.processor.speed_mhz, "2200 / 3200");
        assert_eq!(
            view.storage.lines,
            vec![
                "512 GB \u{2022} SSD".to_string(),
                "1 TB \u{2022} HDD \u{2022} SAS".to_string()
            ]
        );
        assert_eq!(view.storage.total, "1.5 TB");
        assert_eq!(view.storage.summary, "2 devices");
        assert_eq!(view.power.badge, PowerBadge::Off);
        assert_eq!(view.power.as_of.as_deref(), Some("As of 02/03/2024 04:05"));
    }

    #[test]
    fn should_project_nothing_for_empty_host_list() {
        let list = HostListView::project(&[], &labels(), &Utc);
        assert!(list.is_empty());
    }

    #[test]
    fn should_remove_host_by_address() {
        let hosts = vec![
            host(json!({"management_ip": "10.0.0.1"})),
            host(json!({"management_ip": "10.0.0.2"})),
        ];
        let mut list = HostListView::project(&hosts, &labels(), &Utc);
        assert!(list.remove("10.0.0.1"));
        assert!(!list.remove("10.0.0.1"));
        assert_eq!(list.hosts.len(), 1);
        assert_eq!(list.hosts[0].management_ip, "10.0.0.2");
    }

    #[test]
    fn should_resolve_textual_codes_like_numeric_ones() {
        let view = HostView::project(
            &host(json!({"management_ip": "10.0.0.9", "vendor": "2"})),
            &labels(),
            &Utc,
        );
        assert_eq!(view.vendor, "HPE");
        assert_eq!(EnumCode::from("2"), EnumCode::from(2));
    }
}
