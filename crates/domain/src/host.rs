//! Host — a physical or virtual machine enrolled in the fleet.
//!
//! Hosts are created server-side and fetched as read-only snapshots. Every
//! field except `management_ip` may be missing or `null` on the wire, and
//! older backends send numbers as text. Decoding is lenient field by field:
//! a value of the wrong shape renders as a placeholder instead of dropping
//! the host from the list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::enums::EnumCode;
use crate::time::Timestamp;

/// A host record as served by `GET /api/hosts`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Host {
    /// Unique key of the host.
    #[serde(deserialize_with = "lenient_address")]
    pub management_ip: String,
    #[serde(deserialize_with = "lenient_text")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient_code")]
    pub vendor: Option<EnumCode>,
    #[serde(deserialize_with = "lenient_code")]
    pub form_factor: Option<EnumCode>,
    #[serde(deserialize_with = "lenient_code")]
    pub management_type: Option<EnumCode>,
    #[serde(deserialize_with = "lenient_code")]
    pub last_known_power_state: Option<EnumCode>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub last_known_power_state_time: Option<Timestamp>,
    #[serde(deserialize_with = "lenient_section")]
    pub specs: HostSpecs,
}

/// Hardware inventory reported for a host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostSpecs {
    #[serde(deserialize_with = "lenient_section")]
    pub memory: MemorySpecs,
    #[serde(deserialize_with = "lenient_section")]
    pub processor: ProcessorSpecs,
    /// Entries in backend order; the order carries no meaning.
    #[serde(deserialize_with = "lenient_storage")]
    pub storage: Vec<StorageEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MemorySpecs {
    #[serde(deserialize_with = "lenient_number")]
    pub num_dimms: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub size_gb: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub speed_mhz: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProcessorSpecs {
    #[serde(deserialize_with = "lenient_text")]
    pub manufacturer: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub sku: Option<String>,
    #[serde(deserialize_with = "lenient_number")]
    pub cores: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub count: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub threads: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub base_speed_mhz: Option<f64>,
    #[serde(deserialize_with = "lenient_number")]
    pub max_speed_mhz: Option<f64>,
}

/// One entry of a host's storage list.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageEntry {
    Device(StorageDevice),
    /// Anything but an object, such as `null`.
    Unrecognized,
}

impl StorageEntry {
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        value
            .as_object()
            .map_or(Self::Unrecognized, |fields| {
                Self::Device(StorageDevice {
                    reports_capacity: fields.contains_key("capacity_gb"),
                    capacity_gb: fields.get("capacity_gb").and_then(number),
                    media_type: fields.get("media_type").and_then(text),
                    interface: fields.get("interface").and_then(text),
                    model: fields.get("model").and_then(text),
                })
            })
    }

    /// Capacity in GB; unreadable or missing counts as zero.
    #[must_use]
    pub fn capacity_or_zero(&self) -> f64 {
        match self {
            Self::Device(device) => device.capacity_gb.unwrap_or(0.0),
            Self::Unrecognized => 0.0,
        }
    }
}

/// One storage device of a host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageDevice {
    /// Whether the device carries a `capacity_gb` field at all, even an
    /// unreadable one.
    pub reports_capacity: bool,
    pub capacity_gb: Option<f64>,
    pub media_type: Option<String>,
    pub interface: Option<String>,
    pub model: Option<String>,
}

/// Decode a list of hosts from a response body. Anything but an array
/// yields an empty list; elements that are not host objects are skipped.
#[must_use]
pub fn hosts_from_json(body: &Value) -> Vec<Host> {
    body.as_array()
        .map(|items| {
            items
                .iter()
                .filter(|item| item.is_object())
                .filter_map(|item| Host::deserialize(item).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// A JSON number, or text holding one.
fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// A JSON string, or a number or boolean printed as text.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(&Value::deserialize(deserializer)?))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(&Value::deserialize(deserializer)?))
}

fn lenient_address<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

/// Objects and arrays are not codes; they render like a missing code.
fn lenient_code<'de, D>(deserializer: D) -> Result<Option<EnumCode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(EnumCode::from_json(&Value::deserialize(deserializer)?))
}

fn lenient_section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_storage<'de, D>(deserializer: D) -> Result<Vec<StorageEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_array()
        .map(|items| items.iter().map(StorageEntry::from_json).collect())
        .unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|s| s.parse::<Timestamp>().ok()))
}
