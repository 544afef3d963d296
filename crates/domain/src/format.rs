//! Display formatting for host specs: capacities, storage lines, SKUs.

use crate::host::{StorageDevice, StorageEntry};

/// Separator between storage line segments.
const SEGMENT_SEPARATOR: &str = " \u{2022} ";

const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * MIB;

/// Pretty-print a capacity given in GB.
///
/// Below 1024 GB the value is printed as-is (`"512 GB"`); from 1024 GB it is
/// converted to TB with one decimal and a trailing `.0` stripped
/// (`"1 TB"`, `"1.5 TB"`). Missing or NaN values print `"Unknown"`.
#[must_use]
pub fn pretty_capacity(gb: Option<f64>) -> String {
    match gb {
        Some(n) if !n.is_nan() => {
            if n >= 1024.0 {
                format!("{} TB", one_decimal(n / 1024.0))
            } else {
                format!("{n} GB")
            }
        }
        _ => "Unknown".to_string(),
    }
}

/// Pretty-print a size in bytes as MB below 1 GiB, GB otherwise.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pretty_bytes(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return "Unknown".to_string();
    };
    let bytes = bytes as f64;
    if bytes < GIB {
        format!("{} MB", one_decimal(bytes / MIB))
    } else {
        format!("{} GB", one_decimal(bytes / GIB))
    }
}

/// Shown for a storage entry that does not describe a device.
pub const UNKNOWN_DEVICE: &str = "Unknown device";

/// Sum of device capacities in GB; unreadable or missing capacities count
/// as zero.
#[must_use]
pub fn total_capacity(entries: &[StorageEntry]) -> f64 {
    entries.iter().map(StorageEntry::capacity_or_zero).sum()
}

/// One line describing a storage entry:
/// `"<capacity> • <MEDIA> • <interface> • <model>"`.
///
/// Empty text segments are omitted. The capacity segment appears only when
/// the device reports the field, and reads `"Unknown"` when its value is
/// unreadable.
#[must_use]
pub fn storage_line(entry: &StorageEntry) -> String {
    match entry {
        StorageEntry::Device(device) => device_line(device),
        StorageEntry::Unrecognized => UNKNOWN_DEVICE.to_string(),
    }
}

fn device_line(device: &StorageDevice) -> String {
    let mut parts = Vec::with_capacity(4);
    if device.reports_capacity {
        parts.push(pretty_capacity(device.capacity_gb));
    }
    if let Some(media) = non_empty(device.media_type.as_deref()) {
        parts.push(media.to_uppercase());
    }
    if let Some(interface) = non_empty(device.interface.as_deref()) {
        parts.push(interface.to_string());
    }
    if let Some(model) = non_empty(device.model.as_deref()) {
        parts.push(model.to_string());
    }
    parts.join(SEGMENT_SEPARATOR)
}

/// `"1 device"` / `"3 devices"`.
#[must_use]
pub fn device_count(count: usize) -> String {
    if count == 1 {
        "1 device".to_string()
    } else {
        format!("{count} devices")
    }
}

/// Strip a redundant manufacturer prefix from a processor SKU.
///
/// `clean_sku("Intel", "Intel Xeon-1234")` is `"Xeon-1234"`. The comparison
/// is case-insensitive on trimmed text; leading `-`, `,` and whitespace left
/// after the prefix are removed. Without a prefix match the trimmed SKU is
/// returned unchanged.
#[must_use]
pub fn clean_sku(manufacturer: &str, sku: &str) -> String {
    let manufacturer = manufacturer.trim().to_lowercase();
    let sku = sku.trim();
    if manufacturer.is_empty() {
        return sku.to_string();
    }
    match sku.get(..manufacturer.len()) {
        Some(head) if head.to_lowercase() == manufacturer => sku[manufacturer.len()..]
            .trim_start_matches(|c: char| c == '-' || c == ',' || c.is_whitespace())
            .trim_end()
            .to_string(),
        _ => sku.to_string(),
    }
}

fn one_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn device(capacity_gb: Option<f64>, media: &str, interface: &str, model: &str) -> StorageEntry {
        let text = |s: &str| (!s.is_empty()).then(|| s.to_string());
        StorageEntry::Device(StorageDevice {
            reports_capacity: true,
            capacity_gb,
            media_type: text(media),
            interface: text(interface),
            model: text(model),
        })
    }

    #[test]
    fn should_print_gigabytes_below_one_terabyte() {
        assert_eq!(pretty_capacity(Some(512.0)), "512 GB");
        assert_eq!(pretty_capacity(Some(0.0)), "0 GB");
    }

    #[test]
    fn should_print_whole_terabytes_without_decimal() {
        assert_eq!(pretty_capacity(Some(1024.0)), "1 TB");
        assert_eq!(pretty_capacity(Some(4096.0)), "4 TB");
    }

    #[test]
    fn should_print_fractional_terabytes_with_one_decimal() {
        assert_eq!(pretty_capacity(Some(1536.0)), "1.5 TB");
        assert_eq!(pretty_capacity(Some(1920.0)), "1.9 TB");
    }

    #[test]
    fn should_print_unknown_when_capacity_missing() {
        assert_eq!(pretty_capacity(None), "Unknown");
        assert_eq!(pretty_capacity(Some(f64::NAN)), "Unknown");
    }

    #[test]
    fn should_print_megabytes_below_one_gibibyte() {
        assert_eq!(pretty_bytes(Some(512 * 1024 * 1024)), "512 MB");
        assert_eq!(pretty_bytes(Some(1024 * 1024 * 1024 * 3 / 2)), "1.5 GB");
        assert_eq!(pretty_bytes(None), "Unknown");
    }

    #[test]
    fn should_sum_capacities_ignoring_missing_values() {
        let devices = vec![
            device(Some(512.0), "", "", ""),
            device(None, "ssd", "", ""),
            device(Some(1024.0), "", "", ""),
        ];
        assert!((total_capacity(&devices) - 1536.0).abs() < f64::EPSILON);
        assert_eq!(pretty_capacity(Some(total_capacity(&devices))), "1.5 TB");
    }

    #[test]
    fn should_join_all_segments_of_storage_line() {
        let line = storage_line(&device(Some(960.0), "ssd", "SATA", "MZ7LH960"));
        assert_eq!(line, "960 GB \u{2022} SSD \u{2022} SATA \u{2022} MZ7LH960");
    }

    #[test]
    fn should_omit_empty_segments_of_storage_line() {
        let line = storage_line(&device(Some(2048.0), "", "NVMe", ""));
        assert_eq!(line, "2 TB \u{2022} NVMe");
    }

    #[test]
    fn should_show_unknown_capacity_in_storage_line() {
        assert_eq!(storage_line(&device(None, "hdd", "", "")), "Unknown \u{2022} HDD");
    }

    #[test]
    fn should_omit_capacity_segment_when_not_reported() {
        let entry = StorageEntry::from_json(&json!({"media_type": "ssd", "model": "MZ7LH960"}));
        assert_eq!(storage_line(&entry), "SSD \u{2022} MZ7LH960");
    }

    #[test]
    fn should_describe_unrecognized_entry_as_unknown_device() {
        assert_eq!(storage_line(&StorageEntry::Unrecognized), "Unknown device");
    }

    #[test]
    fn should_count_unrecognized_entries_as_zero_capacity() {
        let entries = vec![
            StorageEntry::Unrecognized,
            StorageEntry::from_json(&json!({"capacity_gb": "960"})),
            StorageEntry::from_json(&json!({"capacity_gb": "lots"})),
        ];
        assert!((total_capacity(&entries) - 960.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_pluralize_device_count() {
        assert_eq!(device_count(0), "0 devices");
        assert_eq!(device_count(1), "1 device");
        assert_eq!(device_count(2), "2 devices");
    }

    #[test]
    fn should_strip_manufacturer_prefix_from_sku() {
        assert_eq!(clean_sku("Intel", "Intel Xeon-1234"), "Xeon-1234");
    }

    #[test]
    fn should_leave_sku_without_prefix_unchanged() {
        assert_eq!(clean_sku("Intel", "Xeon-1234"), "Xeon-1234");
    }

    #[test]
    fn should_leave_sku_unchanged_when_manufacturer_empty() {
        assert_eq!(clean_sku("", "Xeon-1234"), "Xeon-1234");
    }

    #[test]
    fn should_match_prefix_case_insensitively_and_drop_separators() {
        assert_eq!(clean_sku(" AMD ", "amd - EPYC 7302"), "EPYC 7302");
        assert_eq!(clean_sku("Intel", "INTEL(R), Xeon"), "(R), Xeon");
    }
}
