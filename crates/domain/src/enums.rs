//! Enum maps — small `label → code` tables served by the backend.
//!
//! The backend owns the enum definitions. Each category is served as a JSON
//! object mapping a human label to its code (`{"On": 1, "Off": 2}`). The
//! client reads it both ways: label → code when submitting forms and power
//! actions, code → label (see [`EnumMap::labels`]) when displaying hosts.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Placeholder shown when a value is missing.
pub const PLACEHOLDER: &str = "\u{2014}";

/// An enum code as sent by the backend.
///
/// Codes are compared by their canonical text, so `1` and `"1"` are the same
/// code, matching how JSON object keys behave.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumCode(String);

impl EnumCode {
    /// Wrap a code given as text.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The canonical text of the code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read a code from a JSON scalar. Objects, arrays and `null` are not codes.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => Some(Self(n.to_string())),
            serde_json::Value::String(s) => Some(Self(s.clone())),
            serde_json::Value::Bool(b) => Some(Self(b.to_string())),
            _ => None,
        }
    }
}

impl From<i64> for EnumCode {
    fn from(code: i64) -> Self {
        Self(code.to_string())
    }
}

impl From<&str> for EnumCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl fmt::Display for EnumCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for EnumCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Integer codes go back out as JSON numbers.
        match self.0.parse::<i64>() {
            Ok(n) => serializer.serialize_i64(n),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for EnumCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&value)
            .ok_or_else(|| serde::de::Error::custom("enum code must be a number or a string"))
    }
}

/// The enum categories exposed under `/api/enums/{slug}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumCategory {
    Vendors,
    FormFactors,
    ManagementTypes,
    PowerStates,
    BootModes,
    PowerActions,
    Architectures,
    PreconfigureTypes,
    BookingPermissionLevels,
    BookingStatuses,
}

impl EnumCategory {
    /// Every category, in catalog order.
    pub const ALL: [Self; 10] = [
        Self::Vendors,
        Self::FormFactors,
        Self::ManagementTypes,
        Self::PowerStates,
        Self::BootModes,
        Self::PowerActions,
        Self::Architectures,
        Self::PreconfigureTypes,
        Self::BookingPermissionLevels,
        Self::BookingStatuses,
    ];

    /// URL slug of the category.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Vendors => "vendors",
            Self::FormFactors => "form-factors",
            Self::ManagementTypes => "management-types",
            Self::PowerStates => "power-states",
            Self::BootModes => "boot-modes",
            Self::PowerActions => "power-actions",
            Self::Architectures => "architectures",
            Self::PreconfigureTypes => "preconfigure-types",
            Self::BookingPermissionLevels => "booking-permission-levels",
            Self::BookingStatuses => "booking-statuses",
        }
    }
}

impl fmt::Display for EnumCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Reverse a map, swapping keys and values.
///
/// When two keys share a value, the one visited last (greatest key) wins.
#[must_use]
pub fn reverse_map<K, V>(map: &BTreeMap<K, V>) -> BTreeMap<V, K>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    map.iter().map(|(k, v)| (v.clone(), k.clone())).collect()
}

/// Reversed enum map: code → label, used for display.
pub type LabelMap = BTreeMap<EnumCode, String>;

/// One enum category as served by the backend: label → code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumMap(BTreeMap<String, EnumCode>);

impl EnumMap {
    /// Build a map from `(label, code)` pairs.
    pub fn from_pairs<L, C>(pairs: impl IntoIterator<Item = (L, C)>) -> Self
    where
        L: Into<String>,
        C: Into<EnumCode>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(label, code)| (label.into(), code.into()))
                .collect(),
        )
    }

    /// Read a map out of an arbitrary JSON body.
    ///
    /// Anything that is not an object yields an empty map; entries whose
    /// value is not a scalar are skipped.
    #[must_use]
    pub fn from_json(body: &serde_json::Value) -> Self {
        let Some(object) = body.as_object() else {
            return Self::default();
        };
        Self(
            object
                .iter()
                .filter_map(|(label, value)| {
                    EnumCode::from_json(value).map(|code| (label.clone(), code))
                })
                .collect(),
        )
    }

    /// Look up the code for a label.
    #[must_use]
    pub fn code(&self, label: &str) -> Option<&EnumCode> {
        self.0.get(label)
    }

    /// Look up the code for a label, failing with a validation error that
    /// names the category.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownLabel`] when the label is absent.
    pub fn require_code(
        &self,
        category: EnumCategory,
        label: &str,
    ) -> Result<&EnumCode, ValidationError> {
        self.code(label).ok_or_else(|| ValidationError::UnknownLabel {
            category: category.slug(),
            label: label.to_string(),
        })
    }

    /// All labels, ordered by their code.
    #[must_use]
    pub fn labels_by_code(&self) -> Vec<String> {
        self.labels().into_values().collect()
    }

    /// The reversed code → label map.
    #[must_use]
    pub fn labels(&self) -> LabelMap {
        reverse_map(&self.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Display text for an enum field.
///
/// Known codes resolve to their label, unknown codes show as-is and a
/// missing code shows the [`PLACEHOLDER`].
#[must_use]
pub fn resolve_label(labels: &LabelMap, code: Option<&EnumCode>) -> String {
    match code {
        Some(code) => labels
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string()),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_restore_original_when_reversed_twice() {
        let original: BTreeMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let twice = reverse_map(&reverse_map(&original));
        assert_eq!(twice, original);
    }

    #[test]
    fn should_keep_last_key_when_values_collide() {
        let map: BTreeMap<&str, i32> = [("a", 1), ("b", 1)].into_iter().collect();
        let reversed = reverse_map(&map);
        assert_eq!(reversed.len(), 1);
        assert_eq!(reversed[&1], "b");
    }

    #[test]
    fn should_treat_numeric_and_textual_codes_alike() {
        let from_number: EnumCode = serde_json::from_value(json!(1)).unwrap();
        let from_text: EnumCode = serde_json::from_value(json!("1")).unwrap();
        assert_eq!(from_number, from_text);
    }

    #[test]
    fn should_reject_null_code() {
        let result: Result<EnumCode, _> = serde_json::from_value(json!(null));
        assert!(result.is_err());
    }

    #[test]
    fn should_serialize_integer_code_as_number() {
        let value = serde_json::to_value(EnumCode::from(2)).unwrap();
        assert_eq!(value, json!(2));
    }

    #[test]
    fn should_serialize_textual_code_as_string() {
        let value = serde_json::to_value(EnumCode::from("uefi")).unwrap();
        assert_eq!(value, json!("uefi"));
    }

    #[test]
    fn should_read_label_to_code_object() {
        let map = EnumMap::from_json(&json!({"On": 1, "Off": 2, "Unknown": 0}));
        assert_eq!(map.len(), 3);
        assert_eq!(map.code("Off"), Some(&EnumCode::from(2)));
    }

    #[test]
    fn should_yield_empty_map_when_body_is_not_an_object() {
        assert!(EnumMap::from_json(&json!([1, 2])).is_empty());
        assert!(EnumMap::from_json(&json!({})).is_empty());
    }

    #[test]
    fn should_skip_entries_with_non_scalar_codes() {
        let map = EnumMap::from_json(&json!({"On": 1, "Weird": {"x": 1}}));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn should_reverse_into_code_to_label() {
        let map = EnumMap::from_pairs([("On", 1), ("Off", 2)]);
        let labels = map.labels();
        assert_eq!(labels[&EnumCode::from(1)], "On");
        assert_eq!(labels[&EnumCode::from(2)], "Off");
    }

    #[test]
    fn should_list_labels_in_code_order() {
        let map = EnumMap::from_pairs([("Redfish", 2), ("IPMI", 1), ("Not Supported", 0)]);
        assert_eq!(map.labels_by_code(), vec!["Not Supported", "IPMI", "Redfish"]);
    }

    #[test]
    fn should_name_category_when_required_label_missing() {
        let map = EnumMap::from_pairs([("Power On", 1)]);
        let err = map
            .require_code(EnumCategory::PowerActions, "Reboot")
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownLabel {
                category: "power-actions",
                label: "Reboot".to_string(),
            }
        );
    }

    #[test]
    fn should_resolve_known_code_to_label() {
        let labels = EnumMap::from_pairs([("Dell", 1)]).labels();
        assert_eq!(resolve_label(&labels, Some(&EnumCode::from(1))), "Dell");
    }

    #[test]
    fn should_show_raw_code_when_absent_from_map() {
        let labels = EnumMap::from_pairs([("Dell", 1)]).labels();
        assert_eq!(resolve_label(&labels, Some(&EnumCode::from(42))), "42");
    }

    #[test]
    fn should_show_placeholder_when_code_missing() {
        let labels = LabelMap::new();
        assert_eq!(resolve_label(&labels, None), PLACEHOLDER);
    }

    #[test]
    fn should_expose_slug_for_every_category() {
        let slugs: Vec<&str> = EnumCategory::ALL.iter().map(|c| c.slug()).collect();
        assert!(slugs.contains(&"form-factors"));
        assert!(slugs.contains(&"booking-statuses"));
        assert_eq!(slugs.len(), 10);
    }
}
