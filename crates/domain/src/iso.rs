//! ISO images stored by the backend for provisioning.

use serde::{Deserialize, Serialize};

use crate::enums::{EnumCode, LabelMap, PLACEHOLDER, resolve_label};
use crate::format::pretty_bytes;

/// Multipart field carrying an uploaded image.
pub const UPLOAD_FIELD: &str = "iso_image";

/// An ISO image as served by `GET /api/iso-images`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsoImage {
    pub name: String,
    pub distro_name: Option<String>,
    pub version: Option<String>,
    /// Size in bytes.
    pub size: Option<u64>,
    pub full_iso_path: Option<String>,
    pub kernel_path: Option<String>,
    pub initrd_path: Option<String>,
    pub architecture: Option<EnumCode>,
    pub distro_type: Option<EnumCode>,
    pub preconfigure_type: Option<EnumCode>,
}

/// Display strings for one ISO image row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoImageView {
    pub name: String,
    pub distro: String,
    pub version: String,
    pub size: String,
    pub architecture: String,
    pub preconfigure_type: String,
}

impl IsoImageView {
    /// Project an image, resolving its enum fields.
    #[must_use]
    pub fn project(image: &IsoImage, architectures: &LabelMap, preconfigure_types: &LabelMap) -> Self {
        let text = |t: Option<&String>| {
            t.filter(|s| !s.is_empty())
                .map_or_else(|| PLACEHOLDER.to_string(), Clone::clone)
        };
        Self {
            name: image.name.clone(),
            distro: text(image.distro_name.as_ref()),
            version: text(image.version.as_ref()),
            size: pretty_bytes(image.size),
            architecture: resolve_label(architectures, image.architecture.as_ref()),
            preconfigure_type: resolve_label(preconfigure_types, image.preconfigure_type.as_ref()),
        }
    }
}

/// Decode a list of images from a response body, tolerating a non-array body.
#[must_use]
pub fn images_from_json(body: &serde_json::Value) -> Vec<IsoImage> {
    body.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| IsoImage::deserialize(item).ok())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EnumMap;
    use serde_json::json;

    #[test]
    fn should_project_image_with_resolved_enums() {
        let images = images_from_json(&json!([{
            "name": "ubuntu-24.04-live-server-amd64.iso",
            "distro_name": "Ubuntu",
            "version": "24.04",
            "size": 2_754_981_888_u64,
            "architecture": 0,
            "distro_type": 1,
            "preconfigure_type": 2
        }]));
        let arch = EnumMap::from_pairs([("x86_64", 0)]).labels();
        let pre = EnumMap::from_pairs([("Cloud-Init", 2)]).labels();
        let view = IsoImageView::project(&images[0], &arch, &pre);
        assert_eq!(view.distro, "Ubuntu");
        assert_eq!(view.size, "2.6 GB");
        assert_eq!(view.architecture, "x86_64");
        assert_eq!(view.preconfigure_type, "Cloud-Init");
    }

    #[test]
    fn should_fall_back_to_placeholders() {
        let image = IsoImage {
            name: "custom.iso".to_string(),
            ..IsoImage::default()
        };
        let view = IsoImageView::project(&image, &LabelMap::new(), &LabelMap::new());
        assert_eq!(view.version, PLACEHOLDER);
        assert_eq!(view.size, "Unknown");
        assert_eq!(view.architecture, PLACEHOLDER);
    }

    #[test]
    fn should_ignore_non_array_body() {
        assert!(images_from_json(&json!({"message": "nope"})).is_empty());
    }
}
