//! Navigation entries and active-state matching.

/// One entry of the top navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Section id matched against the current path.
    pub id: &'static str,
    pub href: &'static str,
    pub label: &'static str,
}

/// The navigation bar, in display order.
pub const NAV_ENTRIES: [NavEntry; 2] = [
    NavEntry {
        id: "home",
        href: "/",
        label: "Dashboard",
    },
    NavEntry {
        id: "iso-images",
        href: "/iso-images",
        label: "ISO Images",
    },
];

/// Section id of a path: `home` for `/`, otherwise the first segment.
#[must_use]
pub fn section_of(path: &str) -> &str {
    let first = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    if first.is_empty() { "home" } else { first }
}

impl NavEntry {
    /// Whether this entry should be highlighted for `path`.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        self.id == section_of(path)
    }
}
