//! Endpoint catalog — every backend path the dashboard calls.
//!
//! Path parameters are interpolated as given; validating them is the
//! caller's job.

use rackdash_domain::enums::EnumCategory;

/// A backend operation, resolved to its path with [`Endpoint::path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `POST` form login. Carries the `no_redirect=1` marker so the backend
    /// answers with JSON instead of a redirect.
    Login,
    Logout,
    CurrentUser,
    Hosts,
    Host {
        management_ip: &'a str,
    },
    HostPower {
        management_ip: &'a str,
        power_action: &'a str,
    },
    IsoImages,
    Enum(EnumCategory),
}

impl Endpoint<'_> {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/api/auth/login?no_redirect=1".to_string(),
            Self::Logout => "/api/auth/logout".to_string(),
            Self::CurrentUser => "/api/auth/me".to_string(),
            Self::Hosts => "/api/hosts".to_string(),
            Self::Host { management_ip } => format!("/api/hosts/{management_ip}"),
            Self::HostPower {
                management_ip,
                power_action,
            } => format!("/api/hosts/{management_ip}/power/{power_action}"),
            Self::IsoImages => "/api/iso-images".to_string(),
            Self::Enum(category) => format!("/api/enums/{}", category.slug()),
        }
    }
}
