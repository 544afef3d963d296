//! The signed-in user, as shown in the navigation chip.

use serde::{Deserialize, Serialize};

/// Profile served by `GET /api/auth/me`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub groups: Vec<String>,
    pub permissions: Option<String>,
    pub is_admin: bool,
}

/// Labels of the user chip and dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavUser {
    pub name: String,
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl Default for NavUser {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            full_name: String::new(),
            email: String::new(),
            role: "User".to_string(),
        }
    }
}

impl From<&UserProfile> for NavUser {
    fn from(profile: &UserProfile) -> Self {
        let username = non_empty(profile.username.as_deref());
        let display_name = non_empty(profile.display_name.as_deref());

        let role = match non_empty(profile.permissions.as_deref()) {
            Some(perms) => capitalize(perms),
            None if profile.is_admin => "Administrator".to_string(),
            None => "User".to_string(),
        };

        Self {
            name: username.or(display_name).unwrap_or("User").to_string(),
            full_name: display_name.unwrap_or_default().to_string(),
            email: non_empty(profile.email.as_deref())
                .or(username)
                .unwrap_or_default()
                .to_string(),
            role,
        }
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
