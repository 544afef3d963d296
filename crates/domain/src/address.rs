//! Host management addresses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A validated dotted-quad IPv4 management address.
///
/// Accepted shapes: four decimal octets in `0..=255` separated by dots, no
/// leading zero on a multi-digit octet, no trailing dot, and the address
/// must not start with `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManagementIp(String);

impl ManagementIp {
    /// Validate and wrap an address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIpv4`] when `input` is not an
    /// accepted IPv4 address.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if is_valid_ipv4(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(ValidationError::InvalidIpv4 {
                input: input.to_string(),
            })
        }
    }

    /// Validate an address typed into a form. Surrounding whitespace is
    /// ignored; whitespace inside the address is not.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIpv4`] when the trimmed input is not
    /// an accepted IPv4 address.
    pub fn from_input(input: &str) -> Result<Self, ValidationError> {
        Self::parse(input.trim())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ManagementIp {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ManagementIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `address` is an accepted IPv4 management address.
#[must_use]
pub fn is_valid_ipv4(address: &str) -> bool {
    if address.starts_with('0') {
        return false;
    }
    let octets: Vec<&str> = address.split('.').collect();
    octets.len() == 4 && octets.iter().all(|octet| is_valid_octet(octet))
}

fn is_valid_octet(octet: &str) -> bool {
    if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if octet.len() > 1 && octet.starts_with('0') {
        return false;
    }
    octet.parse::<u16>().is_ok_and(|n| n <= 255)
}
