//! # rackdash-domain
//!
//! Pure domain model for the rackdash host-fleet dashboard.
//!
//! ## Responsibilities
//! - Foundational types: validation errors, timestamps, management addresses
//! - Define **Hosts** and their hardware specs as served by the backend
//! - Define **Enum maps** (label ↔ code tables) and their reversal
//! - Format display strings: capacities, storage lines, SKUs, "as of" times
//! - Project hosts and ISO images onto **view-models** consumed by the UI
//! - Hold the state machines of interactive controls (admin forms, menus)
//! - Theme, navigation and current-user presentation rules
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! HTTP boundaries are expressed as traits in the `app` crate (ports).

pub mod address;
pub mod error;
pub mod time;

pub mod controls;
pub mod enums;
pub mod format;
pub mod host;
pub mod iso;
pub mod nav;
pub mod power;
pub mod theme;
pub mod user;
pub mod view;
