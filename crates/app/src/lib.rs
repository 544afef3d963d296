//! # rackdash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the browser adapter implements:
//!   - `ApiTransport` — credentialed JSON/form/file requests to the backend
//! - Catalog every backend path (`Endpoint`)
//! - Define **use-case services**:
//!   - `EnumResolver` — fetch and reverse enum tables
//!   - `HostService` — list, inspect, power, enroll and remove hosts
//!   - `IsoService` — list and upload provisioning images
//!   - `AuthService` — login, logout, current user
//! - Load the client configuration
//!
//! ## Dependency rule
//! Depends on `rackdash-domain` only (plus `futures` for joins).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
