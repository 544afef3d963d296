//! Application services — use-case implementations.
//!
//! Each service struct accepts a transport implementation via a generic
//! parameter (constructor injection), keeping this layer decoupled from the
//! browser. Services that need enum tables clone the transport handle into
//! their own [`EnumResolver`](enum_service::EnumResolver).

pub mod auth_service;
pub mod enum_service;
pub mod host_service;
pub mod iso_service;
