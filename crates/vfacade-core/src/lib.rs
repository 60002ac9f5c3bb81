//! vfacade-core - Core traits and types for the vehicle facade
//!
//! This crate holds the vocabulary shared by every other crate in the
//! workspace: resource kinds, the public result shapes, the lookup tables
//! used to talk to the upstream telemetry service, the error taxonomy, and
//! the `UpstreamTransport` trait that the HTTP client implements.

pub mod error;
pub mod models;
pub mod tables;
pub mod transport;

pub use error::{DispatchError, DispatchResult, ModelError, TransformError, TransportError};
pub use models::*;
pub use tables::{
    CommandTable, EndpointTable, StatusTable, DEFAULT_UPSTREAM_BASE, UNKNOWN_COMMAND,
};
pub use transport::{UpstreamReply, UpstreamTransport};
