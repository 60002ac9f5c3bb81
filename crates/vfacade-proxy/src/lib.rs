//! vfacade-proxy - Vehicle facade dispatcher
//!
//! Turns a `(resource, vehicle, command)` request into exactly one call
//! against the upstream vehicle service and reshapes the tagged answer into
//! the facade's public schema. All upstream failures collapse into
//! `DispatchError::NotFound`.

mod facade;
mod payload;
mod tables;
mod transform;

pub use facade::VehicleFacade;
pub use payload::build_payload;
pub use tables::FacadeTables;
pub use transform::transform;
