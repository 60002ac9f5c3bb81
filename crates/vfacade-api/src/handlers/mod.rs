//! HTTP request handlers for the facade API

pub mod fallback;
pub mod vehicles;
