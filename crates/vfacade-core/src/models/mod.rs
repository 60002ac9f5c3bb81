//! Shared data models for the vehicle facade

mod command;
mod request;
mod resource;
mod result;

pub use command::*;
pub use request::*;
pub use resource::*;
pub use result::*;
