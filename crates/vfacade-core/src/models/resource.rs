//! Resource kinds and vehicle identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// One of the logical vehicle data/command categories exposed by the facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// General vehicle information
    Vehicles,
    /// Door lock status
    Doors,
    /// Fuel tank level
    Fuel,
    /// Battery charge level
    Battery,
    /// Engine start/stop
    Engine,
}

impl ResourceKind {
    /// Every resource kind, in route order
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Vehicles,
        ResourceKind::Doors,
        ResourceKind::Fuel,
        ResourceKind::Battery,
        ResourceKind::Engine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Vehicles => "vehicles",
            ResourceKind::Doors => "doors",
            ResourceKind::Fuel => "fuel",
            ResourceKind::Battery => "battery",
            ResourceKind::Engine => "engine",
        }
    }

    /// Name of the upstream response field carrying the tagged payload
    pub fn container_field(&self) -> &'static str {
        match self {
            ResourceKind::Engine => "actionResult",
            _ => "data",
        }
    }

    /// Whether this resource forwards an engine command upstream
    pub fn accepts_command(&self) -> bool {
        matches!(self, ResourceKind::Engine)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownResource(s.to_string()))
    }
}

/// Opaque vehicle identifier, forwarded verbatim to upstream
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(String);

impl VehicleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for VehicleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
