//! Public response shapes

use serde::{Deserialize, Serialize};

/// A decoded upstream field mapping (field name → native value)
pub type DecodedObject = serde_json::Map<String, serde_json::Value>;

/// Fuel or battery level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyLevel {
    /// Level exactly as decoded; `null` when the vehicle has no such
    /// subsystem
    pub percent: serde_json::Value,
}

/// Public outcome of an engine command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatus {
    Success,
    Error,
}

/// Engine action result with the translated status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineActionResult {
    pub status: EngineStatus,
    #[serde(flatten)]
    pub extra: DecodedObject,
}

/// Result of a successful dispatch, one variant per resource shape
///
/// Serializes untagged: the JSON of a variant is the whole response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PublicResult {
    /// Vehicle information, passed through as decoded
    Vehicle(DecodedObject),
    /// Door status entries, one decoded mapping per door
    Doors(Vec<DecodedObject>),
    /// Fuel or battery level
    Energy(EnergyLevel),
    /// Engine action outcome
    Engine(EngineActionResult),
}
