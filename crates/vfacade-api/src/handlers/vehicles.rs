//! Vehicle resource handlers

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{Map, Value};
use vfacade_core::{EngineCommand, PublicResult, ResourceKind, VehicleId};

use crate::error::{ApiError, EMPTY_PAYLOAD_MESSAGE};
use crate::state::AppState;

/// GET /vehicles/{vehicle_id}
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<String>,
) -> Result<Json<PublicResult>, ApiError> {
    let result = state
        .facade()
        .dispatch(ResourceKind::Vehicles, &VehicleId::new(vehicle_id), None)
        .await?;
    Ok(Json(result))
}

/// GET /vehicles/{vehicle_id}/{resource}
///
/// Only the read-only sub-resources (doors, fuel, battery) answer GET.
pub async fn get_resource(
    State(state): State<AppState>,
    Path((vehicle_id, resource)): Path<(String, String)>,
) -> Result<Json<PublicResult>, ApiError> {
    let kind = match resource.parse::<ResourceKind>() {
        Ok(kind) if kind != ResourceKind::Vehicles && !kind.accepts_command() => kind,
        _ => return Err(ApiError::malformed()),
    };

    let result = state
        .facade()
        .dispatch(kind, &VehicleId::new(vehicle_id), None)
        .await?;
    Ok(Json(result))
}

/// POST /vehicles/{vehicle_id}/{resource}
///
/// Only the engine answers POST. The body must be a JSON object; its
/// `action` member, if any, is the command.
pub async fn post_resource(
    State(state): State<AppState>,
    Path((vehicle_id, resource)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<PublicResult>, ApiError> {
    let kind = match resource.parse::<ResourceKind>() {
        Ok(kind) if kind.accepts_command() => kind,
        _ => return Err(ApiError::malformed()),
    };

    if body.is_empty() {
        return Err(ApiError::BadRequest(EMPTY_PAYLOAD_MESSAGE.to_string()));
    }
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(payload)) => payload,
        _ => return Err(ApiError::malformed()),
    };

    let command = action(&payload);
    let result = state
        .facade()
        .dispatch(kind, &VehicleId::new(vehicle_id), command.as_ref())
        .await?;
    Ok(Json(result))
}

fn action(payload: &Map<String, Value>) -> Option<EngineCommand> {
    match payload.get("action") {
        None | Some(Value::Null) => None,
        Some(Value::String(action)) => Some(EngineCommand::from(action.as_str())),
        // Non-string actions never match a known command
        Some(other) => Some(EngineCommand::Other(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_action_extraction() {
        assert_eq!(
            action(&object(json!({"action": "START"}))),
            Some(EngineCommand::Start)
        );
        assert_eq!(
            action(&object(json!({"action": "HALT"}))),
            Some(EngineCommand::Other("HALT".to_string()))
        );
        assert_eq!(action(&object(json!({"speed": 3}))), None);
        assert_eq!(action(&object(json!({"action": null}))), None);
        assert_eq!(
            action(&object(json!({"action": 7}))),
            Some(EngineCommand::Other("7".to_string()))
        );
    }
}
