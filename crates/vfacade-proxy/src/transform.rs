//! Reshaping decoded upstream data into public results

use serde_json::Value;
use vfacade_core::{
    DecodedObject, EnergyLevel, EngineActionResult, PublicResult, ResourceKind,
    StatusTable, TransformError,
};

const DOORS_FIELD: &str = "doors";
const TANK_LEVEL_FIELD: &str = "tankLevel";
const BATTERY_LEVEL_FIELD: &str = "batteryLevel";
const STATUS_FIELD: &str = "status";

/// Map a decoded, filtered object into the public shape for `kind`
pub fn transform(
    kind: ResourceKind,
    data: DecodedObject,
    statuses: &StatusTable,
) -> Result<PublicResult, TransformError> {
    match kind {
        ResourceKind::Vehicles => Ok(PublicResult::Vehicle(data)),
        ResourceKind::Doors => doors(data).map(PublicResult::Doors),
        ResourceKind::Fuel => energy_level(&data, TANK_LEVEL_FIELD).map(PublicResult::Energy),
        ResourceKind::Battery => {
            energy_level(&data, BATTERY_LEVEL_FIELD).map(PublicResult::Energy)
        }
        ResourceKind::Engine => engine_result(data, statuses).map(PublicResult::Engine),
    }
}

/// The `doors` list becomes the whole body; siblings are dropped and each
/// entry is kept exactly as decoded
fn doors(mut data: DecodedObject) -> Result<Vec<DecodedObject>, TransformError> {
    let doors = match data.remove(DOORS_FIELD) {
        Some(Value::Array(doors)) => doors,
        Some(other) => {
            return Err(TransformError::invalid(
                DOORS_FIELD,
                format!("expected a list, got {other}"),
            ))
        }
        None => return Err(TransformError::MissingField(DOORS_FIELD.to_string())),
    };

    doors
        .into_iter()
        .map(|door| match door {
            Value::Object(door) => Ok(door),
            other => Err(TransformError::invalid(
                DOORS_FIELD,
                format!("expected a door mapping, got {other}"),
            )),
        })
        .collect()
}

/// The level is forwarded as decoded; `null` means the vehicle lacks the
/// subsystem and is a valid answer
fn energy_level(data: &DecodedObject, field: &str) -> Result<EnergyLevel, TransformError> {
    data.get(field)
        .cloned()
        .map(|percent| EnergyLevel { percent })
        .ok_or_else(|| TransformError::MissingField(field.to_string()))
}

fn engine_result(
    mut data: DecodedObject,
    statuses: &StatusTable,
) -> Result<EngineActionResult, TransformError> {
    let raw = data
        .remove(STATUS_FIELD)
        .ok_or_else(|| TransformError::MissingField(STATUS_FIELD.to_string()))?;
    let raw = raw
        .as_str()
        .ok_or_else(|| TransformError::invalid(STATUS_FIELD, format!("expected a string, got {raw}")))?;
    let status = statuses
        .translate(raw)
        .ok_or_else(|| TransformError::UnknownEngineStatus(raw.to_string()))?;

    Ok(EngineActionResult {
        status,
        extra: data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use vfacade_core::EngineStatus;

    fn object(value: Value) -> DecodedObject {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn run(kind: ResourceKind, data: Value) -> Result<PublicResult, TransformError> {
        transform(kind, object(data), &StatusTable::default())
    }

    fn body(result: PublicResult) -> Value {
        serde_json::to_value(result).unwrap()
    }

    #[test]
    fn test_vehicles_pass_through() {
        let data = json!({"vin": "123123412412", "color": "Metallic Silver", "fourDoorSedan": true});
        let result = run(ResourceKind::Vehicles, data.clone()).unwrap();
        assert_eq!(body(result), data);
    }

    #[test]
    fn test_doors_projection() {
        let data = json!({
            "doors": [
                {"location": "frontLeft", "locked": true},
                {"location": "frontRight", "locked": false}
            ],
            "alarm": "armed"
        });
        let result = run(ResourceKind::Doors, data).unwrap();
        assert_eq!(
            body(result),
            json!([
                {"location": "frontLeft", "locked": true},
                {"location": "frontRight", "locked": false}
            ])
        );
    }

    #[test]
    fn test_door_entries_pass_through_unchanged() {
        let data = json!({
            "doors": [
                {"location": "frontLeft", "locked": null},
                {"location": "frontRight"},
                {"locked": true, "ajar": false}
            ]
        });
        let result = run(ResourceKind::Doors, data).unwrap();
        assert_eq!(
            body(result),
            json!([
                {"location": "frontLeft", "locked": null},
                {"location": "frontRight"},
                {"locked": true, "ajar": false}
            ])
        );
    }

    #[test]
    fn test_doors_missing_or_not_a_list() {
        assert!(matches!(
            run(ResourceKind::Doors, json!({"alarm": "armed"})),
            Err(TransformError::MissingField(f)) if f == "doors"
        ));
        assert!(matches!(
            run(ResourceKind::Doors, json!({"doors": "frontLeft"})),
            Err(TransformError::InvalidField { .. })
        ));
        assert!(matches!(
            run(ResourceKind::Doors, json!({"doors": ["frontLeft"]})),
            Err(TransformError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_fuel_projection() {
        let data = json!({"tankLevel": 55.5, "batteryLevel": null, "range": 300});
        assert_eq!(
            run(ResourceKind::Fuel, data).unwrap(),
            PublicResult::Energy(EnergyLevel {
                percent: json!(55.5)
            })
        );
    }

    #[test]
    fn test_battery_projection_with_null() {
        let data = json!({"tankLevel": 30.2, "batteryLevel": null});
        let result = run(ResourceKind::Battery, data).unwrap();
        assert_eq!(body(result), json!({"percent": null}));
    }

    #[test]
    fn test_energy_level_forwarded_as_decoded() {
        assert_eq!(
            body(run(ResourceKind::Fuel, json!({"tankLevel": 55})).unwrap()),
            json!({"percent": 55})
        );
        assert_eq!(
            body(run(ResourceKind::Fuel, json!({"tankLevel": "half"})).unwrap()),
            json!({"percent": "half"})
        );
    }

    #[test]
    fn test_missing_energy_field() {
        assert!(matches!(
            run(ResourceKind::Battery, json!({"tankLevel": 30.2})),
            Err(TransformError::MissingField(f)) if f == "batteryLevel"
        ));
    }

    #[test]
    fn test_engine_status_translation() {
        assert_eq!(
            body(run(ResourceKind::Engine, json!({"status": "EXECUTED"})).unwrap()),
            json!({"status": "success"})
        );
        assert_eq!(
            body(run(ResourceKind::Engine, json!({"status": "FAILED"})).unwrap()),
            json!({"status": "error"})
        );
    }

    #[test]
    fn test_engine_keeps_sibling_fields() {
        let result = run(
            ResourceKind::Engine,
            json!({"status": "EXECUTED", "timestamp": "2017-01-01"}),
        )
        .unwrap();
        assert_eq!(
            body(result),
            json!({"status": "success", "timestamp": "2017-01-01"})
        );
    }

    #[test]
    fn test_unknown_engine_status_is_an_error() {
        assert!(matches!(
            run(ResourceKind::Engine, json!({"status": "PENDING"})),
            Err(TransformError::UnknownEngineStatus(s)) if s == "PENDING"
        ));
        assert!(matches!(
            run(ResourceKind::Engine, json!({"status": 1})),
            Err(TransformError::InvalidField { .. })
        ));
        assert!(matches!(
            run(ResourceKind::Engine, json!({})),
            Err(TransformError::MissingField(_))
        ));
    }

    #[test]
    fn test_substituted_status_table() {
        let statuses = StatusTable::new(
            [("DONE".to_string(), EngineStatus::Success)]
                .into_iter()
                .collect(),
        );
        let result = transform(
            ResourceKind::Engine,
            object(json!({"status": "DONE"})),
            &statuses,
        )
        .unwrap();
        assert_eq!(body(result), json!({"status": "success"}));
        assert!(transform(
            ResourceKind::Engine,
            object(json!({"status": "EXECUTED"})),
            &statuses
        )
        .is_err());
    }
}
