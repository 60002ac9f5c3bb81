//! Decoding tagged upstream values into plain JSON values
//!
//! Upstream wraps every field in `{"type": <tag>, "value": <payload>}` (or
//! `"values"` for arrays). Decoding strips the wrapper and coerces the
//! payload according to the tag.

use serde_json::{Map, Number, Value};
use vfacade_core::DecodedObject;

use crate::error::{kind_name, ConvError, ConvResult};
use crate::filter::Denylist;
use crate::tag::TypeTag;

/// Decode a response container, which must be a field mapping
pub fn decode_root(value: Value, denylist: &Denylist) -> ConvResult<DecodedObject> {
    match value {
        Value::Object(object) => decode_object(object, denylist),
        other => Err(ConvError::NotAnObject(kind_name(&other))),
    }
}

/// Decode every field of a mapping, dropping denylisted keys
pub fn decode_object(object: Map<String, Value>, denylist: &Denylist) -> ConvResult<DecodedObject> {
    object
        .into_iter()
        .filter(|(key, _)| !denylist.is_denied(key))
        .map(|(key, value)| Ok((key, decode_value(value, denylist)?)))
        .collect()
}

/// Decode a single value.
///
/// Anything that is not an object carrying a `type` key is already native
/// and comes back unchanged.
pub fn decode_value(value: Value, denylist: &Denylist) -> ConvResult<Value> {
    let mut object = match value {
        Value::Object(object) => object,
        other => return Ok(other),
    };
    let Some(raw_tag) = object.get("type") else {
        return Ok(Value::Object(object));
    };
    let tag = TypeTag::from_json(raw_tag);

    match tag {
        TypeTag::String => take_payload(&mut object, &tag),
        TypeTag::Boolean => {
            let raw = take_payload(&mut object, &tag)?;
            Ok(Value::Bool(coerce_bool(&raw)))
        }
        TypeTag::Number | TypeTag::Float => {
            let raw = take_payload(&mut object, &tag)?;
            coerce_float(&raw)
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| ConvError::invalid(&raw, "float"))
        }
        TypeTag::Integer => {
            let raw = take_payload(&mut object, &tag)?;
            coerce_int(&raw)
                .map(Value::from)
                .ok_or_else(|| ConvError::invalid(&raw, "integer"))
        }
        TypeTag::Array => decode_array(object.remove("values"), denylist),
        TypeTag::Null => Ok(Value::Null),
        TypeTag::Other(_) => Ok(object.remove("value").unwrap_or(Value::Null)),
    }
}

fn take_payload(object: &mut Map<String, Value>, tag: &TypeTag) -> ConvResult<Value> {
    object.remove("value").ok_or_else(|| ConvError::MissingField {
        tag: tag.to_string(),
        field: "value",
    })
}

/// Every entry of an array is itself a mapping of tagged fields
fn decode_array(values: Option<Value>, denylist: &Denylist) -> ConvResult<Value> {
    let entries = match values {
        Some(Value::Array(entries)) => entries,
        Some(other) => return Err(ConvError::invalid(&other, "array")),
        None => {
            return Err(ConvError::MissingField {
                tag: TypeTag::Array.to_string(),
                field: "values",
            })
        }
    };

    entries
        .into_iter()
        .map(|entry| match entry {
            Value::Object(object) => decode_object(object, denylist).map(Value::Object),
            other => Err(ConvError::NotAnObject(kind_name(&other))),
        })
        .collect::<ConvResult<Vec<_>>>()
        .map(Value::Array)
}

/// Upstream sends booleans as `"True"`/`"False"` strings
fn coerce_bool(raw: &Value) -> bool {
    match raw {
        Value::Bool(b) => *b,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                true
            } else if trimmed.eq_ignore_ascii_case("false") {
                false
            } else {
                !s.is_empty()
            }
        }
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn coerce_float(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn coerce_int(raw: &Value) -> Option<i64> {
    match raw {
        // Fractional numbers truncate toward zero; fractional strings do not parse
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn decode(value: Value) -> ConvResult<Value> {
        decode_value(value, &Denylist::default())
    }

    #[rstest]
    #[case(json!({"type": "String", "value": "Metallic Silver"}), json!("Metallic Silver"))]
    #[case(json!({"type": "Boolean", "value": "true"}), json!(true))]
    #[case(json!({"type": "Boolean", "value": "True"}), json!(true))]
    #[case(json!({"type": "Boolean", "value": "False"}), json!(false))]
    #[case(json!({"type": "Boolean", "value": true}), json!(true))]
    #[case(json!({"type": "Boolean", "value": ""}), json!(false))]
    #[case(json!({"type": "Number", "value": "30.2"}), json!(30.2))]
    #[case(json!({"type": "Float", "value": "55.5"}), json!(55.5))]
    #[case(json!({"type": "Number", "value": 12}), json!(12.0))]
    #[case(json!({"type": "Integer", "value": "5"}), json!(5))]
    #[case(json!({"type": "Integer", "value": " -3 "}), json!(-3))]
    #[case(json!({"type": "Integer", "value": 7.0}), json!(7))]
    #[case(json!({"type": "Integer", "value": 7.5}), json!(7))]
    #[case(json!({"type": "Integer", "value": -2.9}), json!(-2))]
    #[case(json!({"type": "Null", "value": "null"}), json!(null))]
    #[case(json!({"type": "Null"}), json!(null))]
    fn test_scalar_tags(#[case] input: Value, #[case] expected: Value) {
        assert_eq!(decode(input).unwrap(), expected);
    }

    #[test]
    fn test_untagged_values_pass_through() {
        assert_eq!(decode(json!("EXECUTED")).unwrap(), json!("EXECUTED"));
        assert_eq!(decode(json!(42)).unwrap(), json!(42));
        assert_eq!(decode(json!(null)).unwrap(), json!(null));
        assert_eq!(
            decode(json!({"location": "frontLeft", "locked": true})).unwrap(),
            json!({"location": "frontLeft", "locked": true})
        );
    }

    #[test]
    fn test_unknown_tag_passes_payload_through() {
        assert_eq!(
            decode(json!({"type": "Date", "value": "2017-01-01"})).unwrap(),
            json!("2017-01-01")
        );
        assert_eq!(
            decode(json!({"type": "Date", "value": {"year": 2017}})).unwrap(),
            json!({"year": 2017})
        );
        assert_eq!(decode(json!({"type": "Date"})).unwrap(), json!(null));
    }

    #[test]
    fn test_uncoercible_values_are_errors() {
        assert!(matches!(
            decode(json!({"type": "Integer", "value": "abc"})),
            Err(ConvError::InvalidValue { target: "integer", .. })
        ));
        assert!(matches!(
            decode(json!({"type": "Integer", "value": "5.5"})),
            Err(ConvError::InvalidValue { .. })
        ));
        assert!(matches!(
            decode(json!({"type": "Number", "value": "full"})),
            Err(ConvError::InvalidValue { target: "float", .. })
        ));
        // Non-finite floats have no JSON representation
        assert!(matches!(
            decode(json!({"type": "Float", "value": "inf"})),
            Err(ConvError::InvalidValue { .. })
        ));
        assert!(matches!(
            decode(json!({"type": "String"})),
            Err(ConvError::MissingField { field: "value", .. })
        ));
    }

    #[test]
    fn test_array_of_field_mappings() {
        let input = json!({
            "type": "Array",
            "values": [
                {
                    "location": {"type": "String", "value": "frontLeft"},
                    "locked": {"type": "Boolean", "value": "False"}
                },
                {
                    "location": {"type": "String", "value": "frontRight"},
                    "locked": {"type": "Boolean", "value": "True"}
                }
            ]
        });
        assert_eq!(
            decode(input).unwrap(),
            json!([
                {"location": "frontLeft", "locked": false},
                {"location": "frontRight", "locked": true}
            ])
        );
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(
            decode(json!({"type": "Array", "values": []})).unwrap(),
            json!([])
        );
    }

    #[test]
    fn test_malformed_arrays() {
        assert!(matches!(
            decode(json!({"type": "Array"})),
            Err(ConvError::MissingField { field: "values", .. })
        ));
        assert!(matches!(
            decode(json!({"type": "Array", "values": "frontLeft"})),
            Err(ConvError::InvalidValue { target: "array", .. })
        ));
        assert!(matches!(
            decode(json!({"type": "Array", "values": ["frontLeft"]})),
            Err(ConvError::NotAnObject("string"))
        ));
    }

    #[test]
    fn test_decode_vehicle_info() {
        let data = json!({
            "vin": {"type": "String", "value": "123123412412"},
            "color": {"type": "String", "value": "Metallic Silver"},
            "fourDoorSedan": {"type": "Boolean", "value": "True"},
            "twoDoorCoupe": {"type": "Boolean", "value": "False"},
            "driveTrain": {"type": "String", "value": "v8"}
        });
        let decoded = decode_root(data, &Denylist::default()).unwrap();
        assert_eq!(
            Value::Object(decoded),
            json!({
                "vin": "123123412412",
                "color": "Metallic Silver",
                "fourDoorSedan": true,
                "driveTrain": "v8"
            })
        );
    }

    #[test]
    fn test_denylist_applies_inside_arrays() {
        let data = json!({
            "twoDoorCoupe": {"type": "Boolean", "value": "True"},
            "doors": {
                "type": "Array",
                "values": [{
                    "location": {"type": "String", "value": "frontLeft"},
                    "twoDoorCoupe": {"type": "Boolean", "value": "True"},
                    "panels": {
                        "type": "Array",
                        "values": [{"twoDoorCoupe": {"type": "Null"}, "id": {"type": "Integer", "value": "1"}}]
                    }
                }]
            }
        });
        let decoded = decode_root(data, &Denylist::default()).unwrap();
        assert_eq!(
            Value::Object(decoded),
            json!({"doors": [{"location": "frontLeft", "panels": [{"id": 1}]}]})
        );
    }

    #[test]
    fn test_denylist_only_affects_mapping_keys() {
        // A denylisted name as a value is left alone
        let data = json!({"model": {"type": "String", "value": "twoDoorCoupe"}});
        let decoded = decode_root(data, &Denylist::default()).unwrap();
        assert_eq!(decoded.get("model"), Some(&json!("twoDoorCoupe")));
    }

    #[test]
    fn test_empty_denylist_keeps_everything() {
        let data = json!({"twoDoorCoupe": {"type": "Boolean", "value": "False"}});
        let decoded = decode_root(data, &Denylist::empty()).unwrap();
        assert_eq!(decoded.get("twoDoorCoupe"), Some(&json!(false)));
    }

    #[test]
    fn test_root_must_be_object() {
        assert!(matches!(
            decode_root(json!([1]), &Denylist::default()),
            Err(ConvError::NotAnObject("array"))
        ));
    }

    #[test]
    fn test_decoding_is_deterministic() {
        let data = json!({
            "tankLevel": {"type": "Number", "value": "30.2"},
            "batteryLevel": {"type": "Null", "value": "null"}
        });
        let first = decode_root(data.clone(), &Denylist::default()).unwrap();
        let second = decode_root(data, &Denylist::default()).unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
