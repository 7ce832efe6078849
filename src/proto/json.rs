//! JSON projection helpers.
//!
//! Decoded messages are rendered the way the protobuf JSON mapping renders
//! them: 64-bit integers as decimal strings, default-valued fields omitted.

use serde::Serializer;
use serde_json::Value;

/// Serialize an int64 field as a decimal string; zero becomes null and is pruned.
pub fn int64<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    if *value == 0 {
        serializer.serialize_none()
    } else {
        serializer.collect_str(value)
    }
}

/// Serialize a uint64 field as a decimal string; zero becomes null and is pruned.
pub fn uint64<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    if *value == 0 {
        serializer.serialize_none()
    } else {
        serializer.collect_str(value)
    }
}

/// Serialize a repeated int64 field as a list of decimal strings.
pub fn int64_list<S: Serializer>(values: &[i64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|v| v.to_string()))
}

/// Remove default-valued members from every object in `value`.
///
/// Array elements are kept as-is (a repeated field keeps all its entries);
/// objects nested inside arrays are still pruned.
pub fn prune_defaults(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for member in map.values_mut() {
                prune_defaults(member);
            }
            map.retain(|_, member| !is_default(member));
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                prune_defaults(item);
            }
        }
        _ => {}
    }
}

fn is_default(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prune_removes_defaults_recursively() {
        let mut value = json!({
            "content": "hi",
            "empty": "",
            "count": 0,
            "flag": false,
            "nested": {"zero": 0, "none": null},
            "kept": {"name": "x", "gone": []},
        });
        prune_defaults(&mut value);
        assert_eq!(value, json!({"content": "hi", "kept": {"name": "x"}}));
    }

    #[test]
    fn test_prune_keeps_array_entries() {
        let mut value = json!({"urls": ["", "a"], "users": [{"id": "1", "nick": ""}]});
        prune_defaults(&mut value);
        assert_eq!(value, json!({"urls": ["", "a"], "users": [{"id": "1"}]}));
    }

    #[test]
    fn test_int64_rendered_as_string() {
        #[derive(serde::Serialize)]
        struct Sample {
            #[serde(serialize_with = "int64")]
            id: i64,
            #[serde(serialize_with = "int64")]
            zero: i64,
            #[serde(serialize_with = "int64_list")]
            ids: Vec<i64>,
        }

        let mut value = serde_json::to_value(Sample {
            id: 7_123_456_789_012_345_678,
            zero: 0,
            ids: vec![1, -2],
        })
        .unwrap();
        prune_defaults(&mut value);
        assert_eq!(
            value,
            json!({"id": "7123456789012345678", "ids": ["1", "-2"]})
        );
    }
}
