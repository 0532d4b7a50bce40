use serde::Deserialize;
use serde_json::Value;

/// Accepts strings, numbers, booleans or null and converts them to a `String`.
///
/// Null becomes the empty string. Objects and arrays are rejected.
pub(crate) fn string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as DeError;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(DeError::custom(format!(
            "Expected a scalar for text field, received {other}"
        ))),
    }
}
