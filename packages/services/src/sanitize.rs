use serde_json::Value;

/// Fields redacted from logged form payloads.
pub const SENSITIVE_FIELDS: [&str; 2] = ["password", "confirmPassword"];

const REDACTED: &str = "[REDACTED]";

/// Replace the default sensitive fields of a JSON payload before logging.
pub fn sanitize_payload(value: Value) -> Value {
    sanitize_fields(value, &SENSITIVE_FIELDS)
}

/// Replace the named top-level fields with a redaction marker. Only fields
/// present in the payload are touched.
pub fn sanitize_fields(mut value: Value, sensitive: &[&str]) -> Value {
    if let Value::Object(map) = &mut value {
        for field in sensitive {
            if let Some(entry) = map.get_mut(*field) {
                *entry = Value::String(REDACTED.to_string());
            }
        }
    }
    value
}
