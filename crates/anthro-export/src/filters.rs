//! Tera filters for clinical values.

use std::collections::HashMap;

use serde_json::Value;

const ABSENT: &str = "--";

fn places(args: &HashMap<String, Value>) -> usize {
    args.get("places")
        .and_then(Value::as_u64)
        .and_then(|p| usize::try_from(p).ok())
        .unwrap_or(1)
}

/// `{{ value | dash(places=1) }}`: a raw measurement, `--` when null.
pub fn dash(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let places = places(args);
    Ok(Value::String(match value {
        Value::Null => ABSENT.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(v) => format!("{v:.places$}"),
            None => n.to_string(),
        },
        Value::String(s) if s.is_empty() => ABSENT.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }))
}

/// `{{ value | metric(places=1) }}`: a derived metric, `--` when zero or null.
pub fn metric(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    match value.as_f64() {
        Some(v) if v == 0.0 => Ok(Value::String(ABSENT.to_string())),
        _ => dash(value, args),
    }
}
