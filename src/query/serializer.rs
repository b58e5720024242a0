use serde_json::Value;
use thiserror::Error;

use crate::query::encode::{encode_component, scalar_text};

const MAPPING_OPERATOR: char = '=';
const SEPARATOR: char = '&';

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("null value at '{key}' cannot be serialized")]
    NullValue { key: String },

    #[error("top-level scalar needs a key prefix")]
    MissingKey,
}

/// Flatten a nested value into a `key=value&...` query string.
///
/// Mapping children are addressed as `prefix.key`, sequence children as
/// `prefix[index]`. Each scalar leaf yields exactly one pair and the result
/// never starts with a separator. Empty containers contribute nothing.
pub fn to_query(value: &Value, key_prefix: Option<&str>) -> Result<String, QueryError> {
    let key = key_prefix.unwrap_or("");
    if key.is_empty() && scalar_text(value).is_some() {
        return Err(QueryError::MissingKey);
    }

    let mut segments = Vec::new();
    collect(value, key, &mut segments)?;

    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(segment);
    }
    Ok(out)
}

fn collect(value: &Value, key: &str, segments: &mut Vec<String>) -> Result<(), QueryError> {
    // a nested empty member key still yields `=value`
    if let Some(text) = scalar_text(value) {
        segments.push(format!("{}{}{}", key, MAPPING_OPERATOR, encode_component(&text)));
        return Ok(());
    }

    match value {
        Value::Object(map) => {
            for (p, child) in map {
                collect(child, &composite_key(key, p, false), segments)?;
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                collect(child, &composite_key(key, &i.to_string(), true), segments)?;
            }
        }
        _ => {
            return Err(QueryError::NullValue {
                key: key.to_string(),
            });
        }
    }

    Ok(())
}

fn composite_key(prefix: &str, p: &str, sequence: bool) -> String {
    if prefix.is_empty() {
        p.to_string()
    } else if sequence {
        format!("{}[{}]", prefix, p)
    } else {
        format!("{}.{}", prefix, p)
    }
}
