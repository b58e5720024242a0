use serde_json::{Map, Value};

/// Object-like values are mappings and sequences. `null` is a scalar.
pub fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Scalar equality with the console's `===` semantics.
///
/// Numbers compare by numeric value, so `1` equals `1.0`. Values of different
/// kinds are never equal. Two structured values are only strictly equal when
/// they are the same value in memory.
pub fn strict_equals(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(fa), Some(fb)) => fa == fb,
            _ => a == b,
        },
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Object(_), Value::Object(_)) | (Value::Array(_), Value::Array(_)) => {
            std::ptr::eq(x, y)
        }
        _ => false,
    }
}

/// Recursive key-wise equality over two structured values.
///
/// Only when both operands are object-like are their keys compared; every
/// other combination falls back to [`strict_equals`]. Arrays are compared by
/// index keys, so element order matters and `[1]` equals `{"0": 1}`.
///
/// Cyclic input is not representable in `serde_json::Value`, so recursion is
/// always bounded by the depth of the tree.
pub fn deep_equals(x: &Value, y: &Value) -> bool {
    if !is_structured(x) || !is_structured(y) {
        return strict_equals(x, y);
    }

    let keys = own_keys(x);
    if keys.len() != own_keys(y).len() {
        return false;
    }

    for key in &keys {
        let (Some(a), b) = (lookup(x, key), lookup(y, key)) else {
            return false;
        };

        match b {
            Some(b) if is_structured(a) && is_structured(b) => {
                if !deep_equals(a, b) {
                    return false;
                }
            }
            Some(b) => {
                if !strict_equals(a, b) {
                    return false;
                }
            }
            // missing on the right side is `undefined`
            None => return false,
        }
    }

    true
}

/// Explicit recursive copy of mappings and sequences.
pub fn structural_clone(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut copy = Map::with_capacity(map.len());
            for (k, v) in map {
                copy.insert(k.clone(), structural_clone(v));
            }
            Value::Object(copy)
        }
        Value::Array(items) => Value::Array(items.iter().map(structural_clone).collect()),
        scalar => scalar.clone(),
    }
}

/// Own enumerable keys: mapping keys in insertion order, array indices as strings.
pub(crate) fn own_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map.keys().cloned().collect(),
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => vec![],
    }
}

fn lookup<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key
            .parse::<usize>()
            .ok()
            .filter(|i| i.to_string() == key)
            .and_then(|i| items.get(i)),
        _ => None,
    }
}
