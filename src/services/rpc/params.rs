//! Building and checking JSON-RPC parameter objects.

use crate::models::{RpcError, RpcErrorCode};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Rewrites every unsigned integer in `value` as a `0x` hex quantity.
///
/// Strings, booleans, null, negative and fractional numbers are kept as is.
pub fn deep_hexlify(value: &Value) -> Value {
    match value {
        Value::Number(number) => match number.as_u64() {
            Some(n) => Value::String(format!("{:#x}", n)),
            None => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(deep_hexlify).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), deep_hexlify(field)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Fails with an [`RpcError`] carrying `code` unless `cond` holds.
pub fn require_cond(
    cond: bool,
    message: impl Into<String>,
    code: RpcErrorCode,
) -> Result<(), RpcError> {
    if cond {
        Ok(())
    } else {
        Err(RpcError::new(code, message))
    }
}

fn address_pattern() -> &'static Regex {
    static ADDRESS_RE: OnceLock<Regex> = OnceLock::new();
    ADDRESS_RE.get_or_init(|| Regex::new(r"(?i)^0x[a-f0-9]{10,40}$").expect("valid address regex"))
}

fn is_set(fields: &Map<String, Value>, name: &str) -> bool {
    fields.get(name).is_some_and(|value| !value.is_null())
}

/// Checks that a group of fields hangs off an address field.
///
/// Without `address_field`, none of `must_fields` or `optional_fields` may be
/// set. With it, the address must look like `0x` hex and every must field
/// has to be set. A null value counts as unset.
pub fn require_address_and_fields(
    fields: &Map<String, Value>,
    address_field: &str,
    must_fields: &[&str],
    optional_fields: &[&str],
) -> Result<(), RpcError> {
    match fields.get(address_field).filter(|value| !value.is_null()) {
        None => {
            let unexpected: Vec<&str> = must_fields
                .iter()
                .chain(optional_fields)
                .copied()
                .filter(|name| is_set(fields, name))
                .collect();
            require_cond(
                unexpected.is_empty(),
                format!("no {} but got {}", address_field, unexpected.join(",")),
                RpcErrorCode::InvalidFields,
            )
        }
        Some(address) => {
            let valid = address
                .as_str()
                .is_some_and(|address| address_pattern().is_match(address));
            require_cond(
                valid,
                format!("invalid {}", address_field),
                RpcErrorCode::InvalidFields,
            )?;

            let missing: Vec<&str> = must_fields
                .iter()
                .copied()
                .filter(|name| !is_set(fields, name))
                .collect();
            require_cond(
                missing.is_empty(),
                format!("got {} but missing {}", address_field, missing.join(",")),
                RpcErrorCode::InvalidFields,
            )
        }
    }
}
