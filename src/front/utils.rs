//! Helpers shared by the handlers

use log::warn;
use serde::de::DeserializeOwned;

use crate::front::errors;

/// Decodes a JSON body, falling back to `T::default()` when it is malformed.
///
/// Only the first JSON value of the body is read. It must be an object,
/// anything else yields the default payload. Fields are decoded one by one by
/// the forms, so a missing, `null` or mistyped field is zero valued while the
/// others are kept.
pub fn decode_json_or_default<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<serde_json::Value>()
        .next();

    match value {
        Some(Ok(value @ serde_json::Value::Object(_))) => serde_json::from_value(value)
            .unwrap_or_else(|e| {
                warn!("request body couldnt be decoded, using empty payload: {e}");
                T::default()
            }),
        Some(Ok(value)) => {
            warn!("request body is not a JSON object, using empty payload: {value}");
            T::default()
        }
        Some(Err(e)) => {
            warn!("request body couldnt be decoded, using empty payload: {e}");
            T::default()
        }
        None => T::default(),
    }
}

/// Parses an identifier taken from the query string.
///
/// A missing value counts as invalid.
pub fn parse_id_param(name: &'static str, value: Option<&str>) -> Result<i64, errors::UserError> {
    value
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or(errors::UserError::InvalidQueryParam(name))
}
