pub mod owner;
pub mod pet;
pub mod query;

use log::warn;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

/// Field deserializer that never fails the surrounding form.
///
/// `null` or a value of the wrong type leaves the field at its zero value,
/// the remaining fields are still read.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }

    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        warn!("request field couldnt be decoded, using zero value: {e}");
        T::default()
    }))
}
