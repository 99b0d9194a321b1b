//! Lenient field readers for provider payloads.
//!
//! The provider's JSON is machine-converted from XML: scalars arrive as
//! numbers or strings, single-element lists collapse into a bare object, empty
//! elements turn into `""` and some nested entries are JSON documents encoded
//! as strings. Every such quirk is absorbed here so the domain code only sees
//! `Option`s and `Vec`s. A value of the wrong kind altogether (a number where
//! a list belongs) is still an error.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

/// A nested entry that may be inline or JSON-encoded text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Embedded<T> {
    Inline(T),
    Encoded(String),
}

impl<T: DeserializeOwned> Embedded<T> {
    pub fn try_decode(self) -> Result<T, serde_json::Error> {
        match self {
            Embedded::Inline(value) => Ok(value),
            Embedded::Encoded(text) => serde_json::from_str(&text),
        }
    }

    /// Decodes the entry, `None` when the encoded text is not a valid `T`.
    pub fn decode(self) -> Option<T> {
        self.try_decode().ok()
    }
}

/// `null`, `""`, a single object or an array, always read as a `Vec`.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        Some(item @ Value::Object(_)) => serde_json::from_value(item)
            .map(|one| vec![one])
            .map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!(
            "expected a list or object, found {}",
            kind_of(&other)
        ))),
    }
}

/// `null`, `""` or an object, read as an optional nested block.
pub fn nested<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(block @ Value::Object(_)) => serde_json::from_value(block)
            .map(Some)
            .map_err(D::Error::custom),
        Some(other) => Err(D::Error::custom(format!(
            "expected an object, found {}",
            kind_of(&other)
        ))),
    }
}

/// Any scalar read as trimmed text; blanks, objects and arrays become `None`.
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| scalar_text(&value)))
}

/// A string kept exactly as sent; blank strings and non-strings become `None`.
pub fn opt_verbatim<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// A number or numeric string read as `u32`; anything else becomes `None`.
pub fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| scalar_i64(&value)).and_then(|n| u32::try_from(n).ok()))
}

pub fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| scalar_i64(&value)).and_then(|n| i32::try_from(n).ok()))
}

pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| scalar_i64(&value)))
}

pub fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

pub fn scalar_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
