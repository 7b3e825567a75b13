/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! A JSON document as a recursive Rust value.
//!
//! [`JsonValue`] mirrors the JSON data model — null, booleans, numbers,
//! strings, arrays, and objects — and [`parse`] decodes text into it
//! under the strict RFC 8259 grammar: no trailing commas, no comments,
//! no unquoted keys, and no trailing garbage after the document. Either
//! the entire input parses or the call fails as a whole; malformed
//! input is reported as an ordinary [`JsonError`] value, never as a
//! panic.
//!
//! Object member order is preserved from the source text so that a
//! parsed document re-serializes field-for-field ([`IndexMap`] keeps
//! insertion order), while equality compares content only.
//!
//! # Quick Start
//!
//! ```rust
//! use jsonvalue::JsonValue;
//! use jsonvalue::parse;
//!
//! let doc = parse(r#"{"name":"ada","tags":[1,2]}"#).unwrap();
//! let name = doc.as_object().and_then(|o| o.get("name"));
//! assert_eq!(name.and_then(JsonValue::as_str), Some("ada"));
//!
//! // Round-trip: re-serializing and re-parsing yields an equal tree.
//! assert_eq!(parse(&doc.to_string()).unwrap(), doc);
//!
//! assert!(parse("{bad json").is_err());
//! ```

use std::fmt;

use enum_as_inner::EnumAsInner;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use serde::de;
pub use serde_json::Number;

/// Property-based generators for randomized test input.
#[cfg(test)]
pub mod strategy;

/// The map type backing JSON objects. Preserves insertion order for
/// round-trip fidelity; equality is content equality.
pub type JsonMap = IndexMap<String, JsonValue>;

/// Any JSON value.
///
/// Numbers keep their source fidelity: integers stay integers and only
/// values written with a fraction or exponent become floats (see
/// [`Number`]).
#[derive(Clone, Debug, PartialEq, EnumAsInner)]
pub enum JsonValue {
    /// `null`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// Any JSON number.
    Number(Number),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<JsonValue>),
    /// A mapping from string keys to values, in insertion order.
    Object(JsonMap),
}

/// Error produced when [`parse`] rejects its input.
///
/// The message is human-readable and describes the failure; its exact
/// content is not contractually stable, only the presence of the error
/// is.
#[derive(Debug, thiserror::Error)]
#[error("invalid json: {0}")]
pub struct JsonError(#[from] serde_json::Error);

/// Decode `input` as a single JSON document.
///
/// The whole input must parse: trailing non-whitespace after the
/// document is an error, and no partial tree is ever returned.
///
/// # Example
///
/// ```rust
/// use jsonvalue::JsonValue;
/// use jsonvalue::parse;
///
/// assert_eq!(parse("[1, 2]").unwrap().as_array().map(Vec::len), Some(2));
/// assert!(parse("[1, 2,]").is_err()); // trailing comma
/// ```
pub fn parse(input: &str) -> Result<JsonValue, JsonError> {
    Ok(serde_json::from_str(input)?)
}

impl JsonValue {
    /// The value's string payload, if it is a string.
    ///
    /// This is the borrowed-`str` companion to the generated
    /// [`as_string`](JsonValue::as_string) accessor.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(value) => serializer.serialize_bool(*value),
            JsonValue::Number(value) => value.serialize(serializer),
            JsonValue::String(value) => serializer.serialize_str(value),
            JsonValue::Array(items) => serializer.collect_seq(items),
            JsonValue::Object(entries) => serializer.collect_map(entries),
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct JsonValueVisitor;

        impl<'de> de::Visitor<'de> for JsonValueVisitor {
            type Value = JsonValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("any valid JSON value")
            }

            fn visit_unit<E>(self) -> Result<JsonValue, E> {
                Ok(JsonValue::Null)
            }

            fn visit_none<E>(self) -> Result<JsonValue, E> {
                Ok(JsonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<JsonValue, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                JsonValue::deserialize(deserializer)
            }

            fn visit_bool<E>(self, value: bool) -> Result<JsonValue, E> {
                Ok(JsonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<JsonValue, E> {
                Ok(JsonValue::Number(value.into()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<JsonValue, E> {
                Ok(JsonValue::Number(value.into()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<JsonValue, E>
            where
                E: de::Error,
            {
                // RFC 8259 has no NaN or infinity literals, so a finite
                // check only guards non-JSON front-ends.
                Number::from_f64(value)
                    .map(JsonValue::Number)
                    .ok_or_else(|| E::custom("not a representable JSON number"))
            }

            fn visit_str<E>(self, value: &str) -> Result<JsonValue, E> {
                Ok(JsonValue::String(value.to_owned()))
            }

            fn visit_string<E>(self, value: String) -> Result<JsonValue, E> {
                Ok(JsonValue::String(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<JsonValue, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(JsonValue::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<JsonValue, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = JsonMap::new();
                while let Some((key, value)) = map.next_entry::<String, JsonValue>()? {
                    entries.insert(key, value);
                }
                Ok(JsonValue::Object(entries))
            }
        }

        deserializer.deserialize_any(JsonValueVisitor)
    }
}

/// Compact JSON text, suitable for re-parsing.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<u64> for JsonValue {
    fn from(value: u64) -> Self {
        JsonValue::Number(value.into())
    }
}

/// Non-finite floats have no JSON representation and become `Null`.
impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(JsonValue::Null, JsonValue::Number)
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_owned())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(items: Vec<JsonValue>) -> Self {
        JsonValue::Array(items)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(entries: JsonMap) -> Self {
        JsonValue::Object(entries)
    }
}

impl FromIterator<JsonValue> for JsonValue {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, JsonValue)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        JsonValue::Object(iter.into_iter().collect())
    }
}

/// Interop with [`serde_json::Value`]. Object member order follows the
/// source map's iteration order.
impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => JsonValue::Number(n),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => JsonValue::Object(
                entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            JsonValue::Number(n) => serde_json::Value::Number(n),
            JsonValue::String(s) => serde_json::Value::String(s),
            JsonValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            JsonValue::Object(entries) => serde_json::Value::Object(
                entries.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}
