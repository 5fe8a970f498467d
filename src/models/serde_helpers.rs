//! Custom serde deserializers for the ViaCEP payload.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Deserializes a loosely typed "flag" field into a `bool`.
///
/// ViaCEP signals an unknown CEP with an `erro` field. Depending on the API
/// revision it has been served as a JSON boolean or as the string `"true"`.
/// Any value JSON would consider "set" counts as a flagged CEP.
///
/// # Accepted values
/// - `true` / `false`
/// - strings: `true` when non-empty (so `"false"` and `"0"` are `true`)
/// - numbers: `true` when non-zero
/// - objects and arrays: always `true`, even when empty
/// - `null`: `false`
///
/// # Examples
/// ```text
/// Input:  {"erro": "true"}
/// Output: erro == true
/// ```
pub fn truthy_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(TruthyFlagVisitor)
}

struct TruthyFlagVisitor;

impl<'de> Visitor<'de> for TruthyFlagVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean, a string, a number or null")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
        Ok(value)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
        Ok(!value.is_empty())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
        Ok(value != 0)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
        Ok(value != 0)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<bool, E> {
        Ok(value != 0.0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_none<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<bool, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(true)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<bool, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(true)
    }
}
