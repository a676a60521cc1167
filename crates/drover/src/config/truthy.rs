//! Coercion of loosely-typed truthy values.
//!
//! Agent configuration travels through layers that do not preserve types;
//! a flag may arrive as a bool, an integer, or any of several string
//! spellings. Coercion is total: unrecognized strings are false, matching
//! the lenient posture of the rest of the adapter.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Coerce a string spelling to a bool. `true`/`yes`/`on`/`1` (any case)
/// and non-zero numbers are true; everything else is false.
#[must_use]
pub fn coerce(value: &str) -> bool {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true")
        || value.eq_ignore_ascii_case("yes")
        || value.eq_ignore_ascii_case("on")
    {
        return true;
    }
    value.parse::<i64>().map(|n| n != 0).unwrap_or(false)
}

/// Serde adapter for config fields that accept any truthy representation.
pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct TruthyVisitor;

    impl Visitor<'_> for TruthyVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean, an integer, or a truthy string")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<bool, E> {
            Ok(value != 0)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            Ok(coerce(value))
        }
    }

    deserializer.deserialize_any(TruthyVisitor)
}
