// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server-assigned identifiers.
//!
//! The API is not consistent about whether ids travel as JSON numbers or
//! strings. Both forms are folded into one canonical [`Id`] when a payload
//! is decoded, so lookups compare ids with plain equality.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier assigned by the API.
///
/// The canonical form is the decimal/text representation: `Id::from(3)`
/// and `Id::from("3")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    /// Returns the canonical text form, suitable for URL paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id(value)
    }
}

impl From<&String> for Id {
    fn from(value: &String) -> Self {
        Id(value.clone())
    }
}

impl From<&Id> for Id {
    fn from(value: &Id) -> Self {
        value.clone()
    }
}

impl From<u64> for Id {
    fn from(value: u64) -> Self {
        Id(value.to_string())
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id(value.to_string())
    }
}

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Id(value.to_string())
    }
}

impl From<i32> for Id {
    fn from(value: i32) -> Self {
        Id(value.to_string())
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => Id::from(n),
            RawId::Signed(n) => Id::from(n),
            RawId::Text(s) => Id(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_forms_are_equal() {
        assert_eq!(Id::from(3u64), Id::from("3"));
        assert_eq!(Id::from(-7i64), Id::from("-7"));
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let a: Id = serde_json::from_str("42").unwrap();
        let b: Id = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "42");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Id::from(5u64)).unwrap();
        assert_eq!(json, "\"5\"");
    }

    #[test]
    fn test_rejects_non_scalar() {
        assert!(serde_json::from_str::<Id>("[1]").is_err());
        assert!(serde_json::from_str::<Id>("null").is_err());
    }
}
