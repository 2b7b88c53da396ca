//! Integer record identifiers and key coercion.

use serde::{Deserialize, Deserializer, de::Error as _};

/// Integer key shared by every stored record kind.
pub trait RecordKey: Copy + Eq + std::fmt::Debug + std::fmt::Display {
    /// Wraps a raw integer value.
    fn from_value(value: u64) -> Self;

    /// Returns the raw integer value.
    fn value(self) -> u64;

    /// Coerces a loosely formatted key into an identifier.
    ///
    /// Leading whitespace and an optional `+` sign are skipped and the
    /// longest run of ASCII digits is parsed, so `" 12"` and `"12abc"` both
    /// yield `12`. Anything without leading digits, a zero, or a value that
    /// overflows yields `None`.
    #[must_use]
    fn coerce(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits_end = unsigned
            .char_indices()
            .find(|(_, ch)| !ch.is_ascii_digit())
            .map_or(unsigned.len(), |(index, _)| index);
        let digits = unsigned.get(..digits_end)?;
        match digits.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(value) => Some(Self::from_value(value)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseKey {
    Number(u64),
    Text(String),
}

/// Deserializes an optional reference to another record.
///
/// Accepts a number, a numeric string coerced through
/// [`RecordKey::coerce`], or `null`/`""` for no reference.
pub(crate) fn deserialize_optional_key<'de, D, K>(deserializer: D) -> Result<Option<K>, D::Error>
where
    D: Deserializer<'de>,
    K: RecordKey,
{
    match Option::<LooseKey>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LooseKey::Number(value)) => Ok(Some(K::from_value(value))),
        Some(LooseKey::Text(raw)) if raw.trim().is_empty() => Ok(None),
        Some(LooseKey::Text(raw)) => K::coerce(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid record id '{raw}'"))),
    }
}

/// Declares a transparent integer identifier newtype implementing
/// [`RecordKey`].
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from its integer value.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }
        }

        impl $crate::store::RecordKey for $name {
            fn from_value(value: u64) -> Self {
                Self(value)
            }

            fn value(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use record_id;
