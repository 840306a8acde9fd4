#![allow(clippy::self_named_module_files)]

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};
use std::fmt;

pub mod reader;
pub mod writer;

/// Locale file contents, keyed by source text in file order
pub type TranslationMap = Map<String, Value>;

/// Every key/value pair of a JSON object in textual order, duplicates included.
///
/// Keys are kept as [`Value`] so callers can tell string keys apart from
/// anything else that ends up in the key position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPairs(pub Vec<(Value, Value)>);

impl RawPairs {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<(Value, Value)> {
        self.0
    }
}

impl<'de> Deserialize<'de> for RawPairs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawPairsVisitor;

        impl<'de> Visitor<'de> for RawPairsVisitor {
            type Value = RawPairs;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                // next_entry hands out every occurrence; nothing is collapsed here
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    pairs.push((Value::String(key), value));
                }
                Ok(RawPairs(pairs))
            }
        }

        deserializer.deserialize_map(RawPairsVisitor)
    }
}

/// Returns true for the empty-string value that marks an untranslated entry
pub fn is_empty_translation(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.is_empty())
}
