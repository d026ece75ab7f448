//! Format-agnostic data model for the documentation catalog.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Documentation attached to one hosting API member.
///
/// Attribute order here is the order they are written to the binary pack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase", deny_unknown_fields)]
pub struct ApiDetails {
    /// Line-anchored link into the upstream native header
    pub help_link: Option<String>,
    pub description: Option<String>,
    pub remarks: Option<String>,
    pub return_value: Option<String>,
    /// Struct members, by name
    pub fields: Option<OrderedMap<String>>,
    /// Function parameters, by name
    pub parameters: Option<OrderedMap<String>>,
}

impl ApiDetails {
    /// Whether any attribute beyond the help link is populated.
    pub fn is_informative(&self) -> bool {
        self.description.is_some()
            || self.remarks.is_some()
            || self.return_value.is_some()
            || self.fields.as_ref().is_some_and(|f| !f.is_empty())
            || self.parameters.as_ref().is_some_and(|p| !p.is_empty())
    }
}

/// String-keyed map that keeps insertion order and refuses duplicate keys.
///
/// Serializes as a map, so JSON sees an object and bincode sees a
/// length-prefixed sequence of key/value pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key`, or hand the key back if it is already present.
    pub fn try_insert(&mut self, key: impl Into<String>, value: V) -> Result<(), String> {
        let key = key.into();
        if self.contains_key(&key) {
            return Err(key);
        }
        self.entries.push((key, value));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Upper bound on entries reserved from a decoder's length hint.
pub(crate) const PREALLOC_LIMIT: usize = 4096;

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map with unique string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0).min(PREALLOC_LIMIT)),
        };
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.try_insert(key, value)
                .map_err(|key| de::Error::custom(format!("duplicate key `{}`", key)))?;
        }
        Ok(map)
    }
}
