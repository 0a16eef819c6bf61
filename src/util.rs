//! Serde support shared by the two chart models.
//!
//! Chart documents store time-keyed collections as JSON objects whose keys
//! are the decimal string of the millisecond value (`"1000"`,
//! `"1007.8125"`). [`TimeMap`] carries that convention for both models so
//! the key types themselves can keep serializing as plain numbers inside
//! lists.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A key type addressed by a millisecond value in serialized documents.
pub trait MillisKey: Ord + Sized {
    /// Builds the key from a parsed millisecond value, if representable.
    fn from_millis(ms: f64) -> Option<Self>;

    /// Raw millisecond value of the key.
    fn millis(&self) -> f64;
}

/// An ordered collection keyed by a time type, serialized as a JSON object
/// with millisecond-string keys.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeMap<K, V>(pub BTreeMap<K, V>);

impl<K: Ord, V> TimeMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }
}

impl<K: Ord, V> Default for TimeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Deref for TimeMap<K, V> {
    type Target = BTreeMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K, V> DerefMut for TimeMap<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TimeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K, V> IntoIterator for TimeMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::collections::btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a TimeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: MillisKey, V: Serialize> Serialize for TimeMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(&key.millis().to_string(), value)?;
        }
        map.end()
    }
}

impl<'de, K: MillisKey, V: Deserialize<'de>> Deserialize<'de> for TimeMap<K, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimeMapVisitor<K, V>(PhantomData<(K, V)>);

        impl<'de, K: MillisKey, V: Deserialize<'de>> Visitor<'de> for TimeMapVisitor<K, V> {
            type Value = TimeMap<K, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map keyed by millisecond strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = BTreeMap::new();
                while let Some(raw) = access.next_key::<String>()? {
                    let ms: f64 = raw.parse().map_err(|_| {
                        serde::de::Error::custom(format!("invalid millisecond key: {raw:?}"))
                    })?;
                    let key = K::from_millis(ms).ok_or_else(|| {
                        serde::de::Error::custom(format!("millisecond key out of range: {ms}"))
                    })?;
                    map.insert(key, access.next_value()?);
                }
                Ok(TimeMap(map))
            }
        }

        deserializer.deserialize_map(TimeMapVisitor(PhantomData))
    }
}

/// Deserializes `null` as the type's default.
///
/// Documents written by older editors use `null` for an absent collection
/// where the current format writes an empty one.
///
/// # Errors
///
/// Propagates the inner deserialization error for any non-`null` value
/// that does not match `T`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
