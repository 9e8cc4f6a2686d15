//! Immutable key/value metadata attached to an [`ErrorValue`](crate::ErrorValue).
//!
//! Metadata is copied into owned storage when it is built, so later changes to
//! whatever map or iterator the caller started from cannot reach an error that
//! was already constructed. The map is sorted by key, which makes equality and
//! hashing independent of insertion order.
//!
//! # Examples
//!
//! ```
//! use error_or::{Metadata, MetadataValue};
//!
//! let a: Metadata = [("field", "email"), ("rule", "format")].into_iter().collect();
//! let b: Metadata = [("rule", "format"), ("field", "email")].into_iter().collect();
//!
//! assert_eq!(a, b);
//! assert_eq!(a.get("field"), Some(&MetadataValue::from("email")));
//! ```
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

use crate::types::alloc_type::{BTreeMap, String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single metadata value.
///
/// Floats compare and hash by their bit pattern so that `MetadataValue` can
/// implement `Eq` and `Hash`: `NaN` equals a `NaN` with identical bits, and
/// `0.0` differs from `-0.0`.
///
/// With `serde` each value is written with its variant tag, so `Int` and
/// `UInt` stay apart after a round-trip. Formats without non-finite numbers,
/// such as JSON, cannot carry a `NaN` or infinite `Float`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<MetadataValue>),
}

impl PartialEq for MetadataValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for MetadataValue {}

impl Hash for MetadataValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Bool(v) => v.hash(state),
            Self::Int(v) => v.hash(state),
            Self::UInt(v) => v.hash(state),
            Self::Float(v) => v.to_bits().hash(state),
            Self::Text(v) => v.hash(state),
            Self::List(v) => v.hash(state),
        }
    }
}

impl Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::UInt(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            },
        }
    }
}

macro_rules! impl_from_for_metadata_value {
    ($($source:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$source> for MetadataValue {
                #[inline]
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_for_metadata_value! {
    bool => Bool as bool,
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => UInt as u64,
    u16 => UInt as u64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    f32 => Float as f64,
    f64 => Float as f64,
    String => Text as String,
    &str => Text as String,
}

impl From<&String> for MetadataValue {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl<V: Into<MetadataValue>> From<Vec<V>> for MetadataValue {
    fn from(values: Vec<V>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Read-only metadata map.
///
/// There is no way to insert into or remove from a `Metadata` once it exists;
/// build a new one from an iterator instead.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Metadata {
    entries: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    /// Creates an empty metadata map.
    ///
    /// An empty map is still *present*: an error carrying it is not equal to
    /// one carrying no metadata at all.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a value by key.
    #[must_use]
    #[inline]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> + Clone {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over the keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + Clone {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, MetadataValue>> for Metadata {
    #[inline]
    fn from(entries: BTreeMap<String, MetadataValue>) -> Self {
        Self { entries }
    }
}

#[cfg(feature = "std")]
impl<K, V, S> From<&std::collections::HashMap<K, V, S>> for Metadata
where
    K: AsRef<str>,
    V: Clone + Into<MetadataValue>,
{
    fn from(map: &std::collections::HashMap<K, V, S>) -> Self {
        map.iter()
            .map(|(k, v)| (String::from(k.as_ref()), v.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a MetadataValue);
    type IntoIter = <&'a BTreeMap<String, MetadataValue> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
