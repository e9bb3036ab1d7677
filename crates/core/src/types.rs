//! Core types used throughout modelddl
//!
//! The logical type tags a field rule is declared with, and the ordered set
//! of tags a single rule may carry.

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

// ============================================================================
// Logical Types
// ============================================================================

/// Logical type tag of a field rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    Boolean,
    Integer,
    String,
    Number,
    Array,
    Object,
    Null,
}

impl LogicalType {
    /// Tag name as written in model descriptors
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalType::Boolean => "boolean",
            LogicalType::Integer => "integer",
            LogicalType::String => "string",
            LogicalType::Number => "number",
            LogicalType::Array => "array",
            LogicalType::Object => "object",
            LogicalType::Null => "null",
        }
    }

    /// Get all logical types
    pub fn all() -> &'static [LogicalType] {
        &[
            LogicalType::Boolean,
            LogicalType::Integer,
            LogicalType::String,
            LogicalType::Number,
            LogicalType::Array,
            LogicalType::Object,
            LogicalType::Null,
        ]
    }
}

impl std::fmt::Display for LogicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogicalType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown logical type '{}'", s))
    }
}

// ============================================================================
// Type Sets
// ============================================================================

/// The type tags of one field rule, in declaration order.
///
/// Descriptors may declare either a single tag (`"type": "string"`) or a list
/// (`"type": ["string", "null"]`); both forms deserialize into a `TypeSet`.
/// A single-tag set serializes back to the scalar form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "TypeSetRepr")]
pub struct TypeSet(Vec<LogicalType>);

#[derive(Serialize)]
#[serde(untagged)]
enum TypeSetRepr {
    One(LogicalType),
    Many(Vec<LogicalType>),
}

const TAG_NAMES: &[&str] = &["boolean", "integer", "string", "number", "array", "object", "null"];

// Hand-written so an unknown tag is reported by name
impl<'de> Deserialize<'de> for TypeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TypeSetVisitor;

        impl<'de> Visitor<'de> for TypeSetVisitor {
            type Value = TypeSet;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a type tag or a list of type tags")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TypeSet, E> {
                LogicalType::from_str(v)
                    .map(TypeSet::single)
                    .map_err(|_| E::unknown_variant(v, TAG_NAMES))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TypeSet, A::Error> {
                let mut tags = Vec::with_capacity(seq.size_hint().unwrap_or(2));
                while let Some(tag) = seq.next_element::<LogicalType>()? {
                    tags.push(tag);
                }
                Ok(TypeSet(tags))
            }
        }

        deserializer.deserialize_any(TypeSetVisitor)
    }
}

impl From<TypeSet> for TypeSetRepr {
    fn from(set: TypeSet) -> Self {
        match set.0.as_slice() {
            [single] => TypeSetRepr::One(*single),
            _ => TypeSetRepr::Many(set.0),
        }
    }
}

impl TypeSet {
    /// Create a set from the given tags, keeping their order
    pub fn new(types: impl IntoIterator<Item = LogicalType>) -> Self {
        TypeSet(types.into_iter().collect())
    }

    /// Create a single-tag set
    pub fn single(t: LogicalType) -> Self {
        TypeSet(vec![t])
    }

    pub fn contains(&self, t: LogicalType) -> bool {
        self.0.contains(&t)
    }

    /// Whether the set admits `null`
    pub fn is_nullable(&self) -> bool {
        self.contains(LogicalType::Null)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = LogicalType> + '_ {
        self.0.iter().copied()
    }

    /// Return a copy of this set that also admits `null`
    pub fn nullable(mut self) -> Self {
        if !self.is_nullable() {
            self.0.push(LogicalType::Null);
        }
        self
    }
}

impl From<LogicalType> for TypeSet {
    fn from(t: LogicalType) -> Self {
        TypeSet::single(t)
    }
}

impl std::fmt::Display for TypeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.0.iter().map(LogicalType::as_str).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

// ============================================================================
// Tests
// ============================================================================
