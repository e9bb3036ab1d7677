//! Relation descriptors between models
//!
//! Relations are owned by the model layer; modelddl only reads them to work
//! out which foreign-key columns deserve an index.

use serde::{Deserialize, Serialize};

// ============================================================================
// ModelRef
// ============================================================================

/// Read-only view of a related model: its identity and table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelRef {
    /// Model name (e.g., "User")
    pub name: String,

    /// Table the model is stored in (e.g., "users")
    pub table: String,
}

impl ModelRef {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
        }
    }
}

// ============================================================================
// RelationMode
// ============================================================================

/// How the two sides of a relation are linked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationMode {
    /// `a` holds the key pointing at `b`'s owner
    Parent,
    /// `b` holds a key pointing back at `a` (one)
    Child,
    /// `b` holds a key pointing back at `a` (many)
    Children,
    /// Linked through a junction model; any other mode name lands here
    #[serde(other)]
    Through,
}

impl std::fmt::Display for RelationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RelationMode::Parent => "parent",
            RelationMode::Child => "child",
            RelationMode::Children => "children",
            RelationMode::Through => "through",
        };
        f.write_str(s)
    }
}

// ============================================================================
// RelationDescriptor
// ============================================================================

/// A structural link between two models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    pub mode: RelationMode,

    /// Owning side
    pub a: ModelRef,

    /// Related side
    pub b: ModelRef,

    /// Key field on `a`, already selected for `mode`
    #[serde(alias = "_a_key_by_mode")]
    pub a_key: String,

    /// Key field on `b`, already selected for `mode`
    #[serde(alias = "_b_key_by_mode")]
    pub b_key: String,

    /// Junction model, for `Through` relations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_via: Option<ModelRef>,

    /// Key field on the junction table pointing at `a`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via_a_key: Option<String>,
}

impl RelationDescriptor {
    fn new(
        mode: RelationMode,
        a: ModelRef,
        a_key: impl Into<String>,
        b: ModelRef,
        b_key: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            a,
            b,
            a_key: a_key.into(),
            b_key: b_key.into(),
            class_via: None,
            via_a_key: None,
        }
    }

    /// `a` owns one `b`; `b.b_key` references `a`
    pub fn child(a: ModelRef, a_key: impl Into<String>, b: ModelRef, b_key: impl Into<String>) -> Self {
        Self::new(RelationMode::Child, a, a_key, b, b_key)
    }

    /// `a` owns many `b`; `b.b_key` references `a`
    pub fn children(
        a: ModelRef,
        a_key: impl Into<String>,
        b: ModelRef,
        b_key: impl Into<String>,
    ) -> Self {
        Self::new(RelationMode::Children, a, a_key, b, b_key)
    }

    /// `a.a_key` references its parent `b`
    pub fn parent(a: ModelRef, a_key: impl Into<String>, b: ModelRef, b_key: impl Into<String>) -> Self {
        Self::new(RelationMode::Parent, a, a_key, b, b_key)
    }

    /// `a` and `b` linked through the `via` junction model
    pub fn through(
        a: ModelRef,
        a_key: impl Into<String>,
        b: ModelRef,
        b_key: impl Into<String>,
        via: ModelRef,
        via_a_key: impl Into<String>,
    ) -> Self {
        let mut rel = Self::new(RelationMode::Through, a, a_key, b, b_key);
        rel.class_via = Some(via);
        rel.via_a_key = Some(via_a_key.into());
        rel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_key_by_mode_aliases() {
        let rel: RelationDescriptor = serde_json::from_value(json!({
            "mode": "children",
            "a": {"name": "User", "table": "users"},
            "b": {"name": "Post", "table": "posts"},
            "_a_key_by_mode": "id",
            "_b_key_by_mode": "user_id"
        }))
        .unwrap();

        assert_eq!(rel.mode, RelationMode::Children);
        assert_eq!(rel.b_key, "user_id");
        assert!(rel.class_via.is_none());
    }

    #[test]
    fn test_unknown_mode_is_through() {
        let rel: RelationDescriptor = serde_json::from_value(json!({
            "mode": "many",
            "a": {"name": "Post", "table": "posts"},
            "b": {"name": "Tag", "table": "tags"},
            "a_key": "id",
            "b_key": "id",
            "class_via": {"name": "PostTag", "table": "post_tags"},
            "via_a_key": "post_id"
        }))
        .unwrap();

        assert_eq!(rel.mode, RelationMode::Through);
        assert_eq!(rel.via_a_key.as_deref(), Some("post_id"));
    }

    #[test]
    fn test_through_builder() {
        let rel = RelationDescriptor::through(
            ModelRef::new("Post", "posts"),
            "id",
            ModelRef::new("Tag", "tags"),
            "id",
            ModelRef::new("PostTag", "post_tags"),
            "post_id",
        );
        assert_eq!(rel.mode.to_string(), "through");
        assert_eq!(rel.class_via.unwrap().table, "post_tags");
    }
}
