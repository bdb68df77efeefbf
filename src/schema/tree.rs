//! Structural tree operations.
//!
//! This module implements the mutation engine for schema trees:
//! - path resolution with lazy creation of intermediate object nodes
//! - read-only path pre-flight so failed traversals mutate nothing
//! - child insertion, replacement and removal
//! - `required` set maintenance
//!
//! Paths descend through object `properties` by name; under an array node
//! the literal segment `"items"` descends into the item schema. Any other
//! combination is a path error.

use crate::schema::types::{NodeType, SchemaError, SchemaNode, SchemaResult};

/// Path segment that selects the item schema of an array node.
pub const ITEMS_SEGMENT: &str = "items";

impl SchemaNode {
    /// Walk every segment in order, creating missing children as empty
    /// closed object nodes (and missing `items` slots as empty objects),
    /// and return the node the walk ends on.
    ///
    /// Callers pass all path segments except the final key, so the
    /// returned node is the parent the final key will be attached to.
    pub fn resolve_or_create_parent(&mut self, segments: &[&str]) -> SchemaResult<&mut SchemaNode> {
        let mut current = self;
        for segment in segments {
            current = match current {
                SchemaNode::Object(obj) => obj
                    .properties
                    .entry((*segment).to_string())
                    .or_insert_with(SchemaNode::empty_closed_object),
                SchemaNode::Array(arr) => {
                    if *segment != ITEMS_SEGMENT {
                        return Err(SchemaError::InvalidPath {
                            segment: (*segment).to_string(),
                            node_type: NodeType::Array,
                        });
                    }
                    &mut **arr
                        .items
                        .get_or_insert_with(|| Box::new(SchemaNode::empty_object()))
                }
                other => {
                    return Err(SchemaError::InvalidPath {
                        segment: (*segment).to_string(),
                        node_type: other.node_type(),
                    })
                }
            };
        }
        Ok(current)
    }

    /// Read-only counterpart of [`resolve_or_create_parent`]: verifies the
    /// walk would succeed without touching the tree.
    ///
    /// Returns the existing parent node, or `Ok(None)` once the walk runs
    /// off the existing tree. Everything past that point would be freshly
    /// created as object nodes, which always accept further segments, so
    /// the check and the later creation cannot diverge.
    ///
    /// [`resolve_or_create_parent`]: SchemaNode::resolve_or_create_parent
    pub fn resolve_parent(&self, segments: &[&str]) -> SchemaResult<Option<&SchemaNode>> {
        let mut current = self;
        for segment in segments {
            let next = match current {
                SchemaNode::Object(obj) => obj.properties.get(*segment),
                SchemaNode::Array(arr) if *segment == ITEMS_SEGMENT => arr.items.as_deref(),
                other => {
                    return Err(SchemaError::InvalidPath {
                        segment: (*segment).to_string(),
                        node_type: other.node_type(),
                    })
                }
            };
            match next {
                Some(node) => current = node,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Verify this node can hold a child under `key` without mutating it.
    pub fn check_child_slot(&self, key: &str) -> SchemaResult<()> {
        match self {
            SchemaNode::Object(_) => Ok(()),
            SchemaNode::Array(_) if key == ITEMS_SEGMENT => Ok(()),
            other => Err(SchemaError::InvalidParent {
                key: key.to_string(),
                node_type: other.node_type(),
            }),
        }
    }

    /// Insert or replace the child at `key`.
    ///
    /// On an array node the only valid key is `"items"`, which replaces
    /// the item schema. On an object node the child is inserted into
    /// `properties`, overwriting any previous entry. Scalar nodes cannot
    /// hold children.
    pub fn set_child(&mut self, key: &str, node: SchemaNode) -> SchemaResult<()> {
        match self {
            SchemaNode::Array(arr) if key == ITEMS_SEGMENT => {
                arr.items = Some(Box::new(node));
                Ok(())
            }
            SchemaNode::Object(obj) => {
                obj.properties.insert(key.to_string(), node);
                Ok(())
            }
            other => Err(SchemaError::InvalidParent {
                key: key.to_string(),
                node_type: other.node_type(),
            }),
        }
    }

    /// Remove the property at `key`, pruning it from `required` as well.
    /// Idempotent: removing an absent key is a no-op, and non-object
    /// nodes are left untouched.
    pub fn remove_child(&mut self, key: &str) {
        if let SchemaNode::Object(obj) = self {
            obj.properties.shift_remove(key);
        }
        self.set_required(key, false);
    }

    /// Add or remove `key` from this object's `required` set.
    ///
    /// The set is created on first add and dropped entirely when the last
    /// entry is removed. Idempotent in both directions; a no-op on
    /// non-object nodes.
    pub fn set_required(&mut self, key: &str, is_required: bool) {
        let SchemaNode::Object(obj) = self else {
            return;
        };
        if is_required {
            let required = obj.required.get_or_insert_with(Vec::new);
            if !required.iter().any(|k| k == key) {
                required.push(key.to_string());
            }
        } else if let Some(required) = obj.required.as_mut() {
            required.retain(|k| k != key);
            if required.is_empty() {
                obj.required = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_or_create_builds_intermediate_objects() {
        let mut root = SchemaNode::empty_object();
        let parent = root.resolve_or_create_parent(&["a", "b"]).unwrap();
        assert_eq!(parent.node_type(), NodeType::Object);

        let a = root.as_object().unwrap().properties.get("a").unwrap();
        let a_obj = a.as_object().unwrap();
        assert_eq!(a_obj.additional_properties, Some(false));
        assert!(a_obj.properties.contains_key("b"));
    }

    #[test]
    fn test_resolve_or_create_descends_into_array_items() {
        let mut root = SchemaNode::Array(Default::default());
        let parent = root.resolve_or_create_parent(&["items"]).unwrap();
        assert_eq!(parent.node_type(), NodeType::Object);
        assert!(root.as_array().unwrap().items.is_some());
    }

    #[test]
    fn test_resolve_or_create_walks_objects_and_items_in_one_pass() {
        let mut root = SchemaNode::empty_object();
        root.set_child("list", SchemaNode::Array(Default::default()))
            .unwrap();

        let parent = root
            .resolve_or_create_parent(&["list", "items", "meta"])
            .unwrap();
        assert_eq!(parent.node_type(), NodeType::Object);

        let list = root.as_object().unwrap().properties.get("list").unwrap();
        let items = list.as_array().unwrap().items.as_deref().unwrap();
        assert!(items.as_object().unwrap().properties.contains_key("meta"));
    }

    #[test]
    fn test_resolve_through_scalar_is_a_path_error() {
        let mut root = SchemaNode::empty_object();
        root.set_child("name", SchemaNode::seed(NodeType::String))
            .unwrap();
        let err = root.resolve_or_create_parent(&["name", "inner"]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidPath {
                segment: "inner".to_string(),
                node_type: NodeType::String,
            }
        );
    }

    #[test]
    fn test_non_items_segment_under_array_is_a_path_error() {
        let mut root = SchemaNode::empty_object();
        root.set_child("list", SchemaNode::Array(Default::default()))
            .unwrap();
        let err = root.resolve_or_create_parent(&["list", "first"]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPath { node_type, .. } if node_type == NodeType::Array));
    }

    #[test]
    fn test_resolve_parent_does_not_mutate() {
        let root = SchemaNode::empty_object();
        assert_eq!(root.resolve_parent(&["a", "b", "c"]).unwrap(), None);
        assert!(root.as_object().unwrap().properties.is_empty());
    }

    #[test]
    fn test_resolve_parent_reports_scalar_in_path() {
        let mut root = SchemaNode::empty_object();
        root.set_child("n", SchemaNode::seed(NodeType::Number))
            .unwrap();
        assert!(root.resolve_parent(&["n", "deeper"]).is_err());
    }

    #[test]
    fn test_set_child_on_scalar_fails() {
        let mut scalar = SchemaNode::seed(NodeType::Boolean);
        let err = scalar
            .set_child("x", SchemaNode::empty_object())
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidParent { .. }));
    }

    #[test]
    fn test_set_child_items_replaces_item_schema() {
        let mut arr = SchemaNode::Array(Default::default());
        arr.set_child("items", SchemaNode::seed(NodeType::Number))
            .unwrap();
        let items = arr.as_array().unwrap().items.as_deref().unwrap();
        assert_eq!(items.node_type(), NodeType::Number);
    }

    #[test]
    fn test_remove_child_prunes_required_and_is_idempotent() {
        let mut root = SchemaNode::empty_object();
        root.set_child("age", SchemaNode::seed(NodeType::Number))
            .unwrap();
        root.set_required("age", true);

        root.remove_child("age");
        let obj = root.as_object().unwrap();
        assert!(obj.properties.is_empty());
        assert!(obj.required.is_none());

        // second removal of the same key is a clean no-op
        root.remove_child("age");
    }

    #[test]
    fn test_set_required_is_idempotent_and_drops_empty_set() {
        let mut root = SchemaNode::empty_object();
        root.set_child("a", SchemaNode::seed(NodeType::String))
            .unwrap();

        root.set_required("a", true);
        root.set_required("a", true);
        assert_eq!(
            root.as_object().unwrap().required,
            Some(vec!["a".to_string()])
        );

        root.set_required("a", false);
        root.set_required("a", false);
        assert!(root.as_object().unwrap().required.is_none());
    }
}
