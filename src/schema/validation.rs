//! Schema document invariant checks.
//!
//! These checks cover the structural invariants the editor maintains:
//! - every `required` entry of an object node names an existing property
//! - the document root is an object node
//!
//! They do not validate data against the schema; that is out of scope for
//! the editor core.

use crate::schema::types::{SchemaDocument, SchemaError, SchemaNode, SchemaResult};

/// Recursively verify that every object node's `required` set only names
/// keys present in its `properties` map. The first violation wins.
pub fn check_required_consistency(node: &SchemaNode) -> SchemaResult<()> {
    match node {
        SchemaNode::Object(obj) => {
            if let Some(required) = &obj.required {
                for key in required {
                    if !obj.properties.contains_key(key) {
                        return Err(SchemaError::DanglingRequired { key: key.clone() });
                    }
                }
            }
            for child in obj.properties.values() {
                check_required_consistency(child)?;
            }
            Ok(())
        }
        SchemaNode::Array(arr) => match &arr.items {
            Some(items) => check_required_consistency(items),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

/// Verify the document-level invariants: object root plus
/// required-consistency over the whole tree.
pub fn check_document(document: &SchemaDocument) -> SchemaResult<()> {
    if !document.root.is_object() {
        return Err(SchemaError::InvalidRoot {
            node_type: document.root.node_type(),
        });
    }
    check_required_consistency(&document.root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{NodeType, ObjectSchema};

    #[test]
    fn test_dangling_required_is_detected() {
        let mut root = SchemaNode::empty_object();
        root.set_child("present", SchemaNode::seed(NodeType::String))
            .unwrap();
        root.as_object_mut().unwrap().required = Some(vec!["missing".to_string()]);

        let err = check_required_consistency(&root).unwrap_err();
        assert_eq!(
            err,
            SchemaError::DanglingRequired {
                key: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_nested_nodes_are_checked() {
        let mut inner = ObjectSchema::default();
        inner.required = Some(vec!["ghost".to_string()]);
        let mut root = SchemaNode::empty_object();
        root.set_child("inner", SchemaNode::Object(inner)).unwrap();

        assert!(check_required_consistency(&root).is_err());
    }

    #[test]
    fn test_consistent_tree_passes() {
        let mut root = SchemaNode::empty_object();
        root.set_child("a", SchemaNode::seed(NodeType::Number))
            .unwrap();
        root.set_required("a", true);
        assert!(check_required_consistency(&root).is_ok());
    }

    #[test]
    fn test_non_object_root_is_rejected() {
        let document = SchemaDocument {
            root: SchemaNode::seed(NodeType::String),
            ..SchemaDocument::default()
        };
        let err = check_document(&document).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidRoot {
                node_type: NodeType::String
            }
        );
    }
}
