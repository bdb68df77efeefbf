//! Schema node data model.
//!
//! A [`SchemaNode`] is one subtree of a JSON Schema document: a node kind
//! plus the constraint keywords that kind supports and, for containers,
//! its child nodes. The enum is internally tagged on the `type` keyword,
//! so a JSON value without a `type` field fails deserialization instead
//! of passing through as an untyped blob.
//!
//! Keyword spellings follow JSON Schema draft 2020-12 (`minLength`,
//! `patternProperties`, ...). Optional keywords that are unset are omitted
//! from the serialized output entirely, never written as zero or null.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::SchemaError;

/// The supported JSON Schema node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl NodeType {
    /// Keyword form as it appears in a schema document.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::String => "string",
            NodeType::Number => "number",
            NodeType::Boolean => "boolean",
            NodeType::Object => "object",
            NodeType::Array => "array",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(NodeType::String),
            "number" => Ok(NodeType::Number),
            "boolean" => Ok(NodeType::Boolean),
            "object" => Ok(NodeType::Object),
            "array" => Ok(NodeType::Array),
            other => Err(SchemaError::UnknownType {
                given: other.to_string(),
            }),
        }
    }
}

/// One JSON Schema subtree, tagged by its `type` keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaNode {
    String(StringSchema),
    Number(NumberSchema),
    Boolean(BooleanSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
}

/// Constraints for a `string` node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Constraints for a `number` node.
///
/// No ordering cross-check is performed between the bounds; a schema with
/// `minimum > maximum` is accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
}

/// Constraints for a `boolean` node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BooleanSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// Constraints and children for an `object` node.
///
/// Property insertion order is preserved for display; `required` names a
/// subset of the `properties` keys and is dropped entirely when it
/// becomes empty rather than serialized as `[]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, SchemaNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_properties: Option<IndexMap<String, PatternPropertySchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
}

/// Constraints and the item schema for an `array` node.
///
/// Only single-schema `items` is supported, not the tuple form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArraySchema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
}

/// Minimal schema stub used as a `patternProperties` value: carries only
/// the node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternPropertySchema {
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

impl SchemaNode {
    /// A fresh empty object node.
    pub fn empty_object() -> Self {
        SchemaNode::Object(ObjectSchema::default())
    }

    /// A fresh empty object node that rejects undeclared properties.
    /// Used for intermediate nodes created during path traversal.
    pub fn empty_closed_object() -> Self {
        SchemaNode::Object(ObjectSchema {
            additional_properties: Some(false),
            ..ObjectSchema::default()
        })
    }

    /// A minimal node of the given kind, used to seed array item schemas.
    pub fn seed(node_type: NodeType) -> Self {
        match node_type {
            NodeType::String => SchemaNode::String(StringSchema::default()),
            NodeType::Number => SchemaNode::Number(NumberSchema::default()),
            NodeType::Boolean => SchemaNode::Boolean(BooleanSchema::default()),
            NodeType::Object => SchemaNode::empty_object(),
            NodeType::Array => SchemaNode::Array(ArraySchema::default()),
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self {
            SchemaNode::String(_) => NodeType::String,
            SchemaNode::Number(_) => NodeType::Number,
            SchemaNode::Boolean(_) => NodeType::Boolean,
            SchemaNode::Object(_) => NodeType::Object,
            SchemaNode::Array(_) => NodeType::Array,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            SchemaNode::String(s) => s.description.as_deref(),
            SchemaNode::Number(n) => n.description.as_deref(),
            SchemaNode::Boolean(b) => b.description.as_deref(),
            SchemaNode::Object(o) => o.description.as_deref(),
            SchemaNode::Array(a) => a.description.as_deref(),
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, SchemaNode::Object(_))
    }

    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            SchemaNode::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ObjectSchema> {
        match self {
            SchemaNode::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArraySchema> {
        match self {
            SchemaNode::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut ArraySchema> {
        match self {
            SchemaNode::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

impl ObjectSchema {
    /// Whether `key` is listed in this object's `required` set.
    pub fn requires(&self, key: &str) -> bool {
        self.required
            .as_ref()
            .is_some_and(|required| required.iter().any(|k| k == key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_round_trip() {
        for name in ["string", "number", "boolean", "object", "array"] {
            let node_type: NodeType = name.parse().unwrap();
            assert_eq!(node_type.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_node_type_rejected() {
        let err = "integer".parse::<NodeType>().unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownType {
                given: "integer".to_string()
            }
        );
    }

    #[test]
    fn test_string_node_serializes_camel_case_and_omits_empty() {
        let node = SchemaNode::String(StringSchema {
            min_length: Some(5),
            ..StringSchema::default()
        });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "string", "minLength": 5 })
        );
    }

    #[test]
    fn test_missing_type_tag_is_an_error() {
        let result: Result<SchemaNode, _> =
            serde_json::from_str(r#"{ "description": "no type here" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_object_node_deserializes_without_properties() {
        let node: SchemaNode = serde_json::from_str(r#"{ "type": "object" }"#).unwrap();
        let obj = node.as_object().unwrap();
        assert!(obj.properties.is_empty());
        assert!(obj.required.is_none());
    }

    #[test]
    fn test_properties_preserve_insertion_order() {
        let mut obj = ObjectSchema::default();
        for key in ["zebra", "alpha", "middle"] {
            obj.properties
                .insert(key.to_string(), SchemaNode::seed(NodeType::String));
        }
        let keys: Vec<_> = obj.properties.keys().cloned().collect();
        assert_eq!(keys, ["zebra", "alpha", "middle"]);
    }
}
