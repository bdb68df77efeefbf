//! Top-level schema document.

use serde::{Deserialize, Serialize};

use super::node::{ObjectSchema, SchemaNode};
use crate::constants::JSON_SCHEMA_2020_12;

/// A complete JSON Schema document: the root node plus document-level
/// metadata. The root of a document built by this crate is always an
/// object node; the document-level `description` lives on the root node,
/// matching the flat shape of a real schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Meta-schema URI, defaults to draft 2020-12.
    #[serde(rename = "$schema", default = "default_meta_schema")]
    pub meta_schema: String,
    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub root: SchemaNode,
}

fn default_meta_schema() -> String {
    JSON_SCHEMA_2020_12.to_string()
}

impl Default for SchemaDocument {
    fn default() -> Self {
        Self {
            meta_schema: default_meta_schema(),
            id: None,
            title: None,
            root: SchemaNode::empty_closed_object(),
        }
    }
}

impl SchemaDocument {
    /// Create an empty document with the given title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            root: SchemaNode::Object(ObjectSchema {
                description: Some(description.into()),
                additional_properties: Some(false),
                ..ObjectSchema::default()
            }),
            ..Self::default()
        }
    }
}
