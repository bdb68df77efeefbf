//! The submitted field bag.
//!
//! A [`NodeForm`] is the single explicit input record for node
//! construction: every field arrives as the raw string a form surface
//! would hold, and typed parsing happens in one place
//! ([`builder`](crate::editor::builder)). This keeps attribute extraction
//! decoupled from any UI technology.
//!
//! Empty string fields mean "not provided" and the corresponding keyword
//! is omitted from the built node.

use crate::schema::types::{ObjectSchema, SchemaNode};

/// Raw form values for one add/edit submission.
#[derive(Debug, Clone, Default)]
pub struct NodeForm {
    /// Dot-separated key path of the node being added or edited.
    pub path: String,
    /// Node type name: string, number, boolean, object or array.
    pub node_type: String,
    pub description: String,
    /// Comma-separated enum entries; split and trimmed on build.
    pub enum_csv: String,
    /// Default value in its raw string form, parsed per node type.
    pub default_raw: String,
    /// Whether the node is listed in its parent's `required` set.
    pub required: bool,

    // number fields
    pub minimum: String,
    pub maximum: String,
    pub exclusive_minimum: String,
    pub exclusive_maximum: String,

    // string fields
    pub min_length: String,
    pub max_length: String,
    pub pattern: String,

    // object fields
    pub min_properties: String,
    pub max_properties: String,
    /// A single `pattern:type` pair.
    pub pattern_properties: String,

    // array fields
    pub min_items: String,
    pub max_items: String,
    /// Item schema type for array nodes; empty means string.
    pub item_type: String,
}

impl NodeForm {
    /// Reconstruct the form a UI would display for an existing node, with
    /// `key` as the path and `required` reflecting the parent's set.
    /// This is the inverse of building a node from a form.
    pub fn from_node(key: &str, node: &SchemaNode, required: bool) -> Self {
        let mut form = NodeForm {
            path: key.to_string(),
            node_type: node.node_type().to_string(),
            description: node.description().unwrap_or_default().to_string(),
            required,
            ..NodeForm::default()
        };

        match node {
            SchemaNode::String(s) => {
                form.enum_csv = join_enum(&s.enum_values);
                form.default_raw = s.default.clone().unwrap_or_default();
                form.min_length = count_field(s.min_length);
                form.max_length = count_field(s.max_length);
                form.pattern = s.pattern.clone().unwrap_or_default();
            }
            SchemaNode::Number(n) => {
                form.enum_csv = join_enum(&n.enum_values);
                form.default_raw = number_field(n.default);
                form.minimum = number_field(n.minimum);
                form.maximum = number_field(n.maximum);
                form.exclusive_minimum = number_field(n.exclusive_minimum);
                form.exclusive_maximum = number_field(n.exclusive_maximum);
            }
            SchemaNode::Boolean(b) => {
                form.default_raw = b.default.map(|v| v.to_string()).unwrap_or_default();
            }
            SchemaNode::Object(obj) => {
                form.min_properties = count_field(obj.min_properties);
                form.max_properties = count_field(obj.max_properties);
                form.pattern_properties = join_pattern_properties(obj);
            }
            SchemaNode::Array(arr) => {
                form.min_items = count_field(arr.min_items);
                form.max_items = count_field(arr.max_items);
                if let Some(items) = &arr.items {
                    form.item_type = items.node_type().to_string();
                }
            }
        }
        form
    }
}

fn join_enum(values: &Option<Vec<String>>) -> String {
    values.as_ref().map(|v| v.join(",")).unwrap_or_default()
}

fn count_field(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn number_field(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn join_pattern_properties(obj: &ObjectSchema) -> String {
    obj.pattern_properties
        .as_ref()
        .and_then(|map| map.iter().next())
        .map(|(pattern, stub)| format!("{}:{}", pattern, stub.node_type))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{NumberSchema, StringSchema};

    #[test]
    fn test_from_string_node_populates_constraints() {
        let node = SchemaNode::String(StringSchema {
            description: Some("A test string".to_string()),
            min_length: Some(5),
            max_length: Some(10),
            pattern: Some("^[a-z]+$".to_string()),
            default: Some("abcde".to_string()),
            ..StringSchema::default()
        });
        let form = NodeForm::from_node("testString", &node, true);
        assert_eq!(form.path, "testString");
        assert_eq!(form.node_type, "string");
        assert_eq!(form.description, "A test string");
        assert_eq!(form.min_length, "5");
        assert_eq!(form.max_length, "10");
        assert_eq!(form.pattern, "^[a-z]+$");
        assert_eq!(form.default_raw, "abcde");
        assert!(form.required);
    }

    #[test]
    fn test_from_number_node_leaves_unset_fields_empty() {
        let node = SchemaNode::Number(NumberSchema {
            minimum: Some(0.0),
            ..NumberSchema::default()
        });
        let form = NodeForm::from_node("n", &node, false);
        assert_eq!(form.minimum, "0");
        assert_eq!(form.maximum, "");
        assert_eq!(form.default_raw, "");
    }

    #[test]
    fn test_from_array_node_reports_item_type() {
        let mut arr = crate::schema::types::ArraySchema::default();
        arr.items = Some(Box::new(SchemaNode::empty_object()));
        let form = NodeForm::from_node("list", &SchemaNode::Array(arr), false);
        assert_eq!(form.item_type, "object");
    }
}
