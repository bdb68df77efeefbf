//! Node construction from a submitted form.
//!
//! All typed parsing of raw form values happens here, before any tree
//! mutation: an invalid field aborts the whole operation with the
//! document untouched. Empty inputs mean the keyword is omitted from the
//! node entirely.

use indexmap::IndexMap;

use crate::editor::form::NodeForm;
use crate::schema::types::{
    ArraySchema, BooleanSchema, NodeType, NumberSchema, ObjectSchema, PatternPropertySchema,
    SchemaError, SchemaNode, SchemaResult, StringSchema,
};

/// Build a [`SchemaNode`] from the form's typed fields.
///
/// Object nodes start with empty `properties` and no `required` set;
/// array nodes get their item schema seeded from the form's item type
/// (`object` seeds an empty object schema, an empty field seeds
/// `string`). Child preservation on edits is the session's concern, not
/// the builder's.
pub fn build_node(form: &NodeForm) -> SchemaResult<SchemaNode> {
    let node_type: NodeType = form.node_type.trim().parse()?;
    let description = non_empty(&form.description);
    match node_type {
        NodeType::String => Ok(SchemaNode::String(StringSchema {
            description,
            enum_values: parse_enum_csv(&form.enum_csv),
            default: non_empty(&form.default_raw),
            min_length: parse_count("minLength", &form.min_length)?,
            max_length: parse_count("maxLength", &form.max_length)?,
            pattern: non_empty(&form.pattern),
        })),
        NodeType::Number => Ok(SchemaNode::Number(NumberSchema {
            description,
            enum_values: parse_enum_csv(&form.enum_csv),
            default: parse_number("default", &form.default_raw)?,
            minimum: parse_number("minimum", &form.minimum)?,
            maximum: parse_number("maximum", &form.maximum)?,
            exclusive_minimum: parse_number("exclusiveMinimum", &form.exclusive_minimum)?,
            exclusive_maximum: parse_number("exclusiveMaximum", &form.exclusive_maximum)?,
        })),
        NodeType::Boolean => Ok(SchemaNode::Boolean(BooleanSchema {
            description,
            default: parse_bool_default(&form.default_raw)?,
        })),
        NodeType::Object => Ok(SchemaNode::Object(ObjectSchema {
            description,
            properties: IndexMap::new(),
            required: None,
            min_properties: parse_count("minProperties", &form.min_properties)?,
            max_properties: parse_count("maxProperties", &form.max_properties)?,
            pattern_properties: parse_pattern_properties(&form.pattern_properties)?,
            additional_properties: None,
        })),
        NodeType::Array => Ok(SchemaNode::Array(ArraySchema {
            description,
            items: Some(Box::new(item_seed(&form.item_type)?)),
            min_items: parse_count("minItems", &form.min_items)?,
            max_items: parse_count("maxItems", &form.max_items)?,
        })),
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Comma-split and trim each entry. Empty entries are kept as-is; the
/// original tool never filtered them and downstream consumers tolerate
/// them.
fn parse_enum_csv(raw: &str) -> Option<Vec<String>> {
    if raw.trim().is_empty() {
        return None;
    }
    Some(raw.split(',').map(|v| v.trim().to_string()).collect())
}

fn parse_count(field: &'static str, raw: &str) -> SchemaResult<Option<u64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| SchemaError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        })
}

fn parse_number(field: &'static str, raw: &str) -> SchemaResult<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| SchemaError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        })
}

/// Boolean defaults accept `true`/`false` case-insensitively plus the
/// literal digits `1`/`0`. Anything else non-empty is rejected.
fn parse_bool_default(raw: &str) -> SchemaResult<Option<bool>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.to_lowercase().as_str() {
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        _ => Err(SchemaError::InvalidDefault {
            value: trimmed.to_string(),
        }),
    }
}

/// A single `pattern:type` pair, stored as a one-entry mapping.
fn parse_pattern_properties(
    raw: &str,
) -> SchemaResult<Option<IndexMap<String, PatternPropertySchema>>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let (pattern, type_name) = trimmed
        .rsplit_once(':')
        .ok_or_else(|| SchemaError::InvalidPatternProperty {
            value: trimmed.to_string(),
        })?;
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(SchemaError::InvalidPatternProperty {
            value: trimmed.to_string(),
        });
    }
    let node_type: NodeType =
        type_name
            .trim()
            .parse()
            .map_err(|_| SchemaError::InvalidPatternProperty {
                value: trimmed.to_string(),
            })?;
    let mut map = IndexMap::new();
    map.insert(pattern.to_string(), PatternPropertySchema { node_type });
    Ok(Some(map))
}

fn item_seed(item_type: &str) -> SchemaResult<SchemaNode> {
    let trimmed = item_type.trim();
    if trimmed.is_empty() {
        return Ok(SchemaNode::seed(NodeType::String));
    }
    Ok(SchemaNode::seed(trimmed.parse()?))
}
