//! Document import and export.
//!
//! Export supports both compact and indented JSON, matching the preview
//! toggle of a typical editing surface. Import accepts arbitrary JSON
//! text and rejects (never panics on) malformed input, non-object top
//! levels, and non-object root schemas, surfacing the parser's own
//! message where one exists.
//!
//! Cycle-safety during export is structural: nodes are held by value with
//! a single strict owner each, so a cyclic document cannot be represented
//! and serialization is always a finite traversal.

use crate::schema::types::{SchemaDocument, SchemaError, SchemaResult};

/// Parse pasted JSON text into a [`SchemaDocument`].
///
/// The top-level value must be a JSON object (scalars, arrays and `null`
/// are rejected) and its `type` must be `object`.
pub fn parse_document(text: &str) -> SchemaResult<SchemaDocument> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| SchemaError::Parse {
        message: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(SchemaError::Parse {
            message: "top-level JSON value must be an object".to_string(),
        });
    }
    let document: SchemaDocument =
        serde_json::from_value(value).map_err(|e| SchemaError::Parse {
            message: e.to_string(),
        })?;
    if !document.root.is_object() {
        return Err(SchemaError::InvalidRoot {
            node_type: document.root.node_type(),
        });
    }
    Ok(document)
}

/// Serialize a document to JSON text, compact or indented.
pub fn to_json(document: &SchemaDocument, pretty: bool) -> SchemaResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    result.map_err(|e| SchemaError::Serialization {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::NodeType;

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = parse_document("not json").unwrap_err();
        assert!(matches!(err, SchemaError::Parse { .. }));
    }

    #[test]
    fn test_scalar_and_array_top_levels_are_rejected() {
        for text in [r#""just a string""#, "[1, 2, 3]", "42", "null"] {
            let err = parse_document(text).unwrap_err();
            assert!(matches!(err, SchemaError::Parse { .. }), "input: {}", text);
        }
    }

    #[test]
    fn test_non_object_root_schema_is_rejected() {
        let err = parse_document(r#"{ "type": "string" }"#).unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidRoot {
                node_type: NodeType::String
            }
        );
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let text = r#"{
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": "https://example.com/schema.json",
            "title": "parameters",
            "type": "object",
            "properties": {
                "age": { "type": "number", "minimum": 0.0, "maximum": 150.0 },
                "tags": { "type": "array", "items": { "type": "string" } }
            },
            "required": ["age"]
        }"#;
        let document = parse_document(text).unwrap();
        let compact = to_json(&document, false).unwrap();
        let reparsed = parse_document(&compact).unwrap();
        assert_eq!(document, reparsed);
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let document = SchemaDocument::default();
        let pretty = to_json(&document, true).unwrap();
        assert!(pretty.contains('\n'));
        assert!(to_json(&document, false).unwrap().len() < pretty.len());
    }
}
