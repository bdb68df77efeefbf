//! Error types for schema tree and editor operations.
//!
//! Every error here is recoverable: an operation that fails leaves the
//! document and selection exactly as they were before the call. Callers
//! are expected to surface the message transiently and carry on.

use crate::schema::types::NodeType;
use thiserror::Error;

/// Unified error type for all schema editing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Required submission fields were left empty (e.g. Key, Type)
    #[error("Missing required fields: {}", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },

    /// Submitted type is not one of the supported node kinds
    #[error("Unknown node type '{given}'")]
    UnknownType { given: String },

    /// Boolean default was not one of true/false/1/0
    #[error("Invalid boolean default '{value}': expected true, false, 1 or 0")]
    InvalidDefault { value: String },

    /// A non-empty numeric field failed to parse
    #[error("Invalid value for {field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    /// patternProperties input was not a well-formed `pattern:type` pair
    #[error("Invalid pattern property '{value}': expected 'pattern:type'")]
    InvalidPatternProperty { value: String },

    /// A path segment tried to descend into an incompatible node
    #[error("Invalid path segment '{segment}': cannot descend into {node_type} node")]
    InvalidPath {
        segment: String,
        node_type: NodeType,
    },

    /// A child insertion targeted a node that cannot hold children
    #[error("Invalid parent: cannot attach '{key}' to {node_type} node")]
    InvalidParent { key: String, node_type: NodeType },

    /// An object node's `required` set names a property that does not exist
    #[error("Required entry '{key}' has no matching property")]
    DanglingRequired { key: String },

    /// Imported document's root is not an object schema
    #[error("Document root must be an object node, found {node_type}")]
    InvalidRoot { node_type: NodeType },

    /// Imported text was not valid JSON, or not a JSON object
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Document could not be serialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Edit or delete was attempted with no node selected
    #[error("No node selected")]
    NoSelection,

    /// The selection no longer resolves against the current document
    #[error("Stale selection: '{path}' no longer exists in the document")]
    StaleSelection { path: String },

    /// Export was requested but no host integration is attached
    #[error("Host integration is not available")]
    HostUnavailable,
}

/// Result type alias for operations that can fail with a [`SchemaError`].
pub type SchemaResult<T> = Result<T, SchemaError>;
