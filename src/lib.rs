//! schemaforge: a form-driven editor core for JSON Schema documents.
//!
//! The crate maintains an in-memory JSON Schema (draft 2020-12) document
//! as a typed tree and applies structurally consistent add/edit/delete
//! operations submitted as form field bags, addressed by dotted key
//! paths. Rendering, the input form itself, and host integration are
//! external collaborators; the core only consumes their validated output
//! and hands back the updated document.
//!
//! Entry point: [`EditorSession`], which owns the document and the
//! transient selection and exposes every operation.
//!
//! ```
//! use schemaforge::{EditMode, EditorSession, NodeForm};
//!
//! let mut session = EditorSession::new();
//! let form = NodeForm {
//!     path: "age".to_string(),
//!     node_type: "number".to_string(),
//!     minimum: "0".to_string(),
//!     required: true,
//!     ..NodeForm::default()
//! };
//! session.add_or_edit(&form, EditMode::Add).unwrap();
//! assert!(session.export_json(false).unwrap().contains("\"age\""));
//! ```

pub mod constants;
pub mod editor;
pub mod schema;

pub use editor::{
    build_node, EditMode, EditorSelection, EditorSession, HostBridge, NodeForm, NodePath, PathStep,
};
pub use schema::types::{
    ArraySchema, BooleanSchema, NodeType, NumberSchema, ObjectSchema, PatternPropertySchema,
    SchemaDocument, SchemaError, SchemaNode, SchemaResult, StringSchema,
};
