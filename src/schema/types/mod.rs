pub mod document;
pub mod errors;
pub mod node;

pub use document::SchemaDocument;
pub use errors::{SchemaError, SchemaResult};
pub use node::{
    ArraySchema, BooleanSchema, NodeType, NumberSchema, ObjectSchema, PatternPropertySchema,
    SchemaNode, StringSchema,
};
