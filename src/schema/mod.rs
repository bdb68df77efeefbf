pub mod serialization;
pub mod tree;
pub mod types;
pub mod validation;

// Re-export the data model at the schema module level
pub use types::{
    ArraySchema, BooleanSchema, NodeType, NumberSchema, ObjectSchema, PatternPropertySchema,
    SchemaDocument, SchemaError, SchemaNode, SchemaResult, StringSchema,
};
