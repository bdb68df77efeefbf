//! Fixed values used across the crate.

/// Meta-schema URI for JSON Schema draft 2020-12, the dialect every new
/// document declares.
pub const JSON_SCHEMA_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";
