//! Shared helpers for the editor integration tests.

use schemaforge::{EditMode, EditorSession, NodeForm};

/// Initialize test logging once per process; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A form with just the key path and type filled in.
pub fn form(path: &str, node_type: &str) -> NodeForm {
    NodeForm {
        path: path.to_string(),
        node_type: node_type.to_string(),
        ..NodeForm::default()
    }
}

/// Add a node and panic on failure, for test setup steps.
pub fn add(session: &mut EditorSession, submitted: NodeForm) {
    session
        .add_or_edit(&submitted, EditMode::Add)
        .unwrap_or_else(|e| panic!("setup add of '{}' failed: {}", submitted.path, e));
}

/// The serialized document as a JSON value, for structural assertions.
pub fn document_json(session: &EditorSession) -> serde_json::Value {
    serde_json::from_str(&session.export_json(false).unwrap()).unwrap()
}
