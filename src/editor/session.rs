//! The editing session: one document, one selection, and the operations
//! that mutate them.
//!
//! The session replaces any ambient global state: every operation takes
//! the session by reference, which keeps the core testable with no UI
//! attached. Operations are atomic with respect to the document: all
//! validation (field presence, node construction, read-only path
//! checks) happens before the first mutation, so a failed call leaves
//! the document exactly as it was.

use log::{info, warn};

use crate::editor::builder::build_node;
use crate::editor::form::NodeForm;
use crate::editor::selection::{EditMode, EditorSelection, NodePath};
use crate::schema::serialization;
use crate::schema::tree::ITEMS_SEGMENT;
use crate::schema::types::{SchemaDocument, SchemaError, SchemaNode, SchemaResult};

/// Host-application hook that receives the exported schema text.
/// Implementations bridge to whatever surrounds the editor; the bridge
/// may be absent entirely, which is reported, never fatal.
pub trait HostBridge {
    fn save_schema(&self, schema_json: &str) -> SchemaResult<()>;
}

/// A single-document editing session.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    document: SchemaDocument,
    selection: EditorSelection,
}

impl EditorSession {
    /// Start a session with an empty untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session around an existing document.
    pub fn with_document(document: SchemaDocument) -> Self {
        Self {
            document,
            selection: EditorSelection::default(),
        }
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    pub fn selection(&self) -> &EditorSelection {
        &self.selection
    }

    /// Apply one form submission as an add or an edit.
    ///
    /// Adds split the submitted path on `.` and traverse from the
    /// selected node (or the document root when nothing is selected),
    /// creating missing intermediate objects. Edits target the selected
    /// node's parent directly: the path is not re-traversed, the final
    /// segment becomes the (possibly renamed) key, and a previously
    /// built-out child tree survives when the replacement node arrives
    /// empty.
    pub fn add_or_edit(&mut self, form: &NodeForm, mode: EditMode) -> SchemaResult<()> {
        let path = form.path.trim();
        let mut missing = Vec::new();
        if path.is_empty() {
            missing.push("Key");
        }
        if form.node_type.trim().is_empty() {
            missing.push("Type");
        }
        if !missing.is_empty() {
            return Err(SchemaError::MissingFields { missing });
        }

        let node = build_node(form)?;

        let segments: Vec<&str> = path.split('.').collect();
        let (new_key, intermediate) = match segments.split_last() {
            Some(split) => split,
            None => {
                return Err(SchemaError::MissingFields {
                    missing: vec!["Key"],
                })
            }
        };

        match mode {
            EditMode::Add => self.apply_add(intermediate, new_key, node, form.required),
            EditMode::Edit => self.apply_edit(new_key, node, form.required),
        }
    }

    fn apply_add(
        &mut self,
        intermediate: &[&str],
        key: &str,
        node: SchemaNode,
        is_required: bool,
    ) -> SchemaResult<()> {
        let base_path = self
            .selection
            .selected_path()
            .cloned()
            .unwrap_or_else(NodePath::root);

        // Pre-flight on the current tree: a failing path mutates nothing.
        {
            let base = base_path
                .resolve(&self.document.root)
                .ok_or_else(|| SchemaError::StaleSelection {
                    path: base_path.to_string(),
                })?;
            if let Some(parent) = base.resolve_parent(intermediate)? {
                parent.check_child_slot(key)?;
            }
        }

        let base = base_path
            .resolve_mut(&mut self.document.root)
            .ok_or_else(|| SchemaError::StaleSelection {
                path: base_path.to_string(),
            })?;
        let parent = base.resolve_or_create_parent(intermediate)?;
        parent.set_child(key, node)?;
        parent.set_required(key, is_required);

        info!(
            "Added node '{}' under '{}' (required: {})",
            key, base_path, is_required
        );
        Ok(())
    }

    fn apply_edit(&mut self, new_key: &str, mut node: SchemaNode, is_required: bool) -> SchemaResult<()> {
        let old_key = self
            .selection
            .selected_key()
            .map(str::to_string)
            .ok_or(SchemaError::NoSelection)?;
        let parent_path = self.selection.parent_path().ok_or(SchemaError::NoSelection)?;

        let parent = parent_path
            .resolve_mut(&mut self.document.root)
            .ok_or_else(|| SchemaError::StaleSelection {
                path: parent_path.to_string(),
            })?;
        parent.check_child_slot(new_key)?;

        if let Some(existing) = existing_child(parent, &old_key) {
            preserve_children(existing, &mut node);
        }

        // A changed final segment is a rename, not a new sibling.
        if old_key != new_key {
            parent.remove_child(&old_key);
            info!("Renamed node '{}' to '{}'", old_key, new_key);
        }

        parent.set_child(new_key, node)?;
        parent.set_required(&old_key, false);
        parent.set_required(new_key, is_required);

        // Keep the selection pointing at the node's new location.
        if old_key != new_key {
            self.selection.select(parent_path.property(new_key));
        }

        info!("Edited node '{}' (required: {})", new_key, is_required);
        Ok(())
    }

    /// Remove the selected node from its parent, pruning the parent's
    /// `required` entry. Idempotent: repeating the call on a now-stale
    /// selection is a no-op, not an error.
    pub fn delete_selected(&mut self) -> SchemaResult<()> {
        let key = self
            .selection
            .selected_key()
            .map(str::to_string)
            .ok_or(SchemaError::NoSelection)?;
        let parent_path = self.selection.parent_path().ok_or(SchemaError::NoSelection)?;

        let parent = parent_path
            .resolve_mut(&mut self.document.root)
            .ok_or_else(|| SchemaError::StaleSelection {
                path: parent_path.to_string(),
            })?;
        parent.remove_child(&key);

        info!("Deleted node '{}' under '{}'", key, parent_path);
        Ok(())
    }

    /// Replace the whole document with parsed external JSON text.
    ///
    /// On any failure the current document is left untouched; on success
    /// the selection resets to "nothing selected".
    pub fn import_document(&mut self, text: &str) -> SchemaResult<()> {
        let document = serialization::parse_document(text)?;
        self.document = document;
        self.selection.clear();
        info!("Imported document, selection reset");
        Ok(())
    }

    /// Select the node at `path` and return the form values a UI would
    /// show for it. Subsequent submissions in [`EditMode::Edit`] target
    /// this node.
    pub fn select(&mut self, path: NodePath) -> SchemaResult<NodeForm> {
        let key = path
            .last_key()
            .map(str::to_string)
            .ok_or(SchemaError::NoSelection)?;
        let node = path
            .resolve(&self.document.root)
            .ok_or_else(|| SchemaError::StaleSelection {
                path: path.to_string(),
            })?;

        let required = path
            .parent()
            .and_then(|parent_path| parent_path.resolve(&self.document.root))
            .and_then(SchemaNode::as_object)
            .is_some_and(|parent| parent.requires(&key));

        let form = NodeForm::from_node(&key, node, required);
        self.selection.select(path);
        Ok(form)
    }

    /// Drop the selection; the next submission adds at the root.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Serialize the document as compact or indented JSON.
    pub fn export_json(&self, pretty: bool) -> SchemaResult<String> {
        serialization::to_json(&self.document, pretty)
    }

    /// Export the document through the host integration hook. An absent
    /// bridge reports [`SchemaError::HostUnavailable`] instead of saving.
    pub fn save_to_host(&self, bridge: Option<&dyn HostBridge>) -> SchemaResult<String> {
        let json = self.export_json(false)?;
        match bridge {
            Some(bridge) => {
                bridge.save_schema(&json)?;
                info!("Document handed to host integration");
                Ok(json)
            }
            None => {
                warn!("Save requested but no host integration is attached");
                Err(SchemaError::HostUnavailable)
            }
        }
    }

    /// Set or clear the document's `$id`; an empty value clears it.
    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.document.id = if id.is_empty() { None } else { Some(id) };
    }

    /// Set or clear the document's `title`; an empty value clears it.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        self.document.title = if title.is_empty() { None } else { Some(title) };
    }

    pub fn set_meta_schema(&mut self, uri: impl Into<String>) {
        self.document.meta_schema = uri.into();
    }
}

fn existing_child<'a>(parent: &'a SchemaNode, key: &str) -> Option<&'a SchemaNode> {
    match parent {
        SchemaNode::Object(obj) => obj.properties.get(key),
        SchemaNode::Array(arr) if key == ITEMS_SEGMENT => arr.items.as_deref(),
        _ => None,
    }
}

/// Carry a previously built-out child tree into the replacement node.
///
/// Object properties (and the `required` set) survive when the old node
/// has children and the new one arrived empty; the same rule applies to
/// array `items` when the old item schema is a built-out object and the
/// replacement's is an empty object. A type change deliberately drops
/// the old children.
fn preserve_children(existing: &SchemaNode, node: &mut SchemaNode) {
    match (existing, node) {
        (SchemaNode::Object(old), SchemaNode::Object(new))
            if !old.properties.is_empty() && new.properties.is_empty() =>
        {
            new.properties = old.properties.clone();
            new.required = old.required.clone();
        }
        (SchemaNode::Array(old), SchemaNode::Array(new)) => {
            let old_items_built_out = matches!(
                old.items.as_deref(),
                Some(SchemaNode::Object(obj)) if !obj.properties.is_empty()
            );
            let new_items_empty = match new.items.as_deref() {
                None => true,
                Some(SchemaNode::Object(obj)) => obj.properties.is_empty(),
                Some(_) => false,
            };
            if old_items_built_out && new_items_empty {
                new.items = old.items.clone();
            }
        }
        (old, new) if old.node_type() != new.node_type() => {
            if let SchemaNode::Object(obj) = old {
                if !obj.properties.is_empty() {
                    warn!(
                        "Type changed from {} to {}: dropping {} child properties",
                        old.node_type(),
                        new.node_type(),
                        obj.properties.len()
                    );
                }
            }
        }
        _ => {}
    }
}
