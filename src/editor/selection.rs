//! Cursor state: node paths and the current selection.
//!
//! A selection never owns the node it points at; the document is the
//! sole owner of every node. Selections carry a [`NodePath`], which is
//! re-resolved against the tree on every use and can therefore go stale
//! harmlessly when the document changes underneath it.

use std::fmt;

use crate::schema::types::SchemaNode;

/// One step of a node path: either a named property of an object node or
/// the item schema of an array node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    Property(String),
    Items,
}

impl PathStep {
    /// The key this step would be addressed by in a dotted path.
    pub fn key(&self) -> &str {
        match self {
            PathStep::Property(name) => name,
            PathStep::Items => "items",
        }
    }
}

/// Location of a node relative to the document root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath(Vec<PathStep>);

impl NodePath {
    /// The path of the root node itself.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<PathStep>) -> Self {
        Self(steps)
    }

    /// Extend with a named property step (builder style).
    pub fn property(mut self, name: impl Into<String>) -> Self {
        self.0.push(PathStep::Property(name.into()));
        self
    }

    /// Extend with an array `items` step (builder style).
    pub fn items(mut self) -> Self {
        self.0.push(PathStep::Items);
        self
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    /// Key of the final step, or `None` for the root path.
    pub fn last_key(&self) -> Option<&str> {
        self.0.last().map(PathStep::key)
    }

    /// Path of the containing node, or `None` for the root path.
    pub fn parent(&self) -> Option<NodePath> {
        if self.0.is_empty() {
            return None;
        }
        Some(NodePath(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Resolve this path against a tree root. Returns `None` when the
    /// path no longer matches the tree (stale selection).
    pub fn resolve<'a>(&self, root: &'a SchemaNode) -> Option<&'a SchemaNode> {
        let mut current = root;
        for step in &self.0 {
            current = match (step, current) {
                (PathStep::Property(name), SchemaNode::Object(obj)) => obj.properties.get(name)?,
                (PathStep::Items, SchemaNode::Array(arr)) => arr.items.as_deref()?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Mutable variant of [`resolve`](NodePath::resolve).
    pub fn resolve_mut<'a>(&self, root: &'a mut SchemaNode) -> Option<&'a mut SchemaNode> {
        let mut current = root;
        for step in &self.0 {
            current = match (step, current) {
                (PathStep::Property(name), SchemaNode::Object(obj)) => {
                    obj.properties.get_mut(name)?
                }
                (PathStep::Items, SchemaNode::Array(arr)) => arr.items.as_deref_mut()?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(step.key())?;
        }
        Ok(())
    }
}

/// Whether the next submission adds a new node or edits the selected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Add,
    Edit,
}

/// The transient cursor of an editing session: the selected node's path
/// (if any) and the current operation mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorSelection {
    selected: Option<NodePath>,
    mode: EditMode,
}

impl EditorSelection {
    pub fn select(&mut self, path: NodePath) {
        self.selected = Some(path);
        self.mode = EditMode::Edit;
    }

    /// Back to "nothing selected, adding at the root".
    pub fn clear(&mut self) {
        self.selected = None;
        self.mode = EditMode::Add;
    }

    pub fn selected_path(&self) -> Option<&NodePath> {
        self.selected.as_ref()
    }

    /// Key of the selected node within its parent, or `None` when nothing
    /// (or the root itself) is selected.
    pub fn selected_key(&self) -> Option<&str> {
        self.selected.as_ref().and_then(NodePath::last_key)
    }

    /// Path of the selected node's parent, or `None` when nothing (or the
    /// root itself) is selected.
    pub fn parent_path(&self) -> Option<NodePath> {
        self.selected.as_ref().and_then(NodePath::parent)
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }
}
