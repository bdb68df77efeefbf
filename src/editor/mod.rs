pub mod builder;
pub mod form;
pub mod selection;
pub mod session;

pub use builder::build_node;
pub use form::NodeForm;
pub use selection::{EditMode, EditorSelection, NodePath, PathStep};
pub use session::{EditorSession, HostBridge};
