//! Prelude module for convenient imports
//!
//! Re-exports the types and functions most callers need: the config, the
//! generator, the routing helpers and both export paths.

// Configuration
pub use crate::config::{CalendarSelection, SyncConfig, SyncFrequency};

// Document model and generation
pub use crate::workflow::routing::{destinations_for_action, guard_actions, trace_action};
pub use crate::workflow::{
    Connection, ConnectionMap, EventAction, NodeDescriptor, NodeKind, NodeParameters,
    WorkflowDocument, generate,
};

// Export
pub use crate::export::{DEFAULT_WORKFLOW_FILENAME, copy_text, download};
pub use crate::guide::{setup_guide, write_setup_guide};
pub use crate::visualizer::render_graph;

// Error types
pub use crate::error::{ClipboardError, ConfigError, DocumentError, ExportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
