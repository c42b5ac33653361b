//! Browser side of document attachments.
//!
//! - `file_intake` - reads file metadata out of picker and drop events
//! - `document_editor` - append / remove on a parent entity
//! - `document_registry` - read-only list with download links

pub mod document_editor;
pub mod document_registry;
pub mod file_intake;

pub use document_editor::DocumentEditor;
pub use document_registry::DocumentRegistry;
