//! Tab management module
//!
//! - `page` - TabPage wrapper around tab content
//! - `registry` - tab.key → View mapping (single source of truth)
//! - `tab_labels` - single source of truth for tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
