//! Attachments of parent entities (events, companies)
//!
//! - `kind`: closed set of attachment kinds and the kind heuristic
//! - `aggregate`: the attachment record
//! - `intake`: raw file selection → attachment records
//! - `editor`: append / remove on a parent entity, returning snapshots
//! - `registry`: read-only display model

pub mod aggregate;
pub mod editor;
pub mod intake;
pub mod kind;
pub mod registry;

pub use aggregate::{Attachment, AttachmentId, AttachmentLocation};
pub use editor::{append, remove_at, HasAttachments};
pub use intake::{format_size_label, intake, RawFile};
pub use kind::AttachmentKind;
pub use registry::{RegistryIcon, RegistryRow, RegistryView};
