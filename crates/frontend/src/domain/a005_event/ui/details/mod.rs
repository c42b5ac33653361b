//! Event Details UI Module
//!
//! - view_model.rs: form state, snapshot of the event, commands
//! - page.rs: header, tab bar, tab routing
//! - tabs/: general form, documents, JSON preview

mod page;
mod tabs;
mod view_model;

pub use page::EventDetails;
pub use view_model::EventDetailsVm;
