//! Tab components for the Company details form

mod documents;
mod general;
mod json;

pub use documents::DocumentsTab;
pub use general::GeneralTab;
pub use json::JsonTab;
