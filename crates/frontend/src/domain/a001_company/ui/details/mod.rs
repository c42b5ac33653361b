//! Company Details UI Module
//!
//! - view_model.rs: form state, company snapshot, commands
//! - page.rs: header, tab bar, tab routing
//! - tabs/: general form, documents, JSON preview

mod page;
mod tabs;
mod view_model;

pub use page::CompanyDetails;
pub use view_model::CompanyDetailsVm;
