mod view;
mod view_model;

pub use view::StaffDetails;
pub use view_model::StaffDetailsViewModel;
