mod view;
mod view_model;

pub use view::PackageDetails;
pub use view_model::PackageDetailsViewModel;
