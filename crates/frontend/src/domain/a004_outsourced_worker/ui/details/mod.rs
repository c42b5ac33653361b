mod view;
mod view_model;

pub use view::OutsourcedWorkerDetails;
pub use view_model::OutsourcedWorkerDetailsViewModel;
