//! In-memory fixtures standing in for a backend.

pub mod mock;
