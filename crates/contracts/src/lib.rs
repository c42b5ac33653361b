//! Shared domain contracts for the operations console.
//!
//! Everything here is plain data and pure logic: no browser APIs, no I/O.
//! The frontend crate renders these types and owns their reactive state.

pub mod domain;
