//! Core operations.
//!
//! This module contains the business logic for litmus commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod coerce;

pub use check::check;
pub use coerce::coerce;
