//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod coerce;
mod output;

pub use check::{CheckReport, EnumSummary, FieldSummary, InputSummary};
pub use coerce::{CoerceReport, ValueFormat};
pub use output::{Report, TerminalOutput};
