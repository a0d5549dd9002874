//! Utility functions shared across CLI commands.

pub mod po;
pub mod ui;

pub use po::{CleanedCopy, copy_cleaned, strip_marker_lines};
