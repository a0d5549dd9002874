//! Wrappers around the external programs po-sync drives.

mod command;
mod extractor;
mod git;
mod msgfmt;

pub use command::{ToolCommand, ToolOutput, resolve_program};
pub use extractor::extract_template;
pub use git::Git;
pub use msgfmt::Msgfmt;
