//! CLI command implementations.

mod common;
mod mo;
mod update_pos;
mod update_pot;

pub use common::{LanguageArgs, RepoArgs, Repos, commit_if_changed};
pub use mo::{MoArgs, run_mo};
pub use update_pos::{UpdatePosArgs, run_update_pos};
pub use update_pot::{UpdatePotArgs, run_update_pot};
