pub mod cli;
mod command;
pub mod config;
pub mod error;
mod updater;
pub mod version;

pub use command::release;
pub use error::{ReleaseError, Result};
pub use updater::{
    dispatch::FormatKind,
    manager::{PatchOutcome, VersionPatcher},
};
