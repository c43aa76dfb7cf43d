//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

/// Set the release version of every client manifest in the project.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(value_name = "VERSION")]
    /// Release version in major.minor form, e.g. 1.2
    pub release_version: String,

    #[arg(long, default_value = ".")]
    /// Project root the manifest paths are resolved against.
    pub root: PathBuf,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
