//! Command execution for the release version synchronizer.

/// Sequential update of every release manifest.
///
/// Implements the single command of the tool: resolve the release targets
/// below the project root and patch each of them in order, stopping at the
/// first failure.
pub mod release;
