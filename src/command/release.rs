//! Release version propagation across all client manifests.
use log::*;
use std::path::Path;

use crate::{
    cli,
    config::{RELEASE_TARGETS, TargetFile},
    error::Result,
    updater::manager::{PatchOutcome, VersionPatcher},
    version::MajorMinor,
};

/// Execute the release command for the parsed CLI arguments.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let version = MajorMinor::new(args.release_version.as_str());

    info!(
        "setting release version {version} in {}",
        args.root.display()
    );

    let outcomes = update_targets(&args.root, &RELEASE_TARGETS, &version).await?;

    let rewritten = outcomes
        .iter()
        .filter(|(_, outcome)| *outcome == PatchOutcome::Rewritten)
        .count();

    info!(
        "done: {rewritten} of {} manifests updated",
        outcomes.len()
    );

    Ok(())
}

/// Patch each target in order, awaiting one before starting the next.
///
/// Not transactional: the first error is returned immediately and files
/// patched before it stay modified.
pub async fn update_targets(
    root: &Path,
    targets: &[TargetFile],
    version: &MajorMinor,
) -> Result<Vec<(TargetFile, PatchOutcome)>> {
    let mut outcomes = vec![];

    for target in targets {
        let path = target.resolve(root);
        let outcome = VersionPatcher::new(target.kind)
            .patch(&path, version)
            .await?;
        outcomes.push((*target, outcome));
    }

    Ok(outcomes)
}
