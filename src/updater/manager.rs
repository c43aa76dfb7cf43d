//! VersionPatcher - reads a manifest, patches it and writes it back if changed
use log::*;
use std::path::{Path, PathBuf};

use crate::{
    error::{ReleaseError, Result},
    updater::dispatch::FormatKind,
    version::MajorMinor,
};

/// A manifest file loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    pub path: PathBuf,
    pub content: String,
}

/// What happened to a single manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// New content was written to disk
    Rewritten,
    /// Already at the target version or no version declaration was found
    Unchanged,
}

/// Applies a [`FormatKind`] rule to a file on disk.
pub struct VersionPatcher {
    kind: FormatKind,
}

impl VersionPatcher {
    pub fn new(kind: FormatKind) -> Self {
        Self { kind }
    }

    /// Read `path`, compute the patched content and write it back.
    ///
    /// The write is skipped when the computed content is byte-identical to
    /// what was read, so re-running with the same version touches nothing.
    pub async fn patch(
        &self,
        path: &Path,
        version: &MajorMinor,
    ) -> Result<PatchOutcome> {
        let version = self.kind.target_version(version);
        let manifest = self.load(path).await?;

        debug!(
            "patching {} as {:?} with version {version}",
            path.display(),
            self.kind
        );

        let updated = self.kind.update(&manifest, &version)?;

        if updated == manifest.content {
            info!("{}: already up-to-date", path.display());
            return Ok(PatchOutcome::Unchanged);
        }

        tokio::fs::write(path, updated)
            .await
            .map_err(|err| ReleaseError::io(path, err))?;

        info!("{}: updated", path.display());
        Ok(PatchOutcome::Rewritten)
    }

    async fn load(&self, path: &Path) -> Result<ManifestFile> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| ReleaseError::io(path, err))?;

        Ok(ManifestFile {
            path: path.to_path_buf(),
            content,
        })
    }
}
