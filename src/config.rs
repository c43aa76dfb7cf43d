//! The manifests that carry the application's release version.
use std::path::{Path, PathBuf};

use crate::updater::dispatch::FormatKind;

/// A manifest path relative to the project root and how to patch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFile {
    /// Path relative to the project root.
    pub path: &'static str,
    /// Rule used to rewrite the version.
    pub kind: FormatKind,
}

impl TargetFile {
    /// Absolute location of this manifest below `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.path)
    }
}

/// Release manifests in the order they are updated.
///
/// The order matters: a failure stops the run and leaves earlier entries
/// already rewritten.
pub const RELEASE_TARGETS: [TargetFile; 5] = [
    TargetFile {
        path: "ElectronClient/package.json",
        kind: FormatKind::PackageJson,
    },
    TargetFile {
        path: "CliClient/package.json",
        kind: FormatKind::PackageJson,
    },
    TargetFile {
        path: "ReactNativeClient/android/app/build.gradle",
        kind: FormatKind::GradleBuildFile,
    },
    TargetFile {
        path: "ReactNativeClient/ios/Joplin.xcodeproj/project.pbxproj",
        kind: FormatKind::XcodeProjectFile,
    },
    TargetFile {
        path: "Clipper/manifest.json",
        kind: FormatKind::BrowserManifestJson,
    },
];
