//! Static dispatch over the supported manifest formats.

use crate::{
    error::Result,
    updater::{
        android::gradle::Gradle,
        ios::pbxproj::Pbxproj,
        manager::ManifestFile,
        node::package_json::{JsonLayout, PackageJson},
    },
    version::MajorMinor,
};

/// Closed set of manifest formats a release version is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// npm package.json (2 space indent, trailing newline)
    PackageJson,
    /// Android app build.gradle `versionName`
    GradleBuildFile,
    /// Xcode project.pbxproj `MARKETING_VERSION`
    XcodeProjectFile,
    /// Browser extension manifest.json (4 space indent, no trailing newline)
    BrowserManifestJson,
}

impl FormatKind {
    /// Version actually written to files of this format.
    ///
    /// Only the Xcode project receives the iOS adjusted major number.
    pub fn target_version(&self, version: &MajorMinor) -> MajorMinor {
        match self {
            FormatKind::XcodeProjectFile => version.ios_hack(),
            _ => version.clone(),
        }
    }

    /// Compute the new content of `manifest` for an already adjusted version.
    pub fn update(
        &self,
        manifest: &ManifestFile,
        version: &MajorMinor,
    ) -> Result<String> {
        match self {
            FormatKind::PackageJson => {
                PackageJson::new(JsonLayout::PackageManifest)
                    .update(manifest, version)
            }
            FormatKind::BrowserManifestJson => {
                PackageJson::new(JsonLayout::BrowserManifest)
                    .update(manifest, version)
            }
            FormatKind::GradleBuildFile => {
                Ok(Gradle::new().update(manifest, version))
            }
            FormatKind::XcodeProjectFile => {
                Ok(Pbxproj::new().update(manifest, version))
            }
        }
    }
}
