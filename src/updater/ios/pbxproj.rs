use log::*;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::{updater::manager::ManifestFile, version::MajorMinor};

// e.g. MARKETING_VERSION = 10.1.0;
static MARKETING_VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(MARKETING_VERSION = )([0-9]+\.[0-9]+)(\.[0-9]+;)")
        .expect("hardcoded regex must compile")
});

/// Handles MARKETING_VERSION settings in an Xcode project.pbxproj.
pub struct Pbxproj {}

impl Pbxproj {
    /// Create handler for Xcode project version updates.
    pub fn new() -> Self {
        Self {}
    }

    /// Rewrite every `MARKETING_VERSION = X.Y.Z;` to the target version.
    ///
    /// `version` is applied as given; the caller is responsible for the
    /// iOS major number adjustment. Each occurrence is checked on its own so
    /// build configurations that already match keep their patch number.
    pub fn update(&self, manifest: &ManifestFile, version: &MajorMinor) -> String {
        let mut updated = 0;

        let content = MARKETING_VERSION_REGEX
            .replace_all(&manifest.content, |caps: &Captures| {
                if &caps[2] == version.as_str() {
                    return caps[0].to_string();
                }

                updated += 1;
                format!("{}{};", &caps[1], version.patch_zero())
            })
            .to_string();

        if updated == 0 {
            debug!(
                "{}: no MARKETING_VERSION needed updating",
                manifest.path.display()
            );
        } else {
            info!(
                "{}: updated {updated} MARKETING_VERSION setting(s) to {}",
                manifest.path.display(),
                version.patch_zero()
            );
        }

        content
    }
}
