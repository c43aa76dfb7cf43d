use log::*;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::{updater::manager::ManifestFile, version::MajorMinor};

// Group 1: prefix (key and whitespace up to the opening quote)
// Group 2: major.minor
// Group 3: patch and closing quote
static VERSION_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(versionName\s+")([0-9]+?\.[0-9]+?)(\.[0-9]+")"#)
        .expect("hardcoded regex must compile")
});

/// Handles the versionName declaration of an Android app build.gradle.
pub struct Gradle {}

impl Gradle {
    /// Create Gradle handler for build file version updates.
    pub fn new() -> Self {
        Self {}
    }

    /// Rewrite the first `versionName "X.Y.Z"` to the target version.
    ///
    /// Later declarations are left alone, as is a first declaration whose
    /// major.minor already equals the target.
    pub fn update(&self, manifest: &ManifestFile, version: &MajorMinor) -> String {
        if !VERSION_NAME_REGEX.is_match(&manifest.content) {
            debug!(
                "no versionName declaration found in {}",
                manifest.path.display()
            );
            return manifest.content.clone();
        }

        VERSION_NAME_REGEX
            .replacen(&manifest.content, 1, |caps: &Captures| {
                if &caps[2] == version.as_str() {
                    return caps[0].to_string();
                }

                info!(
                    "{}: updating versionName {}{} -> {}",
                    manifest.path.display(),
                    &caps[2],
                    caps[3].trim_end_matches('"'),
                    version.patch_zero()
                );
                format!("{}{}\"", &caps[1], version.patch_zero())
            })
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const BUILD_GRADLE: &str = r#"android {
    compileSdkVersion rootProject.ext.compileSdkVersion

    defaultConfig {
        applicationId "net.cozic.joplin"
        minSdkVersion rootProject.ext.minSdkVersion
        versionCode 2097551
        versionName "2.4.9"
    }

    flavorDimensions "legacy"
    productFlavors {
        legacy {
            versionName    "2.4.9"
        }
    }
}
"#;

    fn manifest(content: &str) -> ManifestFile {
        ManifestFile {
            path: PathBuf::from("android/app/build.gradle"),
            content: content.to_string(),
        }
    }

    #[test]
    fn updates_only_first_version_name() {
        let gradle = Gradle::new();

        let updated = gradle.update(&manifest(BUILD_GRADLE), &MajorMinor::from("2.5"));

        assert_eq!(
            updated,
            BUILD_GRADLE.replacen(
                "versionName \"2.4.9\"",
                "versionName \"2.5.0\"",
                1
            )
        );
        assert!(updated.contains("versionName    \"2.4.9\""));
    }

    #[test]
    fn keeps_matching_major_minor() {
        let gradle = Gradle::new();

        let updated = gradle.update(&manifest(BUILD_GRADLE), &MajorMinor::from("2.4"));

        assert_eq!(updated, BUILD_GRADLE);
    }

    #[test]
    fn preserves_whitespace_between_key_and_value() {
        let gradle = Gradle::new();
        let content = "defaultConfig {\n\tversionName\t  \"1.0.12\"\n}\n";

        let updated = gradle.update(&manifest(content), &MajorMinor::from("1.1"));

        assert_eq!(updated, "defaultConfig {\n\tversionName\t  \"1.1.0\"\n}\n");
    }

    #[test]
    fn handles_multi_digit_components() {
        let gradle = Gradle::new();
        let content = r#"versionName "10.12.345""#;

        assert_eq!(
            gradle.update(&manifest(content), &MajorMinor::from("10.12")),
            content
        );
        assert_eq!(
            gradle.update(&manifest(content), &MajorMinor::from("10.13")),
            r#"versionName "10.13.0""#
        );
    }

    #[test]
    fn returns_content_unchanged_without_declaration() {
        let gradle = Gradle::new();
        let content = "android {\n    versionName = '1.2.3'\n}\n";

        let updated = gradle.update(&manifest(content), &MajorMinor::from("3.0"));

        assert_eq!(updated, content);
    }

    #[test]
    fn second_update_is_a_no_op() {
        let gradle = Gradle::new();
        let version = MajorMinor::from("3.1");

        let first = gradle.update(&manifest(BUILD_GRADLE), &version);
        let second = gradle.update(&manifest(&first), &version);

        assert_eq!(first, second);
    }

    #[test]
    fn ignores_non_ascii_digits() {
        let gradle = Gradle::new();
        let content = "versionName \"\u{661}.\u{662}.\u{663}\"\n";

        let updated = gradle.update(&manifest(content), &MajorMinor::from("1.1"));

        assert_eq!(updated, content);
    }
}
