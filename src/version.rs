//! The `major.minor` release version supplied by the operator.
use std::{fmt, sync::LazyLock};

use log::*;
use regex::Regex;

static MAJOR_MINOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+$").expect("hardcoded regex must compile")
});

/// A two component release version such as `1.2`.
///
/// The value is kept verbatim. Nothing is rejected here: a malformed string
/// simply flows into malformed manifest versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorMinor(String);

impl MajorMinor {
    pub fn new(version: impl Into<String>) -> Self {
        let version = version.into();

        if !MAJOR_MINOR_REGEX.is_match(&version) {
            warn!(
                "version \"{version}\" is not in major.minor form (e.g. 1.2): manifests will be patched with it anyway"
            );
        }

        Self(version)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full manifest version with a zero patch component, e.g. `1.2.0`.
    pub fn patch_zero(&self) -> String {
        format!("{}.0", self.0)
    }

    /// Version used for the iOS project only.
    ///
    /// A past release went out as 10.x on the App Store, which never accepts
    /// a lower major number, so the iOS major is the regular major with a
    /// `0` appended: `1.2` becomes `10.2`.
    pub fn ios_hack(&self) -> MajorMinor {
        let mut parts = self.0.split('.').map(str::to_string).collect::<Vec<_>>();

        if let Some(major) = parts.first_mut() {
            major.push('0');
        }

        MajorMinor(parts.join("."))
    }
}

impl fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MajorMinor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_zero_appends_zero_patch() {
        assert_eq!(MajorMinor::from("1.3").patch_zero(), "1.3.0");
    }

    #[test]
    fn ios_hack_appends_zero_to_major() {
        assert_eq!(MajorMinor::from("1.2").ios_hack().as_str(), "10.2");
        assert_eq!(MajorMinor::from("9.0").ios_hack().as_str(), "90.0");
    }

    #[test]
    fn ios_hack_keeps_malformed_input_shape() {
        assert_eq!(MajorMinor::from("3").ios_hack().as_str(), "30");
        assert_eq!(MajorMinor::from("1.2.3").ios_hack().as_str(), "10.2.3");
    }

    #[test]
    fn malformed_version_is_kept_verbatim() {
        let version = MajorMinor::from("v1.x");
        assert_eq!(version.as_str(), "v1.x");
        assert_eq!(version.patch_zero(), "v1.x.0");
    }

    #[test]
    fn only_ascii_digits_form_major_minor() {
        assert!(MAJOR_MINOR_REGEX.is_match("12.3"));
        assert!(!MAJOR_MINOR_REGEX.is_match("\u{661}.\u{662}"));
        assert!(!MAJOR_MINOR_REGEX.is_match("1.2.3"));
    }
}
