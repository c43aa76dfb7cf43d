use log::*;
use serde::Serialize;
use serde_json::{Number, Value, json, ser::PrettyFormatter};

use crate::{
    error::{ReleaseError, Result},
    updater::manager::ManifestFile,
    version::MajorMinor,
};

// Largest integer a JavaScript number holds exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Output layout used when a JSON manifest is written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonLayout {
    /// npm style package.json: 2 space indent, trailing newline
    PackageManifest,
    /// Browser extension manifest.json: 4 space indent, no trailing newline
    BrowserManifest,
}

impl JsonLayout {
    fn indent(&self) -> &'static [u8] {
        match self {
            JsonLayout::PackageManifest => b"  ",
            JsonLayout::BrowserManifest => b"    ",
        }
    }

    fn trailing_newline(&self) -> bool {
        matches!(self, JsonLayout::PackageManifest)
    }
}

/// Handles package.json and manifest.json version updates.
///
/// The whole document is parsed and re-serialized, so indentation and the
/// trailing newline are normalized to the [`JsonLayout`] whenever the version
/// changes. Key order is kept as it appears in the file.
pub struct PackageJson {
    layout: JsonLayout,
}

impl PackageJson {
    /// Create JSON manifest handler writing with the given layout.
    pub fn new(layout: JsonLayout) -> Self {
        Self { layout }
    }

    /// Compute the manifest content for the target version.
    ///
    /// Returns the original content untouched when the current version
    /// already starts with the target `major.minor`.
    pub fn update(
        &self,
        manifest: &ManifestFile,
        version: &MajorMinor,
    ) -> Result<String> {
        let mut doc: Value = serde_json::from_str(&manifest.content)
            .map_err(|err| ReleaseError::parse(&manifest.path, err))?;

        let current = doc
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| ReleaseError::missing_version(&manifest.path))?;

        // plain prefix match: "1.2" is considered current for "1.2.5"
        if current.starts_with(version.as_str()) {
            debug!(
                "{}: version {current} already matches {version}",
                manifest.path.display()
            );
            return Ok(manifest.content.clone());
        }

        let next = version.patch_zero();
        info!(
            "{}: updating version {current} -> {next}",
            manifest.path.display()
        );
        doc["version"] = json!(next);
        normalize_numbers(&mut doc);

        self.serialize(&doc)
    }

    fn serialize(&self, doc: &Value) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.layout.indent());
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, formatter);
        doc.serialize(&mut serializer)?;

        let mut content = String::from_utf8(buf)?;
        if self.layout.trailing_newline() {
            content.push('\n');
        }

        Ok(content)
    }
}

/// Write integral floats the way JavaScript does: `1.0` as `1`, `1e3` as
/// `1000`.
fn normalize_numbers(value: &mut Value) {
    match value {
        Value::Array(items) => items.iter_mut().for_each(normalize_numbers),
        Value::Object(map) => map.values_mut().for_each(normalize_numbers),
        Value::Number(number) => {
            if let Some(integral) = integral_float(number) {
                *number = integral;
            }
        }
        _ => {}
    }
}

fn integral_float(number: &Number) -> Option<Number> {
    if !number.is_f64() {
        return None;
    }

    let float = number.as_f64()?;
    if float.fract() != 0.0 || float.abs() > MAX_SAFE_INTEGER {
        return None;
    }

    Some(Number::from(float as i64))
}
