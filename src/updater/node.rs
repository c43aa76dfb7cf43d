//! JSON manifest updater for package.json and browser extension manifests.

pub mod package_json;
