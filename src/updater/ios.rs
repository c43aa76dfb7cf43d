//! iOS app updater for the Xcode project file.

pub mod pbxproj;
