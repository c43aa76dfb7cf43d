//! Android app updater for the Gradle build file.

pub mod gradle;
