//! Manifest version updates for the package, Gradle, Xcode and browser
//! extension files of the application.
mod android;
pub mod dispatch;
mod ios;
pub mod manager;
mod node;
