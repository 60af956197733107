//! Input/output operations and error handling

/// Argument parsing and the interactive session driver
pub mod cli;
/// Input constants and output defaults
pub mod configuration;
/// Error taxonomy shared by the whole crate
pub mod error;
/// Image decoding and reduced image export
pub mod image;
/// Keystroke translation
pub mod keys;
/// Statistics display
pub mod progress;
