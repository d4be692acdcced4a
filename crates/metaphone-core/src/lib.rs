//! Shared types for the Metaphone 3 encoder workspace.
//!
//! - [`character`] -- vowel classification and simple case folding
//! - [`options`] -- encoder configuration and textual option parsing
//! - [`encoding`] -- the primary/secondary code pair returned by the encoder

pub mod character;
pub mod encoding;
pub mod options;

pub use encoding::Encoding;
pub use options::{DEFAULT_MAX_LENGTH, EncoderOptions, OptionError};
