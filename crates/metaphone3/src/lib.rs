//! Metaphone 3 phonetic encoding.
//!
//! Encodes a word into a primary and an optional secondary phonetic code,
//! so that words that sound alike get the same code.
//!
//! - [`Metaphone3`] -- reusable engine with its own scratch buffers
//! - [`encode`] -- one-off encoding with a throwaway engine
//! - [`EncoderPool`] -- engines shared by several threads
//! - [`EncodingCache`] -- engine with a memoizing map in front
//!
//! ```
//! use metaphone3::{encode, EncoderOptions};
//!
//! let kovacs = encode("Kovacs", EncoderOptions::default());
//! let kovach = encode("Kovach", EncoderOptions::default());
//! assert_eq!(kovacs.primary, "KFKS");
//! assert!(kovacs.sounds_like(&kovach));
//! ```

mod cache;
mod context;
mod encoder;
mod output;
mod pass;
mod pool;
mod rules;
mod vowels;

pub use cache::EncodingCache;
pub use encoder::{Metaphone3, encode};
pub use metaphone_core::{DEFAULT_MAX_LENGTH, EncoderOptions, Encoding, OptionError};
pub use pool::{EncoderPool, PooledEncoder};
