// Engine pool for callers on several threads.
//
// An engine is checked out for one call and returned to the pool when the
// guard drops. The pool grows on demand and never shrinks.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

use log::debug;
use metaphone_core::{EncoderOptions, Encoding};

use crate::encoder::Metaphone3;

/// A pool of engines sharing one configuration.
#[derive(Debug)]
pub struct EncoderPool {
    options: EncoderOptions,
    idle: Mutex<Vec<Metaphone3>>,
}

impl EncoderPool {
    pub fn new(options: EncoderOptions) -> Self {
        Self {
            options,
            idle: Mutex::new(Vec::new()),
        }
    }

    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Check an engine out of the pool, creating one if none is idle.
    pub fn get(&self) -> PooledEncoder<'_> {
        let idle = self
            .idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop();
        let engine = idle.unwrap_or_else(|| {
            debug!("encoder pool: no idle engine, creating one");
            Metaphone3::new(self.options)
        });
        PooledEncoder { pool: self, engine }
    }

    /// Encode one word with a pooled engine.
    pub fn encode(&self, word: &str) -> Encoding {
        self.get().encode(word)
    }

    /// Number of engines waiting in the pool.
    pub fn idle_count(&self) -> usize {
        self.idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for EncoderPool {
    fn default() -> Self {
        Self::new(EncoderOptions::default())
    }
}

/// An engine checked out of an [`EncoderPool`].
///
/// The engine goes back to the pool on drop, with the pool's options
/// restored.
pub struct PooledEncoder<'p> {
    pool: &'p EncoderPool,
    engine: Metaphone3,
}

impl Deref for PooledEncoder<'_> {
    type Target = Metaphone3;

    fn deref(&self) -> &Metaphone3 {
        &self.engine
    }
}

impl DerefMut for PooledEncoder<'_> {
    fn deref_mut(&mut self) -> &mut Metaphone3 {
        &mut self.engine
    }
}

impl Drop for PooledEncoder<'_> {
    fn drop(&mut self) {
        let mut engine = std::mem::take(&mut self.engine);
        engine.set_options(self.pool.options);
        self.pool
            .idle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(engine);
    }
}
