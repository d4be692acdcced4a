// Metaphone3: the reusable engine.
//
// The engine owns its configuration and the scratch allocations of a pass
// (folded input, both output buffers). Each call resets them, keeping their
// capacity, so encoding many words with one engine does not allocate beyond
// the returned strings.

use metaphone_core::character::fold_into;
use metaphone_core::{EncoderOptions, Encoding, OptionError};

use crate::output::Output;
use crate::pass::Pass;

/// A reusable Metaphone 3 encoder.
///
/// `encode` takes `&mut self`; use one engine per thread, or an
/// [`EncoderPool`](crate::EncoderPool) to share engines.
///
/// ```
/// use metaphone3::{EncoderOptions, Metaphone3};
///
/// let mut engine = Metaphone3::new(EncoderOptions::default());
/// let code = engine.encode("Schmidt");
/// assert_eq!(code.primary, "XMT");
/// assert_eq!(code.secondary, "SMT");
/// ```
#[derive(Debug, Default)]
pub struct Metaphone3 {
    options: EncoderOptions,
    input: Vec<char>,
    output: Output,
}

impl Metaphone3 {
    pub fn new(options: EncoderOptions) -> Self {
        let limit = options.effective_max_length();
        Self {
            options,
            input: Vec::new(),
            output: Output::with_capacity(limit),
        }
    }

    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    pub fn set_options(&mut self, options: EncoderOptions) {
        self.options = options;
    }

    /// Set one option from its textual name and value, see
    /// [`EncoderOptions::set`].
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        self.options.set(name, value)
    }

    /// Encode one word. Empty input gives an empty encoding.
    pub fn encode(&mut self, word: &str) -> Encoding {
        if word.is_empty() {
            return Encoding::default();
        }
        fold_into(word, &mut self.input);
        Self::run(&self.input, &mut self.output, self.options)
    }

    /// Encode input that is already folded.
    pub(crate) fn encode_folded(&mut self, chars: &[char]) -> Encoding {
        Self::run(chars, &mut self.output, self.options)
    }

    fn run(chars: &[char], output: &mut Output, options: EncoderOptions) -> Encoding {
        if chars.is_empty() {
            return Encoding::default();
        }
        output.reset(options.effective_max_length(), options.encode_exact);
        Pass::new(chars, output, options).run();

        let primary = output.primary().to_code();
        let secondary = if output.converged() {
            String::new()
        } else {
            output.alternate().to_code()
        };
        Encoding { primary, secondary }
    }
}

/// Encode one word with a throwaway engine.
pub fn encode(word: &str, options: EncoderOptions) -> Encoding {
    Metaphone3::new(options).encode(word)
}
