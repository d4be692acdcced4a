// Encoder configuration and its textual option surface.

/// Maximum code length used when the configured length is unset (zero).
pub const DEFAULT_MAX_LENGTH: usize = 8;

/// Error returned when setting an option from its textual form fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("invalid boolean for {name}: {value:?}")]
    InvalidBool { name: String, value: String },
    #[error("invalid number for {name}: {value:?}")]
    InvalidNumber { name: String, value: String },
}

/// Configuration for one encoder.
///
/// The configuration is read-only while a word is being encoded. Fields left
/// at their default values give the standard Metaphone 3 behavior: consonant
/// codes only, voiced/voiceless pairs merged, codes of at most eight symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EncoderOptions {
    /// Encode non-initial vowels. Even with this on, a run of vowel sounds
    /// produces a single `A` before the next consonant or the word end.
    pub encode_vowels: bool,

    /// Keep the distinction between B/P, D/T, G/K and V/F.
    ///
    /// This does not cover S vs. Z (word-final S is commonly voiced) nor
    /// CH vs. SH.
    pub encode_exact: bool,

    /// Maximum number of symbols in each code. Zero means
    /// [`DEFAULT_MAX_LENGTH`].
    pub max_length: usize,
}

impl EncoderOptions {
    /// Options with every field at its default.
    pub const fn new() -> Self {
        Self {
            encode_vowels: false,
            encode_exact: false,
            max_length: 0,
        }
    }

    pub const fn with_encode_vowels(mut self, value: bool) -> Self {
        self.encode_vowels = value;
        self
    }

    pub const fn with_encode_exact(mut self, value: bool) -> Self {
        self.encode_exact = value;
        self
    }

    pub const fn with_max_length(mut self, value: usize) -> Self {
        self.max_length = value;
        self
    }

    /// Set the maximum length from a signed value, as received from C or
    /// JavaScript callers. Non-positive values select the default.
    pub fn with_signed_max_length(self, value: i64) -> Self {
        self.with_max_length(usize::try_from(value).unwrap_or(0))
    }

    /// The maximum code length actually applied.
    pub const fn effective_max_length(&self) -> usize {
        if self.max_length == 0 {
            DEFAULT_MAX_LENGTH
        } else {
            self.max_length
        }
    }

    /// Set an option from its textual name and value.
    ///
    /// Names: `encode_vowels`, `encode_exact`, `max_length` (dashes are
    /// accepted in place of underscores). Boolean values: `true`/`false`,
    /// `1`/`0`, `yes`/`no`, `on`/`off`. A negative `max_length` selects the
    /// default.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
        let key = name.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "encode_vowels" | "vowels" => self.encode_vowels = parse_bool(name, value)?,
            "encode_exact" | "exact" => self.encode_exact = parse_bool(name, value)?,
            "max_length" => {
                let n: i64 = value
                    .trim()
                    .parse()
                    .map_err(|_| OptionError::InvalidNumber {
                        name: name.to_string(),
                        value: value.to_string(),
                    })?;
                *self = self.with_signed_max_length(n);
            }
            _ => return Err(OptionError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Parse a `NAME=VALUE` assignment and apply it.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), OptionError> {
        match assignment.split_once('=') {
            Some((name, value)) => self.set(name, value),
            // A bare name switches a boolean option on.
            None => self.set(assignment, "true"),
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, OptionError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(OptionError::InvalidBool {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
