// Bounded phoneme buffers for the primary and alternate codes.

/// Symbols reserved up front. The limit itself may be far larger than any
/// code a word can produce, so it is never used as an allocation size.
const PRESIZE: usize = 32;

/// One output code under construction.
///
/// Appends never grow the buffer past its limit. A lone `A` is not appended
/// after a trailing `A`, which is how vowel runs collapse into one symbol.
#[derive(Debug, Default)]
pub(crate) struct PhonemeBuffer {
    symbols: Vec<char>,
    limit: usize,
}

impl PhonemeBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity.min(PRESIZE)),
            limit: capacity,
        }
    }

    /// Empty the buffer and set a new limit, keeping the allocation.
    pub(crate) fn reset(&mut self, limit: usize) {
        self.symbols.clear();
        self.symbols.reserve(limit.min(PRESIZE));
        self.limit = limit;
    }

    pub(crate) fn is_full(&self) -> bool {
        self.symbols.len() >= self.limit
    }

    pub(crate) fn last(&self) -> Option<char> {
        self.symbols.last().copied()
    }

    pub(crate) fn as_slice(&self) -> &[char] {
        &self.symbols
    }

    pub(crate) fn push(&mut self, phoneme: &str) {
        if phoneme == "A" && self.last() == Some('A') {
            return;
        }
        for c in phoneme.chars() {
            if self.is_full() {
                break;
            }
            self.symbols.push(c);
        }
    }

    pub(crate) fn to_code(&self) -> String {
        self.symbols.iter().collect()
    }
}

/// The primary and alternate buffers of one encoding pass.
#[derive(Debug, Default)]
pub(crate) struct Output {
    primary: PhonemeBuffer,
    alternate: PhonemeBuffer,
    exact: bool,
}

impl Output {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            primary: PhonemeBuffer::with_capacity(capacity),
            alternate: PhonemeBuffer::with_capacity(capacity),
            exact: false,
        }
    }

    /// Prepare both buffers for a new word.
    pub(crate) fn reset(&mut self, limit: usize, exact: bool) {
        self.primary.reset(limit);
        self.alternate.reset(limit);
        self.exact = exact;
    }

    /// Either buffer has reached its limit.
    pub(crate) fn is_full(&self) -> bool {
        self.primary.is_full() || self.alternate.is_full()
    }

    pub(crate) fn primary(&self) -> &PhonemeBuffer {
        &self.primary
    }

    pub(crate) fn alternate(&self) -> &PhonemeBuffer {
        &self.alternate
    }

    /// Emit one phoneme per buffer; `None` leaves that buffer untouched.
    pub(crate) fn emit(&mut self, primary: Option<&str>, alternate: Option<&str>) {
        if let Some(p) = primary {
            self.primary.push(p);
        }
        if let Some(a) = alternate {
            self.alternate.push(a);
        }
    }

    /// Emit the same phoneme on both buffers.
    pub(crate) fn add(&mut self, phoneme: &str) {
        self.emit(Some(phoneme), Some(phoneme));
    }

    /// Emit different phonemes on the two buffers.
    pub(crate) fn add_alt(&mut self, primary: &str, alternate: &str) {
        self.emit(Some(primary), Some(alternate));
    }

    /// Emit `exact` when exact encoding is on, `approx` otherwise.
    pub(crate) fn add_exact_approx(&mut self, exact: &str, approx: &str) {
        let phoneme = if self.exact { exact } else { approx };
        self.add(phoneme);
    }

    /// Like [`Output::add_exact_approx`] with separate alternate phonemes.
    pub(crate) fn add_exact_approx_alt(
        &mut self,
        exact: &str,
        alt_exact: &str,
        approx: &str,
        alt_approx: &str,
    ) {
        if self.exact {
            self.add_alt(exact, alt_exact);
        } else {
            self.add_alt(approx, alt_approx);
        }
    }

    /// Both buffers hold the same symbols.
    pub(crate) fn converged(&self) -> bool {
        self.primary.as_slice() == self.alternate.as_slice()
    }
}
