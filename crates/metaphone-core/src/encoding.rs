// Result of encoding one word.

/// Primary and secondary phonetic codes for one word.
///
/// `secondary` is empty when the alternate pronunciation never diverged from
/// the primary one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Encoding {
    pub primary: String,
    pub secondary: String,
}

impl Encoding {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// True when no code was produced (empty or code-less input).
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// Iterate over the non-empty codes, primary first.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        [self.primary.as_str(), self.secondary.as_str()]
            .into_iter()
            .filter(|code| !code.is_empty())
    }

    /// Check whether two encodings share any non-empty code.
    pub fn sounds_like(&self, other: &Encoding) -> bool {
        self.codes()
            .any(|mine| other.codes().any(|theirs| mine == theirs))
    }

    /// Split into `(primary, secondary)`.
    pub fn into_pair(self) -> (String, String) {
        (self.primary, self.secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_encoding() {
        let e = Encoding::default();
        assert!(e.is_empty());
        assert_eq!(e.codes().count(), 0);
    }

    #[test]
    fn codes_skip_empty_secondary() {
        let e = Encoding::new("KS", "");
        assert_eq!(e.codes().collect::<Vec<_>>(), vec!["KS"]);
        let e = Encoding::new("KS", "X");
        assert_eq!(e.codes().collect::<Vec<_>>(), vec!["KS", "X"]);
    }

    #[test]
    fn sounds_like_cross_matches() {
        let kovacs = Encoding::new("KFKS", "KFX");
        let kovach = Encoding::new("KFX", "");
        assert!(kovacs.sounds_like(&kovach));
        assert!(kovach.sounds_like(&kovacs));
    }

    #[test]
    fn sounds_like_rejects_disjoint_and_empty() {
        let a = Encoding::new("PRN", "");
        let b = Encoding::new("PRT", "");
        assert!(!a.sounds_like(&b));
        assert!(!Encoding::default().sounds_like(&Encoding::default()));
    }

    #[test]
    fn into_pair_splits_codes() {
        let e = Encoding::new("A", "B");
        assert_eq!(e.into_pair(), ("A".to_string(), "B".to_string()));
    }
}
