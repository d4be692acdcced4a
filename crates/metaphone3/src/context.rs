// Context matching over the folded input word.
//
// `Word` pairs the folded code points with the cursor. Every predicate here
// is a pure read: offsets are signed and relative to the cursor, and any
// position outside the word simply fails to match.

use metaphone_core::character::is_vowel;

/// The folded input of one encoding pass together with its cursor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Word<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Word<'a> {
    pub(crate) fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    pub(crate) fn chars(&self) -> &'a [char] {
        self.chars
    }

    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    /// Index of the last code point.
    pub(crate) fn last(&self) -> usize {
        self.chars.len().saturating_sub(1)
    }

    /// Cursor position.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume the code point under the cursor.
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume `n` code points beyond the one under the cursor.
    pub(crate) fn skip(&mut self, n: usize) {
        self.pos += n;
    }

    /// True when `pos + offset` is the last index of the word.
    pub(crate) fn is_last_at(&self, offset: usize) -> bool {
        self.pos + offset == self.last()
    }

    fn index(&self, offset: isize) -> Option<usize> {
        let at = self.pos.checked_add_signed(offset)?;
        (at < self.chars.len()).then_some(at)
    }

    /// Code point at `offset` from the cursor.
    pub(crate) fn get(&self, offset: isize) -> Option<char> {
        self.index(offset).map(|at| self.chars[at])
    }

    pub(crate) fn char_at(&self, offset: isize, c: char) -> bool {
        self.get(offset) == Some(c)
    }

    pub(crate) fn is_vowel_at(&self, offset: isize) -> bool {
        self.get(offset).is_some_and(is_vowel)
    }

    /// Any candidate starts at `offset` from the cursor.
    pub(crate) fn string_at(&self, offset: isize, candidates: &[&str]) -> bool {
        match self.index(offset) {
            Some(start) => candidates
                .iter()
                .any(|cand| matches_at(self.chars, start, cand)),
            None => false,
        }
    }

    /// Any candidate starts at `offset` and ends exactly on the last index.
    pub(crate) fn string_at_end(&self, offset: isize, candidates: &[&str]) -> bool {
        match self.index(offset) {
            Some(start) => candidates.iter().any(|cand| {
                start + cand.chars().count() == self.chars.len()
                    && matches_at(self.chars, start, cand)
            }),
            None => false,
        }
    }

    /// Any candidate is a prefix of the word, wherever the cursor is.
    pub(crate) fn string_start(&self, candidates: &[&str]) -> bool {
        candidates
            .iter()
            .any(|cand| matches_at(self.chars, 0, cand))
    }

    /// Any candidate is a suffix of the word, wherever the cursor is.
    pub(crate) fn string_end(&self, candidates: &[&str]) -> bool {
        let len = self.chars.len();
        candidates.iter().any(|cand| {
            len.checked_sub(cand.chars().count())
                .is_some_and(|start| matches_at(self.chars, start, cand))
        })
    }

    /// The whole word equals one of the candidates.
    pub(crate) fn string_exact(&self, candidates: &[&str]) -> bool {
        candidates.iter().any(|cand| {
            cand.chars().count() == self.chars.len() && matches_at(self.chars, 0, cand)
        })
    }

    /// Words whose spelling marks them as Slavic or Germanic.
    pub(crate) fn is_slavo_germanic(&self) -> bool {
        self.string_start(&["SCH", "SW"]) || matches!(self.chars.first(), Some('J' | 'W'))
    }
}

/// Check whether `candidate` occurs in `chars` starting at `start`.
fn matches_at(chars: &[char], start: usize, candidate: &str) -> bool {
    let Some(rest) = chars.get(start..) else {
        return false;
    };
    let mut rest = rest.iter();
    candidate.chars().all(|c| rest.next() == Some(&c))
}

fn equals(chars: &[char], parts: &[&str]) -> bool {
    let mut rest = chars.iter();
    parts
        .iter()
        .flat_map(|part| part.chars())
        .all(|c| rest.next() == Some(&c))
        && rest.next().is_none()
}

/// Check whether `word` is `root` or a regular English inflection of it,
/// e.g. "ache", "aches", "ached", "aching", "achingly", "achy".
///
/// Only the root and its inflected forms match, not longer words that merely
/// contain the root.
pub(crate) fn root_or_inflections(word: &[char], root: &str) -> bool {
    if equals(word, &[root]) || equals(word, &[root, "S"]) {
        return true;
    }
    let stem = match root.strip_suffix('E') {
        Some(stem) => {
            if equals(word, &[root, "D"]) {
                return true;
            }
            stem
        }
        None => {
            if equals(word, &[root, "ES"]) || equals(word, &[root, "ED"]) {
                return true;
            }
            root
        }
    };
    ["ING", "INGLY", "Y"]
        .iter()
        .any(|suffix| equals(word, &[stem, suffix]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn word_at(chars: &[char], pos: usize) -> Word<'_> {
        let mut w = Word::new(chars);
        w.skip(pos);
        w
    }

    #[test]
    fn char_at_bounds() {
        let c = chars("DEBT");
        let w = word_at(&c, 2);
        assert!(w.char_at(0, 'B'));
        assert!(w.char_at(-2, 'D'));
        assert!(w.char_at(1, 'T'));
        assert!(!w.char_at(2, 'T'));
        assert!(!w.char_at(-3, 'D'));
    }

    #[test]
    fn vowel_at_bounds() {
        let c = chars("ABE");
        let w = word_at(&c, 1);
        assert!(w.is_vowel_at(-1));
        assert!(!w.is_vowel_at(0));
        assert!(w.is_vowel_at(1));
        assert!(!w.is_vowel_at(2));
        assert!(!w.is_vowel_at(-2));
    }

    #[test]
    fn string_at_relative() {
        let c = chars("SUBTLE");
        let w = word_at(&c, 2);
        assert!(w.string_at(-2, &["DEBT", "SUBTL", "SUBTIL"]));
        assert!(w.string_at(0, &["BT"]));
        assert!(!w.string_at(0, &["BTLES"]));
        assert!(!w.string_at(-3, &["S"]));
    }

    #[test]
    fn string_at_candidate_order_is_irrelevant() {
        let c = chars("CHARACTER");
        let w = word_at(&c, 0);
        assert!(w.string_at(0, &["CHARAC", "CH"]));
        assert!(w.string_at(0, &["CHARACTERS", "CHA"]));
    }

    #[test]
    fn string_at_end_anchors_suffix() {
        let c = chars("GORECKI");
        let w = word_at(&c, 4);
        assert!(w.string_at_end(0, &["CKI", "CKY"]));
        assert!(!w.string_at_end(0, &["CK"]));
        assert!(w.string_at_end(-4, &["GORECKI"]));
        assert!(!w.string_at_end(5, &["I"]));
    }

    #[test]
    fn string_start_ignores_cursor() {
        let c = chars("MCHUGH");
        let w = word_at(&c, 4);
        assert!(w.string_start(&["MC"]));
        assert!(!w.string_start(&["HU"]));
    }

    #[test]
    fn string_end_ignores_cursor() {
        let c = chars("CABALLOS");
        let w = word_at(&c, 1);
        assert!(w.string_end(&["AS", "OS"]));
        assert!(!w.string_end(&["A", "O"]));
        assert!(!w.string_end(&["XCABALLOS"]));
    }

    #[test]
    fn string_exact_whole_word() {
        let c = chars("JOSE");
        let w = word_at(&c, 2);
        assert!(w.string_exact(&["CAFE", "JOSE"]));
        assert!(!w.string_exact(&["JOS", "JOSEPH"]));
    }

    #[test]
    fn last_index_helpers() {
        let c = chars("JOSE");
        let w = word_at(&c, 2);
        assert_eq!(w.last(), 3);
        assert!(w.is_last_at(1));
        assert!(!w.is_last_at(0));
    }

    #[test]
    fn cursor_moves_forward() {
        let c = chars("ABC");
        let mut w = Word::new(&c);
        assert_eq!(w.current(), Some('A'));
        w.skip(1);
        w.advance();
        assert_eq!(w.pos(), 2);
        assert_eq!(w.current(), Some('C'));
        w.advance();
        assert_eq!(w.current(), None);
    }

    #[test]
    fn slavo_germanic_markers() {
        for s in ["SCHMIDT", "SWANSON", "JANKOWSKI", "WOJCIK"] {
            let c = chars(s);
            assert!(Word::new(&c).is_slavo_germanic(), "{s}");
        }
        let c = chars("SMITH");
        assert!(!Word::new(&c).is_slavo_germanic());
    }

    #[test]
    fn inflections_of_e_final_root() {
        for s in ["ACHE", "ACHES", "ACHED", "ACHING", "ACHINGLY", "ACHY"] {
            assert!(root_or_inflections(&chars(s), "ACHE"), "{s}");
        }
        for s in ["ACH", "ACHEY", "ACHIEVE", "MACHE"] {
            assert!(!root_or_inflections(&chars(s), "ACHE"), "{s}");
        }
    }

    #[test]
    fn inflections_of_consonant_final_root() {
        for s in ["ARCH", "ARCHES", "ARCHED", "ARCHING", "ARCHINGLY", "ARCHY"] {
            assert!(root_or_inflections(&chars(s), "ARCH"), "{s}");
        }
        for s in ["ARCHER", "ARCHIVE", "AR"] {
            assert!(!root_or_inflections(&chars(s), "ARCH"), "{s}");
        }
    }
}
