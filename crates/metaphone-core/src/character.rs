// Character classification and case folding for the encoder input.
//
// The encoder works on a sequence of simple-uppercased code points. All
// classification helpers in this module expect input that has already been
// folded with `simple_upper` / `fold_into`.

// ---------------------------------------------------------------------------
// Private-use markers
// ---------------------------------------------------------------------------

/// Marker standing for a digraph pronounced like "SH"; encodes as `X`.
pub const DIGRAPH_MARKER_X: char = '\u{C28A}';

/// Marker standing for a digraph pronounced like "S"; encodes as `S`.
pub const DIGRAPH_MARKER_S: char = '\u{C28E}';

/// Vowel markers that classify as vowels but have no letter of their own.
const VOWEL_MARKERS: &[char] = &['\u{C29F}', '\u{C28C}'];

/// Accented Latin capitals that count as vowels.
const ACCENTED_VOWELS: &[char] = &[
    'À', 'Á', 'Â', 'Ã', 'Ä', 'Å', 'Æ', // A
    'È', 'É', 'Ê', 'Ë', // E
    'Ì', 'Í', 'Î', 'Ï', // I
    'Ò', 'Ó', 'Ô', 'Õ', 'Ö', 'Ø', // O
    'Ù', 'Ú', 'Û', 'Ü', // U
    'Ý', // Y
];

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Check whether a folded code point is a vowel.
///
/// `A E I O U Y` and their accented Latin capitals are vowels, as are the
/// two vowel markers. Lowercase input is not recognized; fold first.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
        || ACCENTED_VOWELS.contains(&c)
        || VOWEL_MARKERS.contains(&c)
}

// ---------------------------------------------------------------------------
// Case folding
// ---------------------------------------------------------------------------

/// Convert a character to its simple uppercase equivalent.
///
/// Characters whose uppercase form expands to several characters (such as
/// `ß`) are returned unchanged so that one input code point always maps to
/// exactly one folded code point.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Fold `word` into `out`, replacing its previous contents.
///
/// The buffer keeps its capacity so an engine can reuse it across calls.
pub fn fold_into(word: &str, out: &mut Vec<char>) {
    out.clear();
    out.extend(word.chars().map(simple_upper));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_vowels() {
        for c in ['A', 'E', 'I', 'O', 'U', 'Y'] {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        assert!(!is_vowel('B'));
        assert!(!is_vowel('W'));
    }

    #[test]
    fn accented_vowels() {
        assert!(is_vowel('É'));
        assert!(is_vowel('Ø'));
        assert!(is_vowel('Ý'));
        assert!(!is_vowel('Ç'));
        assert!(!is_vowel('Ñ'));
    }

    #[test]
    fn lowercase_is_not_classified() {
        assert!(!is_vowel('a'));
    }

    #[test]
    fn vowel_markers() {
        assert!(is_vowel('\u{C29F}'));
        assert!(is_vowel('\u{C28C}'));
        assert!(!is_vowel(DIGRAPH_MARKER_X));
    }

    #[test]
    fn simple_upper_one_to_one() {
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('é'), 'É');
        assert_eq!(simple_upper('ñ'), 'Ñ');
        assert_eq!(simple_upper('þ'), 'Þ');
        assert_eq!(simple_upper('Z'), 'Z');
    }

    #[test]
    fn simple_upper_keeps_sharp_s() {
        assert_eq!(simple_upper('ß'), 'ß');
    }

    #[test]
    fn fold_into_reuses_buffer() {
        let mut buf = Vec::with_capacity(32);
        fold_into("Knight", &mut buf);
        assert_eq!(buf, vec!['K', 'N', 'I', 'G', 'H', 'T']);
        let cap = buf.capacity();
        fold_into("ox", &mut buf);
        assert_eq!(buf, vec!['O', 'X']);
        assert_eq!(buf.capacity(), cap);
        fold_into("", &mut buf);
        assert!(buf.is_empty());
    }
}
