// L, R and the nasals M and N.

use crate::pass::Pass;

impl Pass<'_> {
    pub(crate) fn encode_l(&mut self) {
        let w = &self.word;

        // Spanish "-LL-" endings, e.g. "CABRILLO", "GALLEGOS".
        if w.char_at(1, 'L')
            && ((w.is_last_at(2) && w.string_at(-1, &["ILLO", "ILLA", "ALLE"]))
                || (w.string_end(&["AS", "OS", "A", "O"]) && w.string_at(-1, &["ALLE"])))
        {
            self.out.emit(Some("L"), None);
            self.word.skip(1);
            return;
        }

        if self.encode_silent_l() {
            return;
        }

        if self.encode_le_transposition() {
            return;
        }

        self.out.add("L");
        if self.word.char_at(1, 'L') {
            self.word.skip(1);
        }
    }

    fn encode_silent_l(&mut self) -> bool {
        let w = &self.word;
        w.string_at(
            -2,
            &[
                "WALK", "TALK", "BALM", "CALM", "PALM", "HALF", "CALF", "FOLK", "YOLK", "SALMON",
                "HOLMES",
            ],
        ) || w.string_at(-3, &["CHALK", "STALK", "COULD", "WOULD", "PSALM"])
            || w.string_at(-4, &["SHOULD"])
    }

    /// Consonant + "LE" at the end of the word is voiced as "AL" when vowels
    /// are encoded, e.g. "APPLE", "TABLE". The E is then skipped as voiced.
    fn encode_le_transposition(&mut self) -> bool {
        let w = &self.word;
        if self.encode_vowels()
            && w.pos() > 0
            && !w.is_vowel_at(-1)
            && w.string_at_end(0, &["LE"])
        {
            self.out.add("A");
            self.out.add("L");
            self.al_inversion = true;
            return true;
        }
        false
    }

    pub(crate) fn encode_r(&mut self) {
        let w = &self.word;
        // French "-IER", e.g. "ROGIER"; not "-MEIER", "-MAIER".
        if w.is_last_at(0)
            && !w.is_slavo_germanic()
            && w.string_at(-2, &["IE"])
            && !w.string_at(-4, &["ME", "MA"])
        {
            self.out.emit(None, Some("R"));
        } else {
            self.out.add("R");
        }

        if self.word.char_at(1, 'R') {
            self.word.skip(1);
        }
    }

    pub(crate) fn encode_m(&mut self) {
        self.out.add("M");

        let w = &self.word;
        // "DUMB", "THUMBS", "CLIMBED", "PLUMBING", "PLUMBER"; the B is
        // pronounced in "NUMBER" and "SLUMBER".
        let silent_b = w.char_at(1, 'B')
            && (w.is_last_at(1)
                || w.string_at_end(2, &["S", "ED", "ING"])
                || (w.string_at(-1, &["UMBER"])
                    && !(w.string_at(-2, &["LUMBER", "NUMBER", "CUMBER"])
                        && !w.char_at(-3, 'P'))));
        if silent_b || w.char_at(1, 'M') {
            self.word.skip(1);
        }
    }

    pub(crate) fn encode_n(&mut self) {
        self.out.add("N");
        if self.word.char_at(1, 'N') {
            self.word.skip(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::{encode, encode_vowels};

    fn pair(p: &str, s: &str) -> (String, String) {
        (p.to_string(), s.to_string())
    }

    #[test]
    fn spanish_ll() {
        assert_eq!(encode("CABRILLO"), pair("KPRL", "KPR"));
        assert_eq!(encode("GALLEGOS"), pair("KLKS", "KKS"));
    }

    #[test]
    fn silent_l() {
        assert_eq!(encode("WALK").0, "AK");
        assert_eq!(encode("CALM"), pair("KM", ""));
        assert_eq!(encode("SHOULD"), pair("XT", ""));
    }

    #[test]
    fn le_transposition_with_vowels() {
        assert_eq!(encode_vowels("APPLE"), pair("APAL", ""));
        assert_eq!(encode_vowels("TABLE"), pair("TAPAL", ""));
        assert_eq!(encode("TABLE"), pair("TPL", ""));
    }

    #[test]
    fn french_ier() {
        assert_eq!(encode("ROGIER"), pair("RJ", "RJR"));
        assert_eq!(encode("MEIER"), pair("MR", ""));
    }

    #[test]
    fn m_absorbs_silent_b() {
        assert_eq!(encode("DUMB"), pair("TM", ""));
        assert_eq!(encode("THUMBS"), pair("0MS", ""));
        assert_eq!(encode("PLUMBER"), pair("PLMR", ""));
        assert_eq!(encode("NUMBER"), pair("NMPR", ""));
        assert_eq!(encode("HAMMER"), pair("HMR", ""));
    }

    #[test]
    fn n_collapses() {
        assert_eq!(encode("ANNA"), pair("AN", ""));
    }
}
