// H and W.

use crate::pass::Pass;

impl Pass<'_> {
    pub(crate) fn encode_h(&mut self) {
        let w = &self.word;
        if w.pos() == 0 && w.string_start(&["HOUR", "HONEST", "HONOR", "HEIR"]) {
            return;
        }
        // Only voiced before a vowel, and only at the word start or after a
        // vowel. A W counts as a vowel here, e.g. "HOWHARD".
        if (w.pos() == 0 || w.is_vowel_at(-1) || w.char_at(-1, 'W')) && w.is_vowel_at(1) {
            self.out.add("H");
        }
    }

    pub(crate) fn encode_w(&mut self) {
        let w = &self.word;

        if w.pos() == 0 {
            // "WRITE"
            if w.char_at(1, 'R') {
                return;
            }
            // "WASSERMAN" against "VASSERMAN"
            if w.is_vowel_at(1) {
                self.out.add_alt("A", "F");
                return;
            }
            // "WHITE"
            if w.char_at(1, 'H') {
                self.out.add("A");
                self.word.skip(1);
                return;
            }
        }

        // Polish "FILIPOWICZ", German "HOROWITZ"
        if w.string_at(0, &["WICZ", "WITZ"]) {
            self.out.add_alt("TS", "FX");
            self.word.skip(3);
            return;
        }

        // "TSCHAIKOWSKY", "SCHWARTZ"
        if (w.is_last_at(0) && w.is_vowel_at(-1))
            || w.string_at(-1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
            || w.string_start(&["SCH"])
        {
            self.out.emit(None, Some("F"));
            return;
        }

        if w.string_at_end(0, &["WICKI", "WACKI"]) {
            self.out.add_exact_approx("V", "F");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::encode;

    fn pair(p: &str, s: &str) -> (String, String) {
        (p.to_string(), s.to_string())
    }

    #[test]
    fn h_before_vowel() {
        assert_eq!(encode("HELLO"), pair("HL", ""));
        assert_eq!(encode("ABRAHAM"), pair("APRHM", ""));
        assert_eq!(encode("MOHAMMED"), pair("MHMT", ""));
        assert_eq!(encode("OKLAHOMA"), pair("AKLHM", ""));
    }

    #[test]
    fn h_silent_after_consonant_or_before_consonant() {
        assert_eq!(encode("AHMED"), pair("AMT", ""));
        assert_eq!(encode("ELKHART"), pair("ALKRT", ""));
        assert_eq!(encode("JOHN"), pair("JN", ""));
    }

    #[test]
    fn h_starting_a_compound_after_w() {
        assert_eq!(encode("HOWHARD"), pair("HHRT", ""));
        assert_eq!(encode("SHOWHOUSE"), pair("XHS", ""));
    }

    #[test]
    fn h_after_doubled_c_is_silent() {
        assert_eq!(encode("BACCHUS").0, "PKS");
        assert_eq!(encode("BELLOCCHIO").0, "PLK");
    }

    #[test]
    fn silent_initial_h() {
        assert_eq!(encode("HOUR"), pair("R", ""));
        assert_eq!(encode("HONEST").0, "NST");
    }

    #[test]
    fn initial_w() {
        assert_eq!(encode("WRITE"), pair("RT", ""));
        assert_eq!(encode("WHITE"), pair("AT", ""));
        assert_eq!(encode("WASHINGTON"), pair("AXNKTN", "FXNKTN"));
    }

    #[test]
    fn slavic_w() {
        assert_eq!(encode("NOWICZ"), pair("NTS", "NFX"));
        assert_eq!(encode("KOWALEWSKI"), pair("KLSK", "KLFSK"));
    }

    #[test]
    fn germanic_w() {
        assert_eq!(encode("SCHWARTZ"), pair("XRTS", "XFRTS"));
    }
}
