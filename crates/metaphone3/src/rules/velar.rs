// G, Q and X.

use crate::pass::Pass;

impl Pass<'_> {
    pub(crate) fn encode_g(&mut self) {
        if self.word.char_at(1, 'H') {
            self.encode_gh();
            return;
        }
        if self.word.char_at(1, 'N') {
            self.encode_gn();
            return;
        }

        let w = &self.word;
        let slavo_germanic = w.is_slavo_germanic();

        // Italian "-GLI-", e.g. "TAGLIARINI".
        if w.pos() > 0 && w.string_at(1, &["LI"]) && !slavo_germanic {
            self.out.emit(None, Some("K"));
            return;
        }

        // "GEORGE", "GYM": K with a J alternate at the start of the word.
        if w.pos() == 0
            && (w.char_at(1, 'Y')
                || w.string_at(
                    1,
                    &["ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER"],
                ))
        {
            self.out.add_exact_approx_alt("G", "J", "K", "J");
            return;
        }

        // "-GER-", "-GY"
        if (w.string_at(1, &["ER"]) || w.char_at(1, 'Y'))
            && !w.string_start(&["DANGER", "RANGER", "MANGER"])
            && !w.string_at(-1, &["E", "I"])
            && !w.string_at(-1, &["RGY", "OGY"])
        {
            self.out.add_exact_approx_alt("G", "J", "K", "J");
            return;
        }

        // Front vowel; Italian "-AGGI-", "-OGGI-".
        if w.string_at(1, &["E", "I", "Y"]) || w.string_at(-1, &["AGGI", "OGGI"]) {
            if w.string_start(&["VAN ", "VON ", "SCH"]) || w.string_at(1, &["ET"]) {
                // Germanic, and "-GET"
                self.out.add_exact_approx("G", "K");
            } else if w.string_at(1, &["IER"]) {
                self.out.add("J");
            } else {
                self.out.add_exact_approx_alt("J", "G", "J", "K");
            }
            return;
        }

        self.out.add_exact_approx("G", "K");
        if self.word.char_at(1, 'G') {
            self.word.skip(1);
        }
    }

    fn encode_gh(&mut self) {
        let w = &self.word;
        let pos = w.pos();
        if pos > 0 && !w.is_vowel_at(-1) {
            // "AFGHAN"
            self.out.add_exact_approx("G", "K");
        } else if pos == 0 {
            // "GHISLANE" gets J, "GHOST" gets K.
            if w.char_at(2, 'I') {
                self.out.add("J");
            } else {
                self.out.add_exact_approx("G", "K");
            }
        } else if (pos > 1 && w.string_at(-2, &["B", "H", "D"]))
            || (pos > 2 && w.string_at(-3, &["B", "H", "D"]))
            || (pos > 3 && w.string_at(-4, &["B", "H"]))
        {
            // Silent, e.g. "HUGH", "BOUGH", "BROUGHTON".
        } else if pos > 2 && w.char_at(-1, 'U') && w.string_at(-3, &["C", "G", "L", "R", "T"]) {
            // "LAUGH", "COUGH", "TOUGH"
            self.out.add("F");
        } else if !w.char_at(-1, 'I') {
            self.out.add_exact_approx("G", "K");
        }
        self.word.skip(1);
    }

    fn encode_gn(&mut self) {
        let w = &self.word;
        // "GNOME", "SIGN", "SIGNS", "SIGNED", "SIGNING"
        if w.pos() == 0 || w.string_at_end(1, &["N", "NS", "NED", "NING"]) {
            return;
        }
        self.out.add_exact_approx("G", "K");
    }

    pub(crate) fn encode_q(&mut self) {
        self.out.add("K");
        if self.word.char_at(1, 'Q') {
            self.word.skip(1);
        }
    }

    pub(crate) fn encode_x(&mut self) {
        let w = &self.word;
        if w.pos() == 0 {
            // "XAVIER"
            self.out.add("S");
        } else if !(w.is_last_at(0)
            && (w.string_at(-3, &["IAU", "EAU"]) || w.string_at(-2, &["AU", "OU"])))
        {
            // French "-IAUX", "-EAUX", "-AUX", "-OUX" are silent.
            self.out.add("KS");
        }

        if self.word.string_at(1, &["C", "X"]) {
            self.word.skip(1);
        }
    }
}
