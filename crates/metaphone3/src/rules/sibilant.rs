// S and Z.

use crate::pass::Pass;

impl Pass<'_> {
    pub(crate) fn encode_s(&mut self) {
        let w = &self.word;

        // "ISLAND", "AISLE", "CARLYSLE"; "ISLAM" keeps its S.
        if w.string_at(-1, &["ISL", "YSL"]) && !w.string_at(-1, &["ISLAM"]) {
            return;
        }

        if w.pos() == 0 && w.string_at(0, &["SUGAR"]) {
            self.out.add_alt("X", "S");
            return;
        }

        if w.char_at(1, 'H') {
            // Germanic compounds, e.g. "RHEINSHEIM", "OOSTHOEK".
            if w.string_at(1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
                self.out.add("S");
            } else {
                self.out.add("X");
            }
            self.word.skip(1);
            return;
        }

        // "VISION", "ASIA", "ASIAN"
        if w.string_at(0, &["SIO", "SIA"]) {
            if w.is_slavo_germanic() {
                self.out.add("S");
            } else {
                self.out.add_alt("S", "X");
            }
            self.advance_counter(2, 1);
            return;
        }

        // "SMITH" against "SCHMIDT", "SNIDER" against "SCHNEIDER"; "SZ" is
        // the Polish spelling of the same sound.
        if (w.pos() == 0 && w.string_at(1, &["M", "N", "L", "W"])) || w.char_at(1, 'Z') {
            self.out.add_alt("S", "X");
            if self.word.char_at(1, 'Z') {
                self.word.skip(1);
            }
            return;
        }

        if w.string_at(0, &["SC"]) {
            self.encode_sc();
            return;
        }

        // French "RESNAIS", "ARTOIS"
        if w.is_last_at(0) && w.string_at(-2, &["AI", "OI"]) {
            self.out.emit(None, Some("S"));
        } else {
            self.out.add("S");
        }

        if self.word.string_at(1, &["S", "Z"]) {
            self.word.skip(1);
        }
    }

    fn encode_sc(&mut self) {
        let w = &self.word;
        if w.char_at(2, 'H') {
            if w.string_at(3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
                // Dutch "SCHOOL", "SCHOOTEN"; "SCHERMERHORN", "SCHENKER".
                if w.string_at(3, &["ER", "EN"]) {
                    self.out.add_alt("X", "SK");
                } else {
                    self.out.add("SK");
                }
            } else if w.pos() == 0 && !w.is_vowel_at(3) && !w.char_at(3, 'W') {
                // "SCHMIDT", "SCHNEIDER"
                self.out.add_alt("X", "S");
            } else {
                self.out.add("X");
            }
            self.word.skip(2);
            return;
        }

        if w.string_at(2, &["I", "E", "Y"]) {
            self.out.add("S");
        } else {
            self.out.add("SK");
        }
        self.word.skip(1);
    }

    pub(crate) fn encode_z(&mut self) {
        let w = &self.word;

        // "ZHAO", "ZHIVAGO"
        if w.char_at(1, 'H') {
            self.out.add("J");
            self.word.skip(1);
            return;
        }

        // Italian "PIZZA", "MOZZARELLA"
        if w.string_at(1, &["ZO", "ZI", "ZA"])
            || (w.is_slavo_germanic() && w.pos() > 0 && !w.char_at(-1, 'T'))
        {
            self.out.add_alt("S", "TS");
        } else {
            self.out.add("S");
        }

        if self.word.char_at(1, 'Z') {
            self.word.skip(1);
        }
    }
}
