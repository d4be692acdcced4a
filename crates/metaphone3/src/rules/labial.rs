// F, P and V.

use crate::pass::Pass;

impl Pass<'_> {
    pub(crate) fn encode_f(&mut self) {
        self.out.add("F");
        if self.word.char_at(1, 'F') {
            self.word.skip(1);
        }
    }

    pub(crate) fn encode_p(&mut self) {
        let w = &self.word;
        if w.char_at(1, 'H') {
            // Compounds where P and H belong to different parts.
            if w.string_at(-1, &["UPHILL"]) || w.string_at(-2, &["HAPHAZARD", "TOPHAT"]) {
                self.out.add("PH");
            } else if w.string_at(-3, &["SHEPHERD"]) {
                self.out.add("P");
            } else {
                self.out.add("F");
            }
            self.word.skip(1);
            return;
        }

        // "PNEUMONIA", "PSYCHE", "PTERODACTYL"
        if w.pos() == 0 && w.string_at(1, &["N", "S", "T"]) {
            return;
        }

        if w.string_at(-2, &["CUPBOARD"]) || w.string_at(-3, &["RASPBERRY"]) {
            return;
        }

        self.out.add("P");
        if self.word.string_at(1, &["P", "B"]) {
            self.word.skip(1);
        }
    }

    pub(crate) fn encode_v(&mut self) {
        self.out.add_exact_approx("V", "F");
        if self.word.char_at(1, 'V') {
            self.word.skip(1);
        }
    }
}
