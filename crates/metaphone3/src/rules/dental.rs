// D and T.

use crate::pass::Pass;

impl Pass<'_> {
    pub(crate) fn encode_d(&mut self) {
        let w = &self.word;
        if w.string_at(0, &["DG"]) {
            if w.string_at(2, &["I", "E", "Y"]) {
                // "EDGE", "JUDGING"
                self.out.add("J");
                self.advance_counter(2, 1);
            } else {
                // "EDGAR"
                self.out.add_exact_approx("DG", "TK");
                self.word.skip(1);
            }
            return;
        }

        if w.string_at(0, &["DJ"]) {
            // "ADJUST"
            self.out.add("J");
            self.word.skip(1);
            return;
        }

        if w.string_at(0, &["DT"]) {
            self.out.add("T");
            self.word.skip(1);
            return;
        }

        self.out.add_exact_approx("D", "T");
        if self.word.char_at(1, 'D') {
            self.word.skip(1);
        }
    }

    pub(crate) fn encode_t(&mut self) {
        let w = &self.word;
        if w.string_at(0, &["TCH"]) {
            self.out.add("X");
            self.word.skip(2);
            return;
        }

        if w.string_at(0, &["TION", "TIA"]) {
            // "NATION", "MARTIAN"
            self.out.add("X");
            self.advance_counter(2, 1);
            return;
        }

        // "TH", "TTH"; "THOMAS" and "THAMES" keep the T.
        // Offset of the letter after the digraph, and how many extra letters it covers.
        let digraph: Option<(isize, usize)> = if w.string_at(0, &["TH"]) {
            Some((2, 1))
        } else if w.string_at(0, &["TTH"]) {
            Some((3, 2))
        } else {
            None
        };
        if let Some((after, extra)) = digraph {
            if w.string_at(after, &["OM", "AM"]) {
                self.out.add("T");
            } else {
                self.out.add("0");
            }
            self.word.skip(extra);
            return;
        }

        self.out.add("T");
        if self.word.string_at(1, &["T", "D"]) {
            self.word.skip(1);
        }
    }
}
