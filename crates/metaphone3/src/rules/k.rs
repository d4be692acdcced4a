// K: silent before N in native English words, otherwise K.

use crate::pass::Pass;

impl Pass<'_> {
    pub(crate) fn encode_k(&mut self) {
        if self.encode_silent_k() {
            return;
        }
        self.out.add("K");

        // Redundant K or Q.
        if self.word.char_at(1, 'K') || self.word.char_at(1, 'Q') {
            self.word.skip(1);
        }
    }

    fn encode_silent_k(&mut self) -> bool {
        let w = &self.word;
        if w.pos() == 0 && w.string_start(&["KN"]) && !w.string_at(2, &["ISH", "ESSET", "IEVEL"]) {
            return true;
        }

        // "KNOW", "KNIT", "KNOB"
        if (w.string_at(1, &["NOW", "NIT", "NOT", "NOB"]) && !w.string_start(&["BANKNOTE"]))
            || w.string_at(1, &["NOCK", "NUCK", "NIFE", "NACK", "NIGHT"])
        {
            // "PENKNIFE": the N before was already encoded.
            if w.pos() > 0 && w.char_at(-1, 'N') {
                self.word.skip(1);
            }
            return true;
        }
        false
    }
}
