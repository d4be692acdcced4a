// B: silent in DEBT/DOUBT/SUBTLE, otherwise B (P when approximating).

use crate::pass::Pass;

impl Pass<'_> {
    pub(crate) fn encode_b(&mut self) {
        if self.encode_silent_b() {
            return;
        }

        // "-MB" as in "dumb" is absorbed by the M handler.
        self.out.add_exact_approx("B", "P");

        // Doubled B, or "BP" not followed by H.
        let w = &self.word;
        if w.char_at(1, 'B') || (w.char_at(1, 'P') && w.get(2).is_some_and(|c| c != 'H')) {
            self.word.skip(1);
        }
    }

    fn encode_silent_b(&mut self) -> bool {
        let w = &self.word;
        if w.string_at(-2, &["DEBT", "SUBTL", "SUBTIL"]) || w.string_at(-3, &["DOUBT"]) {
            self.out.add("T");
            self.word.skip(1);
            return true;
        }
        false
    }
}
