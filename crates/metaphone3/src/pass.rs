// One encoding pass: the main loop and per-code-point dispatch.
//
// A handler is entered with the cursor on the first code point of its letter
// group. It emits (or decides to emit nothing) and skips any extra code
// points it consumed; the loop then consumes the current one. Letter chains
// live in `rules/`, the vowel reducer in `vowels.rs`.

use log::trace;
use metaphone_core::EncoderOptions;
use metaphone_core::character::{DIGRAPH_MARKER_S, DIGRAPH_MARKER_X, is_vowel};

use crate::context::Word;
use crate::output::Output;

/// Fixed English words starting with "H" after a "W" that end a vowel run,
/// so that the H gets its own handler.
const WH_WORD_BREAKS: &[&str] = &[
    "HOP", "HIDE", "HARD", "HEAD", "HAWK", "HERD", "HOOK", "HAND", "HOLE", "HEART", "HOUSE",
    "HOUND", "HAMMER",
];

pub(crate) struct Pass<'a> {
    pub(crate) word: Word<'a>,
    pub(crate) out: &'a mut Output,
    pub(crate) options: EncoderOptions,
    /// Set when the L handler has already voiced a final "-LE" as "AL".
    pub(crate) al_inversion: bool,
}

impl<'a> Pass<'a> {
    pub(crate) fn new(chars: &'a [char], out: &'a mut Output, options: EncoderOptions) -> Self {
        Self {
            word: Word::new(chars),
            out,
            options,
            al_inversion: false,
        }
    }

    /// Walk the word until it is exhausted or a buffer is full.
    pub(crate) fn run(&mut self) {
        while let Some(c) = self.word.current() {
            if self.out.is_full() {
                trace!(
                    "code length limit reached at {} of {}",
                    self.word.pos(),
                    self.word.len()
                );
                break;
            }
            self.dispatch(c);
            self.word.advance();
        }
    }

    fn dispatch(&mut self, c: char) {
        match c {
            'B' => self.encode_b(),
            'ß' | 'Ç' => self.out.add("S"),
            'C' => self.encode_c(),
            'D' => self.encode_d(),
            'F' => self.encode_f(),
            'G' => self.encode_g(),
            'H' => self.encode_h(),
            'J' => self.encode_j(),
            'K' => self.encode_k(),
            'L' => self.encode_l(),
            'M' => self.encode_m(),
            'N' => self.encode_n(),
            'Ñ' => self.out.add("N"),
            'P' => self.encode_p(),
            'Q' => self.encode_q(),
            'R' => self.encode_r(),
            'S' => self.encode_s(),
            'T' => self.encode_t(),
            'Ð' | 'Þ' => self.out.add("0"),
            'V' => self.encode_v(),
            'W' => self.encode_w(),
            'X' => self.encode_x(),
            DIGRAPH_MARKER_X => self.out.add("X"),
            DIGRAPH_MARKER_S => self.out.add("S"),
            'Z' => self.encode_z(),
            c if is_vowel(c) => self.encode_vowel(),
            _ => {}
        }
    }

    pub(crate) fn encode_vowels(&self) -> bool {
        self.options.encode_vowels
    }

    /// Skip extra code points; the count depends on whether vowels are
    /// being encoded, since a skipped vowel would otherwise be voiced.
    pub(crate) fn advance_counter(&mut self, without_vowels: usize, with_vowels: usize) {
        if self.encode_vowels() {
            self.word.skip(with_vowels);
        } else {
            self.word.skip(without_vowels);
        }
    }

    /// Move the cursor to the last code point of the vowel run it is on.
    ///
    /// W counts as part of the run, and so does an H right after such a W.
    /// Slavic surname endings stop the run early.
    pub(crate) fn skip_vowels(&mut self) {
        let end = self.vowel_run_end();
        self.word.skip(end);
    }

    /// Offset of the last code point of the current vowel run.
    fn vowel_run_end(&self) -> usize {
        let w = &self.word;
        let mut off: isize = 0;
        while w.get(off).is_some_and(|c| is_vowel(c) || c == 'W') {
            if w.string_at(off, &["WICZ", "WITZ", "WIAK"])
                || w.string_at(off - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
                || w.string_at_end(off, &["WICKI", "WACKI"])
            {
                break;
            }
            off += 1;
            if w.char_at(off - 1, 'W') && w.char_at(off, 'H') && !w.string_at(off, WH_WORD_BREAKS)
            {
                off += 1;
            }
        }
        usize::try_from(off - 1).unwrap_or(0)
    }
}
