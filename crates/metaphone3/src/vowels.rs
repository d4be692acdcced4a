// Vowel reduction.
//
// A word-initial vowel is always `A`. Other vowels are voiced only when
// vowel encoding is on, and a whole run of vowels (with W continuations)
// collapses into at most one `A`. Most of the work here decides whether a
// non-initial E is pronounced.

use metaphone_core::character::is_vowel;

use crate::pass::Pass;

/// Words ending in "-ED" or "-ES" where the E is still voiced.
const VOICED_ED_ES: &[&str] = &[
    "ABED", "IMED", "JARED", "AHMED", "HAMED", "JAVED", "NORRED", "MEDVED", "MERCED", "ALLRED",
    "KHALED", "RASHED", "MASJED", "MOHAMED", "MOHAMMED", "MUHAMMED", "MOUHAMED", "ANTIPODES",
    "ANOPHELES",
];

/// Whole words whose final E is pronounced: loan words, names, pronouns.
const PRONOUNCED_FINAL_E: &[&str] = &[
    "ACME", "NIKE", "CAFE", "RENE", "LUPE", "JOSE", "ESME", "LETHE", "CADRE", "TILDE", "SIGNE",
    "POSSE", "LATTE", "ANIME", "DOLCE", "CROCE", "ADOBE", "OUTRE", "JESSE", "JAIME", "JAFFE",
    "BENGE", "RUNGE", "CHILE", "DESME", "CONDE", "URIBE", "LIBRE", "ANDRE", "HECATE", "PSYCHE",
    "DAPHNE", "PENSKE", "CLICHE", "RECIPE", "TAMALE", "SESAME", "SIMILE", "FINALE", "KARATE",
    "RENATE", "SHANTE", "OBERLE", "COYOTE", "KRESGE", "STONGE", "STANGE", "SWAYZE", "FUENTE",
    "SALOME", "URRIBE", "ECHIDNE", "ARIADNE", "MEINEKE", "PORSCHE", "ANEMONE", "EPITOME",
    "SYNCOPE", "SOUFFLE", "ATTACHE", "MACHETE", "KARAOKE", "BUKKAKE", "VICENTE", "ELLERBE",
    "VERSACE", "PENELOPE", "CALLIOPE", "CHIPOTLE", "ANTIGONE", "KAMIKAZE", "EURIDICE",
    "YOSEMITE", "FERRANTE", "HYPERBOLE", "GUACAMOLE", "XANTHIPPE", "SYNECDOCHE",
];

/// Greek and Hispanic names with a voiced "-ES" ending.
const VOICED_ES_NAMES: &[&str] = &[
    "INES", "LOPES", "ESTES", "GOMES", "NUNES", "ALVES", "ICKES", "INNES", "PERES", "WAGES",
    "NEVES", "BENES", "DONES", "CORTES", "CHAVES", "VALDES", "ROBLES", "TORRES", "FLORES",
    "BORGES", "NIEVES", "MONTES", "SOARES", "VALLES", "GEDDES", "ANDRES", "VIAJES", "CALLES",
    "FONTES", "HERMES", "ACEVES", "BATRES", "MATHES", "DELORES", "MORALES", "DOLORES", "ANGELES",
    "ROSALES", "MIRELES", "LINARES", "PERALES", "PAREDES", "BRIONES", "SANCHES", "CAZARES",
    "REVELES", "ESTEVES", "ALVARES", "MATTHES", "SOLARES", "CASARES", "CACERES", "STURGES",
    "RAMIRES", "FUNCHES", "BENITES", "FUENTES", "PUENTES", "TABARES", "HENTGES", "VALORES",
    "GONZALES", "MERCEDES", "FAGUNDES", "JOHANNES", "GONSALES", "BERMUDES", "CESPEDES",
    "BETANCES", "TERRONES", "DIOGENES", "CORRALES", "CABRALES", "MARTINES", "GRAJALES",
    "CERVANTES", "FERNANDES", "GONCALVES", "BENEVIDES", "CIFUENTES", "SIFUENTES", "SERVANTES",
    "HERNANDES", "BENAVIDES", "ARCHIMEDES", "CARRIZALES", "MAGALLANES",
];

impl Pass<'_> {
    pub(crate) fn encode_vowel(&mut self) {
        let w = &self.word;
        if w.pos() == 0 {
            self.out.add("A");
        } else if self.encode_vowels() {
            if w.char_at(0, 'E') {
                self.encode_e_pronounced();
            } else {
                if self.skip_silent_ue() || self.o_silent() {
                    return;
                }
                self.out.add("A");
            }
        }

        // Polish "-LEWA", "-LEWO", "-LEWI": the W gets its own handler.
        let w = &self.word;
        if !(!w.is_vowel_at(-2) && w.string_at(-1, &["LEWA", "LEWO", "LEWI"])) {
            self.skip_vowels();
        }
    }

    /// Final "-QUE" and "-GUE" after the Q or G, e.g. "VOGUE", "JACQUES".
    fn skip_silent_ue(&mut self) -> bool {
        let w = &self.word;
        let silent = w.string_at(-1, &["QUE", "GUE"])
            && !w.string_start(&[
                "RISQUE",
                "PIROGUE",
                "ENRIQUE",
                "BARBEQUE",
                "PALENQUE",
                "APPLIQUE",
                "COMMUNIQUE",
            ])
            && !w.string_at(-3, &["ARGUE", "SEGUE"])
            && w.pos() > 1
            && (w.is_last_at(1) || w.string_start(&["JACQUES"]));
        if silent {
            self.skip_vowels();
        }
        silent
    }

    /// The O of "IRON" at either end of a word, but not "IRONIC".
    fn o_silent(&self) -> bool {
        let w = &self.word;
        w.char_at(0, 'O')
            && (w.string_start(&["IRON"]) || w.string_at_end(-2, &["IRON"]))
            && !w.string_at(-2, &["IRONIC"])
    }

    fn encode_e_pronounced(&mut self) {
        let w = &self.word;

        // Two pronunciations: "LAME", "AGAPE", "RESUME".
        if w.string_exact(&["LAME", "SAKE", "PATE", "AGAPE"])
            || (w.pos() == 5 && w.string_start(&["RESUME"]))
        {
            self.out.emit(None, Some("A"));
            return;
        }

        if w.string_exact(&["INGE"]) {
            self.out.emit(Some("A"), None);
            return;
        }

        // "BLESSED", "LEARNED": one or two syllables, and the D may be voiced.
        if w.pos() == 5 && w.string_start(&["BLESSED", "LEARNED"]) {
            self.out.add_exact_approx_alt("D", "AD", "T", "AT");
            self.word.skip(1);
            return;
        }

        if (!self.e_silent() && !self.al_inversion && !self.silent_internal_e())
            || self.pronounced_exceptions()
        {
            self.out.add("A");
        }
        self.al_inversion = false;
    }

    /// Final E, and E before a final plural S or past tense D, e.g.
    /// "GRAPES", "BANISHED"; also before "-NESS", "-LESS" and "-LY".
    fn e_silent(&self) -> bool {
        if self.e_pronounced_at_end() {
            return false;
        }
        let w = &self.word;
        w.is_last_at(0)
            || (w.pos() > 1
                && w.is_last_at(1)
                && w.string_at(1, &["S", "D"])
                && !(w.string_at(-1, &["TED", "SES", "CES"]) || w.string_start(VOICED_ED_ES)))
            || w.string_at_end(1, &["NESS", "LESS"])
            || (w.string_at_end(1, &["LY"]) && !w.string_start(&["CICELY"]))
    }

    fn e_pronounced_at_end(&self) -> bool {
        let w = &self.word;
        let chars = w.chars();
        w.is_last_at(0)
            && (w.string_at(-6, &["STROPHE"])
                // A vowel before the E would have eaten it; a consonant
                // before it leaves the E voiced in two and three letter words.
                || chars.len() == 2
                || (chars.len() == 3 && !chars.first().copied().is_some_and(is_vowel))
                // German name endings, e.g. "LUEDTKE"
                || (w.string_at_end(
                    -2,
                    &["BKE", "DKE", "FKE", "KKE", "LKE", "NKE", "MKE", "PKE", "TKE", "VKE", "ZKE"],
                ) && !w.string_start(&["FINKE", "FUNKE", "FRANKE"]))
                || w.string_at_end(-4, &["SCHKE"])
                || w.string_exact(PRONOUNCED_FINAL_E))
    }

    /// Silent E inside compounds, e.g. "OLESEN", "BRIDGESTONE" against
    /// "BRIDGEWATER".
    fn silent_internal_e(&self) -> bool {
        let w = &self.word;
        (w.string_start(&["OLE"]) && self.e_suffix(3))
            || (w.string_start(&[
                "BARE", "FIRE", "FORE", "GATE", "HAGE", "HAVE", "HAZE", "HOLE", "CAPE", "HUSE",
                "LACE", "LINE", "LIVE", "LOVE", "MORE", "MOSE", "NICE", "RAKE", "ROBE", "ROSE",
                "SISE", "SIZE", "WARE", "WAKE", "WISE", "WINE",
            ]) && self.e_suffix(4))
            || (w.string_start(&[
                "BLAKE", "BRAKE", "BRINE", "CARLE", "CLEVE", "DUNNE", "HEDGE", "HOUSE", "JEFFE",
                "LUNCE", "STOKE", "STONE", "THORE", "WEDGE", "WHITE",
            ]) && self.e_suffix(5))
            || (w.string_start(&["BRIDGE", "CHEESE"]) && self.e_suffix(6))
            || w.string_at(-5, &["CHARLES"])
    }

    /// The E closes a prefix of length `at` and the rest of the word is a
    /// suffix that leaves it silent.
    fn e_suffix(&self, at: usize) -> bool {
        let w = &self.word;
        if w.pos() + 1 != at || w.len() <= at + 1 {
            return false;
        }
        if !(w.is_vowel_at(2) || (w.string_at(1, &["ST", "SL"]) && w.len() > at + 2)) {
            return false;
        }
        // Endings that voice the E after all, e.g. "BRIDGETTE", "OLENA".
        !w.string_at_end(
            1,
            &[
                "T", "R", "TA", "TT", "NA", "NO", "NE", "RS", "RE", "LA", "AU", "RO", "RA", "TTE",
                "LIA", "NOW", "ROS", "RAS", "WOOD", "WATER", "WORTH",
            ],
        )
    }

    /// Voiced E where the general rules would silence it, e.g. "HERAKLES",
    /// "ROBLES", "PROBLEM"; also "-LE" words the L handler left alone.
    fn pronounced_exceptions(&self) -> bool {
        let w = &self.word;
        (w.is_last_at(1)
            && (w.string_at_end(-3, &["OCLES", "ACLES", "AKLES"])
                || w.string_start(VOICED_ES_NAMES)))
            || w.string_at(-2, &["FRED", "DGES", "DRED", "GNES"])
            || w.string_at(-5, &["PROBLEM", "RESPLEN"])
            || w.string_at(-4, &["REPLEN"])
            || w.string_at(-3, &["SPLE"])
    }
}

#[cfg(test)]
mod tests {
    use metaphone_core::EncoderOptions;

    use crate::output::Output;
    use crate::pass::Pass;
    use crate::test_util::{encode, encode_exact, encode_vowels};

    fn pair(p: &str, s: &str) -> (String, String) {
        (p.to_string(), s.to_string())
    }

    /// Run `f` on a vowel-encoding pass with the cursor at `pos`.
    fn at<R>(word: &str, pos: usize, f: impl FnOnce(&mut Pass<'_>) -> R) -> R {
        let chars: Vec<char> = word.chars().collect();
        let mut out = Output::default();
        out.reset(8, false);
        let mut pass = Pass::new(&chars, &mut out, EncoderOptions::new().with_encode_vowels(true));
        pass.word.skip(pos);
        f(&mut pass)
    }

    fn cursor_after_vowel(word: &str, pos: usize) -> usize {
        at(word, pos, |p| {
            p.encode_vowel();
            p.word.pos()
        })
    }

    #[test]
    fn initial_vowel_is_a() {
        assert_eq!(encode("ANNA"), pair("AN", ""));
        assert_eq!(encode("EUROPE"), pair("ARP", ""));
    }

    #[test]
    fn non_initial_vowels_need_the_option() {
        assert_eq!(encode("NESTED"), pair("NSTT", ""));
        assert_eq!(encode_vowels("NESTED"), pair("NASTAT", ""));
    }

    #[test]
    fn silent_o_in_iron() {
        assert_eq!(encode_vowels("IRON"), pair("ARN", ""));
        assert_eq!(encode_vowels("IRONIC"), pair("ARANAK", ""));
    }

    #[test]
    fn silent_ue() {
        assert_eq!(encode_vowels("VOGUE"), pair("FAK", ""));
    }

    #[test]
    fn two_pronunciations() {
        assert_eq!(encode_vowels("LAME"), pair("LAM", "LAMA"));
        assert_eq!(encode_vowels("INGE"), pair("ANJA", "ANK"));
    }

    #[test]
    fn blessed_voices_d() {
        assert_eq!(encode_vowels("BLESSED"), pair("PLAST", "PLASAT"));
        assert_eq!(encode("BLESSED"), pair("PLST", ""));
    }

    #[test]
    fn final_e() {
        assert_eq!(encode_vowels("GRAPES"), pair("KRAPS", ""));
        assert_eq!(encode_vowels("CAFE"), pair("KAFA", ""));
        assert_eq!(encode_vowels("THE"), pair("0A", ""));
    }

    #[test]
    fn e_before_suffixes() {
        assert_eq!(encode_vowels("WHOLENESS"), pair("ALNAS", ""));
        assert_eq!(encode_vowels("OLESEN"), pair("ALSAN", ""));
    }

    #[test]
    fn voiced_es_names() {
        assert_eq!(encode_vowels("ROBLES"), pair("RAPLAS", ""));
    }

    #[test]
    fn exact_mode_does_not_touch_vowels() {
        assert_eq!(encode_exact("ABE"), pair("AB", ""));
    }

    #[test]
    fn lew_ending_leaves_w_to_its_handler() {
        // "-LEWA" after a consonant: the run stops on the E.
        assert_eq!(cursor_after_vowel("KLEWA", 2), 2);
        // After a vowel the whole run is skipped.
        assert_eq!(cursor_after_vowel("ALEWA", 2), 4);
    }

    #[test]
    fn internal_e_before_compound_suffix() {
        assert!(at("OLESEN", 2, |p| p.silent_internal_e()));
        assert!(at("BRIDGESTONE", 5, |p| p.silent_internal_e()));
        // Endings that keep the E voiced.
        assert!(!at("OLENA", 2, |p| p.silent_internal_e()));
        assert!(!at("BRIDGEWATER", 5, |p| p.silent_internal_e()));
        assert!(!at("BRIDGET", 5, |p| p.silent_internal_e()));
    }

    #[test]
    fn german_final_ke_is_pronounced() {
        assert!(at("LUEDTKE", 6, |p| p.e_pronounced_at_end()));
        assert!(at("REINKE", 5, |p| p.e_pronounced_at_end()));
        assert!(at("NITSCHKE", 7, |p| p.e_pronounced_at_end()));
        assert!(!at("FRANKE", 5, |p| p.e_pronounced_at_end()));
        assert!(!at("FINKE", 4, |p| p.e_pronounced_at_end()));
        assert!(at("FRANKE", 5, |p| p.e_silent()));
    }

    #[test]
    fn e_before_ly() {
        assert!(at("LOVELY", 3, |p| p.e_silent()));
        assert!(!at("CICELY", 3, |p| p.e_silent()));
    }

    #[test]
    fn e_before_final_s_or_d() {
        assert!(at("GRAPES", 4, |p| p.e_silent()));
        assert!(at("NAMED", 3, |p| p.e_silent()));
        for (word, pos) in [("NESTED", 4), ("PASSES", 4), ("RACES", 3), ("AHMED", 3)] {
            assert!(!at(word, pos, |p| p.e_silent()), "{word}");
        }
        assert_eq!(encode_vowels("AHMED"), pair("AMAT", ""));
    }

    #[test]
    fn resume_only_at_its_final_e() {
        assert_eq!(encode_vowels("RESUME"), pair("RASAM", "RASAMA"));
        let emitted = |pos| {
            at("RESUME", pos, |p| {
                p.encode_e_pronounced();
                (p.out.primary().to_code(), p.out.alternate().to_code())
            })
        };
        assert_eq!(emitted(1), pair("A", "A"));
        assert_eq!(emitted(5), pair("", "A"));
    }
}
