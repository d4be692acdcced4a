// metaphone-encode: Print Metaphone 3 codes for words.
//
// Encodes each word given on the command line, or each line of stdin when
// no words are given. Output is one line per word:
//   WORD<TAB>PRIMARY<TAB>SECONDARY
//
// Usage:
//   metaphone-encode [OPTIONS] [WORD...]

use std::io::{self, BufRead, Write};

use log::debug;
use metaphone3::EncodingCache;

/// Entries kept when reading from stdin, where names repeat a lot.
const STDIN_CACHE_CAPACITY: usize = 4096;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if metaphone_cli::wants_help(&args) {
        println!("metaphone-encode: Print Metaphone 3 codes for words.");
        println!();
        println!("Usage: metaphone-encode [OPTIONS] [WORD...]");
        println!();
        println!("Encodes each WORD, or each line of stdin when no word is given.");
        println!("Prints WORD<TAB>PRIMARY<TAB>SECONDARY per word.");
        println!();
        println!("Options:");
        println!("{}", metaphone_cli::COMMON_OPTIONS_HELP);
        return;
    }

    let parsed = metaphone_cli::parse_common(&args)
        .unwrap_or_else(|e| metaphone_cli::fatal(&e.to_string()));
    metaphone_cli::init_logging(parsed.verbose);
    debug!("options: {:?}", parsed.options);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !parsed.rest.is_empty() {
        let mut cache = EncodingCache::new(parsed.options, 0);
        for word in &parsed.rest {
            let code = cache.encode(word);
            let _ = writeln!(out, "{word}\t{}\t{}", code.primary, code.secondary);
        }
        return;
    }

    let mut cache = EncodingCache::new(parsed.options, STDIN_CACHE_CAPACITY);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let code = cache.encode(word);
        let _ = writeln!(out, "{word}\t{}\t{}", code.primary, code.secondary);
    }
    debug!("cache: {} hits, {} misses", cache.hits(), cache.misses());
}
