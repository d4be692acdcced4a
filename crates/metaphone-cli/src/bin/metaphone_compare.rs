// metaphone-compare: Check whether two words sound alike.
//
// Prints the codes of both words and "match" or "no match". The exit
// status is 0 when any code of one word equals any code of the other,
// 1 otherwise, and 2 on usage errors.
//
// Usage:
//   metaphone-compare [OPTIONS] WORD1 WORD2

use std::process;

use log::debug;
use metaphone3::Metaphone3;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if metaphone_cli::wants_help(&args) {
        println!("metaphone-compare: Check whether two words sound alike.");
        println!();
        println!("Usage: metaphone-compare [OPTIONS] WORD1 WORD2");
        println!();
        println!("Exit status is 0 when the words share a code, 1 otherwise.");
        println!();
        println!("Options:");
        println!("{}", metaphone_cli::COMMON_OPTIONS_HELP);
        return;
    }

    let parsed = metaphone_cli::parse_common(&args)
        .unwrap_or_else(|e| metaphone_cli::fatal(&e.to_string()));
    metaphone_cli::init_logging(parsed.verbose);

    let [first, second] = parsed.rest.as_slice() else {
        eprintln!("error: expected exactly two words, got {}", parsed.rest.len());
        process::exit(2);
    };

    let mut engine = Metaphone3::new(parsed.options);
    let a = engine.encode(first);
    let b = engine.encode(second);
    debug!("{first}: {a:?}, {second}: {b:?}");

    println!("{first}\t{}\t{}", a.primary, a.secondary);
    println!("{second}\t{}\t{}", b.primary, b.secondary);

    if a.sounds_like(&b) {
        println!("match");
    } else {
        println!("no match");
        process::exit(1);
    }
}
