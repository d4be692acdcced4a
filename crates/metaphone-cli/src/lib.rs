// metaphone-cli: shared utilities for CLI tools.

use std::process;

use metaphone_core::{EncoderOptions, OptionError};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Command line after the shared flags have been taken out.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommonArgs {
    pub options: EncoderOptions,
    pub verbose: bool,
    /// Everything that is not a shared flag, in order.
    pub rest: Vec<String>,
}

/// Error from parsing the shared flags.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    #[error("{0} requires a value")]
    MissingValue(String),
    #[error(transparent)]
    Option(#[from] OptionError),
}

/// Parse the flags shared by all tools.
///
/// - `-v`, `--verbose`: log to stderr
/// - `--vowels`: encode non-initial vowels
/// - `--exact`: keep voiced/voiceless distinctions
/// - `--max-length N`, `--max-length=N`
/// - `-o NAME=VALUE`, `--option NAME=VALUE`, `--option=NAME=VALUE`
pub fn parse_common(args: &[String]) -> Result<CommonArgs, ArgError> {
    let mut parsed = CommonArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => parsed.verbose = true,
            "--vowels" => parsed.options.encode_vowels = true,
            "--exact" => parsed.options.encode_exact = true,
            "--max-length" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ArgError::MissingValue(arg.clone()))?;
                parsed.options.set("max_length", value)?;
            }
            "-o" | "--option" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ArgError::MissingValue(arg.clone()))?;
                parsed.options.apply_assignment(value)?;
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--max-length=") {
                    parsed.options.set("max_length", value)?;
                } else if let Some(value) = arg.strip_prefix("--option=") {
                    parsed.options.apply_assignment(value)?;
                } else {
                    parsed.rest.push(arg.clone());
                }
            }
        }
    }

    Ok(parsed)
}

/// Install a stderr logger when `verbose` is set; otherwise stay silent.
pub fn init_logging(verbose: bool) {
    if !verbose {
        return;
    }
    // A second logger is rejected by `log`; nothing to do about it here.
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Usage text for the shared flags.
pub const COMMON_OPTIONS_HELP: &str = "\
  --vowels                Encode non-initial vowels
  --exact                 Keep B/P, D/T, G/K and V/F distinct
  --max-length N          Maximum code length (default 8)
  -o, --option NAME=VALUE Set an encoder option by name
  -v, --verbose           Log to stderr
  -h, --help              Print this help";
