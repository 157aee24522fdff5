//! Command-line argument parsing for `lzdgen`.
//!
//! [`Opts`] is the clap definition; [`parse_args_from`] resolves it into a
//! [`ParsedArgs`] value after the cross-argument checks clap cannot express
//! (exactly one output file, parameter validation).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};

use crate::cli::arg_utils::{parse_literal_exp, parse_match_exp, parse_ratio, parse_seed, parse_size};
use crate::config::{LEN_EXP_DEFAULT, LIT_EXP_DEFAULT, RATIO_DEFAULT};
use crate::datagen::Params;
use crate::io::STDOUT_MARK;

/// Generate compressible data for testing purposes.
#[derive(Debug, Parser)]
#[command(
    name = "lzdgen",
    version = crate::LZDGEN_VERSION_STRING,
    about = "Generate compressible data for testing purposes.",
    after_help = "If OUTFILE is `-', write to standard output."
)]
pub struct Opts {
    /// Output file
    #[arg(value_name = "OUTFILE")]
    pub outfile: Option<String>,

    /// Overwrite output file
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Literal distribution exponent
    #[arg(short = 'l', long = "literal-exp", value_name = "EXP",
          default_value_t = LIT_EXP_DEFAULT, value_parser = parse_literal_exp)]
    pub literal_exp: f64,

    /// Match length distribution exponent
    #[arg(short = 'm', long = "match-exp", value_name = "EXP",
          default_value_t = LEN_EXP_DEFAULT, value_parser = parse_match_exp)]
    pub match_exp: f64,

    /// Write output to OUTFILE
    #[arg(short = 'o', long = "output", value_name = "OUTFILE")]
    pub output: Option<String>,

    /// Compression ratio target
    #[arg(short = 'r', long = "ratio", value_name = "RATIO",
          default_value_t = RATIO_DEFAULT, value_parser = parse_ratio)]
    pub ratio: f64,

    /// Use 64-bit SEED to seed PRNG
    #[arg(short = 'S', long = "seed", value_name = "SEED", value_parser = parse_seed)]
    pub seed: Option<u64>,

    /// Size with opt. k/m/g/t suffix
    #[arg(short = 's', long = "size", value_name = "SIZE",
          default_value = "1m", value_parser = parse_size)]
    pub size: u64,

    /// Sample literals from a per-block corpus (faster, more redundant)
    #[arg(short = 'b', long = "bulk")]
    pub bulk: bool,

    /// Verbose mode (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress messages (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

/// Validated configuration for one run of the tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    /// Output path, or [`STDOUT_MARK`].
    pub output: String,
    /// Overwrite an existing output file.
    pub force: bool,
    pub params: Params,
    pub seed: u64,
    /// Number of bytes to generate; always positive.
    pub size: u64,
    /// Use block-wise corpus generation.
    pub bulk: bool,
    /// Display level derived from the default, `-v` and `-q`.
    pub display_level: u32,
}

impl ParsedArgs {
    pub fn to_stdout(&self) -> bool {
        self.output == STDOUT_MARK
    }
}

/// Parse `std::env::args()`.
pub fn parse_args() -> Result<ParsedArgs, clap::Error> {
    let opts = Opts::try_parse()?;
    resolve_default_seed(opts).map_err(usage_error)
}

/// Parse an explicit argument list; `argv[0]` is the program name.
pub fn parse_args_from<I, T>(argv: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let opts = Opts::try_parse_from(argv)?;
    resolve_default_seed(opts).map_err(usage_error)
}

fn resolve_default_seed(opts: Opts) -> anyhow::Result<ParsedArgs> {
    let seed = opts.seed.unwrap_or_else(default_seed);
    resolve(opts, seed)
}

fn usage_error(err: anyhow::Error) -> clap::Error {
    clap::Error::raw(clap::error::ErrorKind::InvalidValue, format!("{err:#}\n"))
}

/// Turns parsed options into a run configuration.
pub fn resolve(opts: Opts, seed: u64) -> anyhow::Result<ParsedArgs> {
    let output = match (opts.outfile, opts.output) {
        (Some(_), Some(_)) => bail!("too many arguments"),
        (None, None) => bail!("too few arguments"),
        (Some(path), None) | (None, Some(path)) => path,
    };

    let params = Params::new(opts.ratio, opts.match_exp, opts.literal_exp);
    params.validate().context("invalid generation parameters")?;

    if opts.size == 0 {
        bail!("size must be a positive integer");
    }

    let display_level = (2 + opts.verbose as u32).saturating_sub(opts.quiet as u32);

    Ok(ParsedArgs {
        output,
        force: opts.force,
        params,
        seed,
        size: opts.size,
        bulk: opts.bulk,
        display_level,
    })
}

/// Seed used when `--seed` is absent: wall-clock time mixed with the process id.
pub fn default_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos ^ ((std::process::id() as u64) << 32)
}
