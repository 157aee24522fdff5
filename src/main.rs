//! Binary entry point for the `lzdgen` command-line tool.
//!
//! 1. [`parse_args`] builds a validated [`ParsedArgs`].
//! 2. [`run`] opens the destination, seeds the generator and writes the
//!    requested number of bytes in chunks.
//!
//! Returns exit code 0 on success and 1 on any error.

use std::io::Write;

use anyhow::Context;
use clap::error::ErrorKind;

use lzdgen::cli::args::{parse_args, ParsedArgs};
use lzdgen::cli::constants::{set_display_level, PROGRAM_NAME};
use lzdgen::config::PCG_STREAM;
use lzdgen::io::{open_dst_file, write_generated};
use lzdgen::{display, displaylevel, Pcg32};

fn run(args: &ParsedArgs) -> anyhow::Result<()> {
    let mut dst = open_dst_file(&args.output, args.force).context("unable to open output file")?;

    let mut rng = Pcg32::new(args.seed, PCG_STREAM);

    displaylevel!(3, "{}: seed 0x{:016X}\n", PROGRAM_NAME, args.seed);
    displaylevel!(
        4,
        "{}: size {}, ratio {}, match-exp {}, literal-exp {}{}\n",
        PROGRAM_NAME,
        args.size,
        args.params.ratio,
        args.params.len_exp,
        args.params.lit_exp,
        if args.bulk { ", bulk" } else { "" }
    );

    let summary = write_generated(&mut dst, &mut rng, &args.params, args.size, args.bulk)
        .context("write error")?;
    dst.flush().context("write error")?;

    displaylevel!(
        3,
        "{}: wrote {} bytes to {}, xxh64 {:016x}\n",
        PROGRAM_NAME,
        summary.bytes,
        if dst.is_stdout { "stdout" } else { args.output.as_str() },
        summary.xxh64
    );
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // clap renders its own `error: ` prefix.
            display!("{}", e);
            std::process::exit(1);
        }
    };

    set_display_level(args.display_level);

    if let Err(e) = run(&args) {
        if lzdgen::cli::constants::display_level() >= 1 {
            display!("{}: {:#}\n", PROGRAM_NAME, e);
        }
        std::process::exit(1);
    }
}
