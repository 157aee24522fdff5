// Integration tests for cli/args.rs — option resolution.

use clap::error::ErrorKind;
use lzdgen::cli::args::{parse_args_from, ParsedArgs};
use lzdgen::datagen::Params;

fn parse(args: &[&str]) -> Result<ParsedArgs, clap::Error> {
    parse_args_from(std::iter::once("lzdgen").chain(args.iter().copied()))
}

#[test]
fn long_options() {
    let a = parse(&[
        "--force",
        "--literal-exp",
        "2.5",
        "--match-exp=4",
        "--ratio",
        "7",
        "--seed",
        "0x2A",
        "--size",
        "64k",
        "--bulk",
        "--output",
        "data.bin",
    ])
    .unwrap();
    assert!(a.force);
    assert!(a.bulk);
    assert_eq!(a.params, Params::new(7.0, 4.0, 2.5));
    assert_eq!(a.seed, 42);
    assert_eq!(a.size, 64 * 1024);
    assert_eq!(a.output, "data.bin");
}

#[test]
fn short_options() {
    let a = parse(&["-f", "-l", "1", "-m", "2", "-r", "1.5", "-S", "9", "-s", "3m", "out"]).unwrap();
    assert!(a.force);
    assert_eq!(a.params, Params::new(1.5, 2.0, 1.0));
    assert_eq!(a.seed, 9);
    assert_eq!(a.size, 3 << 20);
}

#[test]
fn seed_defaults_when_absent() {
    // Just has to parse; the value is clock-derived.
    assert!(parse(&["out"]).is_ok());
}

#[test]
fn help_and_version_are_reported_as_such() {
    assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    assert_eq!(parse(&["-V"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
}

#[test]
fn invalid_values_are_rejected() {
    for bad in [
        &["-r", "0.5", "out"][..],
        &["-l", "0", "out"],
        &["-m", "abc", "out"],
        &["-s", "0", "out"],
        &["-S", "seed", "out"],
        &["--bogus", "out"],
    ] {
        assert!(parse(bad).is_err(), "{bad:?} should fail");
    }
}

#[test]
fn too_many_outputs() {
    let err = parse(&["a", "-o", "b"]).unwrap_err();
    assert!(err.to_string().contains("too many arguments"));
}

#[test]
fn extra_positional_is_rejected() {
    assert!(parse(&["a", "b"]).is_err());
}
