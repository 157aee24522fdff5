// Integration tests for cli/arg_utils.rs — value parsers.

use lzdgen::cli::arg_utils::{parse_exponent, parse_ratio, parse_seed, parse_size, read_u64_from_str};

#[test]
fn size_accepts_every_suffix_in_both_cases() {
    for (suffix, mult) in [("k", 1u64 << 10), ("m", 1 << 20), ("g", 1 << 30), ("t", 1 << 40)] {
        assert_eq!(parse_size(&format!("5{suffix}")), Ok(5 * mult));
        assert_eq!(parse_size(&format!("5{}", suffix.to_uppercase())), Ok(5 * mult));
    }
}

#[test]
fn size_accepts_hex_and_octal_prefixes() {
    assert_eq!(parse_size("0x10"), Ok(16));
    assert_eq!(parse_size("010"), Ok(8));
    assert_eq!(parse_size("0x10k"), Ok(16 * 1024));
}

#[test]
fn size_rejects_empty_and_trailing_text() {
    assert!(parse_size("").is_err());
    assert!(parse_size("12 ").is_err());
    assert!(parse_size("1mm").is_err());
}

#[test]
fn size_overflow_is_reported() {
    let err = parse_size("99999999999t").unwrap_err();
    assert!(err.contains("too large"), "{err}");
}

#[test]
fn reader_returns_remainder() {
    assert_eq!(read_u64_from_str("12Mfoo"), Some((12, "Mfoo")));
}

#[test]
fn seed_round_trips_full_range() {
    assert_eq!(parse_seed("18446744073709551615"), Ok(u64::MAX));
    assert!(parse_seed("18446744073709551616").is_err());
}

#[test]
fn float_parsers_enforce_bounds() {
    assert_eq!(parse_ratio("3"), Ok(3.0));
    assert!(parse_ratio("nan").is_err());
    assert_eq!(parse_exponent("1e-3"), Ok(0.001));
    assert!(parse_exponent("-2").is_err());
    assert!(parse_exponent("2x").is_err());
}
