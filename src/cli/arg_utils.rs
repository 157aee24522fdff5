// arg_utils.rs — value parsers for command-line arguments.
//
// Each `parse_*` function has the `fn(&str) -> Result<T, String>` shape clap
// accepts as a `value_parser`.

use crate::cli::constants::{GB, KB, MB, TB};

/// Parses an unsigned integer from the start of `s` using C `strtoull`
/// base-0 rules: `0x`/`0X` prefix for hexadecimal, a leading `0` for octal,
/// decimal otherwise.
///
/// Returns `None` if no digits are present or the value overflows `u64`,
/// otherwise `Some((value, remainder))` with the unconsumed tail of `s`.
pub fn read_u64_from_str(s: &str) -> Option<(u64, &str)> {
    let bytes = s.as_bytes();
    let (radix, start) = if bytes.len() > 2
        && bytes[0] == b'0'
        && (bytes[1] == b'x' || bytes[1] == b'X')
        && bytes[2].is_ascii_hexdigit()
    {
        (16, 2)
    } else if bytes.len() > 1 && bytes[0] == b'0' {
        (8, 1)
    } else {
        (10, 0)
    };

    let digits = bytes[start..]
        .iter()
        .take_while(|&&b| (b as char).is_digit(radix))
        .count();

    if digits == 0 {
        // "0" followed by a non-octal character, or no digits at all.
        return if start == 1 { Some((0, &s[1..])) } else { None };
    }

    let end = start + digits;
    let value = u64::from_str_radix(&s[start..end], radix).ok()?;
    Some((value, &s[end..]))
}

/// Parses a byte count with an optional `k`, `m`, `g` or `t` suffix
/// (powers of 1024, case-insensitive). The whole string must be consumed.
pub fn parse_size(s: &str) -> Result<u64, String> {
    let err = || "size must be a positive integer".to_owned();
    let (value, rest) = read_u64_from_str(s).ok_or_else(err)?;
    let mut suffix = rest.chars();
    let multiplier = match suffix.next().map(|c| c.to_ascii_lowercase()) {
        None => 1,
        Some('k') => KB,
        Some('m') => MB,
        Some('g') => GB,
        Some('t') => TB,
        Some(_) => return Err(err()),
    };
    if suffix.next().is_some() {
        return Err(err());
    }
    let size = value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("size `{s}' is too large"))?;
    if size == 0 {
        return Err(err());
    }
    Ok(size)
}

/// Parses a 64-bit seed in decimal, `0x` hexadecimal or `0` octal.
pub fn parse_seed(s: &str) -> Result<u64, String> {
    match read_u64_from_str(s) {
        Some((seed, "")) => Ok(seed),
        _ => Err("seed value error".to_owned()),
    }
}

/// Parses a floating point value, rejecting trailing characters.
pub fn parse_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

/// Parses the ratio target; must be at least 1.0.
pub fn parse_ratio(s: &str) -> Result<f64, String> {
    match parse_float(s) {
        Some(v) if v >= 1.0 => Ok(v),
        _ => Err("ratio must be a floating point value >= 1.0".to_owned()),
    }
}

/// Parses a distribution exponent; must be finite and strictly positive.
pub fn parse_exponent(s: &str) -> Result<f64, String> {
    match parse_float(s) {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err("exponent must be a floating point value > 0".to_owned()),
    }
}

/// [`parse_exponent`] for `--literal-exp`.
pub fn parse_literal_exp(s: &str) -> Result<f64, String> {
    parse_exponent(s).map_err(|e| format!("literal {e}"))
}

/// [`parse_exponent`] for `--match-exp`.
pub fn parse_match_exp(s: &str) -> Result<f64, String> {
    parse_exponent(s).map_err(|e| format!("match {e}"))
}
