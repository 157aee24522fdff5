// e2e/cli_integration.rs — CLI integration tests
//
// Runs the `lzdgen` binary as a black box using std::process::Command.
// Covers argument handling, exit codes, output sizes, and reproducibility.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Locate the `lzdgen` binary produced by Cargo.
fn lzdgen_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_lzdgen") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("lzdgen");
    p
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(lzdgen_bin())
        .args(args)
        .output()
        .expect("failed to run lzdgen")
}

// ── 1. Sizes ──────────────────────────────────────────────────────────────────

#[test]
fn test_cli_writes_requested_size() {
    let dir = TempDir::new().unwrap();
    for (arg, expected) in [("1", 1u64), ("1000", 1000), ("3k", 3072), ("2m", 2 << 20)] {
        let out = dir.path().join(format!("out_{arg}.bin"));
        let status = Command::new(lzdgen_bin())
            .args(["-S", "1", "-s", arg, out.to_str().unwrap()])
            .status()
            .unwrap();
        assert!(status.success(), "size {arg}");
        assert_eq!(fs::metadata(&out).unwrap().len(), expected, "size {arg}");
    }
}

#[test]
fn test_cli_default_size_is_one_mebibyte() {
    let output = run(&["-S", "1", "-"]);
    assert!(output.status.success());
    assert_eq!(output.stdout.len(), 1 << 20);
}

// ── 2. Reproducibility ────────────────────────────────────────────────────────

#[test]
fn test_cli_same_seed_same_output() {
    let a = run(&["-S", "0x1234", "-s", "300k", "-"]);
    let b = run(&["-S", "0x1234", "-s", "300k", "-"]);
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_cli_different_seed_different_output() {
    let a = run(&["-S", "1", "-s", "10k", "-"]);
    let b = run(&["-S", "2", "-s", "10k", "-"]);
    assert_ne!(a.stdout, b.stdout);
}

#[test]
fn test_cli_matches_library_chunking() {
    // The tool generates 1 MiB chunks from one PCG32 seeded with (seed, 0xC0FFEE).
    use lzdgen::config::{PCG_STREAM, WRITE_CHUNK_SIZE};
    use lzdgen::{generate, Params, Pcg32};

    let size = WRITE_CHUNK_SIZE + 5000;
    let output = run(&["-S", "77", "-s", &size.to_string(), "-r", "4", "-"]);
    assert!(output.status.success());

    let mut rng = Pcg32::new(77, PCG_STREAM);
    let params = Params::new(4.0, 3.0, 3.0);
    let mut expected = vec![0u8; size];
    let (first, second) = expected.split_at_mut(WRITE_CHUNK_SIZE);
    generate(&mut rng, first, &params);
    generate(&mut rng, second, &params);
    assert_eq!(output.stdout, expected);
}

#[test]
fn test_cli_bulk_differs_from_default_mode() {
    let a = run(&["-S", "5", "-s", "64k", "-"]);
    let b = run(&["-S", "5", "-s", "64k", "--bulk", "-"]);
    assert!(a.status.success() && b.status.success());
    assert_eq!(b.stdout.len(), 64 * 1024);
    assert_ne!(a.stdout, b.stdout);
}

// ── 3. Overwrite policy ───────────────────────────────────────────────────────

#[test]
fn test_cli_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("exists.bin");
    fs::write(&out, b"precious").unwrap();

    let output = run(&["-s", "10", out.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read(&out).unwrap(), b"precious");

    let output = run(&["-f", "-s", "10", out.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(fs::read(&out).unwrap().len(), 10);
}

// ── 4. Argument errors ────────────────────────────────────────────────────────

#[test]
fn test_cli_missing_outfile_fails() {
    let output = run(&["-s", "10"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too few arguments"), "{stderr}");
    assert!(stderr.starts_with("error: "), "{stderr}");
    assert!(!stderr.contains("lzdgen: error:"), "{stderr}");
}

#[test]
fn test_cli_low_ratio_fails() {
    let output = run(&["-r", "0.5", "-"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ratio must be a floating point value >= 1.0"), "{stderr}");
}

#[test]
fn test_cli_zero_size_fails() {
    let output = run(&["-s", "0", "-"]);
    assert_eq!(output.status.code(), Some(1));
}

// ── 5. --version / --help / verbose ───────────────────────────────────────────

#[test]
fn test_cli_version() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(lzdgen::LZDGEN_VERSION_STRING), "{stdout}");
}

#[test]
fn test_cli_help() {
    let output = run(&["-h"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--ratio"));
    assert!(stdout.contains("--match-exp"));
}

#[test]
fn test_cli_verbose_prints_seed_and_digest() {
    let output = run(&["-v", "-S", "0xABCDEF", "-s", "1k", "-"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("seed 0x0000000000ABCDEF"), "{stderr}");

    let digest = format!("{:016x}", xxhash_rust::xxh64::xxh64(&output.stdout, 0));
    assert!(stderr.contains(&digest), "{stderr}");
}

#[test]
fn test_cli_quiet_by_default() {
    let output = run(&["-S", "1", "-s", "1k", "-"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
