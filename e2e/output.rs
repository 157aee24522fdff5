// e2e/output.rs — library-level output tests
//
// Exercises open_dst_file + write_generated together against real files,
// the same path the binary takes.

use std::fs;
use std::io::Write;

use lzdgen::io::{open_dst_file, write_generated};
use lzdgen::{Params, Pcg32};
use tempfile::TempDir;

#[test]
fn file_round_trip_matches_in_memory_generation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gen.bin");
    let params = Params::new(5.0, 2.0, 4.0);

    let mut dst = open_dst_file(path.to_str().unwrap(), false).unwrap();
    let summary = write_generated(&mut dst, &mut Pcg32::new(3, 4), &params, 200_000, true).unwrap();
    dst.flush().unwrap();
    drop(dst);

    let mut in_memory = Vec::new();
    write_generated(&mut in_memory, &mut Pcg32::new(3, 4), &params, 200_000, true).unwrap();

    let on_disk = fs::read(&path).unwrap();
    assert_eq!(on_disk, in_memory);
    assert_eq!(summary.bytes, 200_000);
}

#[cfg(unix)]
#[test]
fn created_file_is_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("perm.bin");
    drop(open_dst_file(path.to_str().unwrap(), false).unwrap());
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    // Subject to the process umask; owner read/write is always kept.
    assert_eq!(mode & 0o600, 0o600);
}

#[test]
fn generated_data_is_compressible() {
    let mut data = Vec::new();
    write_generated(&mut data, &mut Pcg32::new(11, 0xC0FFEE), &Params::default(), 1 << 20, false)
        .unwrap();
    let packed = zstd::bulk::compress(&data, 3).unwrap();
    assert!(packed.len() < data.len() / 2, "{} -> {}", data.len(), packed.len());
}
