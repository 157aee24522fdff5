// lzdgen — LZ data generator
//
// Library behind the `lzdgen` tool: fills buffers with data whose redundancy
// is shaped for LZ77-family compressors, reproducibly from a seed.

pub mod config;
pub mod rng;
pub mod datagen;
pub mod io;
pub mod cli;

// ── Version constants ────────────────────────────────────────────────────────
pub const LZDGEN_VERSION_MAJOR: u32 = 0;
pub const LZDGEN_VERSION_MINOR: u32 = 1;
pub const LZDGEN_VERSION_PATCH: u32 = 0;
pub const LZDGEN_VERSION_NUMBER: u32 =
    LZDGEN_VERSION_MAJOR * 100 * 100 + LZDGEN_VERSION_MINOR * 100 + LZDGEN_VERSION_PATCH;
pub const LZDGEN_VERSION_STRING: &str = "0.1.0";

/// Returns the runtime version number.
pub fn version_number() -> u32 {
    LZDGEN_VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    LZDGEN_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use datagen::{
    generate, generate_bulk, generate_bulk_with, generate_with, Params, Run, RunKind,
    RunObserver,
};
pub use rng::Pcg32;
