// config.rs — Compile-time configuration constants.
//
// Table sizes for the generation engine, chunking for the command-line
// front end, and the defaults used when a flag is not given.

// Shortest and longest run length, taken from the DEFLATE match-length range.
pub const MIN_LEN: usize = 3;
pub const MAX_LEN: usize = 258;

// Number of length classes; class `k` maps to run length `MIN_LEN + k`.
pub const NUM_LEN: usize = MAX_LEN - MIN_LEN + 1;

// Number of run lengths sampled into the histogram per refill.
pub const LEN_PER_CHUNK: usize = 512;

// Size of the per-block literal corpus used by bulk generation.
// Must be a power of two: corpus indices are taken with a mask.
pub const CORPUS_SIZE: usize = 16384;

// Block size for bulk generation; a fresh corpus is drawn per block.
pub const BLOCK_SIZE: usize = 1024 * 1024;

// Chunk size used by the command-line tool when writing output.
pub const WRITE_CHUNK_SIZE: usize = 1024 * 1024;

// PCG stream selector used by the command-line tool.
// Keeping it fixed makes `--seed N` reproduce the same bytes across versions.
pub const PCG_STREAM: u64 = 0xC0FFEE;

// Default ratio target (`-r`).
pub const RATIO_DEFAULT: f64 = 3.0;

// Default match-length exponent (`-m`).
pub const LEN_EXP_DEFAULT: f64 = 3.0;

// Default literal exponent (`-l`).
pub const LIT_EXP_DEFAULT: f64 = 3.0;

// Default output size (`-s`): 1 MiB.
pub const SIZE_DEFAULT: u64 = 1024 * 1024;

const _: () = assert!(CORPUS_SIZE.is_power_of_two());
const _: () = assert!(NUM_LEN == 256);
