//! Chunked generation into a writer.
//!
//! The tool never holds the whole output in memory: a single chunk buffer is
//! refilled by repeated generator calls that share one random source, and each
//! chunk is written before the next is generated.

use std::io::{self, Write};

use rand_core::RngCore;
use xxhash_rust::xxh64::Xxh64;

use crate::config::WRITE_CHUNK_SIZE;
use crate::datagen::{generate, generate_bulk, Params};
use crate::displaylevel;

/// Totals reported after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub bytes: u64,
    pub chunks: u64,
    /// XXH64 (seed 0) of everything written.
    pub xxh64: u64,
}

/// Generates `size` bytes into `dst` in [`WRITE_CHUNK_SIZE`] chunks.
///
/// `bulk` selects [`generate_bulk`] over [`generate`] for each chunk.
pub fn write_generated<W, R>(
    dst: &mut W,
    rng: &mut R,
    params: &Params,
    size: u64,
    bulk: bool,
) -> io::Result<WriteSummary>
where
    W: Write + ?Sized,
    R: RngCore + ?Sized,
{
    let mut buffer = vec![0u8; size.min(WRITE_CHUNK_SIZE as u64) as usize];
    let mut hasher = Xxh64::new(0);
    let mut offs = 0u64;
    let mut chunks = 0u64;

    while offs < size {
        let num = (size - offs).min(WRITE_CHUNK_SIZE as u64) as usize;
        let chunk = &mut buffer[..num];

        if bulk {
            generate_bulk(rng, chunk, params);
        } else {
            generate(rng, chunk, params);
        }

        dst.write_all(chunk)?;
        hasher.update(chunk);

        offs += num as u64;
        chunks += 1;
        displaylevel!(4, "\rGenerated : {} MiB / {} MiB ", offs >> 20, size >> 20);
    }
    if chunks > 1 {
        displaylevel!(4, "\n");
    }

    Ok(WriteSummary {
        bytes: offs,
        chunks,
        xxh64: hasher.digest(),
    })
}
