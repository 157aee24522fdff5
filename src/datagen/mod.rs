//! Compressible data generation.
//!
//! | Submodule   | Responsibility |
//! |-------------|----------------|
//! | [`params`]  | [`Params`]: ratio target and distribution exponents. |
//! | [`literal`] | Literal bytes from a power distribution or a per-block corpus. |
//! | [`lengths`] | Length-class histogram and the scan/refill state machine. |
//! | [`stream`]  | Composer interleaving literal and repeat runs; run observers. |
//! | [`bulk`]    | Block-wise composition with a fresh corpus per block. |
//!
//! The entry points fill a caller-owned buffer in place and draw every random
//! value from the caller's [`RngCore`], so identical seeds and parameters give
//! identical bytes, and consecutive calls on the same generator continue its
//! sequence.

pub mod bulk;
pub mod lengths;
pub mod literal;
pub mod params;
pub mod stream;

use rand_core::RngCore;

pub use literal::{Corpus, Literals};
pub use lengths::{LengthHistogram, RunLengths};
pub use params::Params;
pub use stream::{Run, RunKind, RunObserver};

use crate::rng::sample;

/// Draws `u^exp` for uniform `u`, in single precision.
///
/// The uniform draw is narrowed to `f32` before exponentiation, so draws
/// within 128 of `u32::MAX` round to exactly `1.0`.
#[inline]
pub(crate) fn power_variate<R: RngCore + ?Sized>(rng: &mut R, exp: f32) -> f32 {
    let p = (sample(rng) as f32).powf(exp);
    assert!(
        (0.0..=1.0).contains(&p),
        "power-law variate {p} outside [0, 1] (exponent {exp})"
    );
    p
}

/// Draws `floor(classes * u^exp)`, clamped into the top class when the
/// variate rounds to `1.0`.
#[inline]
pub(crate) fn power_law<R: RngCore + ?Sized>(rng: &mut R, classes: usize, exp: f32) -> usize {
    ((classes as f32 * power_variate(rng, exp)) as usize).min(classes - 1)
}

/// Fills `dst` with compressible data using distribution-mode literals.
///
/// Writes exactly `dst.len()` bytes; an empty buffer is a no-op that draws
/// nothing from `rng`.
pub fn generate<R: RngCore + ?Sized>(rng: &mut R, dst: &mut [u8], params: &Params) {
    generate_with(rng, dst, params, &mut |_: &Run| {});
}

/// [`generate`], reporting every run to `observer`.
pub fn generate_with<R, O>(rng: &mut R, dst: &mut [u8], params: &Params, observer: &mut O)
where
    R: RngCore + ?Sized,
    O: RunObserver + ?Sized,
{
    stream::compose(
        rng,
        dst,
        0,
        params,
        Literals::distribution(params.lit_exp),
        observer,
    );
}

/// Fills `dst` with compressible data, block by block, using corpus-mode
/// literals.
///
/// Faster than [`generate`] on large buffers and more redundant, since each
/// 1 MiB block draws its literals from a 16 KiB corpus.
pub fn generate_bulk<R: RngCore + ?Sized>(rng: &mut R, dst: &mut [u8], params: &Params) {
    generate_bulk_with(rng, dst, params, &mut |_: &Run| {});
}

/// [`generate_bulk`], reporting every block corpus and run to `observer`.
pub fn generate_bulk_with<R, O>(rng: &mut R, dst: &mut [u8], params: &Params, observer: &mut O)
where
    R: RngCore + ?Sized,
    O: RunObserver + ?Sized,
{
    bulk::compose_blocks(rng, dst, params, observer);
}
