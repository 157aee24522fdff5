//! Literal byte generation.
//!
//! Literals come either straight from a power distribution over byte values
//! or, in bulk mode, by resampling a per-block [`Corpus`] that was itself drawn
//! from that distribution.

use rand_core::RngCore;

use crate::config::CORPUS_SIZE;
use crate::datagen::power_variate;

/// Where literal bytes come from.
#[derive(Clone, Copy, Debug)]
pub enum Literals<'a> {
    /// `floor(256 * u^exp)` per byte.
    Distribution { exp: f32 },
    /// Uniformly chosen bytes of a corpus.
    Corpus(&'a Corpus),
}

impl<'a> Literals<'a> {
    /// Distribution-mode literals for the given exponent.
    pub fn distribution(lit_exp: f64) -> Self {
        Literals::Distribution {
            exp: lit_exp as f32,
        }
    }

    /// Fills `dst` with literals.
    #[inline]
    pub fn fill<R: RngCore + ?Sized>(&self, rng: &mut R, dst: &mut [u8]) {
        match *self {
            Literals::Distribution { exp } => fill_from_distribution(rng, dst, exp),
            Literals::Corpus(corpus) => fill_from_corpus(rng, dst, corpus),
        }
    }
}

/// Fills `dst` with bytes following a power distribution.
///
/// With `exp == 1.0` every byte value is equally likely; as `exp` grows small
/// values dominate, approximating the skew of literal frequencies in real files.
/// A variate of exactly `1.0` wraps to byte 0, as a C `unsigned char` store does.
pub fn fill_from_distribution<R: RngCore + ?Sized>(rng: &mut R, dst: &mut [u8], exp: f32) {
    for b in dst.iter_mut() {
        *b = (256.0 * power_variate(rng, exp)) as u32 as u8;
    }
}

/// Fills `dst` with bytes picked uniformly at random from `corpus`.
pub fn fill_from_corpus<R: RngCore + ?Sized>(rng: &mut R, dst: &mut [u8], corpus: &Corpus) {
    let bytes = corpus.as_bytes();
    for b in dst.iter_mut() {
        *b = bytes[rng.next_u32() as usize & (CORPUS_SIZE - 1)];
    }
}

/// Block-local pool of literal bytes.
#[derive(Clone)]
pub struct Corpus {
    bytes: Box<[u8; CORPUS_SIZE]>,
}

impl Corpus {
    /// An all-zero corpus; call [`Corpus::refresh`] before use.
    pub fn new() -> Self {
        Corpus {
            bytes: Box::new([0u8; CORPUS_SIZE]),
        }
    }

    /// Redraws every byte from the literal distribution.
    pub fn refresh<R: RngCore + ?Sized>(&mut self, rng: &mut R, lit_exp: f64) {
        fill_from_distribution(rng, &mut self.bytes[..], lit_exp as f32);
    }

    pub fn as_bytes(&self) -> &[u8; CORPUS_SIZE] {
        &self.bytes
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corpus").field("len", &CORPUS_SIZE).finish()
    }
}
