//! Random bit source for the generator.
//!
//! The generation engine draws from any [`RngCore`]; [`Pcg32`] is the
//! PCG-XSH-RR 64/32 generator (O'Neill's `pcg32_random_r`). Seeding it with
//! `(seed, stream)` reproduces the reference `pcg32_srandom` sequence, so a
//! given seed yields the same output as other PCG32-based `lzdgen` builds.
//!
//! [`sample`] is the uniform sampler used for Bernoulli trials and
//! inverse-power-law sampling.

use rand_core::{impls, Error, RngCore, SeedableRng};

const PCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Permuted congruential generator with 64-bit state and 32-bit output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    /// Seeds a generator from an initial state and a stream selector.
    ///
    /// Equivalent to `pcg32_srandom_r(rng, seed, stream)`. Only the low 63
    /// bits of `stream` matter; streams differing in the top bit coincide.
    pub fn new(seed: u64, stream: u64) -> Self {
        let mut rng = Pcg32 {
            state: 0,
            inc: (stream << 1) | 1,
        };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(PCG_MULTIPLIER)
            .wrapping_add(self.inc);
    }

    /// Next 32-bit output.
    #[inline]
    pub fn draw(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngCore for Pcg32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.draw()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg32 {
    /// Little-endian initial state followed by little-endian stream selector.
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut state = [0u8; 8];
        let mut stream = [0u8; 8];
        state.copy_from_slice(&seed[..8]);
        stream.copy_from_slice(&seed[8..]);
        Pcg32::new(u64::from_le_bytes(state), u64::from_le_bytes(stream))
    }
}

/// Draws a uniform `f64` in `[0, 1)` from one 32-bit output.
#[inline]
pub fn sample<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    rng.next_u32() as f64 / (u32::MAX as f64 + 1.0)
}
