//! Run-length sampling.
//!
//! Run lengths are drawn in batches into a [`LengthHistogram`] and handed out
//! by [`RunLengths`], which scans the histogram from the longest class down to
//! the shortest. Each refill also redraws the scratch buffer that repeat runs
//! copy from, so one batch of lengths shares one repeated pattern.

use rand_core::RngCore;

use crate::config::{LEN_PER_CHUNK, MAX_LEN, MIN_LEN, NUM_LEN};
use crate::datagen::literal::Literals;
use crate::datagen::power_law;

/// Counts per length class; class `k` is run length `MIN_LEN + k`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthHistogram {
    freq: [u32; NUM_LEN],
}

impl LengthHistogram {
    pub fn new() -> Self {
        LengthHistogram { freq: [0; NUM_LEN] }
    }

    /// Clears all classes and draws `num` fresh lengths.
    ///
    /// Each sample is `floor(NUM_LEN * u^len_exp)`; larger exponents push
    /// mass toward the short classes.
    pub fn refill<R: RngCore + ?Sized>(&mut self, rng: &mut R, num: usize, len_exp: f32) {
        self.freq = [0; NUM_LEN];
        for _ in 0..num {
            let class = power_law(rng, NUM_LEN, len_exp);
            self.freq[class] += 1;
        }
    }

    #[inline]
    pub fn count(&self, class: usize) -> u32 {
        self.freq[class]
    }

    /// Sum over all classes.
    pub fn total(&self) -> u64 {
        self.freq.iter().map(|&f| f as u64).sum()
    }

    /// Removes one unit from `class`. Returns `false` if it was already empty.
    #[inline]
    pub fn take(&mut self, class: usize) -> bool {
        if self.freq[class] == 0 {
            return false;
        }
        self.freq[class] -= 1;
        true
    }
}

impl Default for LengthHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands out run lengths and owns the scratch bytes repeat runs copy from.
///
/// The scan cursor starts below the lowest class so the first request always
/// refills. Within one refill the cursor only moves down; a class may be
/// issued several times in a row while it still has counts.
#[derive(Clone, Debug)]
pub struct RunLengths {
    hist: LengthHistogram,
    cursor: usize,
    scratch: [u8; MAX_LEN],
    len_exp: f32,
    refills: u64,
}

impl RunLengths {
    pub fn new(len_exp: f64) -> Self {
        RunLengths {
            hist: LengthHistogram::new(),
            cursor: 0,
            scratch: [0; MAX_LEN],
            len_exp: len_exp as f32,
            refills: 0,
        }
    }

    /// Next run length, in `MIN_LEN..=MAX_LEN`.
    ///
    /// When the scan runs past the shortest class the scratch buffer is redrawn
    /// with `literals`, a new batch of lengths is sampled, and scanning resumes
    /// from the longest class.
    pub fn next_len<R: RngCore + ?Sized>(&mut self, rng: &mut R, literals: &Literals<'_>) -> usize {
        while self.hist.count(self.cursor) == 0 {
            if self.cursor == 0 {
                self.refill(rng, literals);
                self.cursor = NUM_LEN;
            }
            self.cursor -= 1;
        }
        let taken = self.hist.take(self.cursor);
        debug_assert!(taken, "scan stopped on an empty class");
        MIN_LEN + self.cursor
    }

    fn refill<R: RngCore + ?Sized>(&mut self, rng: &mut R, literals: &Literals<'_>) {
        literals.fill(rng, &mut self.scratch);
        self.hist.refill(rng, LEN_PER_CHUNK, self.len_exp);
        self.refills += 1;
    }

    /// Bytes repeat runs copy from until the next refill.
    #[inline]
    pub fn scratch(&self) -> &[u8; MAX_LEN] {
        &self.scratch
    }

    /// Histogram as it stands after the most recent request.
    pub fn histogram(&self) -> &LengthHistogram {
        &self.hist
    }

    /// Number of refills performed so far.
    pub fn refills(&self) -> u64 {
        self.refills
    }
}
