//! Stream composer: interleaves literal runs and repeat runs.

use rand_core::RngCore;

use crate::datagen::lengths::RunLengths;
use crate::datagen::literal::Literals;
use crate::datagen::params::Params;
use crate::rng::sample;

/// Kind of an emitted run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunKind {
    Literal,
    Repeat,
}

/// One emitted run, as reported to a [`RunObserver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    pub kind: RunKind,
    /// Offset of the first byte in the destination passed to the entry point.
    pub offset: usize,
    /// Bytes written.
    pub len: usize,
    /// Length issued by the histogram before clamping to the remaining space.
    /// Zero for a separator byte.
    pub drawn_len: usize,
    /// `true` for the single literal byte inserted between two repeat runs.
    pub separator: bool,
}

/// Receives every run as it is written.
pub trait RunObserver {
    fn on_run(&mut self, run: &Run);

    /// Called before each bulk block with the corpus its literals are drawn from.
    fn on_corpus(&mut self, _offset: usize, _corpus: &[u8]) {}
}

impl<F: FnMut(&Run)> RunObserver for F {
    fn on_run(&mut self, run: &Run) {
        self(run)
    }
}

/// Fills `dst` with runs, reporting offsets relative to `base`.
///
/// Each run is a literal run with probability `1 / params.ratio`, otherwise a
/// repeat of the current scratch buffer. Two repeat runs are never adjacent:
/// a repeat following a repeat is preceded by one literal byte.
pub(crate) fn compose<R, O>(
    rng: &mut R,
    dst: &mut [u8],
    base: usize,
    params: &Params,
    literals: Literals<'_>,
    observer: &mut O,
) where
    R: RngCore + ?Sized,
    O: RunObserver + ?Sized,
{
    let size = dst.len();
    let literal_prob = 1.0 / params.ratio;
    let mut lengths = RunLengths::new(params.len_exp);
    let mut last = RunKind::Literal;
    let mut pos = 0usize;

    while pos < size {
        let drawn = lengths.next_len(rng, &literals);
        let mut len = drawn.min(size - pos);

        if sample(rng) < literal_prob {
            literals.fill(rng, &mut dst[pos..pos + len]);
            observer.on_run(&Run {
                kind: RunKind::Literal,
                offset: base + pos,
                len,
                drawn_len: drawn,
                separator: false,
            });
            last = RunKind::Literal;
        } else {
            if last == RunKind::Repeat {
                literals.fill(rng, &mut dst[pos..pos + 1]);
                observer.on_run(&Run {
                    kind: RunKind::Literal,
                    offset: base + pos,
                    len: 1,
                    drawn_len: 0,
                    separator: true,
                });
                pos += 1;
                len = len.min(size - pos);
            }

            dst[pos..pos + len].copy_from_slice(&lengths.scratch()[..len]);
            // The separator may have used the last byte of the buffer.
            if len > 0 {
                observer.on_run(&Run {
                    kind: RunKind::Repeat,
                    offset: base + pos,
                    len,
                    drawn_len: drawn,
                    separator: false,
                });
            }
            last = RunKind::Repeat;
        }

        pos += len;
    }
}
