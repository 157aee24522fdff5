//! Block composer for large outputs.
//!
//! The destination is cut into [`BLOCK_SIZE`] blocks. Each block gets a fresh
//! [`Corpus`] drawn from the literal distribution, and all literals in the
//! block (including the scratch bytes repeats copy) are resampled from it.
//! A finite literal alphabet per block adds redundancy on top of the repeat
//! runs and is cheaper than evaluating the distribution per byte.

use rand_core::RngCore;

use crate::config::BLOCK_SIZE;
use crate::datagen::literal::{Corpus, Literals};
use crate::datagen::params::Params;
use crate::datagen::stream::{compose, RunObserver};

pub(crate) fn compose_blocks<R, O>(rng: &mut R, dst: &mut [u8], params: &Params, observer: &mut O)
where
    R: RngCore + ?Sized,
    O: RunObserver + ?Sized,
{
    let mut corpus = Corpus::new();
    for (index, block) in dst.chunks_mut(BLOCK_SIZE).enumerate() {
        let base = index * BLOCK_SIZE;
        corpus.refresh(rng, params.lit_exp);
        observer.on_corpus(base, &corpus.as_bytes()[..]);
        compose(rng, block, base, params, Literals::Corpus(&corpus), observer);
    }
}
