// Block composer: per-block corpora.

use lzdgen::config::{BLOCK_SIZE, CORPUS_SIZE};
use lzdgen::datagen::{generate_bulk_with, Params, Run, RunKind, RunObserver};

use crate::common::rng;

/// Records the byte set of each block's corpus and checks every run against it.
struct CorpusCheck<'a> {
    dst_len: usize,
    blocks: Vec<(usize, [bool; 256])>,
    runs: &'a mut Vec<Run>,
}

impl RunObserver for CorpusCheck<'_> {
    fn on_run(&mut self, run: &Run) {
        self.runs.push(*run);
    }

    fn on_corpus(&mut self, offset: usize, corpus: &[u8]) {
        assert_eq!(corpus.len(), CORPUS_SIZE);
        assert!(offset < self.dst_len);
        let mut present = [false; 256];
        for &b in corpus {
            present[b as usize] = true;
        }
        self.blocks.push((offset, present));
    }
}

fn run_bulk(size: usize, params: Params, seed: u64) -> (Vec<u8>, Vec<(usize, [bool; 256])>, Vec<Run>) {
    let mut dst = vec![0u8; size];
    let mut runs = Vec::new();
    let mut check = CorpusCheck {
        dst_len: size,
        blocks: Vec::new(),
        runs: &mut runs,
    };
    generate_bulk_with(&mut rng(seed), &mut dst, &params, &mut check);
    let blocks = check.blocks;
    (dst, blocks, runs)
}

#[test]
fn one_corpus_per_block() {
    let (_, blocks, _) = run_bulk(2 * BLOCK_SIZE + 1, Params::default(), 1);
    let offsets: Vec<usize> = blocks.iter().map(|b| b.0).collect();
    assert_eq!(offsets, vec![0, BLOCK_SIZE, 2 * BLOCK_SIZE]);
}

#[test]
fn every_byte_of_a_block_comes_from_its_corpus() {
    // Literal runs sample the corpus directly; repeat runs copy a scratch
    // buffer that was itself sampled from the corpus.
    let (dst, blocks, _) = run_bulk(2 * BLOCK_SIZE + 4321, Params::new(3.0, 3.0, 6.0), 2);
    for (i, (offset, present)) in blocks.iter().enumerate() {
        let end = (offset + BLOCK_SIZE).min(dst.len());
        let stray = dst[*offset..end].iter().filter(|&&b| !present[b as usize]).count();
        assert_eq!(stray, 0, "block {i} has bytes outside its corpus");
    }
}

#[test]
fn runs_do_not_cross_block_boundaries() {
    let (_, _, runs) = run_bulk(3 * BLOCK_SIZE, Params::default(), 3);
    for r in &runs {
        assert_eq!(r.offset / BLOCK_SIZE, (r.offset + r.len - 1) / BLOCK_SIZE);
    }
}

#[test]
fn each_block_restarts_with_a_fresh_histogram() {
    // Composer state does not carry over, so a block never opens with a
    // separator byte even when the previous block ended on a repeat.
    let (_, _, runs) = run_bulk(3 * BLOCK_SIZE, Params::new(50.0, 3.0, 3.0), 4);
    for boundary in [BLOCK_SIZE, 2 * BLOCK_SIZE] {
        let first = runs.iter().find(|r| r.offset == boundary).unwrap();
        assert!(!first.separator, "block starting at {boundary} begins with a separator");
    }
}

#[test]
fn corpus_preserves_the_literal_skew() {
    // P(byte < 64) = P(u^12 < 1/4) = 0.25^(1/12), about 0.89.
    let (dst, _, runs) = run_bulk(BLOCK_SIZE, Params::new(3.0, 3.0, 12.0), 5);
    let low = dst.iter().filter(|&&b| b < 64).count() as f64 / dst.len() as f64;
    assert!(low > 0.8, "share of small bytes {low}");
    assert!(runs.iter().any(|r| r.kind == RunKind::Literal));
}
