#![no_main]
use libfuzzer_sys::fuzz_target;

use lzdgen::{generate_bulk_with, generate_with, Params, Pcg32, Run, RunKind};

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    // Map the input onto parameters inside the generator's preconditions.
    let seed = u64::from_le_bytes(data[0..8].try_into().unwrap());
    let size = u16::from_le_bytes([data[8], data[9]]) as usize * 4 + data[10] as usize;
    let ratio = 1.0 + data[11] as f64 / 4.0;
    let len_exp = 0.05 + data[12] as f64 / 16.0;
    let lit_exp = 0.05 + data[13] as f64 / 16.0;
    let bulk = data[14] & 1 == 1;
    let params = Params::new(ratio, len_exp, lit_exp);

    let mut dst = vec![0u8; size];
    let mut runs: Vec<Run> = Vec::new();
    let mut rng = Pcg32::new(seed, data[15] as u64);
    if bulk {
        generate_bulk_with(&mut rng, &mut dst, &params, &mut |r: &Run| runs.push(*r));
    } else {
        generate_with(&mut rng, &mut dst, &params, &mut |r: &Run| runs.push(*r));
    }

    let written: usize = runs.iter().map(|r| r.len).sum();
    assert_eq!(written, size, "runs must tile the buffer exactly");
    for pair in runs.windows(2) {
        assert!(!(pair[0].kind == RunKind::Repeat && pair[1].kind == RunKind::Repeat));
    }
});
