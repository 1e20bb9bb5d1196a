use rand::RngCore;

/// an endless stream of random bytes
pub fn random_bytes<'r>(mut rng: impl RngCore + 'r) -> impl Iterator<Item = u8> + 'r {
    std::iter::from_fn(move || Some(rng.next_u32())).flat_map(u32::to_ne_bytes)
}

pub fn next_usize(mut rng: impl RngCore) -> usize {
    if cfg!(target_pointer_width = "64") {
        rng.next_u64() as usize
    } else if cfg!(target_pointer_width = "32") {
        rng.next_u32() as usize
    } else {
        unimplemented!()
    }
}

/// a uniform pick from `0..=bound` via masked rejection sampling
pub fn next_bound(
    bound: usize,
    mut rng: impl RngCore,
    max_tries: impl Into<Option<usize>>,
) -> usize {
    if bound == 0 {
        return 0;
    }
    let mask = (1usize << (bound.ilog2() + 1)) - 1;
    if let Some(max_tries) = max_tries.into() {
        for _ in 0..max_tries {
            let pick = next_usize(&mut rng) & mask;
            if pick <= bound {
                return pick;
            }
        }
        panic!("to many tries");
    } else {
        loop {
            let pick = next_usize(&mut rng) & mask;
            if pick <= bound {
                return pick;
            }
        }
    }
}

#[allow(clippy::module_name_repetitions)]
#[cfg(test)]
pub fn seeded_rng() -> ([u8; 32], rand::rngs::StdRng) {
    let mut seed = [0; 32];
    rand::rngs::OsRng.fill_bytes(&mut seed);
    let rng = <rand::rngs::StdRng as rand::SeedableRng>::from_seed(seed);
    (seed, rng)
}
