use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// An endless iterator of short random lowercase strings, reproducible from its seed.
/// Short strings over a small alphabet collide often, which exercises both the update
/// and the split paths of the tree
pub struct RandomKeyGenerator {
    min_len: usize,
    max_len: usize,
    rng: Pcg64,
}

impl RandomKeyGenerator {
    /// Strings of 2 to 5 characters in `a..=z`
    pub fn new(seed: u64) -> RandomKeyGenerator {
        RandomKeyGenerator::with_lengths(2, 5, seed)
    }

    /// Strings whose length is uniform in `min_len..=max_len`
    pub fn with_lengths(min_len: usize, max_len: usize, seed: u64) -> RandomKeyGenerator {
        assert!(min_len <= max_len);
        RandomKeyGenerator {
            min_len,
            max_len,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn next_string(&mut self) -> String {
        let len = self.rng.gen_range(self.min_len, self.max_len + 1);
        let rng = &mut self.rng;
        (0..len)
            .map(|_| (b'a' + rng.gen_range(0, 26u8)) as char)
            .collect()
    }

    /// Draw a key and a value
    pub fn next_pair(&mut self) -> (String, String) {
        let key = self.next_string();
        let value = self.next_string();
        (key, value)
    }
}

impl Iterator for RandomKeyGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_string())
    }
}
