use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable source of randomness for one play or chat session.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_random, Self::new)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.random_range(0..items.len());
        items.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = SessionRng::new(99);
        let mut second = SessionRng::new(99);
        let items = ["a", "b", "c", "d", "e"];
        for _ in 0..20 {
            assert_eq!(first.choose(&items), second.choose(&items));
        }
        assert_eq!(first.seed(), 99);
    }

    #[test]
    fn test_choose_from_empty_is_none() {
        let mut rng = SessionRng::new(1);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
    }

    #[test]
    fn test_optional_seed() {
        assert_eq!(SessionRng::from_optional_seed(Some(5)).seed(), 5);
    }
}
