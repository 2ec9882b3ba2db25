//! Maps generator output onto valid table positions.
//!
//! Draws are reduced with a plain modulo. For tables of at most 286 entries the
//! bias on a 32-bit draw is far below anything a reader could notice, and exact
//! uniformity is not required, so there is no rejection sampling here.

use tracing::debug;

use crate::mersenne::{MersenneTwister, RandomSource};
use crate::tables::{ayah_count, HADITH_IDS, SURAH_COUNT};

pub struct Selector {
    rng: Box<dyn RandomSource>,
    hadith_pool: Vec<u32>,
}

impl Selector {
    pub fn new(rng: impl RandomSource + 'static) -> Self {
        Self::with_hadith_pool(rng, HADITH_IDS.to_vec())
    }

    /// # Panics
    ///
    /// Panics if `hadith_pool` is empty.
    pub fn with_hadith_pool(rng: impl RandomSource + 'static, hadith_pool: Vec<u32>) -> Self {
        assert!(!hadith_pool.is_empty(), "hadith pool must not be empty");
        Self {
            rng: Box::new(rng),
            hadith_pool,
        }
    }

    pub fn seeded(seed: u32) -> Self {
        Self::new(MersenneTwister::new(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(MersenneTwister::from_entropy())
    }

    /// Returns `(surah, ayah)`, both 1-based.
    pub fn select_quran_position(&mut self) -> (u16, u16) {
        let surah = (self.rng.next_u32() % u32::from(SURAH_COUNT)) as u16 + 1;
        let ayah = (self.rng.next_u32() % u32::from(ayah_count(surah))) as u16 + 1;
        debug!(surah, ayah, "selected quran position");
        (surah, ayah)
    }

    pub fn select_hadith_id(&mut self) -> u32 {
        let index = self.rng.next_u32() as usize % self.hadith_pool.len();
        let id = self.hadith_pool[index];
        debug!(id, "selected hadith id");
        id
    }

    pub fn hadith_pool(&self) -> &[u32] {
        &self.hadith_pool
    }
}

impl std::fmt::Debug for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field("hadith_pool_len", &self.hadith_pool.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed list of draws, then repeats the last one.
    pub(crate) struct ScriptedRandom {
        draws: VecDeque<u32>,
        last: u32,
    }

    impl ScriptedRandom {
        pub(crate) fn new(draws: &[u32]) -> Self {
            Self {
                draws: draws.iter().copied().collect(),
                last: 0,
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn next_u32(&mut self) -> u32 {
            if let Some(next) = self.draws.pop_front() {
                self.last = next;
            }
            self.last
        }
    }

    #[test]
    fn test_seed_12345_fixture() {
        let mut selector = Selector::seeded(12345);
        assert_eq!(selector.select_quran_position(), (13, 41));
    }

    #[test]
    fn test_quran_positions_stay_in_bounds() {
        let mut selector = Selector::seeded(2024);
        for _ in 0..10_000 {
            let (surah, ayah) = selector.select_quran_position();
            assert!((1..=114).contains(&surah));
            assert!(ayah >= 1 && ayah <= ayah_count(surah));
        }
    }

    #[test]
    fn test_scripted_extremes() {
        // 113 % 114 -> last surah; u32::MAX % 6 == 3 -> ayah 4
        let mut selector = Selector::new(ScriptedRandom::new(&[113, u32::MAX]));
        assert_eq!(selector.select_quran_position(), (114, 4));

        // 0 -> first surah, 6 % 7 -> ayah 7
        let mut selector = Selector::new(ScriptedRandom::new(&[0, 6]));
        assert_eq!(selector.select_quran_position(), (1, 7));

        let mut selector = Selector::new(ScriptedRandom::new(&[1, 285]));
        assert_eq!(selector.select_quran_position(), (2, 286));
    }

    #[test]
    fn test_hadith_ids_come_from_pool() {
        let mut selector = Selector::seeded(99);
        for _ in 0..5_000 {
            let id = selector.select_hadith_id();
            assert!(HADITH_IDS.contains(&id));
        }
    }

    #[test]
    fn test_custom_pool_is_indexed_by_modulo() {
        let mut selector =
            Selector::with_hadith_pool(ScriptedRandom::new(&[0, 1, 2, 5]), vec![10, 20, 30]);
        assert_eq!(selector.hadith_pool(), &[10, 20, 30]);
        assert_eq!(selector.select_hadith_id(), 10);
        assert_eq!(selector.select_hadith_id(), 20);
        assert_eq!(selector.select_hadith_id(), 30);
        assert_eq!(selector.select_hadith_id(), 30);
    }

    #[test]
    #[should_panic(expected = "hadith pool must not be empty")]
    fn test_empty_pool_panics() {
        let _ = Selector::with_hadith_pool(ScriptedRandom::new(&[]), Vec::new());
    }
}
