// src/crawl/throttle.rs
// Random pause between hops, whole seconds in [min, max].

use rand::Rng;  // random_range over an inclusive range
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    min_secs: u64,
    max_secs: u64,
}

impl Throttle {
    // Bounds come from a validated Config, so min <= max already holds.
    // A reversed pair collapses to `min` instead of panicking in the RNG.
    pub fn new(min_secs: u64, max_secs: u64) -> Self {
        Self {
            min_secs,
            max_secs: max_secs.max(min_secs),
        }
    }

    /// Draws the next pause, uniform over the inclusive range
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_secs(rng.random_range(self.min_secs..=self.max_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_in_bounds_and_hits_both_ends() {
        let throttle = Throttle::new(1, 2);
        let mut rng = StdRng::seed_from_u64(7);

        let picks: Vec<Duration> = (0..200).map(|_| throttle.pick(&mut rng)).collect();
        assert!(picks.iter().all(|d| *d == Duration::from_secs(1) || *d == Duration::from_secs(2)));
        assert!(picks.contains(&Duration::from_secs(1)));
        assert!(picks.contains(&Duration::from_secs(2)));
    }

    #[test]
    fn test_fixed_and_zero_pause() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Throttle::new(3, 3).pick(&mut rng), Duration::from_secs(3));
        assert_eq!(Throttle::new(0, 0).pick(&mut rng), Duration::ZERO);
    }

    #[test]
    fn test_reversed_bounds_do_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Throttle::new(5, 2).pick(&mut rng), Duration::from_secs(5));
    }
}
