use super::super::World;
use crate::cat::{CatState, Needs};
use crate::constants::{LOW_NEED_THRESHOLD, REEVALUATE_PROBABILITY, SATED_THRESHOLD};
use rand::Rng;

/// Pick the state for the coming tick.
///
/// Rules are checked in priority order; the RNG is only consulted when none of
/// the three deterministic rules fire. The catch-all lands on `Sleeping` when
/// no need is low, so cats never go back to wandering on their own.
pub fn decide_state<R: Rng + ?Sized>(current: CatState, needs: &Needs, rng: &mut R) -> CatState {
    if needs.energy < LOW_NEED_THRESHOLD && current != CatState::Drinking {
        CatState::Drinking
    } else if needs.energy > SATED_THRESHOLD && current == CatState::Drinking {
        CatState::Sleeping
    } else if needs.nap > SATED_THRESHOLD && current == CatState::Sleeping {
        CatState::Playing
    } else if rng.random::<f64>() < REEVALUATE_PROBABILITY {
        if needs.energy < LOW_NEED_THRESHOLD {
            CatState::Drinking
        } else if needs.nap < LOW_NEED_THRESHOLD {
            CatState::Sleeping
        } else if needs.happiness < LOW_NEED_THRESHOLD {
            CatState::Playing
        } else {
            CatState::Sleeping
        }
    } else {
        current
    }
}

impl World {
    pub(in crate::world) fn step_transition_phase(&mut self, index: usize) {
        let cat = &self.cats[index];
        let next = decide_state(cat.state, &cat.needs, &mut self.rng);
        self.set_state(index, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    /// Yields the same word forever.
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(self.0 as u8);
        }
    }

    fn needs(energy: f64, nap: f64, happiness: f64) -> Needs {
        Needs {
            energy,
            nap,
            happiness,
            ..Needs::default()
        }
    }

    #[test]
    fn low_energy_forces_drinking() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        for state in [CatState::Wandering, CatState::Sleeping, CatState::Playing] {
            assert_eq!(
                decide_state(state, &needs(20.0, 50.0, 50.0), &mut rng),
                CatState::Drinking
            );
        }
    }

    #[test]
    fn sated_drinker_goes_to_sleep() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        assert_eq!(
            decide_state(CatState::Drinking, &needs(95.0, 10.0, 10.0), &mut rng),
            CatState::Sleeping
        );
    }

    #[test]
    fn rested_sleeper_goes_to_play() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        assert_eq!(
            decide_state(CatState::Sleeping, &needs(50.0, 95.0, 90.0), &mut rng),
            CatState::Playing
        );
    }

    #[test]
    fn deterministic_rules_do_not_consume_randomness() {
        let mut a = ChaCha12Rng::seed_from_u64(9);
        let mut b = ChaCha12Rng::seed_from_u64(9);
        decide_state(CatState::Wandering, &needs(20.0, 50.0, 0.0), &mut a);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn reevaluation_prefers_lowest_listed_need() {
        // All-zero words sample as 0.0, so the 1% branch always fires.
        let mut always = FixedRng(0);
        assert_eq!(
            decide_state(CatState::Playing, &needs(50.0, 20.0, 10.0), &mut always),
            CatState::Sleeping
        );
        assert_eq!(
            decide_state(CatState::Sleeping, &needs(50.0, 50.0, 10.0), &mut always),
            CatState::Playing
        );
        assert_eq!(
            decide_state(CatState::Playing, &needs(50.0, 50.0, 50.0), &mut always),
            CatState::Sleeping
        );
    }

    #[test]
    fn without_reevaluation_state_is_kept() {
        // u64::MAX maps to a value just below 1.0.
        let mut never = FixedRng(u64::MAX);
        assert_eq!(
            decide_state(CatState::Playing, &needs(50.0, 50.0, 10.0), &mut never),
            CatState::Playing
        );
        assert_eq!(
            decide_state(CatState::Drinking, &needs(60.0, 50.0, 10.0), &mut never),
            CatState::Drinking
        );
    }
}
