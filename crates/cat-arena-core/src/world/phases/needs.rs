use super::super::World;
use crate::cat::{CatState, Needs};
use serde::{Deserialize, Serialize};

/// Per-tick need changes applied after the behaviour step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NeedDeltas {
    pub energy: f64,
    pub hunger: f64,
    pub happiness: f64,
    pub nap: f64,
}

impl CatState {
    pub fn need_deltas(self) -> NeedDeltas {
        match self {
            CatState::Wandering => NeedDeltas {
                energy: -0.1,
                hunger: -0.15,
                happiness: -0.05,
                nap: 0.0,
            },
            CatState::Drinking => NeedDeltas {
                energy: 0.5,
                hunger: 0.8,
                happiness: -0.02,
                nap: 0.0,
            },
            CatState::Sleeping => NeedDeltas {
                energy: 0.3,
                hunger: -0.1,
                happiness: 0.0,
                nap: 0.5,
            },
            CatState::Playing => NeedDeltas {
                energy: -0.2,
                hunger: -0.2,
                happiness: 0.4,
                nap: 0.0,
            },
        }
    }
}

impl NeedDeltas {
    pub fn apply(&self, needs: &mut Needs) {
        needs.energy += self.energy;
        needs.hunger += self.hunger;
        needs.happiness += self.happiness;
        needs.nap += self.nap;
        needs.clamp();
    }
}

impl World {
    pub(in crate::world) fn step_needs_phase(&mut self, index: usize) {
        let cat = &mut self.cats[index];
        cat.state.need_deltas().apply(&mut cat.needs);
    }
}
