use super::World;
use crate::cat::{CatState, Needs};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct StepTimings {
    pub update_us: u64,
    pub total_us: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub wandering: usize,
    pub drinking: usize,
    pub sleeping: usize,
    pub playing: usize,
}

impl StateCounts {
    pub fn total(&self) -> usize {
        self.wandering + self.drinking + self.sleeping + self.playing
    }

    fn bump(&mut self, state: CatState) {
        match state {
            CatState::Wandering => self.wandering += 1,
            CatState::Drinking => self.drinking += 1,
            CatState::Sleeping => self.sleeping += 1,
            CatState::Playing => self.playing += 1,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StepMetrics {
    pub step: usize,
    pub energy_mean: f64,
    pub nap_mean: f64,
    pub happiness_mean: f64,
    pub hunger_mean: f64,
    pub happiness_min: f64,
    pub happiness_max: f64,
    pub state_counts: StateCounts,
    pub milk_total: f64,
    pub empty_saucers: usize,
    pub ball_position: [f64; 2],
    pub cats_with_target: usize,
    pub transitions: usize,
    pub milk_drunk: f64,
    pub ball_hits: usize,
}

fn default_schema_version() -> u32 {
    1
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub seed: u64,
    pub steps: usize,
    pub sample_every: usize,
    pub final_state_counts: StateCounts,
    pub samples: Vec<StepMetrics>,
    #[serde(default)]
    pub total_milk_drunk: f64,
    #[serde(default)]
    pub total_transitions: usize,
    #[serde(default)]
    pub total_ball_hits: usize,
}

impl World {
    pub fn state_counts(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for cat in &self.cats {
            counts.bump(cat.state);
        }
        counts
    }

    pub fn milk_total(&self) -> f64 {
        self.saucers.iter().map(|s| s.amount()).sum()
    }

    pub fn collect_step_metrics(&self) -> StepMetrics {
        let count = self.cats.len().max(1) as f64;
        let mean = |f: fn(&Needs) -> f64| {
            self.cats.iter().map(|c| f(&c.needs)).sum::<f64>() / count
        };
        let happiness_min = self
            .cats
            .iter()
            .map(|c| c.needs.happiness)
            .fold(f64::INFINITY, f64::min);
        let happiness_max = self
            .cats
            .iter()
            .map(|c| c.needs.happiness)
            .fold(f64::NEG_INFINITY, f64::max);

        StepMetrics {
            step: self.step_index,
            energy_mean: mean(|needs| needs.energy),
            nap_mean: mean(|needs| needs.nap),
            happiness_mean: mean(|needs| needs.happiness),
            hunger_mean: mean(|needs| needs.hunger),
            happiness_min: if self.cats.is_empty() { 0.0 } else { happiness_min },
            happiness_max: if self.cats.is_empty() { 0.0 } else { happiness_max },
            state_counts: self.state_counts(),
            milk_total: self.milk_total(),
            empty_saucers: self.saucers.iter().filter(|s| !s.is_stocked()).count(),
            ball_position: self.ball.position,
            cats_with_target: self.cats.iter().filter(|c| c.target.is_some()).count(),
            transitions: self.transitions_last_step,
            milk_drunk: self.milk_drunk_last_step,
            ball_hits: self.ball_hits_last_step,
        }
    }
}
