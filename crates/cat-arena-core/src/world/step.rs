use super::metrics::StepTimings;
use super::World;
use crate::geometry::clamp_to_arena;
use std::time::Instant;

impl World {
    /// Advance every cat by one tick, in index order.
    ///
    /// Each cat's update completes before the next cat starts, so later cats
    /// see earlier cats' new positions, the drained saucers and the moved ball.
    pub fn step(&mut self) -> StepTimings {
        let total_start = Instant::now();
        self.step_index = self.step_index.saturating_add(1);
        self.transitions_last_step = 0;
        self.milk_drunk_last_step = 0.0;
        self.ball_hits_last_step = 0;

        let t0 = Instant::now();
        for index in 0..self.cats.len() {
            self.update_cat(index);
        }
        let update_us = t0.elapsed().as_micros() as u64;

        StepTimings {
            update_us,
            total_us: total_start.elapsed().as_micros() as u64,
        }
    }

    fn update_cat(&mut self, index: usize) {
        self.step_transition_phase(index);
        self.step_separation_phase(index);
        self.step_activity_phase(index);
        self.step_follow_phase(index);
        self.step_needs_phase(index);
        // Collision pushes do not clamp on their own.
        let arena = self.arena;
        let cat = &mut self.cats[index];
        cat.position = clamp_to_arena(cat.position, &arena);
    }
}
