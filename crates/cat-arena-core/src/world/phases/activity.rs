use super::super::World;
use crate::cat::CatState;
use crate::constants::{
    BALL_JITTER, DRINK_ENERGY_GAIN, DRINK_MILK_COST, DRINK_SPEED, INTERACT_RANGE,
    PLAY_HAPPINESS_GAIN, PLAY_SPEED, SLEEP_NAP_GAIN,
};
use crate::geometry::{clamp_to_arena, distance, move_toward, Positioned};
use log::debug;
use rand::Rng;

impl World {
    /// Run the behaviour for the cat's current state.
    pub(in crate::world) fn step_activity_phase(&mut self, index: usize) {
        match self.cats[index].state {
            CatState::Drinking => self.drink(index),
            CatState::Sleeping => self.cats[index].needs.nap += SLEEP_NAP_GAIN,
            CatState::Playing => self.play(index),
            CatState::Wandering => self.set_state(index, CatState::Sleeping),
        }
    }

    fn drink(&mut self, index: usize) {
        let nearest = self
            .find_nearest_saucer(&self.cats[index])
            .filter(|&idx| self.saucers[idx].is_stocked());
        let Some(saucer_idx) = nearest else {
            debug!("cat {index}: nearest saucer is empty");
            self.set_state(index, CatState::Wandering);
            return;
        };
        let saucer_pos = self.saucers[saucer_idx].position();
        let arena = self.arena;
        let cat = &mut self.cats[index];
        move_toward(&mut cat.position, saucer_pos, DRINK_SPEED, &arena);
        if distance(&cat.position, &saucer_pos) < INTERACT_RANGE {
            cat.needs.energy += DRINK_ENERGY_GAIN;
            let drunk = self.saucers[saucer_idx].drain(DRINK_MILK_COST);
            self.milk_drunk_last_step += drunk;
            self.total_milk_drunk += drunk;
        }
    }

    fn play(&mut self, index: usize) {
        let arena = self.arena;
        let ball_pos = self.ball.position;
        let cat = &mut self.cats[index];
        move_toward(&mut cat.position, ball_pos, PLAY_SPEED, &arena);
        if distance(&cat.position, &ball_pos) < INTERACT_RANGE {
            let dx = (self.rng.random::<f64>() - 0.5) * BALL_JITTER;
            let dy = (self.rng.random::<f64>() - 0.5) * BALL_JITTER;
            // Kept inside the margin so the ball stays reachable; unclamped jitter can leave the canvas.
            self.ball.position = clamp_to_arena([ball_pos[0] + dx, ball_pos[1] + dy], &arena);
            cat.needs.happiness += PLAY_HAPPINESS_GAIN;
            self.ball_hits_last_step += 1;
            self.total_ball_hits += 1;
        }
    }
}
