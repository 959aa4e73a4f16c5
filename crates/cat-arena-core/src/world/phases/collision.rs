use super::super::World;
use crate::constants::{
    FOLLOW_PROBABILITY, FOLLOW_RADIUS, PASS_A_PUSH, PASS_A_RADIUS, PASS_B_PUSH, PASS_B_RADIUS,
};
use crate::geometry::{distance, push_away};
use rand::Rng;

// Both passes walk the other cats in index order and read positions as they
// are right now, so a cat reacts to pushes already applied earlier this tick.

impl World {
    /// Pass A: a gentle 0.5 push away from every cat closer than 20.
    pub(in crate::world) fn step_separation_phase(&mut self, index: usize) {
        for other in 0..self.cats.len() {
            if other == index {
                continue;
            }
            let other_pos = self.cats[other].position;
            let cat = &mut self.cats[index];
            if distance(&cat.position, &other_pos) < PASS_A_RADIUS {
                push_away(&mut cat.position, other_pos, PASS_A_PUSH);
            }
        }
    }

    /// Pass B: a stronger 0.8 push inside 30, and a 10% chance of
    /// remembering where a cat in the 30..100 band currently is.
    pub(in crate::world) fn step_follow_phase(&mut self, index: usize) {
        for other in 0..self.cats.len() {
            if other == index {
                continue;
            }
            let other_pos = self.cats[other].position;
            let cat = &mut self.cats[index];
            let dist = distance(&cat.position, &other_pos);
            if dist < PASS_B_RADIUS {
                push_away(&mut cat.position, other_pos, PASS_B_PUSH);
            } else if dist < FOLLOW_RADIUS && self.rng.random::<f64>() < FOLLOW_PROBABILITY {
                cat.target = Some(other_pos);
            }
        }
    }
}
