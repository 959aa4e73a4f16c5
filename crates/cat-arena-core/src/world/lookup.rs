//! Resource and free-space queries. Scans run in collection order and a
//! later candidate only wins on a strictly smaller distance.

use super::World;
use crate::cat::Cat;
use crate::constants::{NAP_SPOT_ATTEMPTS, NAP_SPOT_CLEARANCE};
use crate::geometry::{distance, Arena, Positioned};
use crate::spatial;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NearestObject {
    Saucer(usize),
    Ball,
}

impl World {
    /// Index of the closest saucer, empty or not.
    pub fn find_nearest_saucer<P: Positioned + ?Sized>(&self, from: &P) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, saucer) in self.saucers.iter().enumerate() {
            let d = distance(from, saucer);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((idx, d));
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Closest of all saucers and the ball; saucers are scanned first.
    pub fn find_nearest_object<P: Positioned + ?Sized>(&self, from: &P) -> NearestObject {
        match self.find_nearest_saucer(from) {
            Some(idx) if distance(from, &self.saucers[idx]) <= distance(from, &self.ball) => {
                NearestObject::Saucer(idx)
            }
            _ => NearestObject::Ball,
        }
    }
}

/// Try up to `NAP_SPOT_ATTEMPTS` uniform positions on the canvas and return the
/// first one at least `NAP_SPOT_CLEARANCE` away from every cat except `index`.
pub fn find_nap_spot<R: Rng + ?Sized>(
    cats: &[Cat],
    arena: &Arena,
    index: usize,
    rng: &mut R,
) -> Option<[f64; 2]> {
    let tree = spatial::build_index(cats);
    (0..NAP_SPOT_ATTEMPTS).find_map(|_| {
        let spot = [
            rng.random::<f64>() * arena.width,
            rng.random::<f64>() * arena.height,
        ];
        (!spatial::any_within(&tree, spot, NAP_SPOT_CLEARANCE, Some(index))).then_some(spot)
    })
}
