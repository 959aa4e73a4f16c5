//! Distance and movement primitives over `[x, y]` positions.

use crate::constants::{ARENA_MARGIN, MOVE_DEAD_ZONE};

/// Anything with a location in the arena.
pub trait Positioned {
    fn position(&self) -> [f64; 2];
}

impl Positioned for [f64; 2] {
    fn position(&self) -> [f64; 2] {
        *self
    }
}

/// Rectangular arena bounds with an inner margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ARENA_MARGIN,
        }
    }

    pub fn center(&self) -> [f64; 2] {
        [self.width / 2.0, self.height / 2.0]
    }

    /// Whether `position` lies in `[margin, dimension - margin]` on both axes.
    pub fn contains(&self, position: [f64; 2]) -> bool {
        (self.margin..=self.width - self.margin).contains(&position[0])
            && (self.margin..=self.height - self.margin).contains(&position[1])
    }
}

pub fn distance<A: Positioned + ?Sized, B: Positioned + ?Sized>(a: &A, b: &B) -> f64 {
    let pa = a.position();
    let pb = b.position();
    (pa[0] - pb[0]).hypot(pa[1] - pb[1])
}

/// Clamp each axis independently into `[margin, dimension - margin]`.
pub fn clamp_to_arena(position: [f64; 2], arena: &Arena) -> [f64; 2] {
    [
        position[0].clamp(arena.margin, arena.width - arena.margin),
        position[1].clamp(arena.margin, arena.height - arena.margin),
    ]
}

/// Step `mover` up to `speed` units along the straight line to `target`.
///
/// Inside the dead zone the mover is left untouched; otherwise the result is
/// clamped into the arena. Returns whether the mover was moved.
pub fn move_toward(mover: &mut [f64; 2], target: [f64; 2], speed: f64, arena: &Arena) -> bool {
    let dx = target[0] - mover[0];
    let dy = target[1] - mover[1];
    let dist = dx.hypot(dy);
    if dist <= MOVE_DEAD_ZONE {
        return false;
    }
    *mover = clamp_to_arena(
        [mover[0] + dx / dist * speed, mover[1] + dy / dist * speed],
        arena,
    );
    true
}

/// Push `mover` `strength` units directly away from `other`.
///
/// Coincident points have no defined direction; the angle of a zero vector is
/// taken as 0, so they separate along +x.
pub fn push_away(mover: &mut [f64; 2], other: [f64; 2], strength: f64) {
    let angle = (mover[1] - other[1]).atan2(mover[0] - other[0]);
    mover[0] += angle.cos() * strength;
    mover[1] += angle.sin() * strength;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0)
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            ([0.0, 0.0], [3.0, 4.0]),
            ([12.5, 700.0], [799.0, 1.0]),
            ([5.0, 5.0], [5.0, 5.0]),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(&a, &b), distance(&b, &a));
        }
        assert!((distance(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn move_toward_advances_by_speed() {
        let mut p = [100.0, 100.0];
        assert!(move_toward(&mut p, [200.0, 100.0], 1.5, &arena()));
        assert!((p[0] - 101.5).abs() < 1e-12);
        assert!((p[1] - 100.0).abs() < 1e-12);
    }

    #[test]
    fn move_toward_is_idempotent_inside_dead_zone() {
        let target = [300.0, 300.0];
        let mut p = [303.0, 302.0];
        for _ in 0..10 {
            assert!(!move_toward(&mut p, target, 2.0, &arena()));
        }
        assert_eq!(p, [303.0, 302.0]);
    }

    #[test]
    fn move_toward_clamps_into_margin() {
        let mut p = [11.0, 300.0];
        move_toward(&mut p, [-100.0, 300.0], 5.0, &arena());
        assert_eq!(p[0], 10.0);
        let mut q = [300.0, 589.0];
        move_toward(&mut q, [300.0, 900.0], 5.0, &arena());
        assert_eq!(q[1], 590.0);
    }

    #[test]
    fn clamp_to_arena_is_per_axis() {
        let a = arena();
        assert_eq!(clamp_to_arena([-5.0, 1000.0], &a), [10.0, 590.0]);
        assert_eq!(clamp_to_arena([400.0, 300.0], &a), [400.0, 300.0]);
        assert!(a.contains(clamp_to_arena([f64::MAX, f64::MIN], &a)));
    }

    #[test]
    fn push_away_moves_along_connecting_line() {
        let mut p = [100.0, 100.0];
        push_away(&mut p, [100.0, 90.0], 0.5);
        assert!((p[0] - 100.0).abs() < 1e-12);
        assert!((p[1] - 100.5).abs() < 1e-12);
    }

    #[test]
    fn push_away_separates_coincident_points_along_x() {
        let mut p = [50.0, 50.0];
        push_away(&mut p, [50.0, 50.0], 0.8);
        assert!((p[0] - 50.8).abs() < 1e-12);
        assert_eq!(p[1], 50.0);
    }
}
