use crate::constants::{BALL_RADIUS, SAUCER_CAPACITY};
use crate::geometry::Positioned;
use serde::{Deserialize, Serialize};

/// A fixed milk saucer. Its amount only ever goes down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Saucer {
    position: [f64; 2],
    amount: f64,
}

impl Saucer {
    pub fn new(position: [f64; 2]) -> Self {
        Self::with_amount(position, SAUCER_CAPACITY)
    }

    pub fn with_amount(position: [f64; 2], amount: f64) -> Self {
        Self { position, amount }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn is_stocked(&self) -> bool {
        self.amount > 0.0
    }

    /// Remove up to `requested` milk, flooring at zero. Returns what was removed.
    pub fn drain(&mut self, requested: f64) -> f64 {
        let before = self.amount;
        self.amount = (self.amount - requested).max(0.0);
        before - self.amount
    }
}

impl Positioned for Saucer {
    fn position(&self) -> [f64; 2] {
        self.position
    }
}

/// The single shared ball.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: [f64; 2],
    radius: f64,
}

impl Ball {
    pub fn new(position: [f64; 2]) -> Self {
        Self {
            position,
            radius: BALL_RADIUS,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Positioned for Ball {
    fn position(&self) -> [f64; 2] {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_floors_at_zero() {
        let mut saucer = Saucer::with_amount([0.0, 0.0], 0.1);
        let removed = saucer.drain(0.2);
        assert!((removed - 0.1).abs() < 1e-12);
        assert_eq!(saucer.amount(), 0.0);
        assert!(!saucer.is_stocked());
        assert_eq!(saucer.drain(0.2), 0.0);
    }

    #[test]
    fn new_saucer_is_full() {
        let saucer = Saucer::new([3.0, 4.0]);
        assert_eq!(saucer.amount(), SAUCER_CAPACITY);
        assert!(saucer.is_stocked());
    }
}
