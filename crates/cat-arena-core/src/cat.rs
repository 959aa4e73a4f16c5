use crate::constants::{
    CAT_LIGHTNESS, CAT_SATURATION, INITIAL_ENERGY, INITIAL_HAPPINESS, INITIAL_HUNGER,
    INITIAL_NAP, NEED_MAX, NEED_MIN,
};
use crate::geometry::Positioned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behaviour states. `Wandering` is only the spawn state and the
/// no-milk fallback; the behaviour step turns it into `Sleeping`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatState {
    #[default]
    Wandering,
    Drinking,
    Sleeping,
    Playing,
}

impl CatState {
    pub fn as_str(self) -> &'static str {
        match self {
            CatState::Wandering => "wandering",
            CatState::Drinking => "drinking",
            CatState::Sleeping => "sleeping",
            CatState::Playing => "playing",
        }
    }

    /// Upper-case label drawn above the cat.
    pub fn label(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl fmt::Display for CatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded `[0, 100]` needs. `hunger` is tracked but read by no rule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Needs {
    pub energy: f64,
    pub nap: f64,
    pub happiness: f64,
    pub hunger: f64,
}

impl Default for Needs {
    fn default() -> Self {
        Self {
            energy: INITIAL_ENERGY,
            nap: INITIAL_NAP,
            happiness: INITIAL_HAPPINESS,
            hunger: INITIAL_HUNGER,
        }
    }
}

impl Needs {
    pub fn clamp(&mut self) {
        self.energy = self.energy.clamp(NEED_MIN, NEED_MAX);
        self.nap = self.nap.clamp(NEED_MIN, NEED_MAX);
        self.happiness = self.happiness.clamp(NEED_MIN, NEED_MAX);
        self.hunger = self.hunger.clamp(NEED_MIN, NEED_MAX);
    }

    pub fn in_bounds(&self) -> bool {
        [self.energy, self.nap, self.happiness, self.hunger]
            .iter()
            .all(|v| (NEED_MIN..=NEED_MAX).contains(v))
    }
}

/// Cosmetic HSL colour; only the hue varies between cats.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatColor {
    pub hue: f32,
}

impl CatColor {
    pub fn to_css(self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, CAT_SATURATION, CAT_LIGHTNESS
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    pub position: [f64; 2],
    color: CatColor,
    pub needs: Needs,
    pub state: CatState,
    /// Last known position of a nearby cat this one considered following.
    /// A snapshot only; nothing steers toward it yet.
    pub target: Option<[f64; 2]>,
}

impl Cat {
    pub fn new(position: [f64; 2], color: CatColor) -> Self {
        Self {
            position,
            color,
            needs: Needs::default(),
            state: CatState::Wandering,
            target: None,
        }
    }

    pub fn with_state(mut self, state: CatState) -> Self {
        self.state = state;
        self
    }

    pub fn with_needs(mut self, needs: Needs) -> Self {
        self.needs = needs;
        self
    }

    pub fn color(&self) -> CatColor {
        self.color
    }
}

impl Positioned for Cat {
    fn position(&self) -> [f64; 2] {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cat_starts_wandering_without_target() {
        let cat = Cat::new([1.0, 2.0], CatColor { hue: 340.0 });
        assert_eq!(cat.state, CatState::Wandering);
        assert!(cat.target.is_none());
        assert_eq!(cat.needs.energy, 50.0);
        assert_eq!(cat.needs.happiness, 0.0);
    }

    #[test]
    fn needs_clamp_both_sides() {
        let mut needs = Needs {
            energy: 100.4,
            nap: -0.3,
            happiness: 50.0,
            hunger: 180.0,
        };
        assert!(!needs.in_bounds());
        needs.clamp();
        assert_eq!(needs.energy, 100.0);
        assert_eq!(needs.nap, 0.0);
        assert_eq!(needs.happiness, 50.0);
        assert_eq!(needs.hunger, 100.0);
        assert!(needs.in_bounds());
    }

    #[test]
    fn state_label_is_upper_case() {
        assert_eq!(CatState::Sleeping.label(), "SLEEPING");
        assert_eq!(CatState::Drinking.to_string(), "drinking");
    }

    #[test]
    fn color_renders_as_css_hsl() {
        assert_eq!(CatColor { hue: 345.5 }.to_css(), "hsl(345.5, 80%, 70%)");
    }
}
