use crate::constants::{
    ARENA_MARGIN, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_NUM_AGENTS,
    DEFAULT_NUM_SAUCERS, MAX_AGENTS, MAX_CANVAS_SIZE, MAX_SAUCERS,
};
use crate::geometry::Arena;
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Deterministic seed for reproducible simulation runs.
    pub seed: u64,
    /// Arena width in world units.
    #[serde(alias = "canvasWidth")]
    pub canvas_width: f64,
    /// Arena height in world units.
    #[serde(alias = "canvasHeight")]
    pub canvas_height: f64,
    /// Number of cats, fixed for the lifetime of the world.
    #[serde(alias = "numAgents")]
    pub num_agents: usize,
    /// Number of milk saucers, fixed for the lifetime of the world.
    #[serde(alias = "numSaucers")]
    pub num_saucers: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            num_agents: DEFAULT_NUM_AGENTS,
            num_saucers: DEFAULT_NUM_SAUCERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SimConfigError {
    InvalidCanvasWidth,
    InvalidCanvasHeight,
    CanvasTooLarge { max: f64, actual: f64 },
    InvalidNumAgents,
    TooManyAgents { max: usize, actual: usize },
    TooManySaucers { max: usize, actual: usize },
}

impl fmt::Display for SimConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimConfigError::InvalidCanvasWidth => write!(
                f,
                "canvas_width must be finite and greater than {}",
                2.0 * ARENA_MARGIN
            ),
            SimConfigError::InvalidCanvasHeight => write!(
                f,
                "canvas_height must be finite and greater than {}",
                2.0 * ARENA_MARGIN
            ),
            SimConfigError::CanvasTooLarge { max, actual } => {
                write!(f, "canvas dimension ({actual}) exceeds supported maximum ({max})")
            }
            SimConfigError::InvalidNumAgents => write!(f, "num_agents must be positive"),
            SimConfigError::TooManyAgents { max, actual } => {
                write!(f, "num_agents ({actual}) exceeds supported maximum ({max})")
            }
            SimConfigError::TooManySaucers { max, actual } => {
                write!(f, "num_saucers ({actual}) exceeds supported maximum ({max})")
            }
        }
    }
}

impl Error for SimConfigError {}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimConfigError> {
        self.validate_canvas()?;
        self.validate_population()
    }

    fn validate_canvas(&self) -> Result<(), SimConfigError> {
        if !(self.canvas_width.is_finite() && self.canvas_width > 2.0 * ARENA_MARGIN) {
            return Err(SimConfigError::InvalidCanvasWidth);
        }
        if !(self.canvas_height.is_finite() && self.canvas_height > 2.0 * ARENA_MARGIN) {
            return Err(SimConfigError::InvalidCanvasHeight);
        }
        let largest = self.canvas_width.max(self.canvas_height);
        if largest > MAX_CANVAS_SIZE {
            return Err(SimConfigError::CanvasTooLarge {
                max: MAX_CANVAS_SIZE,
                actual: largest,
            });
        }
        Ok(())
    }

    fn validate_population(&self) -> Result<(), SimConfigError> {
        if self.num_agents == 0 {
            return Err(SimConfigError::InvalidNumAgents);
        }
        if self.num_agents > MAX_AGENTS {
            return Err(SimConfigError::TooManyAgents {
                max: MAX_AGENTS,
                actual: self.num_agents,
            });
        }
        // Zero saucers is allowed: drinking cats fall back to wandering.
        if self.num_saucers > MAX_SAUCERS {
            return Err(SimConfigError::TooManySaucers {
                max: MAX_SAUCERS,
                actual: self.num_saucers,
            });
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_arena() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.canvas_width, 800.0);
        assert_eq!(cfg.canvas_height, 600.0);
        assert_eq!(cfg.num_agents, 10);
        assert_eq!(cfg.num_saucers, 5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn camel_case_options_deserialize() {
        let json = r#"{
            "canvasWidth": 640.0,
            "canvasHeight": 480.0,
            "numAgents": 3,
            "numSaucers": 2
        }"#;
        let cfg: SimConfig = serde_json::from_str(json).expect("camelCase config should parse");
        assert_eq!(cfg.canvas_width, 640.0);
        assert_eq!(cfg.canvas_height, 480.0);
        assert_eq!(cfg.num_agents, 3);
        assert_eq!(cfg.num_saucers, 2);
        assert_eq!(cfg.seed, 42, "missing fields fall back to defaults");
    }

    #[test]
    fn partial_config_json_deserializes_with_defaults() {
        let cfg: SimConfig =
            serde_json::from_str(r#"{"seed": 7}"#).expect("partial config should parse");
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.num_agents, DEFAULT_NUM_AGENTS);
    }

    #[test]
    fn validate_rejects_degenerate_canvas() {
        let cfg = SimConfig {
            canvas_width: 20.0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(SimConfigError::InvalidCanvasWidth));
        let cfg = SimConfig {
            canvas_height: f64::NAN,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(SimConfigError::InvalidCanvasHeight));
        let cfg = SimConfig {
            canvas_width: MAX_CANVAS_SIZE * 2.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SimConfigError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn validate_checks_population_bounds() {
        let cfg = SimConfig {
            num_agents: 0,
            ..SimConfig::default()
        };
        assert_eq!(cfg.validate(), Err(SimConfigError::InvalidNumAgents));
        let cfg = SimConfig {
            num_agents: MAX_AGENTS + 1,
            ..SimConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(SimConfigError::TooManyAgents { .. })
        ));
        let cfg = SimConfig {
            num_saucers: 0,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
