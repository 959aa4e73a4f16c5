pub mod lookup;
pub mod metrics;
mod phases;
mod step;

pub use lookup::{find_nap_spot, NearestObject};
pub use metrics::*;
pub use phases::needs::NeedDeltas;
pub use phases::transition::decide_state;

use crate::cat::{Cat, CatColor, CatState};
use crate::config::{SimConfig, SimConfigError};
use crate::constants::{CAT_HUE_BASE, CAT_HUE_SPREAD, SAUCER_CAPACITY};
use crate::geometry::{Arena, Positioned};
use crate::resource::{Ball, Saucer};
use crate::rng::create_rng;
use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha12Rng;
use std::{error::Error, fmt};

/// Owns every cat, saucer and the ball for the lifetime of a run.
///
/// Collections are created once and never grow or shrink; callers get
/// slices, not vectors.
pub struct World {
    pub(crate) cats: Vec<Cat>,
    pub(crate) saucers: Vec<Saucer>,
    pub(crate) ball: Ball,
    pub(crate) config: SimConfig,
    pub(crate) arena: Arena,
    pub(crate) rng: ChaCha12Rng,
    pub(crate) step_index: usize,
    pub(crate) transitions_last_step: usize,
    pub(crate) milk_drunk_last_step: f64,
    pub(crate) ball_hits_last_step: usize,
    pub(crate) total_transitions: usize,
    pub(crate) total_milk_drunk: f64,
    pub(crate) total_ball_hits: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorldInitError {
    Config(SimConfigError),
    AgentCountMismatch { expected: usize, actual: usize },
    SaucerCountMismatch { expected: usize, actual: usize },
    NonFinitePosition { index: usize },
    AgentOutsideArena { index: usize },
    SaucerAmountOutOfRange { index: usize },
    NeedsOutOfRange { index: usize },
    NonFiniteBall,
}

impl fmt::Display for WorldInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldInitError::Config(e) => write!(f, "{}", e),
            WorldInitError::AgentCountMismatch { expected, actual } => write!(
                f,
                "cats.len() ({actual}) must match num_agents ({expected})"
            ),
            WorldInitError::SaucerCountMismatch { expected, actual } => write!(
                f,
                "saucers.len() ({actual}) must match num_saucers ({expected})"
            ),
            WorldInitError::NonFinitePosition { index } => {
                write!(f, "entity {index} has a non-finite position")
            }
            WorldInitError::AgentOutsideArena { index } => {
                write!(f, "cat {index} lies outside the arena margin")
            }
            WorldInitError::SaucerAmountOutOfRange { index } => write!(
                f,
                "saucer {index} amount must be within [0, {SAUCER_CAPACITY}]"
            ),
            WorldInitError::NeedsOutOfRange { index } => {
                write!(f, "cat {index} needs must be finite and within [0, 100]")
            }
            WorldInitError::NonFiniteBall => write!(f, "ball has a non-finite position"),
        }
    }
}

impl From<SimConfigError> for WorldInitError {
    fn from(err: SimConfigError) -> Self {
        WorldInitError::Config(err)
    }
}

impl Error for WorldInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WorldInitError::Config(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExperimentError {
    InvalidSampleEvery,
    TooManySteps { max: usize, actual: usize },
    TooManySamples { max: usize, actual: usize },
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::InvalidSampleEvery => write!(f, "sample_every must be positive"),
            ExperimentError::TooManySteps { max, actual } => {
                write!(f, "steps ({actual}) exceed supported maximum ({max})")
            }
            ExperimentError::TooManySamples { max, actual } => {
                write!(
                    f,
                    "sample count ({actual}) exceeds supported maximum ({max})"
                )
            }
        }
    }
}

impl Error for ExperimentError {}

impl World {
    pub const MAX_EXPERIMENT_STEPS: usize = 1_000_000;
    pub const MAX_EXPERIMENT_SAMPLES: usize = 50_000;

    /// Validate `config` and spawn a fresh population from its seed.
    pub fn try_new(config: SimConfig) -> Result<Self, WorldInitError> {
        config.validate()?;
        let arena = config.arena();
        let mut rng = create_rng(config.seed);

        let cats = (0..config.num_agents)
            .map(|_| {
                let x = arena.margin + rng.random::<f64>() * (arena.width - 2.0 * arena.margin);
                let y = arena.margin + rng.random::<f64>() * (arena.height - 2.0 * arena.margin);
                let hue = CAT_HUE_BASE + rng.random::<f32>() * CAT_HUE_SPREAD;
                Cat::new([x, y], CatColor { hue })
            })
            .collect::<Vec<_>>();
        let saucers = (0..config.num_saucers)
            .map(|_| {
                Saucer::new([
                    rng.random::<f64>() * arena.width,
                    rng.random::<f64>() * arena.height,
                ])
            })
            .collect::<Vec<_>>();
        let ball = Ball::new(arena.center());

        info!(
            "spawned {} cats and {} saucers in a {}x{} arena (seed {})",
            cats.len(),
            saucers.len(),
            arena.width,
            arena.height,
            config.seed
        );
        Ok(Self::assemble(config, arena, rng, cats, saucers, ball))
    }

    /// Build a world from explicit entities. The RNG is still seeded from `config.seed`.
    pub fn from_parts(
        config: SimConfig,
        cats: Vec<Cat>,
        saucers: Vec<Saucer>,
        ball: Ball,
    ) -> Result<Self, WorldInitError> {
        config.validate()?;
        if cats.len() != config.num_agents {
            return Err(WorldInitError::AgentCountMismatch {
                expected: config.num_agents,
                actual: cats.len(),
            });
        }
        if saucers.len() != config.num_saucers {
            return Err(WorldInitError::SaucerCountMismatch {
                expected: config.num_saucers,
                actual: saucers.len(),
            });
        }
        let arena = config.arena();
        for (index, cat) in cats.iter().enumerate() {
            if !cat.position.iter().all(|v| v.is_finite()) {
                return Err(WorldInitError::NonFinitePosition { index });
            }
            if !arena.contains(cat.position) {
                return Err(WorldInitError::AgentOutsideArena { index });
            }
            if !cat.needs.in_bounds() {
                return Err(WorldInitError::NeedsOutOfRange { index });
            }
        }
        for (index, saucer) in saucers.iter().enumerate() {
            if !saucer.position().iter().all(|v| v.is_finite()) {
                return Err(WorldInitError::NonFinitePosition { index });
            }
            if !(0.0..=SAUCER_CAPACITY).contains(&saucer.amount()) {
                return Err(WorldInitError::SaucerAmountOutOfRange { index });
            }
        }
        if !ball.position.iter().all(|v| v.is_finite()) {
            return Err(WorldInitError::NonFiniteBall);
        }
        let rng = create_rng(config.seed);
        Ok(Self::assemble(config, arena, rng, cats, saucers, ball))
    }

    fn assemble(
        config: SimConfig,
        arena: Arena,
        rng: ChaCha12Rng,
        cats: Vec<Cat>,
        saucers: Vec<Saucer>,
        ball: Ball,
    ) -> Self {
        Self {
            cats,
            saucers,
            ball,
            config,
            arena,
            rng,
            step_index: 0,
            transitions_last_step: 0,
            milk_drunk_last_step: 0.0,
            ball_hits_last_step: 0,
            total_transitions: 0,
            total_milk_drunk: 0.0,
            total_ball_hits: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn cats(&self) -> &[Cat] {
        &self.cats
    }

    pub fn saucers(&self) -> &[Saucer] {
        &self.saucers
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn total_milk_drunk(&self) -> f64 {
        self.total_milk_drunk
    }

    /// Draw a candidate nap spot for cat `index` from the world's RNG.
    pub fn find_nap_spot(&mut self, index: usize) -> Option<[f64; 2]> {
        find_nap_spot(&self.cats, &self.arena, index, &mut self.rng)
    }

    pub(crate) fn set_state(&mut self, index: usize, next: CatState) {
        let cat = &mut self.cats[index];
        if cat.state == next {
            return;
        }
        debug!("cat {index}: {} -> {}", cat.state, next);
        cat.state = next;
        self.transitions_last_step += 1;
        self.total_transitions += 1;
    }

    pub fn run_experiment(
        &mut self,
        steps: usize,
        sample_every: usize,
    ) -> Result<RunSummary, ExperimentError> {
        if sample_every == 0 {
            return Err(ExperimentError::InvalidSampleEvery);
        }
        if steps > Self::MAX_EXPERIMENT_STEPS {
            return Err(ExperimentError::TooManySteps {
                max: Self::MAX_EXPERIMENT_STEPS,
                actual: steps,
            });
        }
        let estimated_samples = if steps == 0 {
            0
        } else {
            ((steps - 1) / sample_every) + 1
        };
        if estimated_samples > Self::MAX_EXPERIMENT_SAMPLES {
            return Err(ExperimentError::TooManySamples {
                max: Self::MAX_EXPERIMENT_SAMPLES,
                actual: estimated_samples,
            });
        }

        let milk_before = self.total_milk_drunk;
        let transitions_before = self.total_transitions;
        let ball_hits_before = self.total_ball_hits;
        let mut samples = Vec::with_capacity(estimated_samples);
        for step in 1..=steps {
            self.step();
            if step % sample_every == 0 || step == steps {
                samples.push(self.collect_step_metrics());
            }
        }
        Ok(RunSummary {
            schema_version: 1,
            seed: self.config.seed,
            steps,
            sample_every,
            final_state_counts: self.state_counts(),
            samples,
            total_milk_drunk: self.total_milk_drunk - milk_before,
            total_transitions: self.total_transitions - transitions_before,
            total_ball_hits: self.total_ball_hits - ball_hits_before,
        })
    }
}
