use crate::config::SimConfig;
use crate::world::{ExperimentError, RunSummary, World, WorldInitError};
use rayon::prelude::*;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    NoSeeds,
    World(WorldInitError),
    Experiment(ExperimentError),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::NoSeeds => write!(f, "seed sweep needs at least one seed"),
            SweepError::World(e) => write!(f, "{}", e),
            SweepError::Experiment(e) => write!(f, "{}", e),
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SweepError::NoSeeds => None,
            SweepError::World(e) => Some(e),
            SweepError::Experiment(e) => Some(e),
        }
    }
}

impl From<WorldInitError> for SweepError {
    fn from(err: WorldInitError) -> Self {
        SweepError::World(err)
    }
}

impl From<ExperimentError> for SweepError {
    fn from(err: ExperimentError) -> Self {
        SweepError::Experiment(err)
    }
}

/// Run one independent world per seed in parallel.
///
/// Worlds share nothing, so each keeps its single-writer tick. Results come
/// back in the order of `seeds`.
pub fn run_seed_sweep(
    base: &SimConfig,
    seeds: &[u64],
    steps: usize,
    sample_every: usize,
) -> Result<Vec<RunSummary>, SweepError> {
    if seeds.is_empty() {
        return Err(SweepError::NoSeeds);
    }
    base.validate().map_err(WorldInitError::from)?;
    seeds
        .par_iter()
        .map(|&seed| -> Result<RunSummary, SweepError> {
            let config = SimConfig {
                seed,
                ..base.clone()
            };
            let mut world = World::try_new(config)?;
            Ok(world.run_experiment(steps, sample_every)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_matches_sequential_runs() {
        let base = SimConfig::default();
        let seeds = [3, 1, 4];
        let summaries = run_seed_sweep(&base, &seeds, 50, 10).expect("sweep should succeed");
        assert_eq!(summaries.len(), 3);
        for (summary, &seed) in summaries.iter().zip(seeds.iter()) {
            let mut world = World::try_new(SimConfig {
                seed,
                ..base.clone()
            })
            .expect("valid world");
            let expected = world.run_experiment(50, 10).expect("valid experiment");
            assert_eq!(summary.seed, seed);
            assert_eq!(summary.final_state_counts, expected.final_state_counts);
            assert_eq!(summary.total_milk_drunk, expected.total_milk_drunk);
        }
    }

    #[test]
    fn sweep_rejects_empty_seed_list() {
        assert_eq!(
            run_seed_sweep(&SimConfig::default(), &[], 10, 1).unwrap_err(),
            SweepError::NoSeeds
        );
    }

    #[test]
    fn sweep_surfaces_experiment_errors() {
        assert!(matches!(
            run_seed_sweep(&SimConfig::default(), &[1], 10, 0),
            Err(SweepError::Experiment(ExperimentError::InvalidSampleEvery))
        ));
    }
}
