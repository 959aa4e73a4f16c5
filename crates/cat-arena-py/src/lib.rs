use cat_arena_core::config::SimConfig;
use cat_arena_core::driver::FrameDriver;
use cat_arena_core::render::RecordingPresenter;
use cat_arena_core::sweep::run_seed_sweep;
use cat_arena_core::world::World;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Upper bound on frames returned in one call; each frame is a few dozen commands.
const MAX_RENDER_FRAMES: usize = 10_000;
const MAX_SWEEP_SEEDS: u64 = 1_024;

/// JSON entry points over cat-arena-core for Python-side presenters.
#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[pyfunction]
fn default_config_json() -> PyResult<String> {
    serde_json::to_string(&SimConfig::default())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize default config: {e}")))
}

#[pyfunction]
fn validate_config_json(config_json: &str) -> PyResult<bool> {
    let config = parse_config(config_json)?;
    World::try_new(config)
        .map(|_| true)
        .map_err(|e| PyValueError::new_err(format!("invalid world configuration: {e}")))
}

#[pyfunction]
fn run_experiment_json(config_json: &str, steps: usize, sample_every: usize) -> PyResult<String> {
    let config = parse_config(config_json)?;
    let mut world = World::try_new(config)
        .map_err(|e| PyValueError::new_err(format!("invalid world configuration: {e}")))?;
    let summary = world
        .run_experiment(steps, sample_every)
        .map_err(|e| PyValueError::new_err(format!("invalid experiment parameters: {e}")))?;
    serde_json::to_string(&summary)
        .map_err(|e| PyValueError::new_err(format!("failed to serialize summary: {e}")))
}

/// Run `frames` ticks and return the draw commands of each frame.
#[pyfunction]
fn render_frames_json(config_json: &str, frames: usize) -> PyResult<String> {
    check_frame_count(frames).map_err(PyValueError::new_err)?;
    let config = parse_config(config_json)?;
    let world = World::try_new(config)
        .map_err(|e| PyValueError::new_err(format!("invalid world configuration: {e}")))?;
    let mut driver = FrameDriver::new(world, RecordingPresenter::default());
    driver.run(frames);
    let (_, presenter) = driver.into_parts();
    serde_json::to_string(&presenter.frames)
        .map_err(|e| PyValueError::new_err(format!("failed to serialize frames: {e}")))
}

#[pyfunction]
fn seed_sweep_json(
    config_json: &str,
    seeds: u64,
    steps: usize,
    sample_every: usize,
) -> PyResult<String> {
    let config = parse_config(config_json)?;
    let seed_list = seed_list(config.seed, seeds).map_err(PyValueError::new_err)?;
    let summaries = run_seed_sweep(&config, &seed_list, steps, sample_every)
        .map_err(|e| PyValueError::new_err(format!("seed sweep failed: {e}")))?;
    serde_json::to_string(&summaries)
        .map_err(|e| PyValueError::new_err(format!("failed to serialize sweep: {e}")))
}

fn parse_config(config_json: &str) -> PyResult<SimConfig> {
    serde_json::from_str(config_json)
        .map_err(|e| PyValueError::new_err(format!("invalid config json: {e}")))
}

fn check_frame_count(frames: usize) -> Result<(), String> {
    if frames > MAX_RENDER_FRAMES {
        return Err(format!(
            "frames ({frames}) exceeds supported maximum ({MAX_RENDER_FRAMES})"
        ));
    }
    Ok(())
}

fn seed_list(base_seed: u64, seeds: u64) -> Result<Vec<u64>, String> {
    if seeds == 0 {
        return Err("seeds must be positive".to_string());
    }
    if seeds > MAX_SWEEP_SEEDS {
        return Err(format!(
            "seeds ({seeds}) exceeds supported maximum ({MAX_SWEEP_SEEDS})"
        ));
    }
    Ok((0..seeds).map(|i| base_seed.wrapping_add(i)).collect())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_function(wrap_pyfunction!(default_config_json, m)?)?;
    m.add_function(wrap_pyfunction!(validate_config_json, m)?)?;
    m.add_function(wrap_pyfunction!(run_experiment_json, m)?)?;
    m.add_function(wrap_pyfunction!(render_frames_json, m)?)?;
    m.add_function(wrap_pyfunction!(seed_sweep_json, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_list_rejects_zero() {
        assert!(seed_list(42, 0).is_err());
    }

    #[test]
    fn seed_list_rejects_too_many() {
        assert!(seed_list(42, MAX_SWEEP_SEEDS + 1).is_err());
    }

    #[test]
    fn seed_list_wraps_at_u64_max() {
        assert_eq!(seed_list(u64::MAX, 2).unwrap(), vec![u64::MAX, 0]);
    }

    #[test]
    fn check_frame_count_accepts_limit() {
        assert!(check_frame_count(MAX_RENDER_FRAMES).is_ok());
        assert!(check_frame_count(MAX_RENDER_FRAMES + 1).is_err());
    }
}
