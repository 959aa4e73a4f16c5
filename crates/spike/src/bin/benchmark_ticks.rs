use cat_arena_core::config::SimConfig;
use cat_arena_core::driver::FrameDriver;
use cat_arena_core::render::{DrawCommand, Presenter};
use cat_arena_core::world::{World, WorldInitError};
use std::time::Instant;

/// Counts commands without keeping them, so only rendering cost is measured.
#[derive(Default)]
struct CountingPresenter {
    commands: usize,
}

impl Presenter for CountingPresenter {
    fn draw(&mut self, commands: &[DrawCommand]) {
        self.commands += commands.len();
    }
}

fn main() -> Result<(), WorldInitError> {
    let num_agents = 500;
    let steps = 1_000;
    println!("Benchmarking {num_agents} cats for {steps} ticks");

    let config = SimConfig {
        num_agents,
        seed: 42,
        ..SimConfig::default()
    };
    let mut world = World::try_new(config.clone())?;
    let driven = World::try_new(config)?;

    // Ticks only
    let start = Instant::now();
    for _ in 0..steps {
        world.step();
    }
    let duration_ticks = start.elapsed();
    println!("Time for {steps} ticks WITHOUT rendering: {duration_ticks:?}");
    println!("Avg per tick (no rendering): {:?}", duration_ticks / steps as u32);

    // Ticks plus draw command generation
    let mut driver = FrameDriver::new(driven, CountingPresenter::default());
    let start = Instant::now();
    driver.run(steps);
    let duration_frames = start.elapsed();
    println!("Time for {steps} frames WITH rendering: {duration_frames:?}");
    println!("Avg per frame (with rendering): {:?}", duration_frames / steps as u32);
    println!(
        "Draw commands per frame: {}",
        driver.presenter().commands / steps
    );

    let diff = duration_frames.saturating_sub(duration_ticks);
    println!("Total rendering overhead: {diff:?}");
    println!("Avg rendering overhead per frame: {:?}", diff / steps as u32);
    Ok(())
}
