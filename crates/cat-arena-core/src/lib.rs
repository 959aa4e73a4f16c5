pub mod cat;
pub mod config;
pub mod constants;
pub mod driver;
pub mod geometry;
pub mod render;
pub mod resource;
pub mod rng;
pub mod spatial;
pub mod sweep;
pub mod world;

pub use cat::{Cat, CatColor, CatState, Needs};
pub use config::{SimConfig, SimConfigError};
pub use driver::FrameDriver;
pub use render::{DrawCommand, Presenter, RecordingPresenter};
pub use resource::{Ball, Saucer};
pub use world::{RunSummary, StepMetrics, World};
