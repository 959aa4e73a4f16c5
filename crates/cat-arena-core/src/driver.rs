use crate::render::{happiness_texts, render_frame, Presenter};
use crate::world::{StepTimings, World};
use log::trace;

/// Couples a world to a presenter. An external scheduler (a display-synced
/// callback, a loop, a test) calls [`FrameDriver::frame`] once per frame;
/// there is no timestep, so one frame is exactly one tick.
pub struct FrameDriver<P: Presenter> {
    world: World,
    presenter: P,
    frames: u64,
}

impl<P: Presenter> FrameDriver<P> {
    pub fn new(world: World, presenter: P) -> Self {
        Self {
            world,
            presenter,
            frames: 0,
        }
    }

    /// Tick the world, push happiness readouts, then hand over the frame.
    pub fn frame(&mut self) -> StepTimings {
        let timings = self.world.step();
        for (element_id, text) in happiness_texts(&self.world) {
            if !self.presenter.set_text(&element_id, &text) {
                trace!("no element {element_id}; skipped");
            }
        }
        let commands = render_frame(&self.world);
        self.presenter.draw(&commands);
        self.frames += 1;
        timings
    }

    pub fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            self.frame();
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_parts(self) -> (World, P) {
        (self.world, self.presenter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::render::{happiness_element_id, DrawCommand, RecordingPresenter};

    #[test]
    fn each_frame_steps_once_and_draws_once() {
        let world = World::try_new(SimConfig::default()).expect("default config is valid");
        let mut driver = FrameDriver::new(world, RecordingPresenter::default());
        driver.run(3);
        assert_eq!(driver.frames(), 3);
        assert_eq!(driver.world().step_index(), 3);
        assert_eq!(driver.presenter().frames.len(), 3);
        assert!(driver
            .presenter()
            .frames
            .iter()
            .all(|f| matches!(f.first(), Some(DrawCommand::Clear { .. }))));
    }

    #[test]
    fn missing_happiness_elements_are_skipped() {
        let world = World::try_new(SimConfig::default()).expect("default config is valid");
        let presenter = RecordingPresenter::with_elements([happiness_element_id(2)]);
        let mut driver = FrameDriver::new(world, presenter);
        driver.run(2);
        let (_, presenter) = driver.into_parts();
        assert_eq!(presenter.texts.len(), 2);
        assert!(presenter.texts.iter().all(|(id, _)| id == "cat-2-happiness"));
    }
}
