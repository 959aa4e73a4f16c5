//! Read-only translation of world state into draw calls.
//!
//! Nothing here touches a display. A presentation layer implements
//! [`Presenter`] and replays the commands on whatever surface it owns.

use crate::cat::{Cat, CatState};
use crate::constants::{
    CAT_DRAW_RADIUS, NEED_MAX, NEED_MIN, SAUCER_CAPACITY, SAUCER_DRAW_RADIUS, STATE_LABEL_OFFSET,
    STATUS_BAR_HEIGHT, STATUS_BAR_OFFSET, STATUS_BAR_WIDTH,
};
use crate::geometry::Positioned;
use crate::world::World;
use serde::{Deserialize, Serialize};

const SAUCER_COLOR: &str = "#FFFFFF";
const MILK_COLOR: &str = "#ADD8E6";
const BALL_COLOR: &str = "#FFFFFF";
const INK_COLOR: &str = "#000000";
const BAR_FALLBACK: &str = "#FFFFFF";
const LABEL_FONT: &str = "10px Arial";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: String },
    /// A themed colour looked up by the presenter, e.g. a CSS custom property.
    Theme { var: String, fallback: String },
}

impl Paint {
    fn solid(color: &str) -> Self {
        Paint::Solid {
            color: color.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    FillCircle {
        center: [f64; 2],
        radius: f64,
        paint: Paint,
    },
    FillRect {
        origin: [f64; 2],
        size: [f64; 2],
        paint: Paint,
    },
    StrokeRect {
        origin: [f64; 2],
        size: [f64; 2],
        paint: Paint,
    },
    Text {
        anchor: [f64; 2],
        text: String,
        font: String,
        paint: Paint,
    },
}

/// Which need a cat's single status bar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBar {
    Energy,
    Nap,
    Fun,
}

impl StatusBar {
    pub fn for_state(state: CatState) -> Option<Self> {
        match state {
            CatState::Drinking => Some(StatusBar::Energy),
            CatState::Sleeping => Some(StatusBar::Nap),
            CatState::Playing => Some(StatusBar::Fun),
            CatState::Wandering => None,
        }
    }

    pub fn theme_var(self) -> &'static str {
        match self {
            StatusBar::Energy => "--hunger-bar",
            StatusBar::Nap => "--nap-bar",
            StatusBar::Fun => "--fun-bar",
        }
    }

    pub fn value(self, cat: &Cat) -> f64 {
        match self {
            StatusBar::Energy => cat.needs.energy,
            StatusBar::Nap => cat.needs.nap,
            StatusBar::Fun => cat.needs.happiness,
        }
    }
}

/// Receives each rendered frame.
pub trait Presenter {
    fn draw(&mut self, commands: &[DrawCommand]);

    /// Update the text of a named element. Returns `false` when the element
    /// does not exist; callers treat that as a no-op.
    fn set_text(&mut self, _element_id: &str, _text: &str) -> bool {
        false
    }
}

/// Keeps every frame and text update in memory.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub frames: Vec<Vec<DrawCommand>>,
    /// Element ids this presenter accepts text for. Empty accepts none.
    pub elements: Vec<String>,
    pub texts: Vec<(String, String)>,
}

impl RecordingPresenter {
    pub fn with_elements<I: IntoIterator<Item = String>>(elements: I) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Presenter for RecordingPresenter {
    fn draw(&mut self, commands: &[DrawCommand]) {
        self.frames.push(commands.to_vec());
    }

    fn set_text(&mut self, element_id: &str, text: &str) -> bool {
        if !self.elements.iter().any(|e| e == element_id) {
            return false;
        }
        self.texts.push((element_id.to_string(), text.to_string()));
        true
    }
}

pub fn happiness_element_id(index: usize) -> String {
    format!("cat-{index}-happiness")
}

/// `(element id, text)` for each cat's happiness readout.
pub fn happiness_texts(world: &World) -> Vec<(String, String)> {
    world
        .cats()
        .iter()
        .enumerate()
        .map(|(index, cat)| {
            let value = cat.needs.happiness.clamp(NEED_MIN, NEED_MAX);
            (happiness_element_id(index), format!("{value}%"))
        })
        .collect()
}

pub fn render_frame(world: &World) -> Vec<DrawCommand> {
    let arena = world.arena();
    let mut commands = vec![DrawCommand::Clear {
        width: arena.width,
        height: arena.height,
    }];

    for saucer in world.saucers() {
        let center = saucer.position();
        commands.push(DrawCommand::FillCircle {
            center,
            radius: SAUCER_DRAW_RADIUS,
            paint: Paint::solid(SAUCER_COLOR),
        });
        commands.push(DrawCommand::FillCircle {
            center,
            radius: SAUCER_DRAW_RADIUS * saucer.amount().max(0.0) / SAUCER_CAPACITY,
            paint: Paint::solid(MILK_COLOR),
        });
    }

    let ball = world.ball();
    commands.push(DrawCommand::FillCircle {
        center: ball.position,
        radius: ball.radius(),
        paint: Paint::solid(BALL_COLOR),
    });

    for cat in world.cats() {
        render_cat(cat, &mut commands);
    }
    commands
}

fn render_cat(cat: &Cat, commands: &mut Vec<DrawCommand>) {
    let [x, y] = cat.position;
    commands.push(DrawCommand::FillCircle {
        center: cat.position,
        radius: CAT_DRAW_RADIUS,
        paint: Paint::solid(&cat.color().to_css()),
    });

    if let Some(bar) = StatusBar::for_state(cat.state) {
        let origin = [x - STATUS_BAR_WIDTH / 2.0, y - STATUS_BAR_OFFSET];
        commands.push(DrawCommand::FillRect {
            origin,
            size: [STATUS_BAR_WIDTH * (bar.value(cat) / NEED_MAX), STATUS_BAR_HEIGHT],
            paint: Paint::Theme {
                var: bar.theme_var().to_string(),
                fallback: BAR_FALLBACK.to_string(),
            },
        });
        commands.push(DrawCommand::StrokeRect {
            origin,
            size: [STATUS_BAR_WIDTH, STATUS_BAR_HEIGHT],
            paint: Paint::solid(INK_COLOR),
        });
    }

    commands.push(DrawCommand::Text {
        anchor: [x, y - STATE_LABEL_OFFSET],
        text: cat.state.label(),
        font: LABEL_FONT.to_string(),
        paint: Paint::solid(INK_COLOR),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cat::{CatColor, Needs};
    use crate::config::SimConfig;
    use crate::resource::{Ball, Saucer};

    fn world_with(cat: Cat, saucer: Saucer) -> World {
        let config = SimConfig {
            num_agents: 1,
            num_saucers: 1,
            ..SimConfig::default()
        };
        World::from_parts(config, vec![cat], vec![saucer], Ball::new([400.0, 300.0]))
            .expect("valid world")
    }

    #[test]
    fn frame_lists_saucers_ball_then_cats() {
        let cat = Cat::new([100.0, 100.0], CatColor { hue: 335.0 }).with_state(CatState::Sleeping);
        let world = world_with(cat, Saucer::with_amount([200.0, 200.0], 50.0));
        let frame = render_frame(&world);

        assert!(matches!(frame[0], DrawCommand::Clear { width, height } if width == 800.0 && height == 600.0));
        assert!(matches!(&frame[1], DrawCommand::FillCircle { radius, .. } if *radius == 15.0));
        assert!(matches!(&frame[2], DrawCommand::FillCircle { radius, .. } if (*radius - 7.5).abs() < 1e-12));
        assert!(matches!(&frame[3], DrawCommand::FillCircle { radius, .. } if *radius == 10.0));
        assert!(matches!(&frame[4], DrawCommand::FillCircle { paint: Paint::Solid { color }, .. } if color == "hsl(335, 80%, 70%)"));
        assert!(matches!(&frame[5], DrawCommand::FillRect { origin, paint: Paint::Theme { var, .. }, .. }
            if *origin == [80.0, 85.0] && var == "--nap-bar"));
        assert!(matches!(&frame[6], DrawCommand::StrokeRect { size, .. } if *size == [40.0, 5.0]));
        assert!(matches!(&frame[7], DrawCommand::Text { anchor, text, .. } if *anchor == [100.0, 70.0] && text == "SLEEPING"));
        assert_eq!(frame.len(), 8);
    }

    #[test]
    fn wandering_cat_has_no_status_bar() {
        let cat = Cat::new([100.0, 100.0], CatColor { hue: 335.0 });
        let world = world_with(cat, Saucer::new([200.0, 200.0]));
        let frame = render_frame(&world);
        assert!(!frame
            .iter()
            .any(|c| matches!(c, DrawCommand::FillRect { .. } | DrawCommand::StrokeRect { .. })));
        assert!(frame
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == "WANDERING")));
    }

    #[test]
    fn status_bar_width_tracks_relevant_need() {
        let cat = Cat::new([100.0, 100.0], CatColor { hue: 335.0 })
            .with_state(CatState::Drinking)
            .with_needs(Needs {
                energy: 25.0,
                ..Needs::default()
            });
        let world = world_with(cat, Saucer::new([200.0, 200.0]));
        let frame = render_frame(&world);
        let bar = frame
            .iter()
            .find_map(|c| match c {
                DrawCommand::FillRect { size, paint, .. } => Some((size[0], paint.clone())),
                _ => None,
            })
            .expect("drinking cat has a bar");
        assert_eq!(bar.0, 10.0);
        assert_eq!(
            bar.1,
            Paint::Theme {
                var: "--hunger-bar".to_string(),
                fallback: "#FFFFFF".to_string()
            }
        );
    }

    #[test]
    fn empty_saucer_draws_zero_radius_milk() {
        let cat = Cat::new([100.0, 100.0], CatColor { hue: 335.0 });
        let world = world_with(cat, Saucer::with_amount([200.0, 200.0], 0.0));
        let frame = render_frame(&world);
        assert!(matches!(&frame[2], DrawCommand::FillCircle { radius, .. } if *radius == 0.0));
    }

    #[test]
    fn happiness_texts_use_element_ids() {
        let cat = Cat::new([100.0, 100.0], CatColor { hue: 335.0 }).with_needs(Needs {
            happiness: 12.5,
            ..Needs::default()
        });
        let world = world_with(cat, Saucer::new([200.0, 200.0]));
        assert_eq!(
            happiness_texts(&world),
            vec![("cat-0-happiness".to_string(), "12.5%".to_string())]
        );
    }

    #[test]
    fn recording_presenter_skips_unknown_elements() {
        let mut presenter = RecordingPresenter::with_elements(["cat-1-happiness".to_string()]);
        assert!(!presenter.set_text("cat-0-happiness", "1%"));
        assert!(presenter.set_text("cat-1-happiness", "2%"));
        assert_eq!(presenter.texts.len(), 1);
    }
}
