/// Default arena width in world units (one unit = one canvas pixel).
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;
/// Default arena height in world units.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;
pub const DEFAULT_NUM_AGENTS: usize = 10;
pub const DEFAULT_NUM_SAUCERS: usize = 5;

/// Largest accepted canvas edge.
pub const MAX_CANVAS_SIZE: f64 = 16_384.0;
pub const MAX_AGENTS: usize = 10_000;
pub const MAX_SAUCERS: usize = 10_000;

/// Cats (and the ball) are kept this far inside every arena edge.
pub const ARENA_MARGIN: f64 = 10.0;
/// `move_toward` does nothing once the mover is this close to its target.
pub const MOVE_DEAD_ZONE: f64 = 5.0;

pub const NEED_MIN: f64 = 0.0;
pub const NEED_MAX: f64 = 100.0;
pub const INITIAL_ENERGY: f64 = 50.0;
pub const INITIAL_NAP: f64 = 50.0;
pub const INITIAL_HAPPINESS: f64 = 0.0;
pub const INITIAL_HUNGER: f64 = 50.0;

pub const CAT_HUE_BASE: f32 = 330.0;
pub const CAT_HUE_SPREAD: f32 = 30.0;
pub const CAT_SATURATION: u8 = 80;
pub const CAT_LIGHTNESS: u8 = 70;

// State machine thresholds.
pub const LOW_NEED_THRESHOLD: f64 = 30.0;
pub const SATED_THRESHOLD: f64 = 90.0;
/// Per-tick chance of re-deriving the state from the lowest need.
pub const REEVALUATE_PROBABILITY: f64 = 0.01;

// Behaviour.
pub const DRINK_SPEED: f64 = 1.5;
pub const PLAY_SPEED: f64 = 2.0;
pub const INTERACT_RANGE: f64 = 20.0;
pub const DRINK_ENERGY_GAIN: f64 = 0.5;
pub const DRINK_MILK_COST: f64 = 0.2;
pub const SLEEP_NAP_GAIN: f64 = 0.3;
pub const PLAY_HAPPINESS_GAIN: f64 = 1.0;
/// Full width of the ball jitter window on each axis (±15).
pub const BALL_JITTER: f64 = 30.0;

// Collision passes.
pub const PASS_A_RADIUS: f64 = 20.0;
pub const PASS_A_PUSH: f64 = 0.5;
pub const PASS_B_RADIUS: f64 = 30.0;
pub const PASS_B_PUSH: f64 = 0.8;
pub const FOLLOW_RADIUS: f64 = 100.0;
pub const FOLLOW_PROBABILITY: f64 = 0.1;

// Resources.
pub const SAUCER_CAPACITY: f64 = 100.0;
pub const BALL_RADIUS: f64 = 10.0;

// Nap spot search.
pub const NAP_SPOT_ATTEMPTS: usize = 10;
pub const NAP_SPOT_CLEARANCE: f64 = 50.0;

// Presentation.
pub const CAT_DRAW_RADIUS: f64 = 10.0;
pub const SAUCER_DRAW_RADIUS: f64 = 15.0;
pub const STATUS_BAR_WIDTH: f64 = 40.0;
pub const STATUS_BAR_HEIGHT: f64 = 5.0;
pub const STATUS_BAR_OFFSET: f64 = 15.0;
pub const STATE_LABEL_OFFSET: f64 = 30.0;
