pub mod geometry;
pub mod model;
pub mod view;

pub use geometry::{Axis, CropRect, Layout, SizeConstraint};
pub use model::{FrameAction, Gramophone, Settings, Turntable};
pub use view::draw;

pub const DEFAULT_PICTURE_RADIUS: i32 = 400;
// Keeps every derived length and the default picture side within i32.
pub const MAX_PICTURE_RADIUS: i32 = 100_000;
pub const DEFAULT_ROTATE_SPEED: f32 = 0.3; // degrees added per frame
pub const FULL_TURN: f32 = 360.0;

// Needle rest poses, in degrees. The gap must be a multiple of NEEDLE_STEP.
pub const PLAY_DEGREE: i32 = -15;
pub const PAUSE_DEGREE: i32 = -45;
pub const NEEDLE_STEP: i32 = 3;
pub const ARM_BEND_DEGREE: f64 = -30.0;

// Long arm : short arm : long head : short head = 8 : 4 : 2 : 1
pub const NEEDLE_PARTS: i32 = 15;
pub const SMALL_HUB_RADIUS: i32 = 20;

pub const ARM_STROKE: f64 = 20.0;
pub const LONG_HEAD_STROKE: f64 = 40.0;
pub const SHORT_HEAD_STROKE: f64 = 60.0;
