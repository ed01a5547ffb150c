//! Breakout - the classic brick-breaking arcade game
//!
//! Core modules:
//! - `scene`: Retained-mode 2D toolkit (shapes, hit testing, input queue)
//! - `sim`: Game loop state machine (ball, paddle, bricks, lives, score)
//! - `renderer`: wgpu rendering of the scene
//! - `settings`: Optional settings file

pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions in pixels
    pub const WIDTH: f32 = 450.0;
    pub const HEIGHT: f32 = 700.0;

    /// Brick grid
    pub const ROWS: usize = 5;
    pub const COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 10.0;
    /// Gap between neighbouring bricks
    pub const BRICK_GUTTER: f32 = 5.0;
    /// Top-left corner of the first brick
    pub const BRICK_ORIGIN_X: f32 = 5.0;
    pub const BRICK_ORIGIN_Y: f32 = 40.0;

    /// Ball
    pub const RADIUS: f32 = 10.0;
    /// Upper bound (exclusive) of the initial horizontal speed
    pub const SPEED: f32 = 5.0;
    pub const INITIAL_Y_VELOCITY: f32 = -2.0;

    /// Paddle
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Fixed paddle row, five paddle heights above the floor
    pub const PADDLE_Y: f32 = HEIGHT - 5.0 * PADDLE_HEIGHT;

    pub const LIVES: u8 = 3;

    /// Scoreboard font size and its offset below the window centre
    pub const SCORE_FONT_SIZE: f32 = 100.0;
    pub const SCORE_Y_OFFSET: f32 = 40.0;

    /// Per-tick pacing delay in milliseconds
    pub const TICK_MS: u64 = 7;
    /// Maximum ticks run per rendered frame
    pub const MAX_SUBSTEPS: u32 = 8;
}
