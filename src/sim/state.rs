//! Game state and core simulation types
//!
//! Everything the loop mutates lives in [`GameState`]; shapes themselves are
//! owned by the window's scene and referenced by id.

use std::collections::BTreeSet;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::scene::{Color, Shape, ShapeId, Window};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball in motion
    Playing,
    /// Life lost, ball hidden until the next click
    Respawning,
    /// No lives or no bricks left, waiting for the final click
    GameOver,
    /// Final click received; the window should close
    Closed,
}

/// The ball. `pos` is the top-left of its bounding box, like every shape.
#[derive(Debug, Clone)]
pub struct Ball {
    pub shape: ShapeId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn diameter(&self) -> f32 {
        2.0 * self.radius
    }

    /// Bounding-box corners: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        let d = self.diameter();
        [
            self.pos,
            self.pos + Vec2::new(d, 0.0),
            self.pos + Vec2::new(0.0, d),
            self.pos + Vec2::new(d, d),
        ]
    }
}

/// Mouse-driven paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub shape: ShapeId,
    pub pos: Vec2,
}

/// Score label kept centred in the window
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub shape: ShapeId,
}

impl Scoreboard {
    /// Set the label to `points` and re-centre it
    pub fn update(&self, window: &mut Window, points: u32) {
        window.scene.set_text(self.shape, &points.to_string());

        let Some(size) = window.scene.get(self.shape).map(Shape::size) else {
            return;
        };
        let x = (window.width() - size.x) / 2.0;
        let y = (window.height() - size.y) / 2.0 + SCORE_Y_OFFSET;
        window.scene.set_location(self.shape, x, y);
    }
}

/// Complete game state, passed to [`super::tick`] once per tick
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the RNG that chose the serve direction
    pub seed: u64,
    pub window: Window,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub scoreboard: Scoreboard,
    /// Bricks still in the scene
    pub bricks: BTreeSet<ShapeId>,
    pub lives: u8,
    pub points: u32,
    /// Ticks simulated so far
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game: window, brick grid, ball, paddle and scoreboard
    pub fn new(seed: u64) -> Self {
        let mut window = Window::new(WIDTH, HEIGHT);
        let bricks = init_bricks(&mut window);

        let ball_pos = ball_spawn_point();
        let ball_shape = window.scene.add(
            Shape::oval(ball_pos.x, ball_pos.y, 2.0 * RADIUS, 2.0 * RADIUS)
                .with_color(Color::GREEN)
                .with_filled(true),
        );

        let paddle_pos = Vec2::new(WIDTH / 2.0 - PADDLE_WIDTH / 2.0, PADDLE_Y);
        let paddle_shape = window.scene.add(
            Shape::rect(paddle_pos.x, paddle_pos.y, PADDLE_WIDTH, PADDLE_HEIGHT)
                .with_color(Color::DARK_GRAY)
                .with_filled(true),
        );

        let label = window
            .scene
            .add(Shape::label("0", SCORE_FONT_SIZE).with_color(Color::LIGHT_GRAY));
        let scoreboard = Scoreboard { shape: label };
        scoreboard.update(&mut window, 0);

        let mut rng = Pcg32::seed_from_u64(seed);
        let vel = Vec2::new(rng.random_range(0.0..SPEED), INITIAL_Y_VELOCITY);

        log::info!(
            "New game: seed {}, {} bricks, serve velocity ({:.3}, {:.1})",
            seed,
            bricks.len(),
            vel.x,
            vel.y
        );

        Self {
            seed,
            window,
            phase: GamePhase::Playing,
            ball: Ball {
                shape: ball_shape,
                pos: ball_pos,
                vel,
                radius: RADIUS,
            },
            paddle: Paddle {
                shape: paddle_shape,
                pos: paddle_pos,
            },
            scoreboard,
            bricks,
            lives: LIVES,
            points: 0,
            time_ticks: 0,
        }
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len()
    }

    /// True once lives or bricks are exhausted
    pub fn is_over(&self) -> bool {
        self.lives == 0 || self.bricks.is_empty()
    }

    /// Move the ball and its shape to `pos`
    pub fn place_ball(&mut self, pos: Vec2) {
        self.ball.pos = pos;
        self.window.scene.set_location(self.ball.shape, pos.x, pos.y);
    }

    /// Move the paddle and its shape to `pos`
    pub fn place_paddle(&mut self, pos: Vec2) {
        self.paddle.pos = pos;
        self.window
            .scene
            .set_location(self.paddle.shape, pos.x, pos.y);
    }

    pub fn set_ball_visible(&mut self, visible: bool) {
        self.window.scene.set_visible(self.ball.shape, visible);
    }

    pub fn ball_visible(&self) -> bool {
        self.window
            .scene
            .get(self.ball.shape)
            .is_some_and(|s| s.visible)
    }

    /// Remove a brick from the scene and credit the player for it.
    /// Returns false if `id` is not a live brick.
    pub fn destroy_brick(&mut self, id: ShapeId) -> bool {
        if !self.bricks.remove(&id) {
            return false;
        }
        self.window.scene.remove(id);
        self.points += 1;
        self.scoreboard.update(&mut self.window, self.points);
        true
    }
}

/// Top-left of the ball's bounding box when centred in the window
pub fn ball_spawn_point() -> Vec2 {
    Vec2::new(WIDTH / 2.0 - RADIUS, HEIGHT / 2.0 - RADIUS)
}

/// Lay out the ROWS x COLS brick grid
fn init_bricks(window: &mut Window) -> BTreeSet<ShapeId> {
    let mut bricks = BTreeSet::new();
    for row in 0..ROWS {
        let y = BRICK_ORIGIN_Y + row as f32 * (BRICK_HEIGHT + BRICK_GUTTER);
        for col in 0..COLS {
            let x = BRICK_ORIGIN_X + col as f32 * (BRICK_WIDTH + BRICK_GUTTER);
            let id = window.scene.add(
                Shape::rect(x, y, BRICK_WIDTH, BRICK_HEIGHT)
                    .with_color(Color::BLUE)
                    .with_filled(true),
            );
            bricks.insert(id);
        }
    }
    bricks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.points, 0);
        assert_eq!(state.bricks_remaining(), ROWS * COLS);
        // Bricks, ball, paddle, scoreboard
        assert_eq!(state.window.scene.len(), ROWS * COLS + 3);

        assert_eq!(state.ball.pos, Vec2::new(215.0, 340.0));
        assert_eq!(state.paddle.pos, Vec2::new(195.0, 650.0));
        assert!(state.ball.vel.x >= 0.0 && state.ball.vel.x < SPEED);
        assert_eq!(state.ball.vel.y, -2.0);
    }

    #[test]
    fn test_brick_grid_positions() {
        let state = GameState::new(1);
        let first = state.bricks.first().copied().unwrap();
        let last = state.bricks.last().copied().unwrap();

        assert_eq!(state.window.scene.get(first).unwrap().pos, Vec2::new(5.0, 40.0));
        // Row 4, column 9
        assert_eq!(
            state.window.scene.get(last).unwrap().pos,
            Vec2::new(5.0 + 9.0 * 45.0, 40.0 + 4.0 * 15.0)
        );
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(777);
        let b = GameState::new(777);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_scoreboard_centred() {
        let mut state = GameState::new(1);
        let label = state.scoreboard.shape;
        let one_digit = state.window.scene.get(label).unwrap().clone();
        assert!((one_digit.pos.x - (WIDTH - 60.0) / 2.0).abs() < 1e-4);
        assert!((one_digit.pos.y - ((HEIGHT - 100.0) / 2.0 + 40.0)).abs() < 1e-4);

        state.scoreboard.update(&mut state.window, 10);
        let two_digits = state.window.scene.get(label).unwrap();
        assert!((two_digits.pos.x - (WIDTH - 120.0) / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_destroy_brick_once() {
        let mut state = GameState::new(1);
        let id = state.bricks.first().copied().unwrap();

        assert!(state.destroy_brick(id));
        assert!(!state.destroy_brick(id));
        assert!(!state.window.scene.contains(id));
        assert_eq!(state.points, 1);
        assert_eq!(state.bricks_remaining(), ROWS * COLS - 1);
    }

    #[test]
    fn test_destroy_non_brick_is_rejected() {
        let mut state = GameState::new(1);
        let paddle = state.paddle.shape;
        assert!(!state.destroy_brick(paddle));
        assert!(state.window.scene.contains(paddle));
        assert_eq!(state.points, 0);
    }
}
