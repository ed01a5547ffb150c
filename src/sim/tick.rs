//! Per-tick game update
//!
//! One call advances the state machine by one step. Pacing between ticks is
//! the caller's job; waits for a click are gates on the event queue that
//! hold the phase until a click arrives.

use glam::Vec2;

use super::collision::{Collider, detect_collision, reflect, touches_floor, wall_contact};
use super::state::{GamePhase, GameState, ball_spawn_point};
use crate::consts::*;

/// Advance the game by one tick
pub fn tick(state: &mut GameState) {
    match state.phase {
        GamePhase::Playing => {
            state.time_ticks += 1;
            if advance_ball(state) {
                finish_tick(state);
            }
        }
        GamePhase::Respawning => {
            if state.window.events.take_click() {
                respawn(state);
                finish_tick(state);
            }
        }
        GamePhase::GameOver => {
            if state.window.events.take_click() {
                log::info!("Closing after game over");
                state.phase = GamePhase::Closed;
            }
        }
        GamePhase::Closed => {}
    }
}

/// Move the ball, bounce it off the walls and check the floor.
/// Returns false when the ball reached the floor and the tick is suspended.
fn advance_ball(state: &mut GameState) -> bool {
    let pos = state.ball.pos + state.ball.vel;
    state.place_ball(pos);

    let diameter = state.ball.diameter();
    if let Some(wall) = wall_contact(pos, diameter, state.window.width()) {
        state.ball.vel = reflect(state.ball.vel, wall);
    }

    if touches_floor(pos, diameter, state.window.height()) {
        state.lives = state.lives.saturating_sub(1);
        state.set_ball_visible(false);
        // Only a click made after the ball is lost may respawn it
        state.window.events.clear();
        state.phase = GamePhase::Respawning;
        log::info!("Ball lost, {} lives left", state.lives);
        return false;
    }
    true
}

/// Re-centre and show the ball after a lost life
fn respawn(state: &mut GameState) {
    state.place_ball(ball_spawn_point());
    state.set_ball_visible(true);
    state.ball.vel.y = -state.ball.vel.y;
    state.phase = GamePhase::Playing;
    log::debug!("Ball respawned with velocity {:?}", state.ball.vel);
}

/// Paddle input, collision response and the end-of-game check
fn finish_tick(state: &mut GameState) {
    update_paddle(state);
    handle_collision(state);

    if state.is_over() {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} ticks: {} points, {} lives, {} bricks left",
            state.time_ticks,
            state.points,
            state.lives,
            state.bricks_remaining()
        );
    }
}

/// Centre the paddle under the latest cursor position, if the mouse moved
fn update_paddle(state: &mut GameState) {
    if let Some((x, _)) = state.window.events.latest_mouse_move() {
        state.place_paddle(Vec2::new(x - PADDLE_WIDTH / 2.0, PADDLE_Y));
    }
}

fn handle_collision(state: &mut GameState) {
    let Some(hit) = detect_collision(&state.window.scene, &state.ball) else {
        return;
    };

    match Collider::resolve(hit, state.paddle.shape, &state.bricks) {
        Collider::Paddle => {
            state.ball.vel.y = -state.ball.vel.y;
        }
        Collider::Brick(id) => {
            state.ball.vel.y = -state.ball.vel.y;
            state.destroy_brick(id);
            log::debug!(
                "Brick hit: {} points, {} bricks left",
                state.points,
                state.bricks_remaining()
            );
        }
        Collider::Other => {}
    }
}
