//! Game loop simulation
//!
//! All gameplay logic lives here. The simulation is deterministic for a given
//! seed and input sequence:
//! - One `tick` per fixed step, no wall-clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Collider, Wall, detect_collision, reflect, touches_floor, wall_contact};
pub use state::{Ball, GamePhase, GameState, Paddle, Scoreboard, ball_spawn_point};
pub use tick::tick;
