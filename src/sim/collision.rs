//! Collision detection and response
//!
//! The ball probes the four corners of its bounding box against the scene.
//! The corners lie outside the ball's own oval, so the ball never hits itself.

use std::collections::BTreeSet;

use glam::Vec2;

use super::state::Ball;
use crate::scene::{Scene, ShapeId};

/// What the ball ran into, resolved from the shape found at a corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collider {
    Paddle,
    Brick(ShapeId),
    /// Anything else in the scene (the scoreboard label)
    Other,
}

impl Collider {
    /// Classify a hit-test result against the paddle and the live bricks
    pub fn resolve(id: ShapeId, paddle: ShapeId, bricks: &BTreeSet<ShapeId>) -> Self {
        if id == paddle {
            Collider::Paddle
        } else if bricks.contains(&id) {
            Collider::Brick(id)
        } else {
            Collider::Other
        }
    }
}

/// First shape found at the ball's corners, scanned top-left, top-right,
/// bottom-left, bottom-right
pub fn detect_collision(scene: &Scene, ball: &Ball) -> Option<ShapeId> {
    ball.corners()
        .into_iter()
        .find_map(|corner| scene.object_at(corner.x, corner.y))
}

/// Which wall, if any, the ball's bounding box has crossed this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Right,
    Ceiling,
    Left,
}

/// Wall check in priority order; at most one wall is reported per tick.
/// The floor is not a wall; see [`touches_floor`].
pub fn wall_contact(pos: Vec2, diameter: f32, width: f32) -> Option<Wall> {
    if pos.x + diameter >= width {
        Some(Wall::Right)
    } else if pos.y <= 0.0 {
        Some(Wall::Ceiling)
    } else if pos.x <= 0.0 {
        Some(Wall::Left)
    } else {
        None
    }
}

pub fn touches_floor(pos: Vec2, diameter: f32, height: f32) -> bool {
    pos.y + diameter >= height
}

/// Reflect velocity off a wall
#[inline]
pub fn reflect(vel: Vec2, wall: Wall) -> Vec2 {
    match wall {
        Wall::Left | Wall::Right => Vec2::new(-vel.x, vel.y),
        Wall::Ceiling => Vec2::new(vel.x, -vel.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;
    use proptest::prelude::*;

    fn ball_at(shape: ShapeId, x: f32, y: f32) -> Ball {
        Ball {
            shape,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 10.0,
        }
    }

    #[test]
    fn test_ball_does_not_hit_itself() {
        let mut scene = Scene::new();
        let id = scene.add(Shape::oval(100.0, 100.0, 20.0, 20.0));
        let ball = ball_at(id, 100.0, 100.0);
        assert_eq!(detect_collision(&scene, &ball), None);
    }

    #[test]
    fn test_corner_scan_order() {
        let mut scene = Scene::new();
        // Under the bottom-right corner only
        let lower = scene.add(Shape::rect(118.0, 118.0, 10.0, 10.0));
        // Under the top-right corner only
        let upper = scene.add(Shape::rect(118.0, 95.0, 10.0, 10.0));
        let ball_shape = scene.add(Shape::oval(100.0, 100.0, 20.0, 20.0));
        let ball = ball_at(ball_shape, 100.0, 100.0);

        assert_eq!(detect_collision(&scene, &ball), Some(upper));
        scene.remove(upper);
        assert_eq!(detect_collision(&scene, &ball), Some(lower));
    }

    #[test]
    fn test_resolve_collider() {
        let mut scene = Scene::new();
        let brick = scene.add(Shape::rect(0.0, 0.0, 40.0, 10.0));
        let paddle = scene.add(Shape::rect(0.0, 50.0, 60.0, 10.0));
        let label = scene.add(Shape::label("0", 100.0));
        let bricks = BTreeSet::from([brick]);

        assert_eq!(Collider::resolve(paddle, paddle, &bricks), Collider::Paddle);
        assert_eq!(Collider::resolve(brick, paddle, &bricks), Collider::Brick(brick));
        assert_eq!(Collider::resolve(label, paddle, &bricks), Collider::Other);
    }

    #[test]
    fn test_wall_priority() {
        // Top-right corner: right wall wins over the ceiling
        assert_eq!(wall_contact(Vec2::new(440.0, -1.0), 20.0, 450.0), Some(Wall::Right));
        // Top-left corner: ceiling wins over the left wall
        assert_eq!(wall_contact(Vec2::new(-1.0, -1.0), 20.0, 450.0), Some(Wall::Ceiling));
        assert_eq!(wall_contact(Vec2::new(0.0, 300.0), 20.0, 450.0), Some(Wall::Left));
        assert_eq!(wall_contact(Vec2::new(200.0, 300.0), 20.0, 450.0), None);
    }

    #[test]
    fn test_floor_contact() {
        assert!(touches_floor(Vec2::new(0.0, 680.0), 20.0, 700.0));
        assert!(!touches_floor(Vec2::new(0.0, 679.0), 20.0, 700.0));
    }

    proptest! {
        #[test]
        fn prop_reflection_negates_one_component(
            vx in -10.0f32..10.0,
            vy in -10.0f32..10.0,
        ) {
            let vel = Vec2::new(vx, vy);
            for wall in [Wall::Left, Wall::Right] {
                let out = reflect(vel, wall);
                prop_assert_eq!(out.x, -vx);
                prop_assert_eq!(out.y, vy);
            }
            let out = reflect(vel, Wall::Ceiling);
            prop_assert_eq!(out.x, vx);
            prop_assert_eq!(out.y, -vy);
        }
    }
}
