//! Retained-mode 2D toolkit
//!
//! A fixed-size window owning an ordered list of shapes and a queue of
//! pending input. The game mutates shapes; the renderer paints them.

pub mod events;
pub mod graph;
pub mod shape;

pub use events::{EventClass, EventQueue, InputEvent};
pub use graph::{Scene, ShapeId};
pub use shape::{Color, Shape, ShapeKind};

/// A window of fixed pixel dimensions
#[derive(Debug, Clone)]
pub struct Window {
    width: f32,
    height: f32,
    pub scene: Scene,
    pub events: EventQueue,
}

impl Window {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scene: Scene::new(),
            events: EventQueue::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
