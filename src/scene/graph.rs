//! Ordered render list with point hit testing

use glam::Vec2;

use super::shape::{Shape, ShapeKind};

/// Handle to a shape in a [`Scene`]. Never reused within one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u32);

/// Shapes in paint order (first = bottom, last = top)
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<(ShapeId, Shape)>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape on top of everything already present
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.push((id, shape));
        id
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.index_of(id)?;
        Some(self.shapes.remove(index).1)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes bottom to top
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, s)| (*id, s))
    }

    pub fn set_location(&mut self, id: ShapeId, x: f32, y: f32) {
        if let Some(shape) = self.get_mut(id) {
            shape.pos = Vec2::new(x, y);
        }
    }

    pub fn set_visible(&mut self, id: ShapeId, visible: bool) {
        if let Some(shape) = self.get_mut(id) {
            shape.visible = visible;
        }
    }

    /// Replace a label's text. No-op for other shapes.
    pub fn set_text(&mut self, id: ShapeId, new_text: &str) {
        if let Some(Shape {
            kind: ShapeKind::Label { text, .. },
            ..
        }) = self.get_mut(id)
        {
            new_text.clone_into(text);
        }
    }

    /// Topmost visible shape containing the point
    pub fn object_at(&self, x: f32, y: f32) -> Option<ShapeId> {
        let point = Vec2::new(x, y);
        self.shapes
            .iter()
            .rev()
            .find(|(_, s)| s.visible && s.contains(point))
            .map(|(id, _)| *id)
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|(i, _)| *i == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_at_returns_topmost() {
        let mut scene = Scene::new();
        let below = scene.add(Shape::rect(0.0, 0.0, 100.0, 100.0));
        let above = scene.add(Shape::rect(50.0, 50.0, 100.0, 100.0));

        assert_eq!(scene.object_at(75.0, 75.0), Some(above));
        assert_eq!(scene.object_at(10.0, 10.0), Some(below));
        assert_eq!(scene.object_at(200.0, 200.0), None);
    }

    #[test]
    fn test_hidden_shapes_are_not_hit() {
        let mut scene = Scene::new();
        let id = scene.add(Shape::rect(0.0, 0.0, 10.0, 10.0));
        scene.set_visible(id, false);
        assert_eq!(scene.object_at(5.0, 5.0), None);
        scene.set_visible(id, true);
        assert_eq!(scene.object_at(5.0, 5.0), Some(id));
    }

    #[test]
    fn test_remove_and_ids_not_reused() {
        let mut scene = Scene::new();
        let a = scene.add(Shape::rect(0.0, 0.0, 10.0, 10.0));
        assert!(scene.remove(a).is_some());
        assert!(scene.remove(a).is_none());
        assert!(!scene.contains(a));

        let b = scene.add(Shape::rect(0.0, 0.0, 10.0, 10.0));
        assert_ne!(a, b);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_location_and_text_updates() {
        let mut scene = Scene::new();
        let label = scene.add(Shape::label("0", 100.0));
        scene.set_text(label, "42");
        scene.set_location(label, 11.0, 19.0);

        let shape = scene.get(label).unwrap();
        assert_eq!(shape.pos, Vec2::new(11.0, 19.0));
        assert!(matches!(&shape.kind, ShapeKind::Label { text, .. } if text == "42"));
    }
}
