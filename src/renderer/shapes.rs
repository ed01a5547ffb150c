//! Triangle generation for scene shapes
//!
//! All output is in window pixel coordinates (origin top-left, y down).

use std::f32::consts::TAU;

use glam::Vec2;

use super::vertex::Vertex;
use crate::scene::shape::LABEL_ADVANCE;
use crate::scene::{Scene, Shape, ShapeKind};

/// Segments used to approximate an ellipse
pub const OVAL_SEGMENTS: usize = 32;
/// Outline width for unfilled shapes
const STROKE: f32 = 1.0;

/// Seven-segment masks, bit 0 = top (a) through bit 6 = middle (g)
const DIGIT_SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];
const MINUS_SEGMENTS: u8 = 0x40;

/// Vertices for every visible shape, bottom to top
pub fn scene_vertices(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for (_, shape) in scene.iter().filter(|(_, s)| s.visible) {
        shape_vertices(shape, &mut vertices);
    }
    vertices
}

pub fn shape_vertices(shape: &Shape, out: &mut Vec<Vertex>) {
    let color = shape.color.0;
    match &shape.kind {
        ShapeKind::Rect { size } => {
            if shape.filled {
                quad(out, shape.pos, *size, color);
            } else {
                rect_outline(out, shape.pos, *size, color);
            }
        }
        ShapeKind::Oval { size } => oval(out, shape.pos, *size, shape.filled, color),
        ShapeKind::Label { text, font_size } => label(out, shape.pos, text, *font_size, color),
    }
}

/// Axis-aligned rectangle as two triangles
pub fn quad(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x0, y1, color));
}

fn rect_outline(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    quad(out, pos, Vec2::new(size.x, STROKE), color);
    quad(out, pos + Vec2::new(0.0, size.y - STROKE), Vec2::new(size.x, STROKE), color);
    quad(out, pos, Vec2::new(STROKE, size.y), color);
    quad(out, pos + Vec2::new(size.x - STROKE, 0.0), Vec2::new(STROKE, size.y), color);
}

/// Ellipse inscribed in the box at `pos`: a triangle fan when filled,
/// otherwise a thin ring
pub fn oval(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, filled: bool, color: [f32; 4]) {
    let half = size / 2.0;
    let center = pos + half;
    let inner = (half - Vec2::splat(STROKE)).max(Vec2::ZERO);
    let point = |radii: Vec2, i: usize| {
        let theta = i as f32 / OVAL_SEGMENTS as f32 * TAU;
        center + Vec2::new(theta.cos(), theta.sin()) * radii
    };

    for i in 0..OVAL_SEGMENTS {
        let p1 = point(half, i);
        let p2 = point(half, i + 1);
        if filled {
            out.push(Vertex::new(center.x, center.y, color));
            out.push(Vertex::new(p1.x, p1.y, color));
            out.push(Vertex::new(p2.x, p2.y, color));
        } else {
            let q1 = point(inner, i);
            let q2 = point(inner, i + 1);
            out.push(Vertex::new(p1.x, p1.y, color));
            out.push(Vertex::new(p2.x, p2.y, color));
            out.push(Vertex::new(q1.x, q1.y, color));

            out.push(Vertex::new(p2.x, p2.y, color));
            out.push(Vertex::new(q2.x, q2.y, color));
            out.push(Vertex::new(q1.x, q1.y, color));
        }
    }
}

/// Seven-segment rendering of digits and '-'; other characters leave a gap
pub fn label(out: &mut Vec<Vertex>, pos: Vec2, text: &str, font_size: f32, color: [f32; 4]) {
    let advance = LABEL_ADVANCE * font_size;
    let glyph = Vec2::new(advance * 0.75, font_size * 0.9);
    let margin = Vec2::new((advance - glyph.x) / 2.0, (font_size - glyph.y) / 2.0);

    for (i, ch) in text.chars().enumerate() {
        let mask = match ch {
            '0'..='9' => DIGIT_SEGMENTS[ch as usize - '0' as usize],
            '-' => MINUS_SEGMENTS,
            _ => 0,
        };
        let origin = pos + Vec2::new(i as f32 * advance, 0.0) + margin;
        seven_segment(out, origin, glyph, mask, color);
    }
}

fn seven_segment(out: &mut Vec<Vertex>, origin: Vec2, size: Vec2, mask: u8, color: [f32; 4]) {
    let t = size.x * 0.18;
    let half_h = size.y / 2.0;
    // (offset, size) per segment a..g
    let segments = [
        (Vec2::ZERO, Vec2::new(size.x, t)),
        (Vec2::new(size.x - t, 0.0), Vec2::new(t, half_h)),
        (Vec2::new(size.x - t, half_h), Vec2::new(t, half_h)),
        (Vec2::new(0.0, size.y - t), Vec2::new(size.x, t)),
        (Vec2::new(0.0, half_h), Vec2::new(t, half_h)),
        (Vec2::ZERO, Vec2::new(t, half_h)),
        (Vec2::new(0.0, half_h - t / 2.0), Vec2::new(size.x, t)),
    ];

    for (bit, (offset, seg_size)) in segments.into_iter().enumerate() {
        if mask & (1 << bit) != 0 {
            quad(out, origin + offset, seg_size, color);
        }
    }
}
