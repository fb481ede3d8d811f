//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in game space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_rect(&mut vertices, top_left, size, color);
    vertices
}

/// Append a filled rectangle to an existing vertex list
pub fn push_rect(vertices: &mut Vec<Vertex>, top_left: Vec2, size: Vec2, color: [f32; 4]) {
    let (x0, y0) = (top_left.x, top_left.y);
    let (x1, y1) = (top_left.x + size.x, top_left.y + size.y);

    vertices.push(Vertex::new(x0, y0, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x0, y1, color));

    vertices.push(Vertex::new(x0, y1, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x1, y1, color));
}

/// Generate vertices for a rectangle outline of the given thickness
pub fn rect_outline(top_left: Vec2, size: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(24);
    let t = thickness;

    // Top and bottom span the full width, sides fill between them
    push_rect(&mut vertices, top_left, Vec2::new(size.x, t), color);
    push_rect(
        &mut vertices,
        Vec2::new(top_left.x, top_left.y + size.y - t),
        Vec2::new(size.x, t),
        color,
    );
    push_rect(
        &mut vertices,
        Vec2::new(top_left.x, top_left.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    );
    push_rect(
        &mut vertices,
        Vec2::new(top_left.x + size.x - t, top_left.y + t),
        Vec2::new(t, size.y - 2.0 * t),
        color,
    );

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 5.0), WHITE);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 25.0);
    }

    #[test]
    fn test_outline_is_four_bars() {
        let v = rect_outline(Vec2::ZERO, Vec2::new(75.0, 25.0), 1.0, WHITE);
        assert_eq!(v.len(), 24);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 100.0);
        let v = circle(center, 8.0, WHITE, 16);
        assert_eq!(v.len(), 48);
        for vertex in &v {
            let p = Vec2::from(vertex.position);
            assert!(p.distance(center) <= 8.0 + 1e-4);
        }
    }
}
