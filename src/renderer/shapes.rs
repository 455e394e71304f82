//! Shape generation for 2D primitives
//!
//! Turns a recorded [`DrawList`] into triangle-list vertices. Text can't be
//! tessellated without a font atlas, so it is handed back as labels for the
//! host to lay out on top of the canvas.

use glam::Vec2;
use std::f32::consts::PI;

use super::surface::{DrawCommand, DrawList};
use super::vertex::{Vertex, colors};
use crate::Rgba;

/// Triangle segments used for circles
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Text the host must draw itself
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    /// Field coordinates of the label center
    pub center: Vec2,
    pub size: f32,
    pub color: Rgba,
}

/// GPU-ready frame
#[derive(Debug, Clone, PartialEq)]
pub struct Tessellation {
    pub clear: Rgba,
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

/// Tessellate every command in painter's order
pub fn tessellate(list: &DrawList) -> Tessellation {
    let mut frame = Tessellation {
        clear: colors::BACKGROUND,
        vertices: Vec::new(),
        labels: Vec::new(),
    };

    for command in list.commands() {
        match command {
            DrawCommand::Clear(color) => {
                frame.clear = *color;
                frame.vertices.clear();
                frame.labels.clear();
            }
            DrawCommand::FillRect { pos, size, color } => {
                frame.vertices.extend(rect(*pos, *size, *color));
            }
            DrawCommand::StrokeRect {
                pos,
                size,
                color,
                line_width,
            } => {
                frame
                    .vertices
                    .extend(rect_outline(*pos, *size, *color, *line_width));
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                frame
                    .vertices
                    .extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS));
            }
            DrawCommand::Text {
                text,
                center,
                size,
                color,
            } => frame.labels.push(TextLabel {
                text: text.clone(),
                center: *center,
                size: *size,
                color: *color,
            }),
        }
    }

    frame
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(pos: Vec2, size: Vec2, color: Rgba) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a rectangle outline straddling its edges
pub fn rect_outline(pos: Vec2, size: Vec2, color: Rgba, line_width: f32) -> Vec<Vertex> {
    let half = line_width / 2.0;
    let outer_pos = pos - Vec2::splat(half);
    let outer_size = size + Vec2::splat(line_width);

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom span the full outer width, sides fill the gap between
    vertices.extend(rect(outer_pos, Vec2::new(outer_size.x, line_width), color));
    vertices.extend(rect(
        Vec2::new(outer_pos.x, pos.y + size.y - half),
        Vec2::new(outer_size.x, line_width),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(outer_pos.x, pos.y + half),
        Vec2::new(line_width, size.y - line_width),
        color,
    ));
    vertices.extend(rect(
        Vec2::new(pos.x + size.x - half, pos.y + half),
        Vec2::new(line_width, size.y - line_width),
        color,
    ));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Rgba, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle fan slice from the center
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
