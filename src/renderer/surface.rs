//! 2D drawing surface abstraction
//!
//! The renderer only talks to [`DrawSurface`]. [`DrawList`] records the calls
//! so a frame can be inspected in tests or tessellated for the GPU.

use glam::Vec2;

use crate::Rgba;

/// Minimal canvas-style drawing API over the game field
pub trait DrawSurface {
    /// Wipe the whole field
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba);
    /// Outline centered on the rectangle's edges
    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Text horizontally and vertically centered on `center`
    fn fill_text(&mut self, text: &str, center: Vec2, size: f32, color: Rgba);
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Rgba,
    },
    StrokeRect {
        pos: Vec2,
        size: Vec2,
        color: Rgba,
        line_width: f32,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Text {
        text: String,
        center: Vec2,
        size: f32,
        color: Rgba,
    },
}

/// Recorded frame, in painter's order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every `Text` command, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self, color: Rgba) {
        // Anything drawn before a clear can never be seen
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { pos, size, color });
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect {
            pos,
            size,
            color,
            line_width,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands
            .push(DrawCommand::FillCircle { center, radius, color });
    }

    fn fill_text(&mut self, text: &str, center: Vec2, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            center,
            size,
            color,
        });
    }
}
