//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::Rgba;

/// 2D vertex in field coordinates with a straight (non-premultiplied) color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use crate::{Rgba, rgb_hex};

    pub const BACKGROUND: Rgba = rgb_hex(0x000000, 1.0);
    pub const PADDLE: Rgba = rgb_hex(0x007acc, 1.0);
    pub const BALL: Rgba = rgb_hex(0xffffff, 1.0);
    pub const BLOCK_OUTLINE: Rgba = rgb_hex(0xffffff, 1.0);
    /// Half-transparent black drawn over the field while paused
    pub const SCRIM: Rgba = rgb_hex(0x000000, 0.5);
    pub const PROMPT_TEXT: Rgba = rgb_hex(0xffffff, 1.0);
}
