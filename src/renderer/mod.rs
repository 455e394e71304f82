//! Rendering module
//!
//! `scene` paints game state onto a [`DrawSurface`]; the recorded
//! [`DrawList`] is tessellated by `shapes` and presented by the WebGPU
//! `pipeline`.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::draw;
pub use shapes::{Tessellation, TextLabel, tessellate};
pub use surface::{DrawCommand, DrawList, DrawSurface};
pub use vertex::Vertex;
