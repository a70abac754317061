//! The interface between the batcher and a graphics API.

use glam::Mat4;

use crate::error::DrawResult;
use crate::vertex::{PrimitiveKind, Vertex};

/// Backend that uploads batched vertices and issues draw calls.
///
/// The batcher only ever talks to a backend through this trait. A frame looks
/// like this from the backend's side:
///
/// ```text
/// save_state, set_projection
/// (upload_vertices, draw*)*      one group per flush
/// restore_state
/// ```
///
/// Draw calls always refer to the vertex range passed to the most recent
/// `upload_vertices`; `first_vertex` is relative to the start of that range.
pub trait DrawBackend {
    /// Create the font texture from tightly packed RGBA8 texels.
    ///
    /// Called once when the draw context is created. A failure leaves the
    /// context uninitialized.
    fn create_font_texture(&mut self, width: u32, height: u32, texels: &[u8]) -> DrawResult<()>;

    /// Set the projection used by the following draw calls.
    fn set_projection(&mut self, projection: &Mat4);

    /// Save any ambient state the overlay is about to change.
    fn save_state(&mut self);

    /// Restore the state captured by the matching `save_state`.
    fn restore_state(&mut self);

    /// Copy `vertices` to the GPU-visible vertex buffer.
    fn upload_vertices(&mut self, vertices: &[Vertex]);

    /// Draw `vertex_count` vertices starting at `first_vertex` of the last upload.
    fn draw(&mut self, kind: PrimitiveKind, vertex_count: u32, first_vertex: u32);
}

impl<B: DrawBackend + ?Sized> DrawBackend for Box<B> {
    fn create_font_texture(&mut self, width: u32, height: u32, texels: &[u8]) -> DrawResult<()> {
        (**self).create_font_texture(width, height, texels)
    }

    fn set_projection(&mut self, projection: &Mat4) {
        (**self).set_projection(projection)
    }

    fn save_state(&mut self) {
        (**self).save_state()
    }

    fn restore_state(&mut self) {
        (**self).restore_state()
    }

    fn upload_vertices(&mut self, vertices: &[Vertex]) {
        (**self).upload_vertices(vertices)
    }

    fn draw(&mut self, kind: PrimitiveKind, vertex_count: u32, first_vertex: u32) {
        (**self).draw(kind, vertex_count, first_vertex)
    }
}
