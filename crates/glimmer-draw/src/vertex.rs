//! Vertex and draw command types shared by the batcher and the backends.

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

/// GPU draw topology of a run of vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Independent line segments, two vertices each.
    Lines,
    /// Independent triangles, three vertices each.
    Triangles,
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimitiveKind::Lines => write!(f, "lines"),
            PrimitiveKind::Triangles => write!(f, "triangles"),
        }
    }
}

/// A single overlay vertex.
///
/// `color` is already in the backend's native channel order: red in the low
/// byte, alpha in the high byte, so the little-endian bytes read `R G B A`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub color: u32,
    pub u: f32,
    pub v: f32,
}

const_assert_eq!(std::mem::size_of::<Vertex>(), 20);

impl Vertex {
    pub const fn new(x: f32, y: f32, color: u32, u: f32, v: f32) -> Self {
        Self { x, y, color, u, v }
    }

    /// Size of a vertex in bytes.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    /// Returns the wgpu vertex buffer layout matching this struct.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRS: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            // location 0: position (vec2)
            0 => Float32x2,
            // location 1: color (normalized rgba8)
            1 => Unorm8x4,
            // location 2: uv (vec2)
            2 => Float32x2,
        ];

        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRS,
        }
    }
}

/// One pending draw call: a run of `vertex_count` vertices of one kind.
///
/// Commands carry no offset; the offset of a command is the sum of the
/// counts before it in the same flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub kind: PrimitiveKind,
    pub vertex_count: u32,
}

impl DrawCommand {
    pub const fn new(kind: PrimitiveKind, vertex_count: u32) -> Self {
        Self { kind, vertex_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_offsets() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[2].offset, 12);
    }

    #[test]
    fn test_vertex_color_bytes_are_rgba() {
        let vertex = Vertex::new(0.0, 0.0, 0xff33_2211, 0.0, 0.0);
        let bytes: &[u8] = bytemuck::bytes_of(&vertex);
        assert_eq!(&bytes[8..12], &[0x11, 0x22, 0x33, 0xff]);
    }
}
