//! Geometry for the overlay primitives.
//!
//! These functions only fill vertex slices; reserving the slices and choosing
//! the primitive kind is up to [`DrawContext`](crate::DrawContext).
//!
//! Quads are written as two triangles sharing the top-right/bottom-left
//! diagonal. With corners `c0` top-left, `c1` top-right, `c2` bottom-right and
//! `c3` bottom-left the six vertices are `c0 c1 c3 c1 c2 c3`.

use glam::Vec2;

use crate::color::{Gradient, to_native, to_native_opaque};
use crate::font::GlyphTable;
use crate::vertex::Vertex;

/// Vertices per quad.
pub const QUAD_VERTICES: usize = 6;

/// Texture coordinate past the atlas edge. Clamped sampling lands on the
/// opaque last texel, so untextured primitives show their vertex color.
pub const NO_GLYPH_UV: f32 = 2.0;

/// Fill style of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    /// A single solid color.
    #[default]
    Flat,
    /// A vertical gradient from a lighter top to a darker bottom.
    Shaded,
}

/// Number of vertices `draw_text` needs for `text`.
pub const fn text_vertex_count(text: &str) -> usize {
    text.len() * QUAD_VERTICES
}

/// Number of vertices `draw_line_strip` needs for `point_count` points.
pub const fn line_strip_vertex_count(point_count: usize) -> usize {
    point_count.saturating_sub(1) * 2
}

/// Write the six vertices of a quad from its four corners.
#[inline]
pub fn write_quad(out: &mut [Vertex], corners: [Vertex; 4]) {
    let [c0, c1, c2, c3] = corners;
    out[..QUAD_VERTICES].copy_from_slice(&[c0, c1, c3, c1, c2, c3]);
}

/// Write one glyph quad per byte of `text`, starting at `(x, y)`.
///
/// `color` is `0xAARRGGBB`; alpha is ignored and text is always opaque.
pub fn write_text(out: &mut [Vertex], x: f32, y: f32, color: u32, text: &str, glyphs: &GlyphTable) {
    let metrics = glyphs.metrics();
    let color = to_native_opaque(color);
    let width = metrics.glyph_width as f32;
    let bottom = y + metrics.line_height();
    let du = metrics.glyph_u_width();

    let mut pen = x;
    for (quad, &byte) in out.chunks_exact_mut(QUAD_VERTICES).zip(text.as_bytes()) {
        let u0 = glyphs.u(byte);
        let u1 = u0 + du;
        write_quad(
            quad,
            [
                Vertex::new(pen, y, color, u0, 0.0),
                Vertex::new(pen + width, y, color, u1, 0.0),
                Vertex::new(pen + width, bottom, color, u1, 1.0),
                Vertex::new(pen, bottom, color, u0, 1.0),
            ],
        );
        pen += metrics.advance();
    }
}

/// Write a box spanning `(x0, y0)` to `(x1, y1)`.
///
/// `color` is `0xAARRGGBB`. Flat boxes are opaque; shaded boxes keep the
/// input alpha.
pub fn write_box(out: &mut [Vertex], x0: f32, y0: f32, x1: f32, y1: f32, color: u32, style: BoxStyle) {
    const UV: f32 = NO_GLYPH_UV;

    let corners = match style {
        BoxStyle::Flat => {
            let color = to_native_opaque(color);
            [
                Vertex::new(x0, y0, color, UV, UV),
                Vertex::new(x1, y0, color, UV, UV),
                Vertex::new(x1, y1, color, UV, UV),
                Vertex::new(x0, y1, color, UV, UV),
            ]
        }
        BoxStyle::Shaded => {
            let Gradient { top, bottom } = Gradient::shade(color);
            [
                Vertex::new(x0, y0, top, UV, UV),
                Vertex::new(x1, y0, top, UV + 1.0, UV),
                Vertex::new(x1, y1, bottom, UV + 1.0, UV + 1.0),
                Vertex::new(x0, y1, bottom, UV, UV + 1.0),
            ]
        }
    };

    write_quad(out, corners);
}

/// Write one line segment per consecutive pair of `points`.
///
/// `color` is `0xAARRGGBB` and keeps its alpha.
pub fn write_line_strip(out: &mut [Vertex], points: &[Vec2], color: u32) {
    let color = to_native(color);
    for (segment, pair) in out.chunks_exact_mut(2).zip(points.windows(2)) {
        segment[0] = Vertex::new(pair[0].x, pair[0].y, color, NO_GLYPH_UV, NO_GLYPH_UV);
        segment[1] = Vertex::new(pair[1].x, pair[1].y, color, NO_GLYPH_UV, NO_GLYPH_UV);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontData;

    fn corner(x: f32, y: f32) -> Vertex {
        Vertex::new(x, y, 0, 0.0, 0.0)
    }

    #[test]
    fn test_quad_corner_order() {
        let mut out = [Vertex::default(); QUAD_VERTICES];
        let (c0, c1, c2, c3) = (corner(0.0, 0.0), corner(1.0, 0.0), corner(1.0, 1.0), corner(0.0, 1.0));
        write_quad(&mut out, [c0, c1, c2, c3]);
        assert_eq!(out, [c0, c1, c3, c1, c2, c3]);
    }

    #[test]
    fn test_text_geometry() {
        let glyphs = FontData::builtin().glyph_table();
        let mut out = vec![Vertex::default(); text_vertex_count("Hi")];
        write_text(&mut out, 10.0, 20.0, 0x00ff_0000, "Hi", &glyphs);

        // First glyph: 5 wide, 9 tall (glyph plus shadow row).
        let h = &out[..6];
        assert_eq!((h[0].x, h[0].y), (10.0, 20.0));
        assert_eq!((h[1].x, h[1].y), (15.0, 20.0));
        assert_eq!((h[4].x, h[4].y), (15.0, 29.0));
        assert_eq!((h[2].x, h[2].y), (10.0, 29.0));
        assert_eq!(h[0].u, glyphs.u(b'H'));
        assert_eq!(h[1].u, glyphs.u(b'H') + 5.0 / 1024.0);
        assert_eq!((h[0].v, h[4].v), (0.0, 1.0));

        // Second glyph advances by width + 1.
        assert_eq!(out[6].x, 16.0);
        assert_eq!(out[6].u, glyphs.u(b'i'));

        // Red input becomes red in the low byte, forced opaque.
        assert!(out.iter().all(|v| v.color == 0xff00_00ff));
    }

    #[test]
    fn test_flat_box_color_and_uv() {
        let mut out = [Vertex::default(); QUAD_VERTICES];
        write_box(&mut out, 1.0, 2.0, 3.0, 4.0, 0x0011_2233, BoxStyle::Flat);

        assert!(out.iter().all(|v| v.color == 0xff33_2211));
        assert!(out.iter().all(|v| v.u >= 2.0 && v.v >= 2.0));
        assert_eq!((out[0].x, out[0].y), (1.0, 2.0));
        assert_eq!((out[4].x, out[4].y), (3.0, 4.0));
    }

    #[test]
    fn test_shaded_box_gradient() {
        let mut out = [Vertex::default(); QUAD_VERTICES];
        write_box(&mut out, 0.0, 0.0, 8.0, 8.0, 0x80c8_6400, BoxStyle::Shaded);

        let gradient = Gradient::shade(0x80c8_6400);
        // c0, c1 (slots 0, 1, 3) are the top; c2, c3 (slots 2, 4, 5) the bottom.
        for i in [0, 1, 3] {
            assert_eq!(out[i].color, gradient.top);
            assert_eq!(out[i].y, 0.0);
        }
        for i in [2, 4, 5] {
            assert_eq!(out[i].color, gradient.bottom);
            assert_eq!(out[i].y, 8.0);
        }
        assert!(out.iter().all(|v| v.color & 0xff00_0000 == 0x8000_0000));
        assert!(out.iter().all(|v| v.u >= 2.0 && v.v >= 2.0));
    }

    #[test]
    fn test_line_strip_segments() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0), Vec2::new(20.0, 0.0)];
        let mut out = vec![Vertex::default(); line_strip_vertex_count(points.len())];
        write_line_strip(&mut out, &points, 0x8011_2233);

        let xy: Vec<(f32, f32)> = out.iter().map(|v| (v.x, v.y)).collect();
        assert_eq!(xy, vec![(0.0, 0.0), (10.0, 5.0), (10.0, 5.0), (20.0, 0.0)]);
        assert!(out.iter().all(|v| v.color == 0x8033_2211));
        assert!(out.iter().all(|v| v.u == NO_GLYPH_UV && v.v == NO_GLYPH_UV));
    }

    #[test]
    fn test_vertex_counts() {
        assert_eq!(text_vertex_count(""), 0);
        assert_eq!(text_vertex_count("abc"), 18);
        assert_eq!(line_strip_vertex_count(0), 0);
        assert_eq!(line_strip_vertex_count(1), 0);
        assert_eq!(line_strip_vertex_count(5), 8);
    }
}
