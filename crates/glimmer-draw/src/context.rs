//! The immediate-mode draw context.

use glam::{Mat4, Vec2};
use glimmer_core::profiling::profile_scope;

use crate::backend::DrawBackend;
use crate::batch::{Batch, BatchStats};
use crate::config::DrawConfig;
use crate::error::{DrawError, DrawResult};
use crate::font::{FontAtlas, GlyphTable};
use crate::frame::{FrameState, overlay_projection};
use crate::primitives::{
    BoxStyle, QUAD_VERTICES, line_strip_vertex_count, text_vertex_count, write_box, write_line_strip,
    write_text,
};
use crate::vertex::{PrimitiveKind, Vertex};

/// Owns the batch, the font atlas and the backend for one overlay.
///
/// Creating the context decodes the font and uploads it through the backend.
/// If that fails the context stays [`FrameState::Uninitialized`] and every
/// frame and primitive call does nothing, so a broken overlay renders nothing
/// instead of taking the host down.
///
/// # Example
///
/// ```
/// use glimmer_draw::{BoxStyle, DrawConfig, DrawContext, RecordingBackend};
/// use glam::Vec2;
///
/// let mut ctx = DrawContext::new(RecordingBackend::new(), DrawConfig::default());
///
/// ctx.begin_frame(1280, 720, 1.0);
/// ctx.draw_box(10.0, 10.0, 200.0, 40.0, 0xff202020, BoxStyle::Shaded);
/// ctx.draw_text(14.0, 14.0, 0xffffff, "frame 16.6ms");
/// ctx.draw_line_strip(&[Vec2::new(10.0, 60.0), Vec2::new(200.0, 80.0)], 0xffff0000);
/// ctx.end_frame();
///
/// assert_eq!(ctx.stats().draw_calls, 2);
/// ```
pub struct DrawContext<B: DrawBackend> {
    backend: B,
    batch: Batch,
    glyphs: GlyphTable,
    atlas: Option<FontAtlas>,
    state: FrameState,
    label: &'static str,
}

impl<B: DrawBackend> DrawContext<B> {
    /// Create a context, logging and absorbing any backend setup failure.
    pub fn new(backend: B, config: DrawConfig) -> Self {
        let (context, error) = Self::setup(backend, config);
        if let Some(error) = error {
            tracing::error!(
                "Draw context '{}' failed to initialize, overlay disabled: {}",
                context.label,
                error
            );
        }
        context
    }

    /// Create a context, returning the setup error instead of degrading.
    pub fn try_new(backend: B, config: DrawConfig) -> DrawResult<Self> {
        match Self::setup(backend, config) {
            (context, None) => Ok(context),
            (_, Some(error)) => Err(error),
        }
    }

    fn setup(mut backend: B, config: DrawConfig) -> (Self, Option<DrawError>) {
        let label = config.label.unwrap_or("glimmer");
        let glyphs = config.font.glyph_table();
        let batch = Batch::new(config.vertex_capacity, config.command_capacity);

        let atlas = config.font.decode_atlas().and_then(|atlas| {
            backend.create_font_texture(atlas.width(), atlas.height(), atlas.as_bytes())?;
            Ok(atlas)
        });

        let (atlas, state, error) = match atlas {
            Ok(atlas) => {
                tracing::debug!(
                    "Draw context '{}' ready: {}x{} font atlas, {} vertices, {} commands",
                    label,
                    atlas.width(),
                    atlas.height(),
                    batch.vertex_capacity(),
                    batch.command_capacity()
                );
                (Some(atlas), FrameState::Idle, None)
            }
            Err(error) => (None, FrameState::Uninitialized, Some(error)),
        };

        let context = Self {
            backend,
            batch,
            glyphs,
            atlas,
            state,
            label,
        };
        (context, error)
    }

    pub fn is_initialized(&self) -> bool {
        self.state != FrameState::Uninitialized
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Start a frame for a `width` x `height` target drawn at `scale`.
    pub fn begin_frame(&mut self, width: u32, height: u32, scale: f32) {
        if !self.is_initialized() {
            return;
        }
        self.begin_frame_with_projection(width, height, overlay_projection(width, height, scale));
    }

    /// Start a frame with a caller-provided projection.
    ///
    /// Pending vertices from outside a frame are discarded.
    pub fn begin_frame_with_projection(&mut self, width: u32, height: u32, projection: Mat4) {
        if !self.is_initialized() {
            return;
        }

        if self.state == FrameState::InFrame {
            tracing::warn!("begin_frame called twice without end_frame");
        }

        let discarded = self.batch.clear();
        if discarded > 0 {
            tracing::warn!("Discarding {} vertices queued outside of a frame", discarded);
        }
        self.batch.reset_stats();

        tracing::trace!("Begin overlay frame {}x{}", width, height);
        self.backend.save_state();
        self.backend.set_projection(&projection);
        self.state = FrameState::InFrame;
    }

    /// Flush everything pending and restore the backend state.
    pub fn end_frame(&mut self) {
        if !self.is_initialized() {
            return;
        }

        self.batch.flush(&mut self.backend);

        if self.state == FrameState::InFrame {
            self.backend.restore_state();
        } else {
            tracing::warn!("end_frame called without begin_frame");
        }
        self.state = FrameState::Idle;
    }

    /// Run `draw` between `begin_frame` and `end_frame`.
    pub fn render(&mut self, width: u32, height: u32, scale: f32, draw: impl FnOnce(&mut Self)) {
        self.begin_frame(width, height, scale);
        draw(self);
        self.end_frame();
    }

    /// Submit pending vertices now. Returns whether anything was drawn.
    pub fn flush(&mut self) -> bool {
        if !self.is_initialized() {
            return false;
        }
        self.batch.flush(&mut self.backend)
    }

    /// Reserve `count` vertices of `kind` for a custom primitive.
    ///
    /// # Panics
    ///
    /// Panics if the context is uninitialized or if `count` exceeds the
    /// vertex capacity.
    pub fn reserve_vertices(&mut self, kind: PrimitiveKind, count: usize) -> &mut [Vertex] {
        assert!(
            self.is_initialized(),
            "reserve_vertices called on an uninitialized draw context"
        );
        self.batch.reserve(&mut self.backend, kind, count)
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// `color` is `0xAARRGGBB`; text is always drawn opaque. Each byte is one
    /// glyph.
    ///
    /// # Panics
    ///
    /// Panics if the text needs more vertices than the batch holds.
    pub fn draw_text(&mut self, x: f32, y: f32, color: u32, text: &str) {
        if !self.is_initialized() || text.is_empty() {
            return;
        }

        profile_scope!("draw_text");
        let out = self
            .batch
            .reserve(&mut self.backend, PrimitiveKind::Triangles, text_vertex_count(text));
        write_text(out, x, y, color, text, &self.glyphs);
    }

    /// Draw a box from `(x0, y0)` to `(x1, y1)`.
    pub fn draw_box(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: u32, style: BoxStyle) {
        if !self.is_initialized() {
            return;
        }

        let out = self
            .batch
            .reserve(&mut self.backend, PrimitiveKind::Triangles, QUAD_VERTICES);
        write_box(out, x0, y0, x1, y1, color, style);
    }

    /// Draw connected line segments through `points`.
    ///
    /// `color` is `0xAARRGGBB` and keeps its alpha. Fewer than two points
    /// draw nothing.
    pub fn draw_line_strip(&mut self, points: &[Vec2], color: u32) {
        let count = line_strip_vertex_count(points.len());
        if !self.is_initialized() || count == 0 {
            return;
        }

        let out = self.batch.reserve(&mut self.backend, PrimitiveKind::Lines, count);
        write_line_strip(out, points, color);
    }

    /// Counters for the current frame.
    pub fn stats(&self) -> BatchStats {
        self.batch.stats()
    }

    /// The pending batch.
    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// The decoded font atlas, or `None` if setup failed.
    pub fn atlas(&self) -> Option<&FontAtlas> {
        self.atlas.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Tear down the context and hand back the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: DrawBackend> std::fmt::Debug for DrawContext<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawContext")
            .field("label", &self.label)
            .field("state", &self.state)
            .field("batch", &self.batch)
            .finish_non_exhaustive()
    }
}
