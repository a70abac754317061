//! Glimmer Draw
//!
//! Immediate-mode 2D drawing for the Glimmer profiling overlay.
//!
//! Every frame the overlay emits a few thousand tiny primitives: text, boxes
//! and polylines. [`DrawContext`] packs them into one fixed-size vertex buffer
//! and merges consecutive primitives of the same kind into a single draw call,
//! so a whole frame usually costs a handful of draws.
//!
//! Rendering goes through the [`DrawBackend`] trait. [`WgpuBackend`] draws
//! with wgpu; [`RecordingBackend`] records calls for tests and headless use.
//!
//! ```
//! use glimmer_draw::{BoxStyle, DrawConfig, DrawContext, PrimitiveKind, RecordingBackend, Vec2};
//!
//! let backend = RecordingBackend::new();
//! let recorder = backend.recorder();
//! let mut ctx = DrawContext::new(backend, DrawConfig::default());
//!
//! ctx.render(800, 600, 1.0, |ctx| {
//!     ctx.draw_text(10.0, 10.0, 0xffffff, "Hi");
//!     ctx.draw_box(0.0, 0.0, 100.0, 20.0, 0x404040, BoxStyle::Flat);
//!     ctx.draw_line_strip(&[Vec2::new(0.0, 30.0), Vec2::new(50.0, 40.0)], 0xffff0000);
//! });
//!
//! assert_eq!(
//!     recorder.draws(),
//!     vec![(PrimitiveKind::Triangles, 18, 0), (PrimitiveKind::Lines, 2, 18)]
//! );
//! ```

pub mod backend;
pub mod batch;
pub mod color;
pub mod config;
pub mod context;
pub mod error;
pub mod font;
mod font_data;
pub mod frame;
pub mod graphics;
pub mod primitives;
pub mod recording;
pub mod vertex;
pub mod wgpu_backend;

pub use backend::DrawBackend;
pub use batch::{Batch, BatchStats, DEFAULT_COMMAND_CAPACITY, DEFAULT_VERTEX_CAPACITY};
pub use config::DrawConfig;
pub use context::DrawContext;
pub use error::{DrawError, DrawResult};
pub use font::{FontAtlas, FontData, FontMetrics, GlyphTable};
pub use frame::{FrameState, overlay_projection};
pub use graphics::{GraphicsContext, GraphicsContextDescriptor, GraphicsError};
pub use primitives::BoxStyle;
pub use recording::{BackendCall, Recorder, RecordingBackend};
pub use vertex::{DrawCommand, PrimitiveKind, Vertex};
pub use wgpu_backend::WgpuBackend;

pub use glam::{Mat4, Vec2};
pub use wgpu;
