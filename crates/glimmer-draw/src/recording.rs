//! A [`DrawBackend`] that records calls instead of talking to a GPU.
//!
//! The backend is moved into the draw context, so the recorded calls live
//! behind a shared [`Recorder`] handle that stays with the caller:
//!
//! ```
//! use glimmer_draw::{DrawConfig, DrawContext, RecordingBackend};
//!
//! let backend = RecordingBackend::new();
//! let recorder = backend.recorder();
//! let mut ctx = DrawContext::new(backend, DrawConfig::default());
//!
//! ctx.begin_frame(800, 600, 1.0);
//! ctx.draw_text(0.0, 0.0, 0xffffff, "Hi");
//! ctx.end_frame();
//!
//! assert_eq!(recorder.flush_count(), 1);
//! assert_eq!(recorder.draw_count(), 1);
//! ```

use std::sync::Arc;

use glam::Mat4;
use parking_lot::Mutex;

use crate::backend::DrawBackend;
use crate::error::{DrawError, DrawResult};
use crate::vertex::{PrimitiveKind, Vertex};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCall {
    CreateFontTexture {
        width: u32,
        height: u32,
    },
    SetProjection(Mat4),
    SaveState,
    RestoreState,
    Upload {
        vertex_count: usize,
    },
    Draw {
        kind: PrimitiveKind,
        vertex_count: u32,
        first_vertex: u32,
    },
}

#[derive(Debug, Default)]
struct Recording {
    calls: Vec<BackendCall>,
    uploads: Vec<Vec<Vertex>>,
    font_texels: Option<Vec<u8>>,
}

/// Shared view of everything a [`RecordingBackend`] has seen.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    inner: Arc<Mutex<Recording>>,
}

impl Recorder {
    /// A copy of all recorded calls, oldest first.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.inner.lock().calls.clone()
    }

    /// The vertex ranges passed to each upload, oldest first.
    pub fn uploads(&self) -> Vec<Vec<Vertex>> {
        self.inner.lock().uploads.clone()
    }

    /// The vertices of the most recent upload.
    pub fn last_upload(&self) -> Option<Vec<Vertex>> {
        self.inner.lock().uploads.last().cloned()
    }

    /// RGBA8 texels passed to `create_font_texture`, if it was called.
    pub fn font_texels(&self) -> Option<Vec<u8>> {
        self.inner.lock().font_texels.clone()
    }

    /// Number of flushes that reached the backend.
    pub fn flush_count(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::Upload { .. }))
    }

    /// Number of draw calls issued.
    pub fn draw_count(&self) -> usize {
        self.count(|call| matches!(call, BackendCall::Draw { .. }))
    }

    /// The `(kind, vertex_count, first_vertex)` of every draw call.
    pub fn draws(&self) -> Vec<(PrimitiveKind, u32, u32)> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|call| match *call {
                BackendCall::Draw {
                    kind,
                    vertex_count,
                    first_vertex,
                } => Some((kind, vertex_count, first_vertex)),
                _ => None,
            })
            .collect()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear(&self) {
        let mut recording = self.inner.lock();
        recording.calls.clear();
        recording.uploads.clear();
    }

    fn count(&self, predicate: impl Fn(&BackendCall) -> bool) -> usize {
        self.inner.lock().calls.iter().filter(|call| predicate(call)).count()
    }

    fn push(&self, call: BackendCall) {
        self.inner.lock().calls.push(call);
    }
}

/// Backend that records every call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    recorder: Recorder,
    fail_texture: Option<String>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose font texture creation fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            recorder: Recorder::default(),
            fail_texture: Some(reason.into()),
        }
    }

    /// A handle to the recorded calls that outlives moving the backend.
    pub fn recorder(&self) -> Recorder {
        self.recorder.clone()
    }
}

impl DrawBackend for RecordingBackend {
    fn create_font_texture(&mut self, width: u32, height: u32, texels: &[u8]) -> DrawResult<()> {
        if let Some(reason) = &self.fail_texture {
            return Err(DrawError::TextureCreation(reason.clone()));
        }

        let mut recording = self.recorder.inner.lock();
        recording.calls.push(BackendCall::CreateFontTexture { width, height });
        recording.font_texels = Some(texels.to_vec());
        Ok(())
    }

    fn set_projection(&mut self, projection: &Mat4) {
        self.recorder.push(BackendCall::SetProjection(*projection));
    }

    fn save_state(&mut self) {
        self.recorder.push(BackendCall::SaveState);
    }

    fn restore_state(&mut self) {
        self.recorder.push(BackendCall::RestoreState);
    }

    fn upload_vertices(&mut self, vertices: &[Vertex]) {
        let mut recording = self.recorder.inner.lock();
        recording.calls.push(BackendCall::Upload {
            vertex_count: vertices.len(),
        });
        recording.uploads.push(vertices.to_vec());
    }

    fn draw(&mut self, kind: PrimitiveKind, vertex_count: u32, first_vertex: u32) {
        self.recorder.push(BackendCall::Draw {
            kind,
            vertex_count,
            first_vertex,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_survives_move() {
        let backend = RecordingBackend::new();
        let recorder = backend.recorder();

        let mut boxed: Box<dyn DrawBackend> = Box::new(backend);
        boxed.save_state();
        boxed.upload_vertices(&[Vertex::default(); 3]);
        boxed.draw(PrimitiveKind::Lines, 2, 0);
        boxed.restore_state();

        assert_eq!(recorder.flush_count(), 1);
        assert_eq!(recorder.draws(), vec![(PrimitiveKind::Lines, 2, 0)]);
        assert_eq!(recorder.last_upload().map(|v| v.len()), Some(3));
    }

    #[test]
    fn test_failing_backend() {
        let mut backend = RecordingBackend::failing("no device");
        let err = backend.create_font_texture(8, 1, &[0; 32]).unwrap_err();
        assert_eq!(err, DrawError::TextureCreation("no device".into()));
        assert!(backend.recorder().calls().is_empty());
    }

    #[test]
    fn test_clear_calls() {
        let mut backend = RecordingBackend::new();
        let recorder = backend.recorder();
        backend.save_state();
        assert_eq!(recorder.calls().len(), 1);

        recorder.clear();
        assert!(recorder.calls().is_empty());
    }
}
