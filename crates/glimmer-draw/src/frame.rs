//! Frame projection and lifecycle state.

use glam::Mat4;

/// Orthographic projection for an overlay of `width` x `height` pixels drawn
/// at `scale`.
///
/// Maps `(0, 0)` to the top-left corner and `(width / scale, height / scale)`
/// to the bottom-right, with depth in `-1..1`.
pub fn overlay_projection(width: u32, height: u32, scale: f32) -> Mat4 {
    let right = width as f32 / scale;
    let bottom = height as f32 / scale;
    Mat4::orthographic_rh_gl(0.0, right, bottom, 0.0, -1.0, 1.0)
}

/// Where a [`DrawContext`](crate::DrawContext) is in its frame lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// Backend setup failed; every call is a no-op.
    Uninitialized,
    /// Between frames.
    Idle,
    /// Between `begin_frame` and `end_frame`.
    InFrame,
}
