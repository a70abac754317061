//! Draw context configuration.

use crate::batch::{DEFAULT_COMMAND_CAPACITY, DEFAULT_VERTEX_CAPACITY};
use crate::font::FontData;

/// Configuration for a [`DrawContext`](crate::DrawContext).
///
/// Capacities are fixed for the lifetime of the context.
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// Vertices buffered before a flush. Also the largest single primitive.
    pub vertex_capacity: usize,
    /// Draw commands buffered before a flush.
    pub command_capacity: usize,
    /// Font used for text and for the sentinel texel.
    pub font: FontData,
    /// Optional label for logging.
    pub label: Option<&'static str>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: DEFAULT_VERTEX_CAPACITY,
            command_capacity: DEFAULT_COMMAND_CAPACITY,
            font: FontData::builtin(),
            label: None,
        }
    }
}

impl DrawConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    pub fn command_capacity(mut self, capacity: usize) -> Self {
        self.command_capacity = capacity;
        self
    }

    pub fn font(mut self, font: FontData) -> Self {
        self.font = font;
        self
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }
}
