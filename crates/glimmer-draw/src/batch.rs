//! Fixed-capacity vertex and command batch with run-length merging.
//!
//! Every primitive reserves its vertices here. Adjacent reservations of the
//! same [`PrimitiveKind`] extend the last command instead of starting a new
//! one, so the number of draw calls per flush equals the number of kind
//! changes rather than the number of primitives. When either buffer would
//! overflow the batch is flushed to the backend first.

use glimmer_core::profiling::profile_scope;

use crate::backend::DrawBackend;
use crate::vertex::{DrawCommand, PrimitiveKind, Vertex};

/// Default number of vertices a batch holds before it flushes.
pub const DEFAULT_VERTEX_CAPACITY: usize = 16384;
/// Default number of commands a batch holds before it flushes.
pub const DEFAULT_COMMAND_CAPACITY: usize = 32;

/// Counters for the current frame.
///
/// The counters saturate at `u32::MAX` instead of wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Flushes that reached the backend (empty flushes are not counted).
    pub flushes: u32,
    /// Draw calls issued.
    pub draw_calls: u32,
    /// Vertices uploaded across all flushes.
    pub vertices_uploaded: u32,
    /// Largest number of commands pending at once.
    pub peak_commands: u32,
}

/// Pending vertices and draw commands that have not been uploaded yet.
pub struct Batch {
    vertices: Box<[Vertex]>,
    commands: Vec<DrawCommand>,
    command_capacity: usize,
    vertex_cursor: usize,
    stats: BatchStats,
}

impl Batch {
    /// Create a batch with the given capacities.
    ///
    /// # Panics
    ///
    /// Panics if either capacity is zero, or if `vertex_capacity` does not fit
    /// in a `u32` vertex count.
    pub fn new(vertex_capacity: usize, command_capacity: usize) -> Self {
        assert!(vertex_capacity > 0, "vertex capacity must be non-zero");
        assert!(command_capacity > 0, "command capacity must be non-zero");
        assert!(
            u32::try_from(vertex_capacity).is_ok(),
            "vertex capacity {vertex_capacity} exceeds u32 range"
        );

        Self {
            vertices: vec![Vertex::default(); vertex_capacity].into_boxed_slice(),
            commands: Vec::with_capacity(command_capacity),
            command_capacity,
            vertex_cursor: 0,
            stats: BatchStats::default(),
        }
    }

    pub fn vertex_capacity(&self) -> usize {
        self.vertices.len()
    }

    pub fn command_capacity(&self) -> usize {
        self.command_capacity
    }

    /// Number of vertices waiting for the next flush.
    pub fn pending_vertices(&self) -> usize {
        self.vertex_cursor
    }

    /// Number of commands waiting for the next flush.
    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// The pending vertices in submission order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices[..self.vertex_cursor]
    }

    /// The pending commands in submission order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_cursor == 0
    }

    pub fn stats(&self) -> BatchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = BatchStats::default();
    }

    /// Drop everything pending without drawing it.
    ///
    /// Returns the number of vertices discarded.
    pub fn clear(&mut self) -> usize {
        let discarded = self.vertex_cursor;
        self.vertex_cursor = 0;
        self.commands.clear();
        discarded
    }

    /// Reserve `count` vertices of `kind` and return them for writing.
    ///
    /// Flushes to `backend` first if the vertices or a new command would not
    /// fit. The returned slice starts at the first reserved vertex and holds
    /// exactly `count` vertices. A zero-sized reservation returns an empty
    /// slice and records no command.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds [`vertex_capacity`](Self::vertex_capacity):
    /// a single primitive is never split across flushes.
    pub fn reserve<B>(&mut self, backend: &mut B, kind: PrimitiveKind, count: usize) -> &mut [Vertex]
    where
        B: DrawBackend + ?Sized,
    {
        assert!(
            count <= self.vertices.len(),
            "primitive needs {count} vertices but the batch only holds {}",
            self.vertices.len()
        );

        if count == 0 {
            let cursor = self.vertex_cursor;
            return &mut self.vertices[cursor..cursor];
        }

        if self.vertex_cursor + count > self.vertices.len() {
            self.flush(backend);
        }

        // `count` fits in u32 because the capacity does.
        let vertex_count = count as u32;
        match self.commands.last_mut() {
            Some(last) if last.kind == kind => last.vertex_count += vertex_count,
            _ => self.push_command(backend, kind, vertex_count),
        }

        let start = self.vertex_cursor;
        self.vertex_cursor += count;
        &mut self.vertices[start..self.vertex_cursor]
    }

    fn push_command<B>(&mut self, backend: &mut B, kind: PrimitiveKind, vertex_count: u32)
    where
        B: DrawBackend + ?Sized,
    {
        if self.commands.len() == self.command_capacity {
            self.flush(backend);
        }
        self.commands.push(DrawCommand::new(kind, vertex_count));
        self.stats.peak_commands = self.stats.peak_commands.max(self.commands.len() as u32);
    }

    /// Upload pending vertices and issue one draw per pending command.
    ///
    /// Does nothing when no vertices are pending. Returns whether anything
    /// was submitted.
    pub fn flush<B>(&mut self, backend: &mut B) -> bool
    where
        B: DrawBackend + ?Sized,
    {
        if self.vertex_cursor == 0 {
            return false;
        }

        profile_scope!("batch_flush");
        tracing::trace!(
            "Flushing {} vertices in {} commands",
            self.vertex_cursor,
            self.commands.len()
        );

        backend.upload_vertices(&self.vertices[..self.vertex_cursor]);

        let mut first_vertex = 0u32;
        for command in &self.commands {
            backend.draw(command.kind, command.vertex_count, first_vertex);
            first_vertex += command.vertex_count;
        }

        // Only `begin_frame` resets these.
        self.stats.flushes = self.stats.flushes.saturating_add(1);
        self.stats.draw_calls = self.stats.draw_calls.saturating_add(self.commands.len() as u32);
        self.stats.vertices_uploaded = self
            .stats
            .vertices_uploaded
            .saturating_add(self.vertex_cursor as u32);

        self.vertex_cursor = 0;
        self.commands.clear();
        true
    }
}

impl Default for Batch {
    fn default() -> Self {
        Self::new(DEFAULT_VERTEX_CAPACITY, DEFAULT_COMMAND_CAPACITY)
    }
}

impl std::fmt::Debug for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Batch")
            .field("vertex_capacity", &self.vertices.len())
            .field("command_capacity", &self.command_capacity)
            .field("pending_vertices", &self.vertex_cursor)
            .field("commands", &self.commands)
            .finish()
    }
}
