//! Incremental recording of drawn vertices into per-topology segments.
//!
//! All vertices live in one fixed-capacity vertex buffer (and a parallel color buffer). Vertices
//! recorded under earlier topologies are *committed*: they have been uploaded already and are drawn
//! as a list of [`Segment`]s at cumulative offsets. Vertices recorded since the last topology change
//! are *pending*: they are re-uploaded starting at the committed offset and drawn as one extra run.
//!
//! The first 3 vertices in the buffer are the color swatch, a small triangle in the top left corner
//! that previews the active color.

use std::mem;

use vecdraw_linalg::{vec2, Flatten, Flattened, Vec2f, Vec4f};

use crate::topology::Topology;

/// Device coordinates of the color swatch triangle.
pub const SWATCH: [Vec2f; 3] = [vec2(-1.0, 1.0), vec2(-1.0, 0.9), vec2(-0.9, 1.0)];

/// Number of vertices the default vertex buffer has room for.
pub const DEFAULT_CAPACITY: usize = 100_000;

/// A run of committed vertices drawn with a single topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub count: usize,
    pub topology: Topology,
}

/// A draw call against the vertex buffer: `count` vertices starting at vertex index `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub topology: Topology,
    pub first: usize,
    pub count: usize,
}

/// Packed pending vertex data, along with the byte offsets it has to be written at.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub vertex_offset: usize,
    pub vertices: Flattened,
    pub color_offset: usize,
    pub colors: Flattened,
}

/// Records clicked vertices into a fixed-capacity vertex buffer, grouped into [`Segment`]s by the
/// topology they were drawn with.
///
/// Vertices appended since the last topology change form the pending run. Changing the topology
/// trims the pending run to whole primitives and commits what is left as a new segment. The first
/// segment is always the color swatch.
#[derive(Debug, Clone)]
pub struct Recorder {
    mode: Topology,
    vertices: Vec<Vec2f>,
    colors: Vec<Vec4f>,
    /// Number of vertices in the buffer, committed and pending.
    total: usize,
    /// Number of vertices in the buffer at the last topology change.
    committed: usize,
    segments: Vec<Segment>,
    capacity: usize,
}

impl Recorder {
    /// Creates a recorder for a vertex buffer with room for [`DEFAULT_CAPACITY`] vertices.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a recorder for a vertex buffer with room for `capacity` vertices.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is too small to hold the color swatch.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity >= SWATCH.len(),
            "vertex capacity {capacity} cannot hold the color swatch"
        );
        let mut this = Self {
            mode: Topology::Points,
            vertices: Vec::new(),
            colors: Vec::new(),
            total: 0,
            committed: 0,
            segments: Vec::new(),
            capacity,
        };
        this.reset();
        this
    }

    /// Returns to the initial state: only the color swatch is committed, nothing is pending, and
    /// the topology is [`Topology::Points`].
    pub fn reset(&mut self) {
        self.mode = Topology::Points;
        self.vertices.clear();
        self.colors.clear();
        self.total = SWATCH.len();
        self.committed = SWATCH.len();
        self.segments.clear();
        self.segments.push(Segment {
            count: SWATCH.len(),
            topology: Topology::Triangles,
        });
    }

    /// Records a vertex under the current topology.
    ///
    /// Returns `false` and records nothing if the vertex buffer is full.
    pub fn append(&mut self, vertex: Vec2f, color: Vec4f) -> bool {
        if self.total >= self.capacity {
            log::warn!(
                "vertex buffer is full ({} vertices), ignoring vertex at {}",
                self.capacity,
                vertex
            );
            return false;
        }

        self.vertices.push(vertex);
        self.colors.push(color);
        self.total += 1;
        true
    }

    /// Commits the pending run and switches to a new topology.
    ///
    /// Trailing vertices that do not form a complete primitive under the *current* topology are
    /// discarded (see [`Topology::retained`]); their buffer space is reused by the next run. A
    /// [`Segment`] is only recorded if at least one complete primitive remains.
    pub fn change_mode(&mut self, mode: Topology) {
        let pending = self.pending_len();
        let kept = self.mode.retained(pending);
        let dropped = pending - kept;

        if dropped != 0 {
            log::debug!(
                "discarding {dropped} trailing vertices that do not form a complete {} primitive",
                self.mode
            );
            self.total -= dropped;
        }
        if kept != 0 {
            log::debug!("committing {kept} vertices as {}", self.mode);
            self.segments.push(Segment {
                count: kept,
                topology: self.mode,
            });
        }

        self.vertices.clear();
        self.colors.clear();
        self.committed = self.total;
        self.mode = mode;
    }

    /// Returns the current topology.
    pub fn mode(&self) -> Topology {
        self.mode
    }

    /// Returns the committed segments, starting with the swatch.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the vertices recorded since the last topology change.
    pub fn pending(&self) -> &[Vec2f] {
        &self.vertices
    }

    /// Returns the colors of the [`pending`](Self::pending) vertices.
    pub fn pending_colors(&self) -> &[Vec4f] {
        &self.colors
    }

    pub fn pending_len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of vertices in the buffer (committed plus pending).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of committed vertices, which is also the vertex index the pending run
    /// starts at.
    pub fn committed(&self) -> usize {
        self.committed
    }

    /// Returns the number of vertices the buffer has room for, swatch included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the draw calls needed to render everything: one per committed segment at
    /// cumulative offsets, followed by the pending run under the current topology.
    pub fn draw_list(&self) -> Vec<DrawCall> {
        let mut first = 0;
        let mut calls = Vec::with_capacity(self.segments.len() + 1);
        for seg in &self.segments {
            calls.push(DrawCall {
                topology: seg.topology,
                first,
                count: seg.count,
            });
            first += seg.count;
        }
        debug_assert_eq!(first, self.committed);

        calls.push(DrawCall {
            topology: self.mode,
            first: self.committed,
            count: self.pending_len(),
        });
        calls
    }

    /// Packs the pending vertices and colors for upload at the committed offset.
    pub fn flatten_for_upload(&self) -> Upload {
        Upload {
            vertex_offset: self.committed * mem::size_of::<Vec2f>(),
            vertices: self.vertices.flatten(),
            color_offset: self.committed * mem::size_of::<Vec4f>(),
            colors: self.colors.flatten(),
        }
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}
