//! The seam between the drawing session and whatever actually puts pixels on screen.

use std::mem;

use anyhow::{bail, Context};
use vecdraw_linalg::{Vec2f, Vec4f};

use crate::{recorder::DrawCall, topology::Topology};

/// A rendering backend with a fixed-capacity vertex buffer and a parallel color buffer.
///
/// Both buffers are allocated once and written in place at byte offsets; they are never grown.
pub trait RenderBackend {
    /// Clears the render target.
    fn clear(&mut self) -> anyhow::Result<()>;

    /// Writes packed vertex positions (2 `f32`s per vertex) to the vertex buffer at `offset` bytes.
    fn write_vertices(&mut self, offset: usize, bytes: &[u8]) -> anyhow::Result<()>;

    /// Writes packed RGBA colors (4 `f32`s per vertex) to the color buffer at `offset` bytes.
    fn write_colors(&mut self, offset: usize, bytes: &[u8]) -> anyhow::Result<()>;

    /// Draws `count` vertices starting at vertex index `first`, assembled according to `topology`.
    fn draw(&mut self, topology: Topology, first: usize, count: usize) -> anyhow::Result<()>;
}

/// A [`RenderBackend`] that keeps its buffers in memory and records the draw calls it receives.
///
/// Used for replaying sessions without a window, and in tests.
pub struct HeadlessBackend {
    vertices: Box<[u8]>,
    colors: Box<[u8]>,
    draws: Vec<DrawCall>,
    frames: usize,
}

impl HeadlessBackend {
    /// Allocates buffers with room for `capacity` vertices.
    ///
    /// Fails if the buffers would not fit into memory.
    pub fn new(capacity: usize) -> anyhow::Result<Self> {
        Ok(Self {
            vertices: alloc(capacity, mem::size_of::<Vec2f>(), "vertex")?,
            colors: alloc(capacity, mem::size_of::<Vec4f>(), "color")?,
            draws: Vec::new(),
            frames: 0,
        })
    }

    /// Returns the number of vertices the buffers have room for.
    pub fn capacity(&self) -> usize {
        self.vertices.len() / mem::size_of::<Vec2f>()
    }

    /// Returns the draw calls issued since the last [`RenderBackend::clear`].
    pub fn draws(&self) -> &[DrawCall] {
        &self.draws
    }

    /// Returns the number of times the render target was cleared.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Reads back the vertex position stored at vertex index `index`.
    pub fn vertex(&self, index: usize) -> Option<Vec2f> {
        read(&self.vertices, index)
    }

    /// Reads back the color stored at vertex index `index`.
    pub fn color(&self, index: usize) -> Option<Vec4f> {
        read(&self.colors, index)
    }
}

fn alloc(capacity: usize, stride: usize, what: &str) -> anyhow::Result<Box<[u8]>> {
    let Some(len) = capacity.checked_mul(stride) else {
        bail!("{what} buffer for {capacity} vertices is too large");
    };
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .with_context(|| format!("failed to allocate {len}-byte {what} buffer"))?;
    buf.resize(len, 0);
    Ok(buf.into_boxed_slice())
}

fn read<T: bytemuck::Pod>(buf: &[u8], index: usize) -> Option<T> {
    let size = mem::size_of::<T>();
    let start = index.checked_mul(size)?;
    let bytes = buf.get(start..start.checked_add(size)?)?;
    Some(bytemuck::pod_read_unaligned(bytes))
}

fn write(buf: &mut [u8], offset: usize, bytes: &[u8], what: &str) -> anyhow::Result<()> {
    let end = match offset.checked_add(bytes.len()) {
        Some(end) if end <= buf.len() => end,
        _ => bail!(
            "{} bytes written at offset {} exceed the {}-byte {} buffer",
            bytes.len(),
            offset,
            buf.len(),
            what,
        ),
    };
    buf[offset..end].copy_from_slice(bytes);
    Ok(())
}

impl RenderBackend for HeadlessBackend {
    fn clear(&mut self) -> anyhow::Result<()> {
        self.draws.clear();
        self.frames += 1;
        Ok(())
    }

    fn write_vertices(&mut self, offset: usize, bytes: &[u8]) -> anyhow::Result<()> {
        write(&mut self.vertices, offset, bytes, "vertex")
    }

    fn write_colors(&mut self, offset: usize, bytes: &[u8]) -> anyhow::Result<()> {
        write(&mut self.colors, offset, bytes, "color")
    }

    fn draw(&mut self, topology: Topology, first: usize, count: usize) -> anyhow::Result<()> {
        if first.checked_add(count).map_or(true, |end| end > self.capacity()) {
            bail!(
                "draw of {count} vertices at {first} exceeds buffer capacity of {}",
                self.capacity()
            );
        }
        self.draws.push(DrawCall {
            topology,
            first,
            count,
        });
        Ok(())
    }
}
