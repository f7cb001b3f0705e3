//! The drawing session: input handlers and rendering.

use vecdraw_linalg::{vec2, Flatten, Vec2f};

use crate::{
    backend::RenderBackend,
    color::Color,
    recorder::{Recorder, SWATCH},
    topology::Topology,
};

/// All state of an interactive drawing, mutated by one input handler at a time.
pub struct Session {
    recorder: Recorder,
    color: Color,
    /// Side length of the (square) canvas in pixels.
    canvas_side: u32,
    /// The swatch has to be (re-)uploaded before the next frame.
    swatch_dirty: bool,
}

impl Session {
    /// Creates a session drawing into buffers with room for `capacity` vertices.
    ///
    /// The canvas starts out as the largest square fitting into `width`×`height`.
    pub fn new(capacity: usize, (width, height): (u32, u32)) -> Self {
        let mut this = Self {
            recorder: Recorder::with_capacity(capacity),
            color: Color::default(),
            canvas_side: 0,
            swatch_dirty: true,
        };
        this.resize(width, height);
        this
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn mode(&self) -> Topology {
        self.recorder.mode()
    }

    pub fn canvas_side(&self) -> u32 {
        self.canvas_side
    }

    /// Converts a pixel position on the canvas to device coordinates.
    ///
    /// The canvas' top left corner maps to `(-1, 1)`, the bottom right corner to `(1, -1)`.
    pub fn canvas_to_device(&self, x: f32, y: f32) -> Vec2f {
        let side = self.canvas_side as f32;
        vec2(2.0 * (x / side) - 1.0, 1.0 - 2.0 * (y / side))
    }

    /// Records a vertex at the clicked canvas position, in the current color.
    pub fn click(&mut self, x: f32, y: f32) {
        if self.canvas_side == 0 {
            log::warn!("ignoring click at ({x}, {y}) on an empty canvas");
            return;
        }

        let pos = self.canvas_to_device(x, y);
        log::trace!("click at ({x}, {y}) -> {pos}");
        self.recorder.append(pos, self.color.to_rgba());
    }

    /// Resizes the canvas to the largest square fitting into `width`×`height`.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas_side = width.min(height);
        log::debug!("canvas is now {0}x{0}", self.canvas_side);
    }

    /// Commits the vertices drawn so far and continues drawing with `mode`.
    pub fn select_mode(&mut self, mode: Topology) {
        self.recorder.change_mode(mode);
    }

    /// Changes the color used for new vertices and shown by the swatch.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.swatch_dirty = true;
    }

    pub fn randomize_color(&mut self, rng: &mut fastrand::Rng) {
        self.set_color(Color::random(rng));
    }

    /// Erases the drawing, and switches back to drawing red points.
    pub fn reset(&mut self) {
        self.recorder.reset();
        self.set_color(Color::RED);
    }

    /// Draws everything recorded so far.
    ///
    /// Committed vertices are already in the backend's buffers and are only drawn. The pending run
    /// is rewritten at the committed offset every frame.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> anyhow::Result<()> {
        if self.swatch_dirty {
            let rgba = self.color.to_rgba();
            log::trace!("uploading swatch in {:?}", self.color);
            backend.write_vertices(0, SWATCH.flatten().as_bytes())?;
            backend.write_colors(0, [rgba; 3].flatten().as_bytes())?;
            self.swatch_dirty = false;
        }

        backend.clear()?;

        let upload = self.recorder.flatten_for_upload();
        log::trace!(
            "uploading {} pending vertices at byte offset {}",
            self.recorder.pending_len(),
            upload.vertex_offset
        );
        backend.write_vertices(upload.vertex_offset, upload.vertices.as_bytes())?;
        backend.write_colors(upload.color_offset, upload.colors.as_bytes())?;

        for call in self.recorder.draw_list() {
            backend.draw(call.topology, call.first, call.count)?;
        }

        Ok(())
    }
}
