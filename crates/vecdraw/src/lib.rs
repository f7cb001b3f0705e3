//! Incremental vector drawing on top of a fixed-capacity vertex buffer.
//!
//! Clicks add vertices under the currently selected primitive [`Topology`]. Changing the topology
//! commits the vertices drawn so far as a [`Segment`], so that they never have to be uploaded again;
//! only the vertices added since the last change are rewritten on every frame.
//!
//! # Environment Variables
//!
//! * `VECDRAW_BUFFER_CAPACITY`: Number of vertices the vertex and color buffers have room for
//!   (default: 100000). Vertices clicked once the buffer is full are ignored.
//! * `VECDRAW_CANVAS_SIZE`: Initial window size as `WIDTHxHEIGHT` (default: `512x512`). The canvas
//!   is the largest square fitting into the window.
//!
//! [`Topology`]: topology::Topology
//! [`Segment`]: recorder::Segment

use log::LevelFilter;

pub mod backend;
pub mod color;
pub mod config;
pub mod recorder;
pub mod script;
pub mod session;
pub mod topology;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and vecdraw will log at *debug* level. `RUST_LOG` can be used to override
/// this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
