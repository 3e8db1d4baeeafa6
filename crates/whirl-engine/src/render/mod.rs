//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipeline, buffers) and issue wgpu
//! commands against a [`RenderTarget`] prepared by the frame loop. The color
//! and depth attachments arrive already cleared; a renderer's pass loads them
//! and draws on top.

mod ctx;
mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use quad::{QUAD_COLORS, QUAD_POSITIONS, QuadRenderer};
