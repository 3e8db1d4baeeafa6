//! Whirl engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the demo binary:
//! device/surface management, shader compilation, the quad renderer, frame
//! timing, and the window runtime.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod camera;
pub mod shader;
pub mod render;
