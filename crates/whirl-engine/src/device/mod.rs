//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - owning the depth buffer matched to the surface size
//! - acquiring frames and providing encoders/views for rendering

mod gpu;

pub use gpu::{DEPTH_FORMAT, Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
