//! Window + event loop runtime (winit).

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
