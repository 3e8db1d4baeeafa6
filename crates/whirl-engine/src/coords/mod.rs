//! Viewport geometry shared between the runtime and renderers.

mod viewport;

pub use viewport::Viewport;
