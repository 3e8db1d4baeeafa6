//! Shader compilation and pipeline linking.
//!
//! wgpu reports shader/pipeline validation failures through error scopes
//! rather than return values. This module wraps module and pipeline creation
//! in validation scopes and converts captured errors into a structured
//! [`ShaderError`], so callers get an ordinary `Result` and can decide how to
//! surface the diagnostic.

mod compile;

pub use compile::{ProgramDesc, ShaderError, ShaderStage, compile, link};
