//! Rotating-quad demo: one shader pair, two static vertex buffers, one
//! perspective-projected quad spinning at 1 rad/s.

use anyhow::Result;

use whirl_engine::core::{App, AppControl, FrameCtx};
use whirl_engine::device::GpuInit;
use whirl_engine::logging::{LoggingConfig, init_logging};
use whirl_engine::render::QuadRenderer;
use whirl_engine::window::{Runtime, RuntimeConfig};

/// Session state: the renderer's cached GPU objects plus the accumulated
/// rotation angle.
///
/// The angle advances by the wall-clock frame delta (1 radian per second) and
/// is deliberately never wrapped; it only ever feeds a periodic rotation, so
/// unbounded growth is harmless.
struct QuadApp {
    renderer: QuadRenderer,
    rotation: f32,
}

impl App for QuadApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let dt = ctx.time.dt;
        let rotation = self.rotation;
        let renderer = &mut self.renderer;

        // Shader compile/link failure surfaces here on the first frame; the
        // context logs the diagnostic and the session ends.
        let control = ctx.render(wgpu::Color::BLACK, |rctx, target| {
            renderer.render(rctx, target, rotation).map_err(Into::into)
        });

        self.rotation += dt;
        control
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let app = QuadApp {
        renderer: QuadRenderer::new(),
        rotation: 0.0,
    };

    Runtime::run(
        RuntimeConfig {
            title: "whirl — rotating quad".to_string(),
            ..Default::default()
        },
        GpuInit::default(),
        app,
    )
}
