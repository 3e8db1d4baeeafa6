use thiserror::Error;

/// Shader stage kind, used for labeling diagnostics.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Compile/link failure carrying the validator's diagnostic text.
///
/// Any variant is fatal to the session: there is no degraded rendering mode,
/// the caller is expected to log the diagnostic and stop.
#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("{stage} shader compilation failed: {message}")]
    Compile { stage: ShaderStage, message: String },

    #[error("pipeline link failed: {message}")]
    Link { message: String },
}

/// Compiles WGSL source into a shader module.
///
/// On validation failure the partially created module is discarded and the
/// diagnostic is returned (and logged); no retry occurs. The caller must not
/// use the module handle unless this returns `Ok`.
pub fn compile(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
    label: &str,
) -> Result<wgpu::ShaderModule, ShaderError> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    // Module creation is synchronous on native backends; the scope resolves
    // immediately under pollster.
    if let Some(err) = pollster::block_on(error_scope.pop()) {
        let message = err.to_string();
        log::error!("{stage} shader '{label}' failed to compile: {message}");
        drop(module);
        return Err(ShaderError::Compile { stage, message });
    }

    Ok(module)
}

/// Pipeline description for [`link`].
///
/// The wgpu analogue of program linking: both compiled stages are attached to
/// one render pipeline together with the fixed-function state the draw needs.
pub struct ProgramDesc<'a> {
    pub label: &'a str,
    pub vertex: &'a wgpu::ShaderModule,
    pub fragment: &'a wgpu::ShaderModule,
    pub layout: &'a wgpu::PipelineLayout,
    pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
    pub color_format: wgpu::TextureFormat,
    pub depth_format: Option<wgpu::TextureFormat>,
    pub topology: wgpu::PrimitiveTopology,
}

/// Links compiled vertex + fragment stages into a render pipeline.
///
/// On validation failure (e.g. stage interface mismatch) the diagnostic is
/// logged and returned; the pipeline handle is never handed out.
pub fn link(
    device: &wgpu::Device,
    desc: ProgramDesc<'_>,
) -> Result<wgpu::RenderPipeline, ShaderError> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(desc.layout),

        vertex: wgpu::VertexState {
            module: desc.vertex,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: desc.vertex_buffers,
        },

        fragment: Some(wgpu::FragmentState {
            module: desc.fragment,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: desc.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: desc.depth_format.map(|format| wgpu::DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),

        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(error_scope.pop()) {
        let message = err.to_string();
        log::error!("pipeline '{}' failed to link: {message}", desc.label);
        drop(pipeline);
        return Err(ShaderError::Link { message });
    }

    Ok(pipeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_display_names_stage_and_diagnostic() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Vertex,
            message: "expected ';'".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("vertex"));
        assert!(text.contains("expected ';'"));
    }

    #[test]
    fn link_error_display_carries_diagnostic() {
        let err = ShaderError::Link {
            message: "entry point not found".to_string(),
        };
        assert!(err.to_string().contains("entry point not found"));
    }
}
