//! Animated film-grain overlay, a single fullscreen pass.

use super::{clear_color_attachment, uniform_bind_group, Gpu, NOISE_WGSL};
use web_sys as web;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    resolution: [f32; 2],
    time: f32,
    intensity: f32,
    contrast: f32,
    _pad: [f32; 3],
}

pub struct NoiseScene {
    canvas: web::HtmlCanvasElement,
    gpu: Gpu,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    intensity: f32,
    contrast: f32,
}

impl NoiseScene {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        intensity: f32,
        contrast: f32,
    ) -> anyhow::Result<Self> {
        let gpu = Gpu::new(&canvas).await?;
        let shader = gpu
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("noise shader"),
                source: wgpu::ShaderSource::Wgsl(NOISE_WGSL.into()),
            });
        let uniform_buffer = gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("noise uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let (bgl, bind_group) = uniform_bind_group(&gpu.device, &uniform_buffer);
        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("noise pl"),
                bind_group_layouts: &[&bgl],
                push_constant_ranges: &[],
            });
        let pipeline = gpu
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("noise pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: gpu.format,
                        blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            });

        Ok(Self {
            canvas,
            gpu,
            pipeline,
            uniform_buffer,
            bind_group,
            intensity: intensity.clamp(0.0, 1.0),
            contrast: contrast.clamp(0.1, 4.0),
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.clamp(0.0, 1.0);
    }

    pub fn set_contrast(&mut self, contrast: f32) {
        self.contrast = contrast.clamp(0.1, 4.0);
    }

    pub fn render(&mut self, time_sec: f32) -> Result<(), wgpu::SurfaceError> {
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let frame = self.gpu.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.gpu.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                resolution: [self.gpu.width as f32, self.gpu.height as f32],
                time: time_sec,
                intensity: self.intensity,
                contrast: self.contrast,
                _pad: [0.0; 3],
            }),
        );
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("noise encoder"),
            });
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("noise pass"),
                color_attachments: &[clear_color_attachment(&view)],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.draw(0..3, 0..1);
        }
        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
