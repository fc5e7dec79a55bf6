use encase::{ShaderSize, ShaderType, StorageBuffer};
use glam::{Vec2, Vec4};
use tessera_ui::{
    PxSize,
    px::PxPosition,
    renderer::drawer::pipeline::{DrawContext, DrawablePipeline},
    wgpu::{self, include_wgsl, util::DeviceExt},
};

use super::command::{ArcSpec, RingArcCap, RingArcCommand};

#[repr(C)]
#[derive(Copy, Clone, PartialEq, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 2],
}

#[derive(ShaderType, Clone, Copy, Debug, PartialEq)]
struct ArcUniform {
    position: Vec4,
    color: Vec4,
    screen_size: Vec2,
    stroke_width: f32,
    start_angle_degrees: f32,
    sweep_angle_degrees: f32,
    cap: u32,
    _pad: u32,
}

#[derive(PartialEq, ShaderType)]
struct ArcInstances {
    #[shader(size(runtime))]
    instances: Vec<ArcUniform>,
}

// encase prefixes the runtime-sized array with its length.
const INSTANCES_HEADER_BYTES: u64 = 16;

fn instances_byte_size(instance_count: usize) -> u64 {
    INSTANCES_HEADER_BYTES + ArcUniform::SHADER_SIZE.get() * instance_count as u64
}

/// Render pipeline for drawing progress rings as stroked arcs.
///
/// Each [`RingArcCommand`] expands into one shader instance per present arc;
/// all arcs of all rings in a pass share a single instanced draw. The
/// instance storage buffer persists across frames and only grows.
pub struct RingArcPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    quad_vertex_buffer: wgpu::Buffer,
    quad_index_buffer: wgpu::Buffer,
    instance_buffer: Option<wgpu::Buffer>,
    instance_bind_group: Option<wgpu::BindGroup>,
}

impl RingArcPipeline {
    /// Creates the arc pipeline with the provided surface configuration.
    pub fn new(
        gpu: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        pipeline_cache: Option<&wgpu::PipelineCache>,
        sample_count: u32,
    ) -> Self {
        let shader = gpu.create_shader_module(include_wgsl!("ring_arc.wgsl"));

        let bind_group_layout = gpu.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("ring_arc_bind_group_layout"),
        });

        let pipeline_layout = gpu.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Ring Arc Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = gpu.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Ring Arc Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                }],
                compilation_options: Default::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            multiview_mask: None,
            cache: pipeline_cache,
        });

        let quad_vertices = [
            Vertex {
                position: [0.0, 0.0],
            },
            Vertex {
                position: [1.0, 0.0],
            },
            Vertex {
                position: [1.0, 1.0],
            },
            Vertex {
                position: [0.0, 1.0],
            },
        ];
        let quad_vertex_buffer = gpu.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Ring Arc Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let quad_indices: [u16; 6] = [0, 2, 1, 0, 3, 2];
        let quad_index_buffer = gpu.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Ring Arc Quad Index Buffer"),
            contents: bytemuck::cast_slice(&quad_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            pipeline,
            bind_group_layout,
            quad_vertex_buffer,
            quad_index_buffer,
            instance_buffer: None,
            instance_bind_group: None,
        }
    }

    /// Makes sure the instance storage buffer and its bind group hold at
    /// least `byte_size` bytes, reusing the previous allocation when it
    /// fits.
    fn ensure_instance_capacity(&mut self, device: &wgpu::Device, byte_size: u64) {
        let fits = self
            .instance_buffer
            .as_ref()
            .is_some_and(|buffer| buffer.size() >= byte_size);
        if fits {
            return;
        }
        let capacity = byte_size.next_power_of_two();
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Ring Arc Instance Buffer"),
            size: capacity,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        self.instance_bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &self.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("ring_arc_bind_group"),
        }));
        self.instance_buffer = Some(buffer);
    }
}

fn arc_instance(
    arc: &ArcSpec,
    size: PxSize,
    position: PxPosition,
    target_size: PxSize,
) -> ArcUniform {
    ArcUniform {
        position: Vec4::new(
            position.x.raw() as f32,
            position.y.raw() as f32,
            size.width.raw() as f32,
            size.height.raw() as f32,
        ),
        color: Vec4::from_array(arc.color.to_array()),
        screen_size: Vec2::new(target_size.width.to_f32(), target_size.height.to_f32()),
        stroke_width: arc.stroke_width_px,
        start_angle_degrees: arc.start_angle_degrees,
        sweep_angle_degrees: arc.sweep_angle_degrees,
        cap: match arc.cap {
            RingArcCap::Round => 1,
            RingArcCap::Butt => 0,
        },
        _pad: 0,
    }
}

fn build_instances(
    commands: &[(&RingArcCommand, PxSize, PxPosition)],
    target_size: PxSize,
) -> Vec<ArcUniform> {
    let arc_count = commands
        .iter()
        .map(|(command, _, _)| command.arc_count())
        .sum();
    let mut instances = Vec::with_capacity(arc_count);
    for (command, size, position) in commands {
        instances.extend(
            command
                .arcs()
                .map(|arc| arc_instance(arc, *size, *position, target_size)),
        );
    }
    instances
}

impl DrawablePipeline<RingArcCommand> for RingArcPipeline {
    fn draw(&mut self, context: &mut DrawContext<RingArcCommand>) {
        let instances = build_instances(context.commands, context.target_size);
        if instances.is_empty() {
            return;
        }

        let instance_count = instances.len();
        let byte_size = instances_byte_size(instance_count);
        let uniforms = ArcInstances { instances };
        let mut buffer_content = StorageBuffer::new(Vec::<u8>::new());
        buffer_content
            .write(&uniforms)
            .expect("buffer write failed");

        self.ensure_instance_capacity(context.device, byte_size);
        let instance_buffer = self
            .instance_buffer
            .as_ref()
            .expect("instance buffer was just ensured");
        let bind_group = self
            .instance_bind_group
            .as_ref()
            .expect("instance bind group was just ensured");
        context
            .queue
            .write_buffer(instance_buffer, 0, buffer_content.as_ref());

        context.render_pass.set_pipeline(&self.pipeline);
        context.render_pass.set_bind_group(0, bind_group, &[]);
        context
            .render_pass
            .set_vertex_buffer(0, self.quad_vertex_buffer.slice(..));
        context
            .render_pass
            .set_index_buffer(self.quad_index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        context
            .render_pass
            .draw_indexed(0..6, 0, 0..instance_count as u32);
    }
}

#[cfg(test)]
mod tests {
    use tessera_ui::{Color, Px};

    use super::*;

    fn arc(sweep: f32, cap: RingArcCap) -> ArcSpec {
        ArcSpec {
            color: Color::GREEN,
            stroke_width_px: 6.0,
            start_angle_degrees: 270.0,
            sweep_angle_degrees: sweep,
            cap,
        }
    }

    fn place(command: &RingArcCommand) -> (&RingArcCommand, PxSize, PxPosition) {
        (
            command,
            PxSize {
                width: Px(180),
                height: Px(180),
            },
            PxPosition {
                x: Px(10),
                y: Px(20),
            },
        )
    }

    #[test]
    fn test_each_arc_becomes_one_instance() {
        let full = RingArcCommand::new(
            arc(360.0, RingArcCap::Butt),
            arc(120.0, RingArcCap::Round),
            Some(arc(120.0, RingArcCap::Round)),
        );
        let bare = RingArcCommand::new(arc(360.0, RingArcCap::Butt), arc(90.0, RingArcCap::Round), None);
        let target = PxSize {
            width: Px(800),
            height: Px(600),
        };

        let instances = build_instances(&[place(&full), place(&bare)], target);

        assert_eq!(instances.len(), 5);
        let sweeps: Vec<f32> = instances.iter().map(|i| i.sweep_angle_degrees).collect();
        assert_eq!(sweeps, vec![360.0, 120.0, 120.0, 360.0, 90.0]);
        assert_eq!(instances[0].cap, 0);
        assert_eq!(instances[1].cap, 1);
        assert_eq!(instances[0].position, Vec4::new(10.0, 20.0, 180.0, 180.0));
        assert_eq!(instances[0].screen_size, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_byte_size_accounts_for_runtime_array_header() {
        assert_eq!(
            instances_byte_size(3),
            INSTANCES_HEADER_BYTES + ArcUniform::SHADER_SIZE.get() * 3
        );
    }
}
