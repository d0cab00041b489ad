//! WGSL compute pipeline infrastructure
//!
//! Provides pipeline caching and dispatch utilities for the generated
//! prefilter shaders. Modules, pipelines, and bind group layouts are each
//! cached so repeated launches of one kernel configuration compile once.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use wgpu::{
    BindGroup, BindGroupDescriptor, BindGroupEntry, BindGroupLayout, BindGroupLayoutDescriptor,
    BindGroupLayoutEntry, BindingType, Buffer, BufferBindingType, ComputePipeline,
    ComputePipelineDescriptor, Device, PipelineLayoutDescriptor, Queue, ShaderModule,
    ShaderModuleDescriptor, ShaderSource, ShaderStages,
};

use super::cache::SplineKernel;
use crate::error::Result;

/// Workgroup size for compute shaders (matches the generated
/// `@workgroup_size` attribute)
pub const WORKGROUP_SIZE: u32 = 256;

/// Number of workgroups needed to cover a flat launch of `n` workers
pub fn workgroup_count(n: usize) -> u32 {
    (n as u32).div_ceil(WORKGROUP_SIZE)
}

/// Key for bind group layout cache
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutKey {
    /// Number of storage buffers in the layout
    pub num_storage_buffers: u32,
    /// Number of uniform buffers in the layout
    pub num_uniform_buffers: u32,
}

/// Cache for compute pipelines keyed by generated module name
pub struct PipelineCache {
    device: Arc<Device>,
    /// Cached shader modules by module name
    modules: Mutex<HashMap<String, Arc<ShaderModule>>>,
    /// Cached pipelines by (module_name, entry_point)
    pipelines: Mutex<HashMap<(String, String), Arc<ComputePipeline>>>,
    /// Cached bind group layouts by layout key
    layouts: Mutex<HashMap<LayoutKey, Arc<BindGroupLayout>>>,
}

impl PipelineCache {
    /// Create a new pipeline cache
    pub fn new(device: Arc<Device>) -> Self {
        Self {
            device,
            modules: Mutex::new(HashMap::new()),
            pipelines: Mutex::new(HashMap::new()),
            layouts: Mutex::new(HashMap::new()),
        }
    }

    /// The device this cache compiles for
    pub fn device(&self) -> &Arc<Device> {
        &self.device
    }

    /// Get or create a shader module from generated source
    pub fn get_or_create_module(&self, name: &str, source: &str) -> Arc<ShaderModule> {
        let mut modules = self.modules.lock();
        if let Some(module) = modules.get(name) {
            return module.clone();
        }

        let module = self.device.create_shader_module(ShaderModuleDescriptor {
            label: Some(name),
            source: ShaderSource::Wgsl(source.into()),
        });

        let module = Arc::new(module);
        modules.insert(name.to_string(), module.clone());
        module
    }

    /// Get or create a compute pipeline
    pub fn get_or_create_pipeline(
        &self,
        module_name: &str,
        entry_point: &str,
        module: &ShaderModule,
        layout: &BindGroupLayout,
    ) -> Arc<ComputePipeline> {
        let key = (module_name.to_string(), entry_point.to_string());
        let mut pipelines = self.pipelines.lock();

        if let Some(pipeline) = pipelines.get(&key) {
            return pipeline.clone();
        }

        let pipeline_layout = self
            .device
            .create_pipeline_layout(&PipelineLayoutDescriptor {
                label: Some(&format!("{}_layout", module_name)),
                bind_group_layouts: &[layout],
                push_constant_ranges: &[], // Not using push constants
            });

        let pipeline = self
            .device
            .create_compute_pipeline(&ComputePipelineDescriptor {
                label: Some(&format!("{}_{}", module_name, entry_point)),
                layout: Some(&pipeline_layout),
                module,
                entry_point: Some(entry_point),
                compilation_options: Default::default(),
                cache: None,
            });

        let pipeline = Arc::new(pipeline);
        pipelines.insert(key, pipeline.clone());
        pipeline
    }

    /// Get or create a bind group layout for storage + uniform buffers
    pub fn get_or_create_layout(&self, key: LayoutKey) -> Arc<BindGroupLayout> {
        let mut layouts = self.layouts.lock();

        if let Some(layout) = layouts.get(&key) {
            return layout.clone();
        }

        let mut entries = Vec::new();

        // Storage buffers (read-write)
        for i in 0..key.num_storage_buffers {
            entries.push(BindGroupLayoutEntry {
                binding: i,
                visibility: ShaderStages::COMPUTE,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Storage { read_only: false },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            });
        }

        // Uniform buffers (read-only params)
        for i in 0..key.num_uniform_buffers {
            entries.push(BindGroupLayoutEntry {
                binding: key.num_storage_buffers + i,
                visibility: ShaderStages::COMPUTE,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            });
        }

        let layout = self
            .device
            .create_bind_group_layout(&BindGroupLayoutDescriptor {
                label: Some("spline_prefilter_layout"),
                entries: &entries,
            });

        let layout = Arc::new(layout);
        layouts.insert(key, layout.clone());
        layout
    }

    /// Create a bind group binding the given buffers in order
    pub fn create_bind_group(&self, layout: &BindGroupLayout, buffers: &[&Buffer]) -> BindGroup {
        let entries: Vec<BindGroupEntry> = buffers
            .iter()
            .enumerate()
            .map(|(i, buffer)| BindGroupEntry {
                binding: i as u32,
                resource: buffer.as_entire_binding(),
            })
            .collect();

        self.device.create_bind_group(&BindGroupDescriptor {
            label: Some("spline_prefilter_bind_group"),
            layout,
            entries: &entries,
        })
    }
}

/// Uniform parameters for the batch prefilter entry point
///
/// Must match the `SplinePrefilterParams` struct in the generated WGSL.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SplinePrefilterParams {
    /// Number of independent lines
    pub n_lines: u32,
    /// Length of each line (trailing dimension)
    pub len_x: u32,
}

/// Create a uniform buffer holding launch parameters
pub fn create_params_buffer(
    cache: &PipelineCache,
    queue: &Queue,
    params: &SplinePrefilterParams,
) -> Buffer {
    let buffer = cache.device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("spline_prefilter_params"),
        size: std::mem::size_of::<SplinePrefilterParams>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    queue.write_buffer(&buffer, 0, bytemuck::bytes_of(params));
    buffer
}

/// Launch a generated prefilter kernel over a `(n_lines, len_x)` buffer
///
/// `data` holds the flat batch, mutated in place; each invocation owns one
/// contiguous line and touches nothing else. Dispatch shape is the flat
/// grid `(n_lines,)` rounded up to workgroups.
pub fn launch_spline_prefilter(
    cache: &PipelineCache,
    queue: &Queue,
    kernel: &SplineKernel,
    data: &Buffer,
    params_buffer: &Buffer,
    n_lines: usize,
) -> Result<()> {
    let module_name = kernel.module_name();
    let module = cache.get_or_create_module(&module_name, &kernel.source);
    let layout = cache.get_or_create_layout(LayoutKey {
        num_storage_buffers: 1,
        num_uniform_buffers: 1,
    });
    let pipeline =
        cache.get_or_create_pipeline(&module_name, &kernel.entry_point, &module, &layout);

    let bind_group = cache.create_bind_group(&layout, &[data, params_buffer]);

    let mut encoder = cache
        .device()
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("spline_prefilter"),
        });

    {
        let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("spline_prefilter"),
            timestamp_writes: None,
        });
        pass.set_pipeline(&pipeline);
        pass.set_bind_group(0, Some(&bind_group), &[]);
        pass.dispatch_workgroups(workgroup_count(n_lines), 1, 1);
    }

    queue.submit(std::iter::once(encoder.finish()));
    Ok(())
}
