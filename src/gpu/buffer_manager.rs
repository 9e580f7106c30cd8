//! Upload of the per-pass record to the GPU

use std::num::NonZeroU64;
use std::sync::Arc;

use thiserror::Error;

use crate::gpu::buffer_layouts::{PerPassGpu, PER_PASS_SIZE};

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual} bytes")]
    SizeMismatch {
        expected: u64,
        actual: u64,
    },
}

/// Destination of the per-pass record
pub trait PerPassSink {
    fn upload(&mut self, data: &PerPassGpu) -> Result<(), GpuError>;
}

/// Read-only storage buffer holding a single [`PerPassGpu`]
pub struct PerPassBuffer {
    queue: Arc<wgpu::Queue>,
    buffer: wgpu::Buffer,
}

impl PerPassBuffer {
    pub fn new(device: &wgpu::Device, queue: Arc<wgpu::Queue>) -> Self {
        log::debug!("[PerPassBuffer] Creating per-pass buffer ({} bytes)", PER_PASS_SIZE);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Wetness PerPass"),
            size: PER_PASS_SIZE,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self { queue, buffer }
    }

    /// Bind group layout entry for the lighting fragment shader
    pub fn layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                has_dynamic_offset: false,
                min_binding_size: NonZeroU64::new(PER_PASS_SIZE),
            },
            count: None,
        }
    }

    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

impl PerPassSink for PerPassBuffer {
    fn upload(&mut self, data: &PerPassGpu) -> Result<(), GpuError> {
        let bytes = data.as_bytes();
        if bytes.len() as u64 != self.buffer.size() {
            return Err(GpuError::SizeMismatch {
                expected: self.buffer.size(),
                actual: bytes.len() as u64,
            });
        }

        self.queue.write_buffer(&self.buffer, 0, bytes);
        Ok(())
    }
}

/// In-memory sink, keeps every uploaded record
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub uploads: Vec<PerPassGpu>,
}

impl RecordingSink {
    pub fn last(&self) -> Option<&PerPassGpu> {
        self.uploads.last()
    }
}

impl PerPassSink for RecordingSink {
    fn upload(&mut self, data: &PerPassGpu) -> Result<(), GpuError> {
        self.uploads.push(*data);
        Ok(())
    }
}
