//! Typed uniform buffers for per-frame parameter upload.

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

/// A `UNIFORM | COPY_DST` buffer holding exactly one `T`.
///
/// Parameter containers (blend modes, blur materials) expose their current
/// values as a `Pod` struct; the pass rewrites this buffer from it before
/// drawing.
pub struct UniformBuffer<T> {
    buffer: wgpu::Buffer,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> UniformBuffer<T> {
    /// Size of the uploaded value in bytes.
    pub const SIZE: u64 = size_of::<T>() as u64;

    /// Create the buffer initialized with `value`.
    #[must_use]
    pub fn new(device: &wgpu::Device, label: &str, value: &T) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::bytes_of(value),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        Self {
            buffer,
            _marker: PhantomData,
        }
    }

    /// Queue a rewrite of the whole buffer with `value`.
    pub fn write(&self, queue: &wgpu::Queue, value: &T) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }

    /// The underlying GPU buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Binding resource covering the whole buffer.
    #[must_use]
    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }
}

impl<T> std::fmt::Debug for UniformBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniformBuffer")
            .field("type", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::BlendUniforms;
    use crate::materials::KawaseBlurUniforms;

    #[test]
    fn uniform_sizes_are_16_byte_multiples() {
        assert_eq!(UniformBuffer::<BlendUniforms>::SIZE, 16);
        assert_eq!(UniformBuffer::<KawaseBlurUniforms>::SIZE, 32);
    }
}
