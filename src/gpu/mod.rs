//! GPU-facing helpers shared by the passes.
//!
//! Bind group layout entries, typed uniform buffers, and WGSL shader
//! composition.

/// Shared wgpu bind group layout entries for screen-space passes.
pub mod pipeline_helpers;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
/// Typed single-value uniform buffers.
pub mod uniform_buffer;

pub use shader_composer::ShaderComposer;
pub use uniform_buffer::UniformBuffer;
