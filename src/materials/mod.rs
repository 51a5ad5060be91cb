//! Parameterized shader materials.
//!
//! A material is a typed bag of shader parameters. It does no rendering on
//! its own: a pass scheduler resizes it, points it at an input image, tweaks
//! per-iteration values, and uploads the result as uniforms.

mod kawase_blur;

pub use kawase_blur::{
    build_shader as build_kawase_blur_shader,
    build_shader_naga as build_kawase_blur_shader_naga, KawaseBlurMaterial,
    KawaseBlurUniforms, SHADER as KAWASE_BLUR_SHADER,
};

/// Something whose parameters depend on the render target resolution.
pub trait Resizable {
    /// Update resolution-dependent parameters for a `width` x `height`
    /// target.
    fn set_size(&mut self, width: u32, height: u32);
}
