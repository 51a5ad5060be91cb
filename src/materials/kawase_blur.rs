//! Kawase convolution blur material.
//!
//! One blur iteration samples the input at four diagonal offsets of
//! `(kernel + 0.5)` texels. Running several iterations with a growing kernel
//! while ping-ponging between two targets approximates a wide Gaussian for a
//! fraction of the taps. Scheduling those iterations is the caller's job;
//! this material only holds the per-iteration parameters.

use glam::Vec4;

use super::Resizable;
use crate::error::PostFxError;
use crate::gpu::pipeline_helpers::{filtering_sampler, texture_2d, uniform_buffer};
use crate::gpu::shader_composer::ShaderComposer;
use crate::options::BlurOptions;

/// WGSL source of the blur pass.
pub const SHADER: &str =
    include_str!("../../assets/shaders/screen/kawase_blur.wgsl");

const FILE_PATH: &str = "screen/kawase_blur.wgsl";

/// Compose and validate the blur pass into naga IR.
///
/// # Errors
///
/// Propagates composition and validation failures.
pub fn build_shader_naga(
    composer: &mut ShaderComposer,
) -> Result<naga::Module, PostFxError> {
    composer.compose_naga(SHADER, FILE_PATH)
}

/// Compose the blur pass into a shader module on `device`, labelled with
/// [`KawaseBlurMaterial::NAME`].
///
/// # Errors
///
/// Propagates composition and validation failures.
pub fn build_shader(
    device: &wgpu::Device,
    composer: &mut ShaderComposer,
) -> Result<wgpu::ShaderModule, PostFxError> {
    composer.compose(
        device,
        KawaseBlurMaterial::<wgpu::TextureView>::NAME,
        SHADER,
        FILE_PATH,
    )
}

/// GPU layout of the blur uniforms (must match `KawaseUniforms` in WGSL).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct KawaseBlurUniforms {
    /// `[1/w, 1/h, 0.5/w, 0.5/h]`.
    pub texel_size: [f32; 4],
    /// Kernel radius of the current iteration, in texels.
    pub kernel: f32,
    /// Offset multiplier.
    pub scale: f32,
    /// Padding for GPU alignment.
    pub _pad: [f32; 2],
}

/// Parameters of one Kawase blur iteration.
///
/// `T` is the input texture handle. With the default `wgpu::TextureView`
/// the material keeps a reference-counted view; the texture itself stays
/// owned by the caller.
#[derive(Debug, Clone)]
pub struct KawaseBlurMaterial<T = wgpu::TextureView> {
    input_buffer: Option<T>,
    texel_size: Vec4,
    kernel: f32,
    scale: f32,
}

impl<T> KawaseBlurMaterial<T> {
    /// Material name used for labels.
    pub const NAME: &'static str = "KawaseBlurMaterial";

    /// Material whose texel size is taken from `texel_size.x/y`.
    ///
    /// Prefer [`Resizable::set_size`] once the target resolution is known.
    #[must_use]
    pub fn new(texel_size: Vec4) -> Self {
        let mut material = Self {
            input_buffer: None,
            texel_size: Vec4::ZERO,
            kernel: 0.0,
            scale: 1.0,
        };
        material.set_texel_size(texel_size.x, texel_size.y);
        material
    }

    /// Apply blur options.
    pub fn apply_options(&mut self, options: &BlurOptions) {
        self.scale = options.scale;
        self.kernel = options.kernel;
    }

    /// The image to blur, if one is set.
    #[must_use]
    pub fn input_buffer(&self) -> Option<&T> {
        self.input_buffer.as_ref()
    }

    /// Point the material at a new input image.
    pub fn set_input_buffer(&mut self, value: Option<T>) {
        self.input_buffer = value;
    }

    /// `(1/w, 1/h, 0.5/w, 0.5/h)` for the last size.
    #[must_use]
    pub fn texel_size(&self) -> Vec4 {
        self.texel_size
    }

    /// Blur offset multiplier.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the blur offset multiplier.
    pub fn set_scale(&mut self, value: f32) {
        self.scale = value;
    }

    /// Kernel radius of the current iteration.
    #[must_use]
    pub fn kernel(&self) -> f32 {
        self.kernel
    }

    /// Set the kernel radius for the next iteration.
    pub fn set_kernel(&mut self, value: f32) {
        self.kernel = value;
    }

    /// Current values in GPU layout.
    #[must_use]
    pub fn uniforms(&self) -> KawaseBlurUniforms {
        KawaseBlurUniforms {
            texel_size: self.texel_size.to_array(),
            kernel: self.kernel,
            scale: self.scale,
            _pad: [0.0; 2],
        }
    }

    /// Bind group layout matching the blur shader: input texture, sampler,
    /// uniforms.
    #[must_use]
    pub fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 3] {
        [texture_2d(0), filtering_sampler(1), uniform_buffer(2)]
    }

    // Half-texel components are derived, never stored independently.
    fn set_texel_size(&mut self, x: f32, y: f32) {
        self.texel_size = Vec4::new(x, y, x * 0.5, y * 0.5);
    }
}

impl<T> Resizable for KawaseBlurMaterial<T> {
    /// Zero dimensions yield infinite texel sizes; callers must guard.
    /// Resolution-scaled sizes must be rounded to whole pixels first.
    fn set_size(&mut self, width: u32, height: u32) {
        let x = 1.0 / width as f32;
        let y = 1.0 / height as f32;
        self.set_texel_size(x, y);
    }
}

impl<T> Default for KawaseBlurMaterial<T> {
    fn default() -> Self {
        Self::new(Vec4::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestMaterial = KawaseBlurMaterial<&'static str>;

    #[test]
    fn defaults() {
        let material = TestMaterial::default();
        assert_eq!(material.texel_size(), Vec4::ZERO);
        assert_eq!(material.kernel(), 0.0);
        assert_eq!(material.scale(), 1.0);
        assert!(material.input_buffer().is_none());
    }

    #[test]
    fn constructor_derives_half_texel() {
        let material = TestMaterial::new(Vec4::new(0.5, 0.25, 9.0, 9.0));
        assert_eq!(material.texel_size(), Vec4::new(0.5, 0.25, 0.25, 0.125));
    }

    #[test]
    fn set_size_derives_texel_vector() {
        let mut material = TestMaterial::default();
        material.set_size(800, 600);
        let expected = Vec4::new(
            1.0 / 800.0,
            1.0 / 600.0,
            0.5 / 800.0,
            0.5 / 600.0,
        );
        assert!(material.texel_size().abs_diff_eq(expected, f32::EPSILON));
    }

    #[test]
    fn resolution_scaled_size_is_rounded_by_caller() {
        let mut material = TestMaterial::default();
        let scale = 0.5_f32;
        let width = (1921.0 * scale).round() as u32;
        let height = (1081.0 * scale).round() as u32;
        material.set_size(width, height);
        assert_eq!(
            material.texel_size(),
            Vec4::new(
                1.0 / 961.0,
                1.0 / 541.0,
                0.5 / 961.0,
                0.5 / 541.0
            )
        );
    }

    #[test]
    fn later_size_replaces_whole_vector() {
        let mut material = TestMaterial::default();
        material.set_size(800, 600);
        material.set_size(100, 50);
        assert_eq!(
            material.texel_size(),
            Vec4::new(0.01, 0.02, 0.005, 0.01)
        );
    }

    #[test]
    fn zero_size_propagates_infinity() {
        let mut material = TestMaterial::default();
        material.set_size(0, 600);
        assert!(material.texel_size().x.is_infinite());
        assert!(material.texel_size().y.is_finite());
    }

    #[test]
    fn accessors_have_no_side_effects() {
        let mut material = TestMaterial::default();
        material.set_size(640, 480);
        let texel = material.texel_size();

        material.set_kernel(3.0);
        material.set_scale(2.0);

        assert_eq!(material.kernel(), 3.0);
        assert_eq!(material.scale(), 2.0);
        assert_eq!(material.texel_size(), texel);
    }

    #[test]
    fn input_buffer_is_swapped_per_iteration() {
        let mut material = TestMaterial::default();
        for (iteration, kernel) in [0.0, 1.0, 2.0, 2.0, 3.0].into_iter().enumerate() {
            let target = if iteration % 2 == 0 { "ping" } else { "pong" };
            material.set_input_buffer(Some(target));
            material.set_kernel(kernel);
            assert_eq!(material.input_buffer(), Some(&target));
            assert_eq!(material.uniforms().kernel, kernel);
        }
        material.set_input_buffer(None);
        assert!(material.input_buffer().is_none());
    }

    #[test]
    fn uniforms_mirror_parameters() {
        let mut material = TestMaterial::default();
        material.set_size(4, 2);
        material.set_kernel(1.0);
        material.set_scale(0.5);
        assert_eq!(
            material.uniforms(),
            KawaseBlurUniforms {
                texel_size: [0.25, 0.5, 0.125, 0.25],
                kernel: 1.0,
                scale: 0.5,
                _pad: [0.0; 2],
            }
        );
    }

    #[test]
    fn options_set_scale_and_kernel() {
        let mut material = TestMaterial::default();
        material.apply_options(&BlurOptions {
            scale: 1.5,
            kernel: 2.0,
        });
        assert_eq!(material.scale(), 1.5);
        assert_eq!(material.kernel(), 2.0);
    }

    #[test]
    fn blur_shader_builds_with_uniform_layout() {
        let mut composer = ShaderComposer::new().unwrap();
        let module = build_shader_naga(&mut composer).unwrap();
        assert!(module
            .entry_points
            .iter()
            .any(|entry| entry.name == "fs_main"));
        assert!(module
            .types
            .iter()
            .any(|(_, ty)| ty
                .name
                .as_deref()
                .is_some_and(|name| name.contains("KawaseUniforms"))));
        assert_eq!(
            size_of::<KawaseBlurUniforms>(),
            32,
            "uniform struct no longer matches the WGSL layout"
        );
    }

    #[test]
    fn layout_matches_shader_bindings() {
        let entries = TestMaterial::bind_group_layout_entries();
        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry.binding as usize, index);
            assert!(SHADER.contains(&format!("@binding({index})")));
        }
    }
}
