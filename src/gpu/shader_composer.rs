use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage,
    ShaderType,
};

use crate::error::PostFxError;

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// Pre-loads the shared WGSL modules at construction time. Pass shaders use
/// `#import postfx::module_name` to pull in shared code. Composed modules are
/// validated and handed to wgpu as naga IR, skipping a WGSL re-parse.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition.
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

/// Shared modules in dependency order.
const MODULES: &[ModuleDef] = &[ModuleDef {
    source: include_str!("../../assets/shaders/modules/fullscreen.wgsl"),
    file_path: "modules/fullscreen.wgsl",
}];

impl ShaderComposer {
    /// Composer with every shared module registered.
    ///
    /// # Errors
    ///
    /// Returns [`PostFxError::ShaderCompose`] if a shared module fails to
    /// parse.
    pub fn new() -> Result<Self, PostFxError> {
        let mut composer = Composer::default();
        for m in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    PostFxError::ShaderCompose(format!(
                        "shared module '{}': {e}",
                        m.file_path
                    ))
                })?;
        }
        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import`
    /// directives) into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// Same as [`compose_naga`](Self::compose_naga).
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, PostFxError> {
        let naga_module = self.compose_naga(source, file_path)?;
        log::debug!("composed shader '{file_path}' as '{label}'");
        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose and validate a shader source into a `naga::Module` without
    /// touching a GPU device.
    ///
    /// # Errors
    ///
    /// Returns [`PostFxError::ShaderCompose`] on parse or import failures and
    /// [`PostFxError::ShaderValidation`] if naga rejects the module.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, PostFxError> {
        let module = self
            .composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(|e| {
                PostFxError::ShaderCompose(format!("'{file_path}': {e}"))
            })?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        let _info = validator.validate(&module).map_err(|e| {
            PostFxError::ShaderValidation(format!("'{file_path}': {e}"))
        })?;
        Ok(module)
    }
}

impl std::fmt::Debug for ShaderComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderComposer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_modules_register() {
        assert!(ShaderComposer::new().is_ok());
    }

    #[test]
    fn pass_shaders_compose() {
        let mut composer = ShaderComposer::new().unwrap();
        let sources = [
            (
                String::from(crate::materials::KAWASE_BLUR_SHADER),
                "screen/kawase_blur.wgsl",
            ),
            (
                crate::blend::composite::composite_source(
                    crate::blend::BlendFunction::Normal,
                )
                .unwrap(),
                "screen/blend_composite.wgsl",
            ),
        ];
        for (source, file_path) in sources {
            let _module = composer
                .compose_naga(&source, file_path)
                .unwrap_or_else(|e| panic!("'{file_path}' failed: {e}"));
        }
    }

    #[test]
    fn broken_source_is_an_error() {
        let mut composer = ShaderComposer::new().unwrap();
        let err = composer
            .compose_naga("fn broken( -> {", "broken.wgsl")
            .unwrap_err();
        assert!(matches!(err, PostFxError::ShaderCompose(_)));
    }
}
