//! Composite shader assembly for a [`BlendMode`].
//!
//! The composite pass samples the base image and the effect image and runs
//! them through the active blend function. Its WGSL source is the template
//! in `screen/blend_composite.wgsl` with the function's code spliced in, so
//! it has to be rebuilt whenever the blend function changes.
//! [`CompositeShader`] listens to the mode and tracks exactly that.

use std::cell::Cell;
use std::rc::Rc;

use super::mode::{BlendMode, BlendModeEvent, ListenerId};
use super::BlendFunction;
use crate::error::PostFxError;
use crate::gpu::pipeline_helpers::{filtering_sampler, texture_2d, uniform_buffer};
use crate::gpu::shader_composer::ShaderComposer;

/// WGSL template of the composite pass.
pub const TEMPLATE: &str =
    include_str!("../../assets/shaders/screen/blend_composite.wgsl");

/// Line in [`TEMPLATE`] replaced by the blend function code.
const MARKER: &str = "// @blend_function";

const FILE_PATH: &str = "screen/blend_composite.wgsl";

/// Composite pass source for `function`, or `None` for
/// [`BlendFunction::Skip`] (no blending stage).
#[must_use]
pub fn composite_source(function: BlendFunction) -> Option<String> {
    function
        .shader_code()
        .map(|code| TEMPLATE.replacen(MARKER, code, 1))
}

/// Bind group layout matching the composite template: base texture, effect
/// texture, sampler, blend uniforms.
#[must_use]
pub fn bind_group_layout_entries() -> [wgpu::BindGroupLayoutEntry; 4] {
    [
        texture_2d(0),
        texture_2d(1),
        filtering_sampler(2),
        uniform_buffer(3),
    ]
}

struct LinkState {
    function: Cell<BlendFunction>,
    stale: Cell<bool>,
}

/// Tracks whether the composite program of one blend mode is up to date.
///
/// Starts out stale (nothing has been linked yet) and becomes stale again on
/// every blend function change.
pub struct CompositeShader {
    state: Rc<LinkState>,
    listener: ListenerId,
}

impl CompositeShader {
    /// Start tracking `mode`.
    pub fn attach(mode: &mut BlendMode) -> Self {
        let state = Rc::new(LinkState {
            function: Cell::new(mode.blend_function()),
            stale: Cell::new(true),
        });
        let sink = Rc::clone(&state);
        let listener = mode.subscribe(move |event| match *event {
            BlendModeEvent::Change { current, .. } => {
                sink.function.set(current);
                sink.stale.set(true);
            }
        });
        Self { state, listener }
    }

    /// Stop tracking `mode`. Returns whether this shader was attached to it.
    pub fn detach(self, mode: &mut BlendMode) -> bool {
        mode.unsubscribe(self.listener)
    }

    /// The blend function the next build will use.
    #[must_use]
    pub fn blend_function(&self) -> BlendFunction {
        self.state.function.get()
    }

    /// Whether the program must be rebuilt before the next render.
    #[must_use]
    pub fn needs_relink(&self) -> bool {
        self.state.stale.get()
    }

    /// Record that the current source has been linked.
    pub fn mark_linked(&self) {
        self.state.stale.set(false);
    }

    /// Current composite source, `None` when the mode skips blending.
    #[must_use]
    pub fn source(&self) -> Option<String> {
        composite_source(self.blend_function())
    }

    /// Compose and validate the current source into naga IR.
    ///
    /// Marks the program linked on success. Returns `Ok(None)` when the mode
    /// skips blending.
    ///
    /// # Errors
    ///
    /// Propagates composition and validation failures; the program stays
    /// stale.
    pub fn build_naga(
        &self,
        composer: &mut ShaderComposer,
    ) -> Result<Option<naga::Module>, PostFxError> {
        let Some(source) = self.source() else {
            self.mark_linked();
            return Ok(None);
        };
        let module = composer.compose_naga(&source, FILE_PATH)?;
        self.mark_linked();
        Ok(Some(module))
    }

    /// Compose the current source into a shader module on `device`.
    ///
    /// Marks the program linked on success. Returns `Ok(None)` when the mode
    /// skips blending.
    ///
    /// # Errors
    ///
    /// Propagates composition and validation failures; the program stays
    /// stale.
    pub fn build(
        &self,
        device: &wgpu::Device,
        composer: &mut ShaderComposer,
    ) -> Result<Option<wgpu::ShaderModule>, PostFxError> {
        let Some(source) = self.source() else {
            self.mark_linked();
            return Ok(None);
        };
        let label = format!(
            "Blend Composite Shader ({})",
            self.blend_function().display_name()
        );
        let module = composer.compose(device, &label, &source, FILE_PATH)?;
        self.mark_linked();
        Ok(Some(module))
    }
}

impl std::fmt::Debug for CompositeShader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeShader")
            .field("blend_function", &self.blend_function())
            .field("needs_relink", &self.needs_relink())
            .finish_non_exhaustive()
    }
}
