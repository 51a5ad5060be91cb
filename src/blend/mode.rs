use std::fmt;

use super::uniform::Uniform;
use super::BlendFunction;
use crate::options::BlendOptions;

/// Notification published by a [`BlendMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendModeEvent {
    /// The blend function was swapped; composite shaders that spliced in
    /// the previous function's code must be rebuilt.
    Change {
        /// Function before the swap.
        previous: BlendFunction,
        /// Function after the swap.
        current: BlendFunction,
    },
}

/// Handle returned by [`BlendMode::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// GPU layout of the blend uniforms (must match `BlendUniforms` in WGSL).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlendUniforms {
    /// Opacity of the effect color.
    pub opacity: f32,
    /// Padding for GPU alignment.
    pub _pad: [f32; 3],
}

type Listener = Box<dyn FnMut(&BlendModeEvent)>;

/// A blend function plus the opacity it is applied with.
///
/// Changing the function changes the shader code, so listeners are told
/// synchronously, in subscription order, before
/// [`set_blend_function`](Self::set_blend_function) returns. Changing the
/// opacity only updates a uniform and notifies nobody.
pub struct BlendMode {
    blend_function: BlendFunction,
    opacity: Uniform<f32>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl BlendMode {
    /// Blend mode with the given function and opacity.
    #[must_use]
    pub fn new(blend_function: BlendFunction, opacity: f32) -> Self {
        Self {
            blend_function,
            opacity: Uniform::new(opacity),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Blend mode configured from options.
    #[must_use]
    pub fn from_options(options: &BlendOptions) -> Self {
        Self::new(options.function, options.opacity)
    }

    /// Opacity of the effect color.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    /// Set the opacity. Does not notify listeners.
    pub fn set_opacity(&mut self, value: f32) {
        self.opacity.set(value);
    }

    /// Shared handle to the opacity cell, for binding as a shader uniform.
    #[must_use]
    pub fn opacity_uniform(&self) -> Uniform<f32> {
        self.opacity.clone()
    }

    /// The active blend function.
    #[must_use]
    pub fn blend_function(&self) -> BlendFunction {
        self.blend_function
    }

    /// Swap the blend function.
    ///
    /// Publishes [`BlendModeEvent::Change`] to every listener when the
    /// function actually differs; setting the current function again is a
    /// no-op.
    pub fn set_blend_function(&mut self, value: BlendFunction) {
        let previous = self.blend_function;
        if previous == value {
            return;
        }
        self.blend_function = value;
        log::debug!(
            "blend function changed: {} -> {}",
            previous.display_name(),
            value.display_name()
        );

        let event = BlendModeEvent::Change {
            previous,
            current: value,
        };
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    /// Shader code of the active function, `None` when it is
    /// [`BlendFunction::Skip`].
    #[must_use]
    pub fn shader_code(&self) -> Option<&'static str> {
        self.blend_function.shader_code()
    }

    /// Current values in GPU layout.
    #[must_use]
    pub fn uniforms(&self) -> BlendUniforms {
        BlendUniforms {
            opacity: self.opacity(),
            _pad: [0.0; 3],
        }
    }

    /// Register a listener for [`BlendModeEvent`]s.
    ///
    /// Listeners receive the event only, so they cannot re-enter the mode.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&BlendModeEvent) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for BlendMode {
    fn default() -> Self {
        Self::new(BlendFunction::default(), 1.0)
    }
}

impl fmt::Debug for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlendMode")
            .field("blend_function", &self.blend_function)
            .field("opacity", &self.opacity())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
