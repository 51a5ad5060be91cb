use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::blend::BlendFunction;

/// Blend function and opacity used to composite an effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Blending", inline)]
#[serde(default)]
pub struct BlendOptions {
    /// How the effect color is combined with the base color.
    #[schemars(title = "Blend Function")]
    pub function: BlendFunction,
    /// Opacity of the effect color.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub opacity: f32,
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self {
            function: BlendFunction::Normal,
            opacity: 1.0,
        }
    }
}
