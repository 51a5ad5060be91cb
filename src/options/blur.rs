use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Starting parameters of the Kawase blur material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Blur", inline)]
#[serde(default)]
pub struct BlurOptions {
    /// Offset multiplier applied to every tap.
    #[schemars(title = "Scale", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub scale: f32,
    /// Kernel radius of the first iteration, in texels.
    #[schemars(title = "Kernel", range(min = 0.0, max = 16.0), extend("step" = 1.0))]
    pub kernel: f32,
}

impl Default for BlurOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            kernel: 0.0,
        }
    }
}
