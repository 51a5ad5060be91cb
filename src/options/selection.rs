use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::selection::DEFAULT_CHANNEL;

/// Render-layer settings for object selections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
pub struct SelectionOptions {
    /// Render layer reserved for selected objects.
    #[schemars(title = "Layer", range(min = 0, max = 31))]
    pub channel: u32,
    /// Remove selected objects from every other layer.
    #[schemars(title = "Exclusive")]
    pub exclusive: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL,
            exclusive: false,
        }
    }
}
