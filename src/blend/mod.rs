//! Blend functions and blend modes for compositing effect output.
//!
//! An effect renders into its own target and is then combined with the base
//! image by a [`BlendFunction`]. The GPU code for each function is a WGSL
//! fragment looked up in the shared [`catalog`]; a [`BlendMode`] pairs the
//! active function with an opacity and tells listeners when the function
//! changes so the composite shader can be rebuilt.

pub mod catalog;
pub mod composite;
mod mode;
mod uniform;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use composite::CompositeShader;
pub use mode::{BlendMode, BlendModeEvent, BlendUniforms, ListenerId};
pub use uniform::Uniform;

/// How an effect color is combined with the base color.
///
/// The discriminants are stable and may be passed to shaders as integers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum BlendFunction {
    /// No blending; the effect is not composited at all.
    Skip = 0,
    /// Additive, clamped to 1.
    Add = 1,
    /// Effect over base weighted by the effect's alpha.
    Alpha = 2,
    /// Mean of both colors.
    Average = 3,
    /// Darkens the base by increasing contrast.
    ColorBurn = 4,
    /// Brightens the base by decreasing contrast.
    ColorDodge = 5,
    /// Per-channel minimum.
    Darken = 6,
    /// Absolute per-channel difference.
    Difference = 7,
    /// Lower-contrast difference.
    Exclusion = 8,
    /// Per-channel maximum.
    Lighten = 9,
    /// Per-channel product.
    Multiply = 10,
    /// Base divided by effect.
    Divide = 11,
    /// Inverted difference.
    Negation = 12,
    /// Effect replaces base.
    #[default]
    Normal = 13,
    /// Multiply or screen depending on the base.
    Overlay = 14,
    /// Quadratic dodge.
    Reflect = 15,
    /// Inverted product of inverses.
    Screen = 16,
    /// Gentle contrast change (pegtop formula).
    SoftLight = 17,
    /// Linear burn: sum minus one, clamped to 0.
    Subtract = 18,
}

impl BlendFunction {
    /// Every blend function in discriminant order.
    pub const ALL: [BlendFunction; 19] = [
        Self::Skip,
        Self::Add,
        Self::Alpha,
        Self::Average,
        Self::ColorBurn,
        Self::ColorDodge,
        Self::Darken,
        Self::Difference,
        Self::Exclusion,
        Self::Lighten,
        Self::Multiply,
        Self::Divide,
        Self::Negation,
        Self::Normal,
        Self::Overlay,
        Self::Reflect,
        Self::Screen,
        Self::SoftLight,
        Self::Subtract,
    ];

    /// Stable integer id.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Look up a blend function by its integer id.
    #[must_use]
    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Human-readable name for UI lists.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Skip => "Skip",
            Self::Add => "Add",
            Self::Alpha => "Alpha",
            Self::Average => "Average",
            Self::ColorBurn => "Color Burn",
            Self::ColorDodge => "Color Dodge",
            Self::Darken => "Darken",
            Self::Difference => "Difference",
            Self::Exclusion => "Exclusion",
            Self::Lighten => "Lighten",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Negation => "Negation",
            Self::Normal => "Normal",
            Self::Overlay => "Overlay",
            Self::Reflect => "Reflect",
            Self::Screen => "Screen",
            Self::SoftLight => "Soft Light",
            Self::Subtract => "Subtract",
        }
    }

    /// WGSL code for this function, or `None` for [`BlendFunction::Skip`].
    #[must_use]
    pub fn shader_code(self) -> Option<&'static str> {
        catalog::resolve(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_discriminant_order() {
        for (index, function) in BlendFunction::ALL.iter().enumerate() {
            assert_eq!(function.as_u32() as usize, index);
            assert_eq!(BlendFunction::from_u32(index as u32), Some(*function));
        }
        assert_eq!(BlendFunction::from_u32(19), None);
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&BlendFunction::SoftLight).unwrap();
        assert_eq!(json, "\"soft_light\"");
        let parsed: BlendFunction =
            serde_json::from_str("\"color_burn\"").unwrap();
        assert_eq!(parsed, BlendFunction::ColorBurn);
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(BlendFunction::default(), BlendFunction::Normal);
        assert_eq!(BlendFunction::Normal.display_name(), "Normal");
    }
}
