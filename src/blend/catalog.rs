//! Shader code for each [`BlendFunction`].
//!
//! Every fragment defines
//! `fn blend(x: vec4<f32>, y: vec4<f32>, opacity: f32) -> vec4<f32>`, where
//! `x` is the base color and `y` the effect color. The table is embedded at
//! compile time and never changes.

use super::BlendFunction;

const ADD: &str = include_str!("../../assets/shaders/blend/add.wgsl");
const ALPHA: &str = include_str!("../../assets/shaders/blend/alpha.wgsl");
const AVERAGE: &str = include_str!("../../assets/shaders/blend/average.wgsl");
const COLOR_BURN: &str =
    include_str!("../../assets/shaders/blend/color_burn.wgsl");
const COLOR_DODGE: &str =
    include_str!("../../assets/shaders/blend/color_dodge.wgsl");
const DARKEN: &str = include_str!("../../assets/shaders/blend/darken.wgsl");
const DIFFERENCE: &str =
    include_str!("../../assets/shaders/blend/difference.wgsl");
const EXCLUSION: &str =
    include_str!("../../assets/shaders/blend/exclusion.wgsl");
const LIGHTEN: &str = include_str!("../../assets/shaders/blend/lighten.wgsl");
const MULTIPLY: &str =
    include_str!("../../assets/shaders/blend/multiply.wgsl");
const DIVIDE: &str = include_str!("../../assets/shaders/blend/divide.wgsl");
const NEGATION: &str =
    include_str!("../../assets/shaders/blend/negation.wgsl");
const NORMAL: &str = include_str!("../../assets/shaders/blend/normal.wgsl");
const OVERLAY: &str = include_str!("../../assets/shaders/blend/overlay.wgsl");
const REFLECT: &str = include_str!("../../assets/shaders/blend/reflect.wgsl");
const SCREEN: &str = include_str!("../../assets/shaders/blend/screen.wgsl");
const SOFT_LIGHT: &str =
    include_str!("../../assets/shaders/blend/soft_light.wgsl");
const SUBTRACT: &str =
    include_str!("../../assets/shaders/blend/subtract.wgsl");

/// Shader code for `function`.
///
/// Returns `None` for [`BlendFunction::Skip`], which means the effect has no
/// blending stage. Repeated calls return the same `'static` string.
#[must_use]
pub const fn resolve(function: BlendFunction) -> Option<&'static str> {
    let code = match function {
        BlendFunction::Skip => return None,
        BlendFunction::Add => ADD,
        BlendFunction::Alpha => ALPHA,
        BlendFunction::Average => AVERAGE,
        BlendFunction::ColorBurn => COLOR_BURN,
        BlendFunction::ColorDodge => COLOR_DODGE,
        BlendFunction::Darken => DARKEN,
        BlendFunction::Difference => DIFFERENCE,
        BlendFunction::Exclusion => EXCLUSION,
        BlendFunction::Lighten => LIGHTEN,
        BlendFunction::Multiply => MULTIPLY,
        BlendFunction::Divide => DIVIDE,
        BlendFunction::Negation => NEGATION,
        BlendFunction::Normal => NORMAL,
        BlendFunction::Overlay => OVERLAY,
        BlendFunction::Reflect => REFLECT,
        BlendFunction::Screen => SCREEN,
        BlendFunction::SoftLight => SOFT_LIGHT,
        BlendFunction::Subtract => SUBTRACT,
    };
    Some(code)
}

/// Every function that has shader code, paired with that code.
pub fn entries() -> impl Iterator<Item = (BlendFunction, &'static str)> {
    BlendFunction::ALL
        .into_iter()
        .filter_map(|function| resolve(function).map(|code| (function, code)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_has_no_code() {
        assert_eq!(resolve(BlendFunction::Skip), None);
    }

    #[test]
    fn every_other_function_has_code() {
        for function in BlendFunction::ALL {
            if function == BlendFunction::Skip {
                continue;
            }
            let code = resolve(function).unwrap();
            assert!(!code.trim().is_empty(), "{function:?} has empty code");
            assert!(
                code.contains("fn blend("),
                "{function:?} does not define blend()"
            );
        }
        assert_eq!(entries().count(), BlendFunction::ALL.len() - 1);
    }

    #[test]
    fn lookups_are_stable() {
        for function in BlendFunction::ALL {
            let first = resolve(function);
            let second = resolve(function);
            assert_eq!(first, second);
            if let (Some(a), Some(b)) = (first, second) {
                assert!(std::ptr::eq(a, b));
            }
        }
    }

    #[test]
    fn fragments_are_distinct() {
        let codes: Vec<_> = entries().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
