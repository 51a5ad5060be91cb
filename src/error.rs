//! Crate-level error types.

use std::fmt;

/// Errors produced by the postfx crate.
///
/// Selection, blend and material operations never fail; errors only come
/// from shader composition and options I/O.
#[derive(Debug)]
pub enum PostFxError {
    /// WGSL parse or `#import` resolution failure.
    ShaderCompose(String),
    /// A composed shader module failed naga validation.
    ShaderValidation(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for PostFxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShaderCompose(msg) => {
                write!(f, "shader composition error: {msg}")
            }
            Self::ShaderValidation(msg) => {
                write!(f, "shader validation error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for PostFxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PostFxError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
