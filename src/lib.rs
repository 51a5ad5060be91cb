// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Compositing core of a wgpu post-processing pipeline.
//!
//! postfx decides which scene objects are rendered into a dedicated
//! selection layer, and how an effect image is blended back into the base
//! image through a WGSL blend function chosen at configuration time.
//!
//! # Key entry points
//!
//! - [`selection::Selection`] - object set that keeps a render-layer bit in
//!   sync with membership
//! - [`blend::BlendMode`] - blend function plus opacity, with change
//!   notifications for shader rebuilds
//! - [`blend::catalog`] - WGSL code for every [`blend::BlendFunction`]
//! - [`materials::KawaseBlurMaterial`] - parameters of a multi-pass Kawase
//!   blur
//! - [`options::Options`] - TOML presets for all of the above
//!
//! # Frame flow
//!
//! The renderer checks selection layers before the selection-only pass. The
//! effect composer owns one blend mode per effect, rebuilds its composite
//! shader when [`blend::CompositeShader::needs_relink`] says so, and uploads
//! [`blend::BlendUniforms`] each frame. Blur passes resize the material,
//! swap its input image and raise its kernel between iterations.

pub mod blend;
pub mod error;
pub mod gpu;
pub mod materials;
pub mod options;
pub mod selection;
