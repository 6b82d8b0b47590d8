//! A minimal 2D raster compositing primitive.
//!
//! The crate provides exactly three things:
//! - [`Layer`]: a dense grid of floating-point [`Rgba`] pixels, created fully transparent.
//! - [`compose::source_over`]: a pure compositor which blends one [`Layer`] over another with
//!   Porter-Duff source-over alpha compositing.
//! - [`Layer::quantize`]: conversion to a [`Raster`] of discrete 8-bit [`Pixel`]s, the in-memory
//!   boundary for whatever encodes or displays the result.
//!
//! There is deliberately no image decoding/encoding, no layer stacks beyond two and no blend
//! modes beyond source-over; those belong to external collaborators.

pub mod compose;
mod error;
mod layer;
mod pixel;

pub use error::Error;
pub use layer::{Layer, Raster};
pub use pixel::{Pixel, Rgba};
