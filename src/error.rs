//! Errors reported by layer construction and compositing.

use cgmath::Vector2;
use thiserror::Error;

/// Errors that can occur when building or compositing [`Layer`](crate::Layer)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A layer was requested with a zero width or height.
    #[error("invalid layer dimensions {width}x{height} (both must be non-zero)")]
    InvalidDimension { width: u32, height: u32 },

    /// The two layers passed to the compositor have different dimensions.
    #[error(
        "dimension mismatch: bottom layer is {}x{} but top layer is {}x{}",
        .bottom.x, .bottom.y, .top.x, .top.y
    )]
    DimensionMismatch {
        bottom: Vector2<u32>,
        top: Vector2<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_displays_sizes() {
        let err = Error::InvalidDimension { width: 0, height: 7 };
        assert!(err.to_string().contains("0x7"));
    }

    #[test]
    fn dimension_mismatch_displays_both_sizes() {
        let err = Error::DimensionMismatch {
            bottom: Vector2::new(2, 2),
            top: Vector2::new(4, 3),
        };
        let msg = err.to_string();
        assert!(msg.contains("2x2"));
        assert!(msg.contains("4x3"));
    }
}
