//! Pixel value types: compositable [`Rgba`] samples and quantised [`Pixel`]s.

use bytemuck::{Pod, Zeroable};

/// A high-precision compositable colour sample with transparency.
///
/// Channels are nominally in `[0, 1]`, but nothing enforces that until
/// [`quantize`](Self::quantize) clamps them.  The `Pod` impl lets a flat buffer of `f64` channels
/// be viewed as a slice of `Rgba` values (see [`Layer`](crate::Layer)).
// Invariant: field order is the channel order (R, G, B, A), so the `Pod` cast is meaningful
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black, the value every pixel of a fresh layer takes.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Converts `self` into a discrete 8-bit [`Pixel`], dropping the alpha channel.
    ///
    /// Each colour channel is clamped to `[0, 1]` and then mapped to `floor(c * 255)`, so `1.0`
    /// becomes `255` and out-of-range values saturate instead of wrapping.  A `NaN` channel
    /// quantises to `0`.
    pub fn quantize(self) -> Pixel {
        fn discrete(channel: f64) -> u8 {
            // `as` saturates, which also sends NaN to 0
            (channel.clamp(0.0, 1.0) * 255.0).floor() as u8
        }
        Pixel::new(discrete(self.r), discrete(self.g), discrete(self.b))
    }
}

/// A final, quantised colour sample with no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Pixel> for image::Rgb<u8> {
    fn from(p: Pixel) -> Self {
        image::Rgb(p.rgb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_white_is_255() {
        assert_eq!(Rgba::new(1.0, 1.0, 1.0, 1.0).quantize(), Pixel::new(255, 255, 255));
        // Alpha is dropped, so a transparent white quantises the same way
        assert_eq!(Rgba::new(1.0, 1.0, 1.0, 0.0).quantize(), Pixel::new(255, 255, 255));
    }

    #[test]
    fn quantize_black_is_0() {
        assert_eq!(Rgba::new(0.0, 0.0, 0.0, 1.0).quantize(), Pixel::new(0, 0, 0));
    }

    #[test]
    fn quantize_floors() {
        assert_eq!(Rgba::new(0.5, 0.999, 0.001, 1.0).quantize(), Pixel::new(127, 254, 0));
    }

    #[test]
    fn quantize_clamps_out_of_range_channels() {
        assert_eq!(Rgba::new(2.0, -1.0, 0.5, 1.0).quantize(), Pixel::new(255, 0, 127));
    }

    #[test]
    fn quantize_is_total_for_nan() {
        assert_eq!(Rgba::new(f64::NAN, 0.0, 1.0, 1.0).quantize(), Pixel::new(0, 0, 255));
    }
}
