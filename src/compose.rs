//! Source-over alpha compositing of [`Layer`]s.

use log::debug;

use crate::{Error, Layer, Rgba};

/// Composites `top` over `bottom`, producing a new [`Layer`] of the same dimensions.
///
/// Neither input is mutated.  The layers must have identical dimensions; mismatched inputs are
/// rejected with [`Error::DimensionMismatch`] rather than reading out of range.  Every pixel is
/// blended independently with [`blend`], so the result is deterministic and order-sensitive
/// (`source_over(a, b)` and `source_over(b, a)` generally differ).
pub fn source_over(bottom: &Layer, top: &Layer) -> Result<Layer, Error> {
    if bottom.size() != top.size() {
        return Err(Error::DimensionMismatch {
            bottom: bottom.size(),
            top: top.size(),
        });
    }
    debug!("compositing {}x{} layers", bottom.width(), bottom.height());

    let mut out = Layer::new(bottom.width(), bottom.height())?;
    for (coord, bottom_pixel) in bottom.pixels() {
        let top_pixel = top.get(coord.x, coord.y);
        out.set(coord.x, coord.y, blend(bottom_pixel, top_pixel));
    }
    Ok(out)
}

/// Blends a single `top` sample over `bottom` with the standard Porter-Duff source-over formula:
///
/// ```text
/// out_a = top_a + bottom_a * (1 - top_a)
/// out_c = (top_a * top_c + bottom_a * bottom_c * (1 - top_a)) / out_a
/// ```
///
/// When the resulting alpha is zero (e.g. both samples fully transparent) the colour channels
/// would divide by zero; that case is defined to produce [`Rgba::TRANSPARENT`] rather than
/// propagating NaN.
pub fn blend(bottom: Rgba, top: Rgba) -> Rgba {
    let out_a = top.a + bottom.a * (1.0 - top.a);
    if out_a == 0.0 {
        return Rgba::TRANSPARENT;
    }
    let channel =
        |t: f64, b: f64| (top.a * t + bottom.a * b * (1.0 - top.a)) / out_a;
    Rgba::new(
        channel(top.r, bottom.r),
        channel(top.g, bottom.g),
        channel(top.b, bottom.b),
        out_a,
    )
}
