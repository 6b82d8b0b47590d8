//! The in-memory image stores: floating-point [`Layer`]s and discrete [`Raster`]s.

use std::{
    fmt::{Debug, Formatter},
    ops::Deref,
};

use cgmath::Vector2;
use itertools::Itertools;
use log::trace;

use crate::{Error, Pixel, Rgba};

/// The number of channel values backing each pixel (always read in the order R, G, B, A).
const CHANNELS: usize = 4;

////////////
// LAYERS //
////////////

/// A dense 2D grid of [`Rgba`] pixels, addressed by `(x, y)` ∈ `[0, width) × [0, height)`.
///
/// The grid is backed by a flat buffer of `width * height * 4` channel values in row-major order;
/// grouping each run of 4 channels into one [`Rgba`] is the only structural transformation
/// involved in pixel access.  A freshly created `Layer` is fully transparent black, and its
/// dimensions never change after construction.
#[derive(Clone, PartialEq)]
pub struct Layer {
    size: Vector2<u32>,
    channels: Vec<f64>,
}

impl Layer {
    /// Creates a fully transparent `Layer`, rejecting degenerate grids with
    /// [`Error::InvalidDimension`].
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        trace!("allocating {}x{} layer", width, height);
        Ok(Self {
            size: Vector2::new(width, height),
            channels: vec![0.0; width as usize * height as usize * CHANNELS],
        })
    }

    /// Creates a `Layer` with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Result<Self, Error> {
        let mut layer = Self::new(width, height)?;
        layer.pixels_mut().fill(pixel);
        Ok(layer)
    }

    pub fn size(&self) -> Vector2<u32> {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// Gets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the layer's grid.
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        let idx = self.pixel_index(x, y);
        self.pixel_slice()[idx]
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the layer's grid.
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgba) {
        let idx = self.pixel_index(x, y);
        self.pixels_mut()[idx] = pixel;
    }

    /// Iterates over every `(coord, pixel)` pair in row-major order (i.e. `y` varies slowest).
    pub fn pixels(&self) -> impl Iterator<Item = (Vector2<u32>, Rgba)> + '_ {
        (0..self.height())
            .cartesian_product(0..self.width())
            .map(|(y, x)| (Vector2::new(x, y), self.get(x, y)))
    }

    /// Converts `self` into a [`Raster`] of discrete pixels by [quantising](Rgba::quantize) every
    /// pixel, dropping the alpha channel.
    pub fn quantize(&self) -> Raster {
        Raster(image::RgbImage::from_fn(
            self.width(),
            self.height(),
            |x, y| self.get(x, y).quantize().into(),
        ))
    }

    /// The flat offset of the pixel at `(x, y)` within [`Self::pixel_slice`].
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width() && y < self.height(),
            "pixel ({}, {}) is out of range for a {}x{} layer",
            x,
            y,
            self.width(),
            self.height()
        );
        y as usize * self.width() as usize + x as usize
    }

    /// The channel buffer, regrouped as one [`Rgba`] per pixel.
    fn pixel_slice(&self) -> &[Rgba] {
        bytemuck::cast_slice(&self.channels)
    }

    fn pixels_mut(&mut self) -> &mut [Rgba] {
        bytemuck::cast_slice_mut(&mut self.channels)
    }
}

impl Debug for Layer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Layer({}x{})", self.width(), self.height())
    }
}

/////////////
// RASTERS //
/////////////

/// An immutable grid of discrete [`Pixel`]s — the in-memory boundary value handed to whatever
/// encodes or displays the final image.  Wrapper of [`image::RgbImage`] with a human-friendly
/// [`Debug`] impl.
#[derive(Clone)]
#[repr(transparent)]
pub struct Raster(image::RgbImage);

impl Raster {
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Gets the discrete pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the raster's grid.
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        let image::Rgb([r, g, b]) = *self.0.get_pixel(x, y);
        Pixel::new(r, g, b)
    }
}

impl Deref for Raster {
    type Target = image::RgbImage;

    fn deref(&self) -> &image::RgbImage {
        &self.0
    }
}

impl Debug for Raster {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Raster({}x{})", self.width(), self.height())
    }
}
