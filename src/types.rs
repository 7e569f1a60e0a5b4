//! Contains the palette and image types used across the crate.

use crate::{QuantizeError, COLOR_CHANNELS};
use palette::{
    cast::{AsArrays, AsComponents, ComponentsAs},
    Srgb,
};
use std::ops::Deref;

/// An immutable, ordered, non-empty list of colors that pixels are mapped to.
///
/// The order of the colors matters: when two palette colors are equally close to a pixel,
/// the one that comes first wins.
///
/// # Examples
/// From a flat slice of `r, g, b` bytes:
/// ```
/// # use iif::{Palette, QuantizeError};
/// # fn main() -> Result<(), QuantizeError> {
/// let palette = Palette::from_bytes(&[0xff, 0x00, 0x00, 0x00, 0x00, 0xff])?;
/// assert_eq!(palette.len(), 2);
/// # Ok(())
/// # }
/// ```
///
/// From a `Vec` of colors:
/// ```
/// # use iif::{Palette, QuantizeError};
/// # use palette::Srgb;
/// # fn main() -> Result<(), QuantizeError> {
/// let palette = Palette::try_from(vec![Srgb::new(0, 0, 0), Srgb::new(255, 255, 255)])?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(Vec<Srgb<u8>>);

impl Palette {
    /// Creates a [`Palette`] without ensuring that `colors` is non-empty.
    pub(crate) const fn new_unchecked(colors: Vec<Srgb<u8>>) -> Self {
        Self(colors)
    }

    /// Creates a [`Palette`] from a flat sequence of `r, g, b` bytes.
    ///
    /// # Errors
    /// Returns an error if `bytes` is empty or its length is not a multiple of `3`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, QuantizeError> {
        if bytes.len() % usize::from(COLOR_CHANNELS) != 0 {
            return Err(QuantizeError::PaletteLength { len: bytes.len() });
        }

        let colors: &[Srgb<u8>] = bytes.components_as();
        Self::try_from(colors.to_vec())
    }

    /// Returns the colors of the palette.
    #[must_use]
    pub fn colors(&self) -> &[Srgb<u8>] {
        &self.0
    }

    /// Returns the palette as a flat slice of `r, g, b` bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice().as_components()
    }

    /// Returns the palette colors as `[r, g, b]` arrays.
    #[must_use]
    pub fn as_arrays(&self) -> &[[u8; 3]] {
        self.0.as_slice().as_arrays()
    }

    /// Consumes the palette and returns the inner colors.
    #[must_use]
    pub fn into_inner(self) -> Vec<Srgb<u8>> {
        self.0
    }
}

impl Deref for Palette {
    type Target = [Srgb<u8>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Srgb<u8>]> for Palette {
    fn as_ref(&self) -> &[Srgb<u8>] {
        self
    }
}

impl TryFrom<Vec<Srgb<u8>>> for Palette {
    type Error = QuantizeError;

    fn try_from(colors: Vec<Srgb<u8>>) -> Result<Self, Self::Error> {
        if colors.is_empty() {
            Err(QuantizeError::EmptyPalette)
        } else {
            Ok(Self(colors))
        }
    }
}

/// A decoded raster image with interleaved 8-bit channels.
///
/// The pixels are stored row by row, with the channels of each pixel next to each other
/// (e.g., `r, g, b, a, r, g, b, a, ...` for a 4 channel image).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// The width of the image in pixels.
    width: u32,
    /// The height of the image in pixels.
    height: u32,
    /// The number of channels per pixel.
    channels: u8,
    /// The interleaved pixel data.
    data: Vec<u8>,
}

impl Image {
    /// Creates a new [`Image`] from its dimensions and pixel data.
    ///
    /// # Errors
    /// Returns an error if `channels` is `0`
    /// or if the length of `data` is not equal to `width * height * channels`.
    pub fn new(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self, QuantizeError> {
        if channels == 0 {
            return Err(QuantizeError::ZeroChannels);
        }

        let expected = u64::from(width) * u64::from(height) * u64::from(channels);
        if data.len() as u64 == expected {
            Ok(Self { width, height, channels, data })
        } else {
            Err(QuantizeError::DimensionMismatch {
                len: data.len(),
                width,
                height,
                channels,
            })
        }
    }

    /// Creates a new [`Image`] without validating the length of `data`.
    #[allow(unused)]
    pub(crate) const fn new_unchecked(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Self {
        Self { width, height, channels, data }
    }

    /// The width of the image in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// The height of the image in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The `(width, height)` of the image in pixels.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The number of channels per pixel.
    #[must_use]
    pub const fn channels(&self) -> u8 {
        self.channels
    }

    /// The total number of pixels in the image.
    #[must_use]
    pub fn num_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether the image has enough channels to be quantized.
    #[must_use]
    pub const fn is_quantizable(&self) -> bool {
        self.channels >= COLOR_CHANNELS
    }

    /// Returns the raw, interleaved pixel data.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw, interleaved pixel data as a mutable slice.
    ///
    /// The length of the data cannot be changed through this slice,
    /// so the image dimensions stay valid.
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image and returns the raw pixel data.
    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn palette_from_bytes() {
        let palette = Palette::from_bytes(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(palette.colors(), &[Srgb::new(1, 2, 3), Srgb::new(4, 5, 6)]);
        assert_eq!(palette.as_bytes(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(palette.as_arrays(), &[[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn invalid_palettes() {
        assert_eq!(Palette::from_bytes(&[]), Err(QuantizeError::EmptyPalette));
        assert_eq!(
            Palette::from_bytes(&[1, 2, 3, 4]),
            Err(QuantizeError::PaletteLength { len: 4 })
        );
        assert_eq!(Palette::try_from(Vec::new()), Err(QuantizeError::EmptyPalette));
    }

    #[test]
    fn image_dimensions_are_validated() {
        let image = Image::new(2, 3, 4, vec![0; 24]).unwrap();
        assert_eq!(image.dimensions(), (2, 3));
        assert_eq!(image.num_pixels(), 6);
        assert!(image.is_quantizable());

        assert_eq!(
            Image::new(2, 3, 3, vec![0; 24]),
            Err(QuantizeError::DimensionMismatch {
                len: 24,
                width: 2,
                height: 3,
                channels: 3
            })
        );
        assert_eq!(Image::new(1, 1, 0, Vec::new()), Err(QuantizeError::ZeroChannels));
    }

    #[test]
    fn grayscale_is_not_quantizable() {
        assert!(!Image::new(1, 1, 1, vec![0]).unwrap().is_quantizable());
        assert!(!Image::new(1, 1, 2, vec![0, 0]).unwrap().is_quantizable());
    }
}
