//! The error type for palette and image construction.

use thiserror::Error;

/// An error returned when a [`Palette`](crate::Palette) or [`Image`](crate::Image)
/// cannot be constructed from the given inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// The palette has no colors.
    #[error("the palette must contain at least one color")]
    EmptyPalette,

    /// The flat palette buffer does not hold a whole number of colors.
    #[error("palette length {len} is not a multiple of 3")]
    PaletteLength {
        /// The length of the flat buffer.
        len: usize,
    },

    /// The image was given a channel count of zero.
    #[error("images must have at least one channel")]
    ZeroChannels,

    /// The pixel buffer length does not match the image dimensions.
    #[error("pixel buffer length {len} does not match dimensions {width}x{height}x{channels}")]
    DimensionMismatch {
        /// The length of the pixel buffer.
        len: usize,
        /// The width of the image in pixels.
        width: u32,
        /// The height of the image in pixels.
        height: u32,
        /// The number of channels per pixel.
        channels: u8,
    },
}
