//! A library for recoloring images with a fixed color palette.
//!
//! `iif` maps every pixel of an image to the nearest color of a caller-supplied [`Palette`]
//! (by squared euclidean distance in sRGB) and overwrites the pixel in place.
//! Any channels after the first three (e.g., alpha) are left untouched.
//!
//! # Features
//! `iif` has several `cargo` features that can be turned off or on:
//! - `threads`: exposes a parallel version of the quantizer via [`rayon`].
//! - `image`: enables reading and writing image files through the [`image`] crate.
//! - `cli`: builds the `iif` and `hex_to_arr` binaries.
//!
//! # Example
//! ```
//! # use iif::{Image, Palette, Quantizer};
//! # fn main() -> Result<(), iif::QuantizeError> {
//! let palette = Palette::from_bytes(&[0, 0, 0, 255, 255, 255])?;
//! let mut image = Image::new(2, 1, 3, vec![10, 10, 10, 200, 190, 180])?;
//!
//! Quantizer::new(&palette).quantize(&mut image, &mut ());
//!
//! assert_eq!(image.as_raw(), &[0, 0, 0, 255, 255, 255]);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal,
    clippy::wildcard_imports
)]

mod builtin;
mod distance;
mod error;
mod nearest;
mod progress;
mod quantize;
mod types;

pub mod hex;

#[cfg(feature = "image")]
pub mod codec;

pub use distance::*;
pub use error::QuantizeError;
pub use nearest::*;
pub use progress::*;
pub use quantize::*;
pub use types::*;

/// The number of color channels that take part in quantization.
pub const COLOR_CHANNELS: u8 = 3;

/// The default number of pixels between two progress reports.
pub const DEFAULT_REPORT_INTERVAL: u32 = 1000;
