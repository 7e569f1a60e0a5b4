//! Contains the [`Quantizer`] which remaps every pixel of an image to its nearest palette color.

use crate::{nearest, Image, Palette, Progress, DEFAULT_REPORT_INTERVAL};
use std::num::NonZeroU32;
#[cfg(feature = "threads")]
use {
    rayon::prelude::*,
    std::sync::{Mutex, PoisonError},
};

/// The result of running a [`Quantizer`] over an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantizeOutcome {
    /// Every pixel of the image was replaced with its nearest palette color.
    Remapped {
        /// The number of pixels that were processed.
        pixels: u64,
    },
    /// The image has fewer than 3 channels, so it was left unchanged.
    Skipped {
        /// The number of channels of the image.
        channels: u8,
    },
}

/// Remaps the pixels of an image to the nearest colors in a [`Palette`].
///
/// Only the first three channels of each pixel are rewritten.
/// Any other channels (e.g., alpha) and the image dimensions are left as is.
/// Images with fewer than three channels are not modified at all.
///
/// # Examples
/// ```
/// # use iif::{Image, Palette, Quantizer, QuantizeOutcome, ConsoleProgress};
/// # use std::num::NonZeroU32;
/// # fn main() -> Result<(), iif::QuantizeError> {
/// let palette = Palette::from_bytes(&[0, 0, 0, 255, 255, 255])?;
/// let mut image = Image::new(1, 2, 4, vec![10, 10, 10, 7, 250, 240, 230, 9])?;
///
/// let quantizer = Quantizer::new(&palette).report_interval(NonZeroU32::MIN);
/// let outcome = quantizer.quantize(&mut image, &mut ConsoleProgress::new(std::io::sink()));
///
/// assert_eq!(outcome, QuantizeOutcome::Remapped { pixels: 2 });
/// assert_eq!(image.as_raw(), &[0, 0, 0, 7, 255, 255, 255, 9]);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[derive(Debug, Clone, Copy)]
pub struct Quantizer<'a> {
    /// The palette to map pixels to.
    palette: &'a Palette,
    /// The number of pixels between two progress updates.
    report_interval: NonZeroU32,
}

impl<'a> Quantizer<'a> {
    /// Creates a new [`Quantizer`] for the given palette.
    pub const fn new(palette: &'a Palette) -> Self {
        let report_interval = match NonZeroU32::new(DEFAULT_REPORT_INTERVAL) {
            Some(interval) => interval,
            None => NonZeroU32::MIN,
        };

        Self { palette, report_interval }
    }

    /// Sets the number of pixels to process between two progress updates.
    ///
    /// The default interval is [`DEFAULT_REPORT_INTERVAL`].
    pub const fn report_interval(mut self, pixels: NonZeroU32) -> Self {
        self.report_interval = pixels;
        self
    }

    /// Returns the palette of this [`Quantizer`].
    #[must_use]
    pub const fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Replaces every pixel of `image` with its nearest palette color.
    ///
    /// Pixels are processed in row-major order. Every `report_interval` pixels,
    /// `progress` is updated with the number of pixels processed so far,
    /// and [`Progress::finish`] is called once all pixels are done.
    ///
    /// Images with fewer than three channels are returned untouched and
    /// no progress is reported for them.
    pub fn quantize(&self, image: &mut Image, mut progress: impl Progress) -> QuantizeOutcome {
        if !image.is_quantizable() {
            return skipped(image);
        }

        log_start(image, self.palette);

        let total = image.num_pixels();
        let interval = u64::from(self.report_interval.get());
        let channels = usize::from(image.channels());

        let mut processed = 0;
        for pixel in image.as_raw_mut().chunks_exact_mut(channels) {
            remap_pixel(pixel, self.palette);
            processed += 1;
            if processed % interval == 0 && processed < total {
                progress.update(processed, total);
            }
        }

        progress.finish(total);
        log::debug!("remapped {total} pixels");

        QuantizeOutcome::Remapped { pixels: total }
    }

    /// Replaces every pixel of `image` with its nearest palette color in parallel.
    ///
    /// The output is identical to [`Quantizer::quantize`].
    /// Rows of the image are split into disjoint chunks for each thread.
    /// Progress updates are serialized, so `progress` sees an increasing number of processed pixels,
    /// but the updates are not guaranteed to land on exact multiples of the report interval.
    #[cfg(feature = "threads")]
    pub fn quantize_par(
        &self,
        image: &mut Image,
        progress: impl Progress + Send,
    ) -> QuantizeOutcome {
        if !image.is_quantizable() {
            return skipped(image);
        }

        log_start(image, self.palette);

        let total = image.num_pixels();
        let interval = u64::from(self.report_interval.get());
        let channels = usize::from(image.channels());
        let (width, height) = image.dimensions();

        let state = Mutex::new((0, progress));

        if total > 0 {
            let chunk_size = chunk_size(width as usize, height as usize) * channels;
            let palette = self.palette;
            let state = &state;

            image
                .as_raw_mut()
                .par_chunks_mut(chunk_size)
                .for_each(|chunk| {
                    let mut pending = 0;
                    for pixel in chunk.chunks_exact_mut(channels) {
                        remap_pixel(pixel, palette);
                        pending += 1;
                        if pending == interval {
                            add_processed(state, pending, interval, total);
                            pending = 0;
                        }
                    }
                    add_processed(state, pending, interval, total);
                });
        }

        let (_, mut progress) = state.into_inner().unwrap_or_else(PoisonError::into_inner);
        progress.finish(total);
        log::debug!("remapped {total} pixels");

        QuantizeOutcome::Remapped { pixels: total }
    }
}

/// Overwrites the first three channels of `pixel` with its nearest palette color.
#[inline]
fn remap_pixel(pixel: &mut [u8], palette: &Palette) {
    let (_, color) = nearest([pixel[0], pixel[1], pixel[2]], palette);
    let rgb: [u8; 3] = (*color).into();
    pixel[..3].copy_from_slice(&rgb);
}

/// Returns the outcome for an image that cannot be quantized.
fn skipped(image: &Image) -> QuantizeOutcome {
    log::debug!(
        "skipping quantization of an image with {} channel(s)",
        image.channels()
    );
    QuantizeOutcome::Skipped { channels: image.channels() }
}

/// Logs the start of a quantization pass.
fn log_start(image: &Image, palette: &Palette) {
    log::debug!(
        "quantizing {}x{} image with {} channels against {} palette colors",
        image.width(),
        image.height(),
        image.channels(),
        palette.len()
    );
}

/// Adds `pending` pixels to the shared processed count, emitting a progress update
/// whenever the count crosses a multiple of `interval`.
#[cfg(feature = "threads")]
fn add_processed<P: Progress>(state: &Mutex<(u64, P)>, pending: u64, interval: u64, total: u64) {
    if pending == 0 {
        return;
    }

    let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
    let (processed, progress) = &mut *guard;
    let before = *processed;
    *processed += pending;
    if *processed / interval > before / interval && *processed < total {
        progress.update(*processed, total);
    }
}

/// Returns the number of pixels in each chunk for parallel quantization.
#[cfg(feature = "threads")]
fn chunk_size(width: usize, height: usize) -> usize {
    let num_chunks = usize::min(rayon::current_num_threads(), height.div_ceil(256)).max(1);
    let rows_per_chunk = height.div_ceil(num_chunks);
    width * rows_per_chunk
}
