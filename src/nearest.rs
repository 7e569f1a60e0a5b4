//! Nearest palette color lookups.

use crate::{squared_euclidean_distance, Palette};
use palette::Srgb;

/// Returns the index and color of the palette entry closest to `color`.
///
/// The palette is scanned linearly and the best entry is only replaced on a strictly smaller distance,
/// so the first of several equally close palette colors is returned.
#[must_use]
#[inline]
pub fn nearest(color: [u8; 3], palette: &Palette) -> (usize, &Srgb<u8>) {
    let mut min_index = 0;
    let mut min_distance = u32::MAX;
    for (i, &candidate) in palette.as_arrays().iter().enumerate() {
        let distance = squared_euclidean_distance(color, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = i;
        }
    }

    (min_index, &palette[min_index])
}
