//! The palette used by the `iif` binary when no palette file is given.

#![allow(clippy::missing_docs_in_private_items)]

use crate::Palette;

// generated from palettes/warm.txt
pub const WARM_LEN: usize = 48;
pub const WARM: [u8; WARM_LEN] = [
    0x1a, 0x0f, 0x0a, 0x3b, 0x1f, 0x14, 0x5c, 0x2e, 0x1b,
    0x7f, 0x3b, 0x1f, 0x9e, 0x4a, 0x24, 0xbf, 0x5f, 0x2c,
    0xd9, 0x7a, 0x3a, 0xe8, 0x95, 0x4f, 0xf2, 0xb0, 0x6a,
    0xf7, 0xc9, 0x8c, 0xfa, 0xdf, 0xb4, 0xfd, 0xf2, 0xdc,
    0x8a, 0x5a, 0x44, 0xb5, 0x83, 0x6b, 0x6b, 0x4e, 0x3d,
    0xc4, 0x3d, 0x2b,
];

impl Palette {
    /// The built-in warm palette: sixteen browns, oranges, and creams
    /// that give images a warm, sepia-like tone.
    ///
    /// # Examples
    /// ```
    /// # use iif::Palette;
    /// assert_eq!(Palette::warm().len(), 16);
    /// ```
    #[must_use]
    pub fn warm() -> Self {
        let colors = WARM.chunks_exact(3).map(|c| [c[0], c[1], c[2]].into()).collect();
        Self::new_unchecked(colors)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::hex::HexPalette;

    #[test]
    fn matches_palette_file() {
        let file = HexPalette::read(include_str!("../palettes/warm.txt").as_bytes()).unwrap();
        assert_eq!(file.skipped_lines(), &[1]);
        assert_eq!(file.into_palette().unwrap(), Palette::warm());
        assert_eq!(Palette::warm().as_bytes(), &WARM);
    }
}
