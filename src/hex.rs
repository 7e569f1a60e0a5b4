//! Reading palettes from text files of `#RRGGBB` hex colors.
//!
//! A palette file has one color per line. Lines that are not exactly a `#`
//! followed by six hexadecimal digits are skipped with a warning.
//!
//! The parsed colors can be turned into a [`Palette`] directly,
//! or rendered as a Rust array declaration to embed a palette into source code
//! (this is what the `hex_to_arr` binary does).

use crate::{Palette, QuantizeError};
use palette::Srgb;
use std::{
    fmt::Write as _,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str,
};

/// Parses a single `#RRGGBB` color (case insensitive).
///
/// Returns `None` if `token` is not exactly a `#` followed by six hexadecimal digits.
///
/// # Examples
/// ```
/// # use iif::hex::parse_hex_color;
/// # use palette::Srgb;
/// assert_eq!(parse_hex_color("#ff8000"), Some(Srgb::new(0xff, 0x80, 0x00)));
/// assert_eq!(parse_hex_color("#FF8000"), Some(Srgb::new(0xff, 0x80, 0x00)));
/// assert_eq!(parse_hex_color("ff8000"), None);
/// assert_eq!(parse_hex_color("#ff800"), None);
/// ```
#[must_use]
pub fn parse_hex_color(token: &str) -> Option<Srgb<u8>> {
    let digits = token.strip_prefix('#')?.as_bytes();
    if digits.len() != 6 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }

    let mut rgb = [0; 3];
    for (c, pair) in rgb.iter_mut().zip(digits.chunks_exact(2)) {
        *c = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
    }

    Some(Srgb::from(rgb))
}

/// The value of a single ASCII hex digit.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

/// The colors read from a hex palette file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexPalette {
    /// The parsed colors.
    colors: Vec<Srgb<u8>>,
    /// The 1-based line numbers that were not colors.
    skipped: Vec<usize>,
}

impl HexPalette {
    /// Reads colors line by line from `reader`.
    ///
    /// A line terminator (`\n` or `\r\n`) is not part of the color token.
    /// Every other line, including one that is not valid UTF-8,
    /// is skipped and logged as a warning.
    ///
    /// # Errors
    /// Returns an error if reading from `reader` fails.
    pub fn read(reader: impl BufRead) -> io::Result<Self> {
        let mut palette = Self::default();

        for (i, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let number = i + 1;
            let token = line.strip_suffix(b"\r").unwrap_or(&line);

            if let Some(color) = str::from_utf8(token).ok().and_then(parse_hex_color) {
                palette.colors.push(color);
            } else {
                log::warn!("skipping line {number} as it is not a color");
                palette.skipped.push(number);
            }
        }

        Ok(palette)
    }

    /// Opens and reads the hex palette file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::read(BufReader::new(File::open(path)?))
    }

    /// The colors that were parsed.
    #[must_use]
    pub fn colors(&self) -> &[Srgb<u8>] {
        &self.colors
    }

    /// The 1-based line numbers that were skipped.
    #[must_use]
    pub fn skipped_lines(&self) -> &[usize] {
        &self.skipped
    }

    /// Converts the parsed colors into a [`Palette`].
    ///
    /// # Errors
    /// Returns [`QuantizeError::EmptyPalette`] if no line held a color.
    pub fn into_palette(self) -> Result<Palette, QuantizeError> {
        Palette::try_from(self.colors)
    }

    /// Renders the colors as a Rust `const` array declaration of `r, g, b` bytes.
    ///
    /// `name` is the name of the array constant, and a `{name}_LEN` constant holds its length.
    /// `source` is mentioned in a leading comment.
    ///
    /// # Examples
    /// ```
    /// # use iif::hex::HexPalette;
    /// let palette = HexPalette::read("#ff0000\n#00FF00\n".as_bytes()).unwrap();
    /// assert_eq!(
    ///     palette.to_rust_source("COLORS", "colors.txt"),
    ///     "// generated from colors.txt\n\
    ///      pub const COLORS_LEN: usize = 6;\n\
    ///      pub const COLORS: [u8; COLORS_LEN] = [\n    \
    ///      0xff, 0x00, 0x00, 0x00, 0xff, 0x00,\n\
    ///      ];\n",
    /// );
    /// ```
    #[must_use]
    pub fn to_rust_source(&self, name: &str, source: &str) -> String {
        let mut out = String::new();
        // writing to a String cannot fail
        let _ = writeln!(out, "// generated from {source}");
        let _ = writeln!(out, "pub const {name}_LEN: usize = {};", self.colors.len() * 3);
        let _ = writeln!(out, "pub const {name}: [u8; {name}_LEN] = [");

        for row in self.colors.chunks(3) {
            out.push_str("   ");
            for color in row {
                let [r, g, b]: [u8; 3] = (*color).into();
                let _ = write!(out, " {r:#04x}, {g:#04x}, {b:#04x},");
            }
            out.push('\n');
        }

        out.push_str("];\n");
        out
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_hex_color_lines() {
        let text = "#000000\n#FfEe01\nnot a color\n#12345\n#1234567\n\n#abcdeg\n 123456\n#0a0B0c";
        let palette = HexPalette::read(text.as_bytes()).unwrap();

        assert_eq!(
            palette.colors(),
            &[
                Srgb::new(0x00, 0x00, 0x00),
                Srgb::new(0xff, 0xee, 0x01),
                Srgb::new(0x0a, 0x0b, 0x0c),
            ]
        );
        assert_eq!(palette.skipped_lines(), &[3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn windows_line_endings() {
        let palette = HexPalette::read("#102030\r\n#405060\r\n".as_bytes()).unwrap();
        assert_eq!(palette.colors(), &[Srgb::new(0x10, 0x20, 0x30), Srgb::new(0x40, 0x50, 0x60)]);
        assert!(palette.skipped_lines().is_empty());
    }

    #[test]
    fn skips_lines_that_are_not_utf8() {
        let palette = HexPalette::read(&b"#010203\n\xe9t\xe9 palette\n#040506\n"[..]).unwrap();
        assert_eq!(palette.colors(), &[Srgb::new(1, 2, 3), Srgb::new(4, 5, 6)]);
        assert_eq!(palette.skipped_lines(), &[2]);
    }

    #[test]
    fn into_palette() {
        let palette = HexPalette::read("#010203\n".as_bytes())
            .unwrap()
            .into_palette()
            .unwrap();
        assert_eq!(palette.as_bytes(), &[1, 2, 3]);

        let empty = HexPalette::read("nothing here\n".as_bytes()).unwrap();
        assert_eq!(empty.into_palette(), Err(QuantizeError::EmptyPalette));
    }

    #[test]
    fn rust_source_wraps_every_three_colors() {
        let text = "#010101\n#020202\n#030303\n#040404\n";
        let source = HexPalette::read(text.as_bytes())
            .unwrap()
            .to_rust_source("WARM", "warm.txt");

        assert_eq!(
            source,
            "// generated from warm.txt\n\
             pub const WARM_LEN: usize = 12;\n\
             pub const WARM: [u8; WARM_LEN] = [\n    \
             0x01, 0x01, 0x01, 0x02, 0x02, 0x02, 0x03, 0x03, 0x03,\n    \
             0x04, 0x04, 0x04,\n\
             ];\n"
        );
    }

    #[test]
    fn rust_source_of_empty_palette() {
        let source = HexPalette::default().to_rust_source("EMPTY", "-");
        assert_eq!(
            source,
            "// generated from -\npub const EMPTY_LEN: usize = 0;\npub const EMPTY: [u8; EMPTY_LEN] = [\n];\n"
        );
    }
}
