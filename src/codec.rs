//! Reading and writing image files through the [`image`] crate.

use crate::Image;
use image::{
    codecs::jpeg::JpegEncoder, ColorType, DynamicImage, ExtendedColorType, ImageEncoder,
    ImageFormat,
};
use std::{
    ffi::OsString,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// The JPEG quality used when writing `.jpg` and `.jpeg` files.
///
/// Higher qualities tend to make the output much larger than the input.
pub const JPEG_QUALITY: u8 = 90;

/// The suffix appended to the file stem of the input to get the default output path.
pub const OUTPUT_SUFFIX: &str = "_by_iif";

/// An error from reading or writing an image file.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The image could not be decoded or encoded.
    #[error(transparent)]
    Image(#[from] image::ImageError),

    /// The file could not be created or written.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The image has more channels than any output format supports.
    #[error("cannot encode an image with {0} channels")]
    TooManyChannels(u8),

    /// The path has no file extension to pick an output format from.
    #[error("{} has no file extension", .0.display())]
    MissingExtension(PathBuf),

    /// The file extension does not name a supported output format.
    #[error("unsupported output format: {0} (expected jpg, jpeg, png, bmp, or tga)")]
    UnsupportedFormat(String),
}

/// The file formats an [`Image`] can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG with a quality of [`JPEG_QUALITY`]. Alpha channels are dropped.
    Jpeg,
    /// PNG.
    Png,
    /// BMP.
    Bmp,
    /// TGA.
    Tga,
}

impl OutputFormat {
    /// Picks the output format from the (case insensitive) file extension of `path`.
    ///
    /// # Errors
    /// Returns an error if `path` has no extension or the extension is not one of
    /// `jpg`, `jpeg`, `png`, `bmp`, or `tga`.
    pub fn from_path(path: &Path) -> Result<Self, CodecError> {
        let ext = path
            .extension()
            .ok_or_else(|| CodecError::MissingExtension(path.to_path_buf()))?
            .to_string_lossy()
            .to_ascii_lowercase();

        match ext.as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            "bmp" => Ok(Self::Bmp),
            "tga" => Ok(Self::Tga),
            _ => Err(CodecError::UnsupportedFormat(ext)),
        }
    }
}

/// Returns the default output path for `input`: `<stem>_by_iif.<ext>`.
///
/// Like the input, the output keeps its extension (and so its format),
/// but it is placed in the current directory instead of next to the input.
///
/// # Examples
/// ```
/// # use iif::codec::default_output_path;
/// # use std::path::{Path, PathBuf};
/// assert_eq!(
///     default_output_path(Path::new("photos/cat.png")),
///     Some(PathBuf::from("cat_by_iif.png")),
/// );
/// assert_eq!(default_output_path(Path::new("..")), None);
/// ```
#[must_use]
pub fn default_output_path(input: &Path) -> Option<PathBuf> {
    let stem = input.file_stem()?;
    let mut name = OsString::from(stem);
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    Some(PathBuf::from(name))
}

impl From<DynamicImage> for Image {
    /// Converts a decoded image into an [`Image`] with 8-bit channels.
    ///
    /// 8-bit images keep their channel count.
    /// Images with other sample types are converted to 8-bit grayscale or RGB,
    /// with an alpha channel if they had one.
    fn from(image: DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        let (channels, data) = match image {
            DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (4, buf.into_raw()),
            image => {
                let color = image.color();
                match (color.has_color(), color.has_alpha()) {
                    (false, false) => (1, image.into_luma8().into_raw()),
                    (false, true) => (2, image.into_luma_alpha8().into_raw()),
                    (true, false) => (3, image.into_rgb8().into_raw()),
                    (true, true) => (4, image.into_rgba8().into_raw()),
                }
            }
        };

        Self::new_unchecked(width, height, channels, data)
    }
}

impl Image {
    /// Decodes the image file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        Ok(image::open(path)?.into())
    }

    /// The [`ColorType`] matching the channel count of this image.
    ///
    /// # Errors
    /// Returns an error for channel counts above 4, which no image format supports.
    fn color_type(&self) -> Result<ColorType, CodecError> {
        match self.channels() {
            1 => Ok(ColorType::L8),
            2 => Ok(ColorType::La8),
            3 => Ok(ColorType::Rgb8),
            4 => Ok(ColorType::Rgba8),
            n => Err(CodecError::TooManyChannels(n)),
        }
    }

    /// Encodes the image to `path`, picking the format from the file extension.
    ///
    /// See [`OutputFormat::from_path`] for the supported extensions.
    ///
    /// # Errors
    /// Returns an error if the extension is not supported or the image cannot be encoded or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CodecError> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        self.save_with_format(path, format)
    }

    /// Encodes the image to `path` in the given format.
    ///
    /// # Errors
    /// Returns an error if the image cannot be encoded or written.
    pub fn save_with_format(&self, path: &Path, format: OutputFormat) -> Result<(), CodecError> {
        let color = self.color_type()?;
        let (width, height) = self.dimensions();

        let image_format = match format {
            OutputFormat::Jpeg => {
                let (data, color) = self.without_alpha(color);
                let mut out = BufWriter::new(File::create(path)?);
                JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY).write_image(
                    &data,
                    width,
                    height,
                    ExtendedColorType::from(color),
                )?;
                out.flush()?;
                return Ok(());
            }
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tga => ImageFormat::Tga,
        };

        image::save_buffer_with_format(path, self.as_raw(), width, height, color, image_format)?;
        Ok(())
    }

    /// Returns the pixel data with any alpha channel removed.
    fn without_alpha(&self, color: ColorType) -> (Vec<u8>, ColorType) {
        match color {
            ColorType::La8 => (self.as_raw().iter().step_by(2).copied().collect(), ColorType::L8),
            ColorType::Rgba8 => (
                self.as_raw()
                    .chunks_exact(4)
                    .flat_map(|p| [p[0], p[1], p[2]])
                    .collect(),
                ColorType::Rgb8,
            ),
            color => (self.as_raw().to_vec(), color),
        }
    }
}
