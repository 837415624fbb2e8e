//! Image file output.
//!
//! Binary PPM (`P6`) is written directly; PNG goes through the `image`
//! crate. Both clamp each channel to [0, 1] and scale to [0, 255] with
//! truncation. There is no gamma or tone mapping.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use whit_math::Interval;

use crate::renderer::ImageBuffer;
use crate::tracer::Color;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0:?}")]
    UnsupportedFormat(String),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Convert a colour to 8-bit RGB.
///
/// NaN channels come out as 0.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let channel = |c: f32| (255.0 * Interval::UNIT.clamp(c)) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Write the image as binary PPM.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> OutputResult<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()?;
    Ok(())
}

/// Save the image, choosing the format from the file extension.
///
/// `.ppm` and extension-less paths are written as PPM, `.png` as PNG.
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> OutputResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        None | Some("ppm") => {
            let file = File::create(path)?;
            write_ppm(image, BufWriter::new(file))?;
        }
        Some("png") => {
            image::save_buffer_with_format(
                path,
                &image.to_rgb8(),
                image.width,
                image.height,
                image::ColorType::Rgb8,
                image::ImageFormat::Png,
            )?;
        }
        Some(other) => return Err(OutputError::UnsupportedFormat(other.to_string())),
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
