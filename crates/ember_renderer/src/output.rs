//! Image encoders for finished films.
//!
//! Both formats emit the top scanline first. Films are expected to hold
//! gamma-encoded colors in [0, 1]; anything outside is clamped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use thiserror::Error;

use crate::{film::to_rgb8, Film};

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Write a plain-text PPM (P3) image.
pub fn write_ppm<W: Write>(film: &Film, mut writer: W) -> io::Result<()> {
    write!(writer, "P3\n{} {}\n255\n", film.width(), film.height())?;
    for row in film.rows_top_down() {
        for color in row {
            let [r, g, b] = to_rgb8(*color);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }
    Ok(())
}

/// Write an 8-bit RGB PNG image.
pub fn write_png<W: Write>(film: &Film, writer: W) -> OutputResult<()> {
    PngEncoder::new(writer).write_image(&film.to_rgb8(), film.width(), film.height(), ColorType::Rgb8)?;
    Ok(())
}

/// Save a film as a PPM file.
pub fn save_ppm(film: &Film, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_ppm(film, &mut writer)?;
    writer.flush()?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Save a film as a PNG file.
pub fn save_png(film: &Film, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_png(film, &mut writer)?;
    writer.flush()?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
