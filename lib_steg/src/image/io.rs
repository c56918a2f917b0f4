use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat, ImageReader};
use log::{debug, info, warn};
use thiserror::Error;

use super::format::Image;
use crate::constants::{FILE_EXT, FORMAT_NAME};

#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("failed to read image {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("failed to write image {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("pixel buffer does not match {width}x{height}")]
    BufferMismatch { width: u32, height: u32 },
}

fn read_dynamic(path: &Path) -> Result<image::DynamicImage, ImageError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

/// Loads a raster file as an RGBA8 grid.
pub fn open(path: impl AsRef<Path>) -> Result<Image, ImageIoError> {
    let path = path.as_ref();
    let dynamic = read_dynamic(path).map_err(|source| ImageIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded {} with colour type {:?}", path.display(), dynamic.color());

    let image = Image::from(dynamic);
    info!(
        "Opened {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Writes the grid as PNG, whatever the extension of `path`.
pub fn save(image: Image, path: impl AsRef<Path>) -> Result<(), ImageIoError> {
    let path = path.as_ref();
    let has_png_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXT));
    if !has_png_extension {
        warn!(
            "{} does not end in .{}; it will still be written as {}",
            path.display(),
            FILE_EXT,
            FORMAT_NAME
        );
    }

    let (width, height) = (image.width(), image.height());
    let rgba = image
        .into_rgba_image()
        .ok_or(ImageIoError::BufferMismatch { width, height })?;

    rgba.save_with_format(path, ImageFormat::Png)
        .map_err(|source| ImageIoError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Saved {} ({}x{})", path.display(), width, height);
    Ok(())
}
