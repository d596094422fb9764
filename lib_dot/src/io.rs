use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use log::{debug, error, info};

use crate::constants::{DEFAULT_EXTENSION, SAVE_EXTENSIONS};
use crate::error::DotError;
use crate::grid::PixelGrid;

/// Decodes any raster format the codec recognises into RGBA8. The format is
/// sniffed from the file contents, so the extension does not have to match.
pub fn read_image(path: &Path) -> Result<RgbaImage, DotError> {
    let read_err = |source| {
        error!("Failed to read {}: {}", path.display(), source);
        DotError::Read {
            path: path.to_path_buf(),
            source,
        }
    };

    let reader = ImageReader::open(path)
        .map_err(read_err)?
        .with_guessed_format()
        .map_err(read_err)?;

    let image = reader.decode().map_err(|source| {
        error!("Failed to decode {}: {}", path.display(), source);
        DotError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image.to_rgba8())
}

/// Encodes the grid, picking the format from the path's extension.
pub fn write_image(path: &Path, grid: &PixelGrid) -> Result<(), DotError> {
    let (width, height) = grid.dimensions();
    let buffer = RgbaImage::from_raw(width, height, grid.to_rgba_bytes()).ok_or(
        DotError::BufferSize {
            expected: width as usize * height as usize * 4,
            actual: grid.pixels().len() * 4,
        },
    )?;

    let encode_err = |source| {
        error!("Failed to encode {}: {}", path.display(), source);
        DotError::Encode {
            path: path.to_path_buf(),
            source,
        }
    };

    let format = ImageFormat::from_path(path).map_err(encode_err)?;
    let image = DynamicImage::ImageRgba8(buffer);

    // JPEG carries no alpha channel.
    let result = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()).save_with_format(path, format),
        _ => image.save_with_format(path, format),
    };

    match result {
        Ok(()) => {
            info!("Saved {}x{} image to {}", width, height, path.display());
            Ok(())
        }
        Err(image::ImageError::IoError(e)) => {
            error!("Failed to write {}: {}", path.display(), e);
            Err(DotError::Write {
                path: path.to_path_buf(),
                source: e,
            })
        }
        Err(source) => Err(encode_err(source)),
    }
}

/// Applies the save-as extension rules: no extension gets `.png`, a supported
/// one is kept, anything else is rejected before a file is touched.
pub fn resolve_save_path(path: &Path) -> Result<PathBuf, DotError> {
    let Some(ext) = path.extension() else {
        let mut with_default = path.as_os_str().to_owned();
        with_default.push(DEFAULT_EXTENSION);
        return Ok(PathBuf::from(with_default));
    };

    let ext = format!(".{}", ext.to_string_lossy());
    if SAVE_EXTENSIONS
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(&ext))
    {
        Ok(path.to_path_buf())
    } else {
        Err(DotError::UnsupportedExtension(ext))
    }
}
