//! Image decoding to a grayscale pixel buffer.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors from loading the input image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be opened or decoded as an image.
    #[error("failed to load image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The decoded image has a zero dimension. The rescaler divides by
    /// the source dimensions, so these are rejected up front.
    #[error("image {path} has zero width or height")]
    Empty { path: PathBuf },
}

/// Decode the image at `path`, forcing single-channel 8-bit output.
///
/// # Arguments
/// * `path` - Path to the image file (any format the decoder supports)
///
/// # Returns
/// The grayscale pixel buffer, or a [`DecodeError`] for a missing file,
/// unsupported format, or corrupt data. No retries.
pub fn load_grayscale(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let img = image::open(path).map_err(|source| DecodeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let gray = img.into_luma8();
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::debug!("decoded {} as {}x{} grayscale", path.display(), width, height);
    Ok(PixelBuffer::from_raw(gray.into_raw(), width, height))
}
