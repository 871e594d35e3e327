//! Grayscale pixel buffer type shared across the pipeline.

/// Rectangular grid of 8-bit grayscale intensities, row-major order.
///
/// The buffer is owned by whichever pipeline stage currently holds it:
/// the loader produces one, the rescaler reads it and allocates a new
/// one, and the renderer consumes the final result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Wrap raw row-major pixel data.
    ///
    /// # Panics
    /// Panics if `data.len()` does not equal `width * height`.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "pixel data length must match dimensions"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intensity at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is out of bounds. The check covers both
    /// axes, so an `x` past the row end never reads into the next row.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        self.data[(y * self.width + x) as usize]
    }

    /// Iterate over rows as byte slices, top to bottom.
    ///
    /// A zero-width buffer yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.data[y * width..(y + 1) * width])
    }

    /// Raw row-major pixel data.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
