//! ASCII rendering core: glyph ramp, intensity mapping, and the
//! aspect-preserving rescaler.
//!
//! The pipeline feeds a grayscale [`PixelBuffer`](crate::buffer::PixelBuffer)
//! through two stages here:
//!
//! 1. **Rescaling** - fit the image to the terminal character grid with
//!    nearest-neighbor sampling, preserving aspect ratio.
//! 2. **Character mapping** - map each intensity byte to one glyph from
//!    the fixed density ramp.

mod charset;
mod mapping;
mod rescale;

pub use charset::GLYPH_RAMP;
pub use mapping::{glyph_for, map_row};
pub use rescale::rescale_to_fit;
