//! Intensity to glyph mapping.

use super::charset::GLYPH_RAMP;

/// Map one grayscale intensity (0-255) to a glyph from the ramp.
///
/// The index formula is `intensity * (levels - 1) / 255`, so 0 maps to
/// the darkest glyph and 255 to the lightest. Total over the full byte
/// range, no side effects.
#[inline]
pub fn glyph_for(intensity: u8) -> char {
    let levels = GLYPH_RAMP.len();
    let index = (intensity as usize * (levels - 1)) / 255;
    GLYPH_RAMP[index]
}

/// Map a row of intensities to a line of glyphs.
pub fn map_row(row: &[u8]) -> String {
    row.iter().map(|&p| glyph_for(p)).collect()
}
