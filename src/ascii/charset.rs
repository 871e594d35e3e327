//! Glyph ramp definition for ASCII rendering.

/// ASCII density ramp (10 levels).
/// Characters ordered from darkest (@) to lightest (space).
pub const GLYPH_RAMP: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];
