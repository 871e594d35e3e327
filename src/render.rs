//! Glyph grid output.

use std::io::{self, Write};

use crate::ascii::map_row;
use crate::buffer::PixelBuffer;

/// Write the buffer as ASCII art, one line per pixel row.
///
/// Rows are written top to bottom, each pixel mapped through the glyph
/// ramp, with a newline after every row. Generic over the writer so
/// tests can capture the output; `main` passes the stdout lock.
pub fn render<W: Write>(buffer: &PixelBuffer, out: &mut W) -> io::Result<()> {
    for row in buffer.rows() {
        writeln!(out, "{}", map_row(row))?;
    }
    Ok(())
}
