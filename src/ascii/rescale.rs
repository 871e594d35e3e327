//! Aspect-preserving nearest-neighbor rescaling to a character grid.

use crate::buffer::PixelBuffer;
use crate::geometry::TerminalGeometry;

/// Rescale a source buffer to fit the terminal character grid,
/// preserving the source aspect ratio.
///
/// The fit is width-driven first: the output takes the full column
/// count and the height follows from the aspect ratio, truncated. If
/// that height exceeds the row count, the fit is redone height-driven
/// (`height = rows`, `width = trunc(rows * aspect)`), sampling from the
/// original source. The recomputed width is not re-checked against the
/// column count.
///
/// The source must have positive dimensions; the loader guarantees this
/// for decoded images.
///
/// # Arguments
/// * `source` - Grayscale source buffer
/// * `geometry` - Terminal character grid to fit within
///
/// # Returns
/// A new buffer whose height never exceeds `geometry.rows`.
pub fn rescale_to_fit(source: &PixelBuffer, geometry: TerminalGeometry) -> PixelBuffer {
    let aspect = source.width() as f32 / source.height() as f32;

    let mut width = geometry.columns as u32;
    let mut height = (width as f32 / aspect) as u32;

    if height > geometry.rows as u32 {
        height = geometry.rows as u32;
        width = (height as f32 * aspect) as u32;
    }

    resample(source, width, height)
}

/// Nearest-neighbor resample toward zero: destination `(x, y)` takes
/// source `(x * src_w / dst_w, y * src_h / dst_h)` with truncating
/// integer division.
fn resample(source: &PixelBuffer, width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width as usize) * (height as usize));

    for y in 0..height {
        for x in 0..width {
            let src_x = x * source.width() / width;
            let src_y = y * source.height() / height;
            data.push(source.get(src_x, src_y));
        }
    }

    PixelBuffer::from_raw(data, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        let data = (0..width * height).map(|i| (i % 256) as u8).collect();
        PixelBuffer::from_raw(data, width, height)
    }

    #[test]
    fn test_wide_source_triggers_height_correction() {
        // 100x50 at 80x25: aspect 2.0, width-driven gives 80x40,
        // 40 > 25 so the height-driven pass gives 50x25.
        let source = gradient(100, 50);
        let out = rescale_to_fit(
            &source,
            TerminalGeometry {
                columns: 80,
                rows: 25,
            },
        );
        assert_eq!(out.width(), 50);
        assert_eq!(out.height(), 25);
    }

    #[test]
    fn test_square_source_triggers_height_correction() {
        // 10x10 at 80x25: aspect 1.0, width-driven gives 80x80,
        // corrected to 25x25.
        let source = gradient(10, 10);
        let out = rescale_to_fit(
            &source,
            TerminalGeometry {
                columns: 80,
                rows: 25,
            },
        );
        assert_eq!(out.width(), 25);
        assert_eq!(out.height(), 25);
    }

    #[test]
    fn test_width_driven_fit_when_height_fits() {
        // 400x50 at 80x25: aspect 8.0, width-driven gives 80x10.
        let source = gradient(400, 50);
        let out = rescale_to_fit(
            &source,
            TerminalGeometry {
                columns: 80,
                rows: 25,
            },
        );
        assert_eq!(out.width(), 80);
        assert_eq!(out.height(), 10);
    }

    #[test]
    fn test_height_never_exceeds_rows() {
        let geometry = TerminalGeometry {
            columns: 80,
            rows: 25,
        };
        for (w, h) in [(1, 1), (10, 10), (100, 50), (50, 100), (3, 200), (640, 480)] {
            let out = rescale_to_fit(&gradient(w, h), geometry);
            assert!(
                out.height() <= geometry.rows as u32,
                "{}x{} source produced height {}",
                w,
                h,
                out.height()
            );
        }
    }

    #[test]
    fn test_corrected_width_follows_aspect() {
        // 100x300 at 200x15: aspect 1/3, width-driven 200x600 overflows,
        // corrected to height 15, width trunc(15 / 3) = 4. The corrected
        // width comes from the aspect ratio alone; it is not re-checked
        // against the column count.
        let out = rescale_to_fit(
            &gradient(100, 300),
            TerminalGeometry {
                columns: 200,
                rows: 15,
            },
        );
        assert_eq!(out.height(), 15);
        assert_eq!(out.width(), 4);
    }

    #[test]
    fn test_nearest_neighbor_truncates_toward_zero() {
        // 4x4 source downsampled to 2x2 picks source pixels at
        // (0,0), (2,0), (0,2), (2,2).
        #[rustfmt::skip]
        let data = vec![
            10, 11, 12, 13,
            20, 21, 22, 23,
            30, 31, 32, 33,
            40, 41, 42, 43,
        ];
        let source = PixelBuffer::from_raw(data, 4, 4);
        let out = resample(&source, 2, 2);
        assert_eq!(out.as_bytes(), &[10, 12, 30, 32]);
    }

    #[test]
    fn test_upscale_replicates_pixels() {
        let source = PixelBuffer::from_raw(vec![1, 2, 3, 4], 2, 2);
        let out = resample(&source, 4, 4);
        #[rustfmt::skip]
        let expected = vec![
            1, 1, 2, 2,
            1, 1, 2, 2,
            3, 3, 4, 4,
            3, 3, 4, 4,
        ];
        assert_eq!(out.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_rescale_idempotent_on_geometry() {
        let source = gradient(123, 77);
        let geometry = TerminalGeometry {
            columns: 80,
            rows: 25,
        };
        let a = rescale_to_fit(&source, geometry);
        let b = rescale_to_fit(&source, geometry);
        assert_eq!(a, b);
    }

    #[test]
    fn test_very_wide_source_yields_zero_height() {
        // 1000x1 at 80x25: aspect 1000.0, height truncates to 0.
        // The renderer prints nothing for such a buffer.
        let out = rescale_to_fit(
            &gradient(1000, 1),
            TerminalGeometry {
                columns: 80,
                rows: 25,
            },
        );
        assert_eq!(out.width(), 80);
        assert_eq!(out.height(), 0);
    }
}
