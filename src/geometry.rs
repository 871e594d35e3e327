//! Terminal geometry probe.

use log::debug;

/// Fallback geometry when the terminal cannot be queried.
pub const DEFAULT_COLUMNS: u16 = 80;
pub const DEFAULT_ROWS: u16 = 25;

/// Character-grid dimensions of the output terminal.
///
/// Queried once per run; there is no resize handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalGeometry {
    pub columns: u16,
    pub rows: u16,
}

impl Default for TerminalGeometry {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}

/// Query the terminal attached to stdout for its current size.
///
/// Falls back to 80x25 when the query fails or reports a degenerate
/// size (stdout redirected to a file, no controlling terminal). The
/// fallback is silent apart from a debug-level log line.
pub fn probe() -> TerminalGeometry {
    match crossterm::terminal::size() {
        Ok((columns, rows)) if columns > 0 && rows > 0 => TerminalGeometry { columns, rows },
        Ok(_) => {
            debug!("terminal reported zero size, using default geometry");
            TerminalGeometry::default()
        }
        Err(err) => {
            debug!("terminal size query failed ({}), using default geometry", err);
            TerminalGeometry::default()
        }
    }
}
