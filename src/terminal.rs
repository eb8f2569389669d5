//! Terminal geometry detection.

/// Fallback used when the terminal size cannot be queried.
pub const DEFAULT_COLUMNS: u16 = 80;
pub const DEFAULT_ROWS: u16 = 24;

/// Terminal size in character cells.
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

/// Query the size of the controlling terminal.
///
/// `COLUMNS` and `LINES` override the detected size when set, so output can
/// be sized for a pipe or a different terminal. Without a terminal the size
/// falls back to 80x24.
pub fn terminal_size() -> TerminalGeometry {
    let (columns, rows) = crossterm::terminal::size()
        .ok()
        .filter(|&(c, r)| c > 0 && r > 0)
        .unwrap_or((DEFAULT_COLUMNS, DEFAULT_ROWS));
    let geometry = with_env_overrides(TerminalGeometry { columns, rows }, |key| {
        std::env::var(key).ok()
    });
    log::debug!("Terminal size: {:?}", geometry);
    geometry
}

/// Apply `COLUMNS`/`LINES` from `lookup` over `detected`.
///
/// Each value is replaced independently, and only when it parses as a
/// non-zero number.
pub fn with_env_overrides<F>(detected: TerminalGeometry, lookup: F) -> TerminalGeometry
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str, current: u16| {
        lookup(key)
            .and_then(|v| v.trim().parse::<u16>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(current)
    };

    TerminalGeometry {
        columns: read("COLUMNS", detected.columns),
        rows: read("LINES", detected.rows),
    }
}
