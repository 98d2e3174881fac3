//! Cursor visibility escape sequences (DECTCEM).
//!
//! - `\x1b[?25l` hides the cursor
//! - `\x1b[?25h` shows the cursor
//!
//! The `_to` variants write to any [`Write`] sink and report errors. The
//! stdout variants are fire-and-forget.

use std::io::{self, Write};

/// Hide cursor: `CSI ? 25 l`
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";

/// Show cursor: `CSI ? 25 h`
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";

/// Hide the terminal cursor on stdout.
///
/// Write errors (e.g. a closed pipe) are ignored.
pub fn hide_cursor() {
    emit_to_stdout(CURSOR_HIDE);
}

/// Show the terminal cursor on stdout.
///
/// Write errors (e.g. a closed pipe) are ignored.
pub fn show_cursor() {
    emit_to_stdout(CURSOR_SHOW);
}

/// Write the hide cursor sequence to `w`.
#[inline]
pub fn hide_cursor_to<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(CURSOR_HIDE)
}

/// Write the show cursor sequence to `w`.
#[inline]
pub fn show_cursor_to<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(CURSOR_SHOW)
}

fn emit_to_stdout(sequence: &[u8]) {
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(sequence).and_then(|()| stdout.flush()) {
        tracing::debug!(error = %e, "Failed to write cursor sequence to stdout");
    }
}

/// Hides the cursor for as long as the guard lives.
///
/// ```
/// use term_probe::utils::cursor::CursorGuard;
///
/// let mut out: Vec<u8> = Vec::new();
/// {
///     let _guard = CursorGuard::new(&mut out).unwrap();
///     // draw a spinner...
/// }
/// assert_eq!(out, b"\x1b[?25l\x1b[?25h");
/// ```
pub struct CursorGuard<W: Write> {
    writer: W,
}

impl<W: Write> CursorGuard<W> {
    /// Hide the cursor on `writer`; it is shown again when the guard drops.
    pub fn new(mut writer: W) -> io::Result<Self> {
        hide_cursor_to(&mut writer)?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Access the underlying writer while the cursor is hidden.
    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        let restored = show_cursor_to(&mut self.writer).and_then(|()| self.writer.flush());
        if let Err(e) = restored {
            tracing::debug!(error = %e, "Failed to restore cursor visibility");
        }
    }
}
