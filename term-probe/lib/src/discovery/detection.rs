//! Terminal capability detection from environment variables.
//!
//! Capabilities are signaled by a couple of well-known variables with no
//! formal schema. Only exact, known values count; anything else is treated
//! as "capability absent".
//!
//! ## Examples
//!
//! ```
//! use term_probe::discovery::detection::{is_dumb_terminal_in, is_true_color_in};
//!
//! assert!(is_dumb_terminal_in(&[("TERM", "dumb")]));
//! assert!(is_true_color_in(&[("COLORTERM", "24bit")]));
//! assert!(!is_true_color_in(&[("COLORTERM", "TrueColor")]));
//! ```

use std::io::IsTerminal;

use crate::discovery::env::{EnvSource, ProcessEnv};

/// Environment variable naming the terminal type.
pub const TERM: &str = "TERM";

/// Environment variable advertising extended color support.
pub const COLORTERM: &str = "COLORTERM";

/// The `TERM` value of a terminal without cursor addressing or color.
pub const DUMB_TERM: &str = "dumb";

/// `COLORTERM` values that advertise 24-bit color.
pub const TRUE_COLOR_VALUES: [&str; 2] = ["truecolor", "24bit"];

/// Whether the current process runs in a dumb terminal (`TERM=dumb`).
pub fn is_dumb_terminal() -> bool {
    is_dumb_terminal_in(&ProcessEnv)
}

/// Whether `env` describes a dumb terminal.
///
/// True only when `TERM` is exactly `dumb`. Unset, empty, or any other
/// spelling (including `DUMB`) is false.
pub fn is_dumb_terminal_in<E: EnvSource + ?Sized>(env: &E) -> bool {
    let term = env.var(TERM);
    let dumb = term.as_deref() == Some(DUMB_TERM);

    tracing::debug!(
        var = TERM,
        value = ?term,
        dumb,
        "Checked for dumb terminal"
    );
    dumb
}

/// Whether the current process's terminal supports 24-bit color.
pub fn is_true_color() -> bool {
    is_true_color_in(&ProcessEnv)
}

/// Whether `env` advertises 24-bit color through `COLORTERM`.
///
/// The value must match one of [`TRUE_COLOR_VALUES`] exactly.
pub fn is_true_color_in<E: EnvSource + ?Sized>(env: &E) -> bool {
    let colorterm = env.var(COLORTERM);
    let true_color = colorterm
        .as_deref()
        .is_some_and(|value| TRUE_COLOR_VALUES.contains(&value));

    tracing::debug!(
        var = COLORTERM,
        value = ?colorterm,
        true_color,
        "Checked for truecolor support"
    );
    true_color
}

/// Whether stdout is attached to a terminal.
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}
