use serde::{Deserialize, Serialize};

use crate::discovery::detection::{is_dumb_terminal_in, is_true_color_in, is_tty};
use crate::discovery::env::{EnvSource, ProcessEnv};
use crate::discovery::sandbox::is_garden_container;

fn new_probe<E: EnvSource + ?Sized>(env: &E) -> TerminalProbe {
    TerminalProbe {
        is_tty: is_tty(),
        is_dumb_terminal: is_dumb_terminal_in(env),
        is_true_color: is_true_color_in(env),
        is_garden_container: is_garden_container(),
    }
}

/// A snapshot of every answer this crate can give.
///
/// Nothing is cached; build a new probe to see changes in the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalProbe {
    /// Whether stdout is attached to a terminal
    pub is_tty: bool,
    /// Whether `TERM=dumb`
    pub is_dumb_terminal: bool,
    /// Whether `COLORTERM` advertises 24-bit color
    pub is_true_color: bool,
    /// Whether PID 1 is the Garden init process
    pub is_garden_container: bool,
}

impl Default for TerminalProbe {
    fn default() -> TerminalProbe {
        new_probe(&ProcessEnv)
    }
}

impl TerminalProbe {
    pub fn new() -> TerminalProbe {
        new_probe(&ProcessEnv)
    }

    /// Probe with an injected environment table.
    ///
    /// TTY and sandbox status still come from the operating system.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> TerminalProbe {
        new_probe(env)
    }

    /// Whether colored output is worth emitting at all.
    pub fn supports_color(&self) -> bool {
        self.is_tty && !self.is_dumb_terminal
    }
}
