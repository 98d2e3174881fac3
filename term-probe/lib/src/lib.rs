//! # term-probe
//!
//! Advisory terminal capability detection for Rust applications.
//!
//! This crate answers a handful of yes/no questions about the environment a
//! process is running in:
//!
//! - **Dumb terminal**: is `TERM` set to `dumb`?
//! - **Truecolor**: does `COLORTERM` advertise 24-bit color?
//! - **Garden container**: is PID 1 the Garden init process (Concourse CI)?
//! - **TTY**: is stdout attached to a terminal?
//!
//! It also ships the two escape sequences for hiding and showing the cursor.
//!
//! Every detector answers with a plain `bool`. Missing, malformed or
//! unreadable inputs all mean "no", so callers never need error handling
//! for what is only ever a hint.
//!
//! ## Quick Start
//!
//! ```
//! use term_probe::probe::TerminalProbe;
//!
//! let probe = TerminalProbe::new();
//!
//! if probe.is_true_color && !probe.is_dumb_terminal {
//!     println!("\x1b[38;2;255;128;0mOrange!\x1b[0m");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`probe`] - `TerminalProbe` snapshot of every answer
//! - [`discovery`] - Low-level detection functions
//!   - [`discovery::env`] - Injectable environment tables
//!   - [`discovery::detection`] - Dumb terminal, truecolor and TTY checks
//!   - [`discovery::sandbox`] - Garden container detection
//! - [`utils`] - Output helpers
//!   - [`utils::cursor`] - Hide/show cursor escape sequences
//! - [`error`] - Internal probe errors

pub mod discovery;
pub mod error;
pub mod probe;
pub mod utils;
