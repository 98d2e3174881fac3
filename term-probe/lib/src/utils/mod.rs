//! Output helpers

pub mod cursor;
