//! Terminal and sandbox discovery
//!
//! Functions for classifying the terminal a process writes to and the
//! container it runs in. None of them fail; unknown means `false`.

pub mod detection;
pub mod env;
pub mod sandbox;
