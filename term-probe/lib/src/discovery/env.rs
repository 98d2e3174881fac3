//! Environment variable sources.
//!
//! Detectors read their input through [`EnvSource`] instead of calling
//! `std::env` directly. [`ProcessEnv`] is the live process table; plain maps
//! and slices of pairs act as fixtures.
//!
//! ## Examples
//!
//! ```
//! use std::collections::HashMap;
//! use term_probe::discovery::env::{EnvSource, ProcessEnv};
//!
//! let fixture: HashMap<String, String> =
//!     HashMap::from([("TERM".to_string(), "dumb".to_string())]);
//! assert_eq!(fixture.var("TERM").as_deref(), Some("dumb"));
//!
//! let pairs = [("COLORTERM", "24bit")];
//! assert_eq!(pairs.var("COLORTERM").as_deref(), Some("24bit"));
//!
//! // Reads whatever the current process has set
//! let _term = ProcessEnv.var("TERM");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::env;

/// A read-only table of environment variables.
///
/// Keys are case-sensitive and looked up by exact name.
pub trait EnvSource {
    /// The value of `name`, or `None` when it is not set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
///
/// Values that are not valid unicode are reported as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// First matching pair wins.
impl EnvSource for [(&str, &str)] {
    fn var(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
    }
}

impl<const N: usize> EnvSource for [(&str, &str); N] {
    fn var(&self, name: &str) -> Option<String> {
        self.as_slice().var(name)
    }
}
