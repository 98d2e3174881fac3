//! Garden container detection.
//!
//! [Garden](https://github.com/cloudfoundry/garden) is the container runtime
//! behind Concourse CI. Every Garden container runs `/tmp/garden-init` as
//! PID 1, so a process can tell it is inside one by reading the command line
//! of PID 1 from procfs.
//!
//! The check is a best-effort heuristic. Its hard guarantee is robustness:
//! a missing, empty, unreadable or garbled metadata file yields `false`, and
//! nothing here panics.
//!
//! ## Examples
//!
//! ```
//! use term_probe::discovery::sandbox::{is_garden_container, is_garden_init_cmdline};
//!
//! if is_garden_container() {
//!     println!("Running inside Concourse");
//! }
//!
//! assert!(is_garden_init_cmdline(b"/tmp/garden-init\0"));
//! assert!(!is_garden_init_cmdline(b"/sbin/init\0"));
//! ```

use std::fs;
use std::path::Path;

use crate::error::{ProbeError, Result};

/// Executable path of the Garden init process.
pub const GARDEN_INIT: &str = "/tmp/garden-init";

/// Command line of PID 1 on Linux.
pub const INIT_CMDLINE_PATH: &str = "/proc/1/cmdline";

/// Whether the current process runs inside a Garden container.
///
/// Only Linux exposes the metadata this relies on; every other platform
/// answers `false` without touching the filesystem.
pub fn is_garden_container() -> bool {
    collapse(INIT_CMDLINE_PATH, probe_current_platform())
}

/// Whether the cmdline file at `path` belongs to the Garden init process.
///
/// Useful when procfs is mounted somewhere other than `/proc`.
pub fn is_garden_container_at<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    collapse(path, probe_init_cmdline(path))
}

/// Read the cmdline file at `path` and check it for the Garden signature.
///
/// Returns `Ok(false)` for readable content that does not match (including
/// an empty file) and `Err` when the file cannot be read at all.
pub fn probe_init_cmdline<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| ProbeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(is_garden_init_cmdline(&content))
}

/// Whether raw `/proc/<pid>/cmdline` bytes start with the Garden init path.
///
/// The argument vector is NUL separated; only `argv[0]` is compared and the
/// trailing NUL is optional.
pub fn is_garden_init_cmdline(cmdline: &[u8]) -> bool {
    cmdline
        .split(|byte| *byte == 0)
        .next()
        .is_some_and(|argv0| argv0 == GARDEN_INIT.as_bytes())
}

#[cfg(target_os = "linux")]
fn probe_current_platform() -> Result<bool> {
    probe_init_cmdline(INIT_CMDLINE_PATH)
}

#[cfg(not(target_os = "linux"))]
fn probe_current_platform() -> Result<bool> {
    Err(ProbeError::UnsupportedPlatform(std::env::consts::OS))
}

/// The single place where probe errors become a negative answer.
fn collapse(path: impl AsRef<Path>, outcome: Result<bool>) -> bool {
    match outcome {
        Ok(garden) => {
            tracing::debug!(
                path = %path.as_ref().display(),
                garden,
                "Checked init process for Garden signature"
            );
            garden
        }
        Err(e) => {
            tracing::debug!(
                path = %path.as_ref().display(),
                error = %e,
                "Could not inspect init process, assuming no Garden container"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn cmdline_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_signature_with_trailing_nul() {
        assert!(is_garden_init_cmdline(b"/tmp/garden-init\0"));
    }

    #[test]
    fn test_signature_without_trailing_nul() {
        assert!(is_garden_init_cmdline(b"/tmp/garden-init"));
    }

    #[test]
    fn test_signature_ignores_arguments() {
        assert!(is_garden_init_cmdline(b"/tmp/garden-init\0--flag\0value\0"));
    }

    #[test]
    fn test_signature_rejects_other_init_systems() {
        assert!(!is_garden_init_cmdline(b"/sbin/init\0splash\0"));
        assert!(!is_garden_init_cmdline(b"/lib/systemd/systemd\0"));
        assert!(!is_garden_init_cmdline(b"/bin/sh\0-c\0/tmp/garden-init\0"));
    }

    #[test]
    fn test_signature_rejects_prefixes_and_suffixes() {
        assert!(!is_garden_init_cmdline(b"/tmp/garden-ini"));
        assert!(!is_garden_init_cmdline(b"/tmp/garden-init2\0"));
        assert!(!is_garden_init_cmdline(b" /tmp/garden-init\0"));
        assert!(!is_garden_init_cmdline(b"garden-init\0"));
    }

    #[test]
    fn test_signature_rejects_empty_and_binary() {
        assert!(!is_garden_init_cmdline(b""));
        assert!(!is_garden_init_cmdline(b"\0"));
        assert!(!is_garden_init_cmdline(&[0xff, 0xfe, 0x00, 0x1b, 0x5b]));
    }

    #[test]
    fn test_probe_matching_file() {
        let file = cmdline_file(b"/tmp/garden-init\0");
        assert!(probe_init_cmdline(file.path()).unwrap());
        assert!(is_garden_container_at(file.path()));
    }

    #[test]
    fn test_probe_non_matching_file() {
        let file = cmdline_file(b"/usr/bin/dumb-init\0--\0bash\0");
        assert!(!probe_init_cmdline(file.path()).unwrap());
        assert!(!is_garden_container_at(file.path()));
    }

    #[test]
    fn test_probe_empty_file() {
        let file = cmdline_file(b"");
        assert!(!probe_init_cmdline(file.path()).unwrap());
        assert!(!is_garden_container_at(file.path()));
    }

    #[test]
    fn test_probe_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("cmdline");

        let err = probe_init_cmdline(&missing).unwrap_err();
        assert!(matches!(err, ProbeError::Io { ref path, .. } if path == &missing));
        assert!(!is_garden_container_at(&missing));
    }

    #[test]
    fn test_probe_directory_is_error() {
        let dir = TempDir::new().unwrap();

        assert!(probe_init_cmdline(dir.path()).is_err());
        assert!(!is_garden_container_at(dir.path()));
    }

    #[test]
    fn test_error_message_names_path() {
        let err = probe_init_cmdline("/definitely/not/here/cmdline").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here/cmdline"));
    }

    #[test]
    fn test_collapse_maps_errors_to_false() {
        let outcome = Err(ProbeError::UnsupportedPlatform("plan9"));
        assert!(!collapse("/proc/1/cmdline", outcome));
        assert!(collapse("/proc/1/cmdline", Ok(true)));
    }

    #[test]
    fn test_is_garden_container_does_not_panic() {
        // Deliberately no assertion on the value: inside Concourse this is true
        let _ = is_garden_container();
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: arbitrary cmdline bytes never panic
        #[test]
        fn signature_check_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let _ = is_garden_init_cmdline(&bytes);
        }

        /// Property: anything after the first NUL is irrelevant
        #[test]
        fn trailing_arguments_are_ignored(tail in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut cmdline = b"/tmp/garden-init\0".to_vec();
            cmdline.extend_from_slice(&tail);
            prop_assert!(is_garden_init_cmdline(&cmdline));
        }
    }
}
