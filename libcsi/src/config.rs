//! Mounted file enumeration configuration.
//!
//! Environment variables:
//! - `LIBCSI_WALK_FOLLOW_LINKS`: set to `1` to follow symbolic links while
//!   enumerating a mount target. Defaults to `0` (links are neither followed
//!   nor indexed).
//! - `LIBCSI_WALK_MAX_DEPTH`: maximum recursion depth below the root (files
//!   directly in the root are at depth 1). Unset or unparsable means
//!   unlimited.

use std::sync::LazyLock;

/// Options for [`get_mounted_files_with`](crate::fileutil::get_mounted_files_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkConfig {
    /// Follow symbolic links. When `false`, links are skipped.
    pub follow_links: bool,
    /// Maximum depth to recurse (`None` = unlimited).
    pub max_depth: Option<usize>,
}

impl WalkConfig {
    /// Build a config from a variable lookup function.
    ///
    /// [`WALK_CONFIG`] passes `std::env::var`; tests pass a map lookup.
    pub fn from_env_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            follow_links: lookup("LIBCSI_WALK_FOLLOW_LINKS")
                .map(|v| v == "1")
                .unwrap_or(false),
            max_depth: lookup("LIBCSI_WALK_MAX_DEPTH")
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|depth| *depth > 0),
        }
    }
}

/// Process-wide enumeration defaults, read from environment variables at first
/// access.
pub static WALK_CONFIG: LazyLock<WalkConfig> =
    LazyLock::new(|| WalkConfig::from_env_vars(|key| std::env::var(key).ok()));
