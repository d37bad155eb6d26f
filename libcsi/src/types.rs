//! Core types: pod and volume identifiers, mounted file descriptors.
//!
//! These are shared by the target path matcher and the mounted file
//! enumerator. They are all [`Serialize`]/[`Deserialize`] so callers can hand
//! them to their own mount-tracking state or log them as JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Unique identifier of a pod, as it appears in a kubelet target path.
///
/// Conventionally a UUID, but no structure is validated beyond being a
/// non-empty path segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PodUid(pub String);

/// Name of a volume within a pod's volume set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VolumeName(pub String);

macro_rules! string_newtype {
    ($ty:ident) => {
        impl $ty {
            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_newtype!(PodUid);
string_newtype!(VolumeName);

// ---------------------------------------------------------------------------
// Mounted files
// ---------------------------------------------------------------------------

/// Descriptor of one regular file found under a mount target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MountedFile {
    /// Path of the file on disk (enumeration root joined with the relative
    /// path).
    pub path: PathBuf,
    /// File size in bytes.
    pub size: u64,
    /// Last modification time, when the platform reports one.
    #[serde(default)]
    pub modified: Option<SystemTime>,
}

/// Files under a mount target, keyed by their `/`-joined path relative to the
/// enumeration root (e.g. `"subdir/secret.txt"`).
pub type MountedFileIndex = HashMap<String, MountedFile>;
