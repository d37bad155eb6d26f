//! Kubelet mount target path parsing.
//!
//! The kubelet publishes a CSI volume for a pod at
//!
//! ```text
//! <kubelet-root>/pods/<pod-uid>/volumes/kubernetes.io~csi/<volume-name>/mount
//! ```
//!
//! [`TargetPath::parse`] recovers `<pod-uid>` and `<volume-name>` from such a
//! path. The six-segment shape must end the path but may follow any prefix
//! (or none), and the path may use `/`, `\` or escaped `\\` as separators.
//! Anything that does not fit the shape is a non-match, never an error.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::trace;

use crate::error::CsiError;
use crate::types::{PodUid, VolumeName};

/// Directory holding per-pod state under the kubelet root.
pub const PODS_SEGMENT: &str = "pods";
/// Directory holding a pod's volumes.
pub const VOLUMES_SEGMENT: &str = "volumes";
/// Volume plugin directory used for CSI volumes.
pub const CSI_DRIVER_SEGMENT: &str = "kubernetes.io~csi";
/// Final segment of a CSI target path.
pub const MOUNT_SEGMENT: &str = "mount";

const PATTERN_LEN: usize = 6;

/// Pod and volume identifiers extracted from a CSI mount target path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath {
    /// UID of the pod the volume is published for.
    pub pod_uid: PodUid,
    /// Name of the volume inside the pod spec.
    pub volume_name: VolumeName,
}

impl TargetPath {
    /// Create a target path from its pod UID and volume name.
    pub fn new(pod_uid: impl Into<PodUid>, volume_name: impl Into<VolumeName>) -> Self {
        Self {
            pod_uid: pod_uid.into(),
            volume_name: volume_name.into(),
        }
    }

    /// Match `path` against the CSI target path shape.
    ///
    /// Only the last six segments are considered, so `.../mount/file` is not
    /// a target path. A single trailing separator is ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let mut segments = split_segments(path);
        if segments.len() > 1 && segments.last() == Some(&"") {
            segments.pop();
        }
        let found = segments
            .len()
            .checked_sub(PATTERN_LEN)
            .and_then(|start| match_window(&segments[start..]));
        if found.is_none() {
            trace!(%path, "no CSI target path pattern found");
        }
        found
    }

    /// Build the target path the kubelet would use under `kubelet_root`.
    pub fn to_path(&self, kubelet_root: impl AsRef<Path>) -> PathBuf {
        kubelet_root
            .as_ref()
            .join(PODS_SEGMENT)
            .join(self.pod_uid.as_str())
            .join(VOLUMES_SEGMENT)
            .join(CSI_DRIVER_SEGMENT)
            .join(self.volume_name.as_str())
            .join(MOUNT_SEGMENT)
    }
}

/// Renders the `/`-separated six-segment suffix, without any kubelet root.
impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PODS_SEGMENT}/{}/{VOLUMES_SEGMENT}/{CSI_DRIVER_SEGMENT}/{}/{MOUNT_SEGMENT}",
            self.pod_uid, self.volume_name
        )
    }
}

impl FromStr for TargetPath {
    type Err = CsiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            CsiError::InvalidArgument(format!("{s:?} is not a CSI volume target path"))
        })
    }
}

fn match_window(window: &[&str]) -> Option<TargetPath> {
    match window {
        [pods, uid, volumes, driver, volume, mount]
            if *pods == PODS_SEGMENT
                && *volumes == VOLUMES_SEGMENT
                && *driver == CSI_DRIVER_SEGMENT
                && *mount == MOUNT_SEGMENT
                && !uid.is_empty()
                && !volume.is_empty() =>
        {
            Some(TargetPath::new(*uid, *volume))
        }
        _ => None,
    }
}

/// Split `path` into segments.
///
/// A single `/` or any run of `\` is one boundary, so `a\\b`, `a\b` and `a/b`
/// all yield `["a", "b"]`. Leading, trailing and doubled `/` produce empty
/// segments.
pub fn split_segments(path: &str) -> Vec<&str> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    // Separators are ASCII, so every index we slice at is a char boundary.
    while i < bytes.len() {
        match bytes[i] {
            b'/' => {
                segments.push(&path[start..i]);
                i += 1;
                start = i;
            }
            b'\\' => {
                segments.push(&path[start..i]);
                while i < bytes.len() && bytes[i] == b'\\' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    segments.push(&path[start..]);
    segments
}

/// Pod UID from a CSI mount target path, or `""` if the path does not match.
pub fn get_pod_uid_from_target_path(target_path: &str) -> String {
    TargetPath::parse(target_path)
        .map(|t| t.pod_uid.0)
        .unwrap_or_default()
}

/// Volume name from a CSI mount target path, or `""` if the path does not
/// match.
pub fn get_volume_name_from_target_path(target_path: &str) -> String {
    TargetPath::parse(target_path)
        .map(|t| t.volume_name.0)
        .unwrap_or_default()
}
