//! # libcsi — mount target utilities for RK8s CSI plugins
//!
//! `libcsi` holds the small, stateless helpers a CSI node plugin needs around
//! kubelet mount targets: recovering the pod UID and volume name from a
//! target path, and listing the files materialized under a mounted volume.
//! It follows the RK8s conventions (`tracing` for observability, `thiserror`
//! for structured errors, Tokio for async callers).
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |---|---|
//! | [`target_path`] | Parse `.../pods/<uid>/volumes/kubernetes.io~csi/<name>/mount`. |
//! | [`fileutil`] | Recursive mounted file enumeration with `/`-joined keys. |
//! | [`types`] | `PodUid`, `VolumeName`, `MountedFile`, `MountedFileIndex`. |
//! | [`error`] | [`CsiError`] enum covering enumeration failures. |
//! | [`config`] | [`WalkConfig`] and its environment-derived default. |

pub mod config;
pub mod error;
pub mod fileutil;
pub mod target_path;
pub mod types;

// Re-export the most commonly used items at crate root for convenience.
pub use config::WalkConfig;
pub use error::CsiError;
pub use fileutil::{get_mounted_files, get_mounted_files_async, get_mounted_files_with};
pub use target_path::{
    TargetPath, get_pod_uid_from_target_path, get_volume_name_from_target_path,
};
pub use types::*;
