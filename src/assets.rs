//! Read-only access to the application's bundled assets.
//!
//! The startup path only ever needs one thing from the bundle: the text of
//! the packaged env file. [`AssetBundle`] is that narrow seam, [`DirBundle`]
//! the directory-backed implementation every platform shell uses.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read a single bundled asset.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("asset not found: {0}")]
    NotFound(String),
    #[error("failed to read asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Read-only view of the packaged application assets.
pub trait AssetBundle {
    /// Read a bundled text asset at a path relative to the asset root.
    fn read_text(&self, path: &str) -> Result<String, BundleError>;
}

/// Asset bundle rooted at a directory on disk.
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetBundle for DirBundle {
    fn read_text(&self, path: &str) -> Result<String, BundleError> {
        fs::read_to_string(self.root.join(path)).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                BundleError::NotFound(path.to_string())
            } else {
                BundleError::Io {
                    path: path.to_string(),
                    source,
                }
            }
        })
    }
}

/// Candidate locations of the bundled env file, in priority order.
///
/// Desktop packaging can nest the asset tree inside the embedded framework,
/// so that flavor probes the nested copy after the primary one.
#[cfg(feature = "desktop")]
pub fn env_file_candidates() -> &'static [&'static str] {
    &[
        "flutter_assets/.env",
        "Frameworks/App.framework/flutter_assets/.env",
    ]
}

/// Candidate locations of the bundled env file, in priority order.
#[cfg(not(feature = "desktop"))]
pub fn env_file_candidates() -> &'static [&'static str] {
    &["flutter_assets/.env"]
}

/// Locate the application's asset root for desktop builds.
///
/// Probes the executable's directory, the `data/` directory of the regular
/// desktop bundle layout, and the per-app local data directory. A root whose
/// `flutter_assets/AssetManifest.json` parses is taken immediately; failing
/// that, the first existing directory wins.
#[cfg(feature = "desktop")]
pub fn locate_bundle() -> Option<DirBundle> {
    let mut roots = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            roots.push(dir.to_path_buf());
            roots.push(dir.join("data"));
        }
    }
    if let Some(data_dir) = dirs::data_local_dir() {
        roots.push(data_dir.join("janarym"));
    }

    let mut fallback = None;
    for root in roots {
        if !root.is_dir() {
            continue;
        }
        if has_asset_manifest(&root) {
            return Some(DirBundle::new(root));
        }
        if fallback.is_none() {
            fallback = Some(root);
        }
    }

    if fallback.is_none() {
        tracing::debug!("no asset root found next to the executable");
    }
    fallback.map(DirBundle::new)
}

#[cfg(feature = "desktop")]
fn has_asset_manifest(root: &Path) -> bool {
    let manifest = root.join("flutter_assets").join("AssetManifest.json");
    match fs::read_to_string(manifest) {
        Ok(content) => {
            serde_json::from_str::<std::collections::HashMap<String, serde_json::Value>>(&content)
                .is_ok()
        }
        Err(_) => false,
    }
}
