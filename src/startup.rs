//! Application-startup configuration of the mapping SDK.
//!
//! Runs synchronously on the platform entry path, once per process: find
//! the bundled env file, pull the MapKit API key out of it and hand the key
//! to the SDK. Nothing here may abort or delay application launch; every
//! failure degrades to "maps unavailable" behind a single warning.

use std::path::PathBuf;
use std::sync::Once;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::assets::{AssetBundle, DirBundle, env_file_candidates};
use crate::envfile;
use crate::mapkit::{MapKit, MapSdk};

/// Locale handed to MapKit right after the API key on flavors that pin one.
#[cfg(feature = "desktop")]
const MAPKIT_LOCALE: Option<&str> = Some("ru_RU");
#[cfg(not(feature = "desktop"))]
const MAPKIT_LOCALE: Option<&str> = None;

/// Terminal outcome of the one-shot SDK initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitOutcome {
    /// The API key was handed to the SDK.
    Initialized,
    /// No usable key was found; the SDK was left untouched.
    SkippedNoKey,
}

/// Where the API key came from, for the startup log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySource {
    Environment,
    BundledAsset,
}

/// Extract the MapKit API key from the platform's bundled env file.
///
/// Probes the platform candidate locations in priority order. All I/O and
/// parsing failures degrade to `None`; this never returns an error.
pub fn load_api_key(bundle: &dyn AssetBundle) -> Option<String> {
    load_api_key_from(bundle, env_file_candidates())
}

/// [`load_api_key`] over an explicit candidate list.
///
/// The first candidate that opens *and* contains a
/// `YANDEX_MAPKIT_API_KEY=` line wins. A candidate that fails to open is
/// skipped, and so is an opened candidate without a matching line.
pub fn load_api_key_from(bundle: &dyn AssetBundle, candidates: &[&str]) -> Option<String> {
    for path in candidates {
        let content = match bundle.read_text(path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path, %err, "env file candidate skipped");
                continue;
            }
        };
        if let Some(value) = envfile::extract(&content, envfile::YANDEX_MAPKIT_API_KEY) {
            debug!(path, "MapKit API key found in bundled env file");
            return Some(value);
        }
        debug!(path, "env file candidate has no MapKit API key");
    }
    None
}

/// Hand the extracted key to the SDK, or warn and skip when there is none.
///
/// An absent key and a blank key are the same case: the SDK is not touched
/// and exactly one warning is emitted. The current flavor's locale profile
/// is applied after the key.
pub fn initialize_mapkit(sdk: &dyn MapSdk, key: Option<&str>) -> InitOutcome {
    initialize_mapkit_with_locale(sdk, key, MAPKIT_LOCALE)
}

/// [`initialize_mapkit`] with an explicit locale profile.
///
/// The API key always goes in before the locale: MapKit ignores a locale
/// set on an unkeyed instance.
pub fn initialize_mapkit_with_locale(
    sdk: &dyn MapSdk,
    key: Option<&str>,
    locale: Option<&str>,
) -> InitOutcome {
    let key = key.map(str::trim).filter(|key| !key.is_empty());
    let Some(key) = key else {
        warn!("YANDEX_MAPKIT_API_KEY is empty. Map and routing may be unavailable.");
        return InitOutcome::SkippedNoKey;
    };

    sdk.set_api_key(key);
    if let Some(locale) = locale {
        sdk.set_locale(locale);
    }
    InitOutcome::Initialized
}

static CONFIGURE: Once = Once::new();
static OUTCOME: OnceCell<InitOutcome> = OnceCell::new();

/// Configure MapKit from the asset bundle rooted at `asset_root`.
///
/// This is the mobile entry point; the shell passes the directory the
/// platform unpacked the application assets into.
pub fn configure_mapkit_at(asset_root: impl Into<PathBuf>) -> InitOutcome {
    configure_mapkit_with(&DirBundle::new(asset_root))
}

/// Desktop entry point: discover the asset root next to the executable,
/// then configure MapKit from it.
#[cfg(feature = "desktop")]
pub fn configure_mapkit() -> InitOutcome {
    match crate::assets::locate_bundle() {
        Some(bundle) => configure_mapkit_with(&bundle),
        None => configure_mapkit_with(&NoAssets),
    }
}

/// One-shot startup routine over an explicit bundle.
///
/// The first call resolves the key and configures the global [`MapKit`];
/// any later call is a warned no-op that returns the recorded outcome.
pub fn configure_mapkit_with(bundle: &dyn AssetBundle) -> InitOutcome {
    let mut first = false;
    CONFIGURE.call_once(|| {
        first = true;
        let (key, source) = resolve_api_key(bundle);
        let outcome = initialize_mapkit(&MapKit, key.as_deref());
        if outcome == InitOutcome::Initialized {
            info!(source = ?source, "Yandex MapKit API key loaded");
        }
        let _ = OUTCOME.set(outcome);
    });

    if !first {
        warn!("MapKit startup configuration ran twice; keeping the first outcome");
    }
    OUTCOME.get().copied().unwrap_or(InitOutcome::SkippedNoKey)
}

fn resolve_api_key(bundle: &dyn AssetBundle) -> (Option<String>, Option<KeySource>) {
    #[cfg(feature = "desktop")]
    if let Some(key) = env_override() {
        return (Some(key), Some(KeySource::Environment));
    }

    match load_api_key(bundle) {
        Some(key) => (Some(key), Some(KeySource::BundledAsset)),
        None => (None, None),
    }
}

/// Local-run override: load `.env` from the working directory, then honor
/// an already-set process variable. Empty and whitespace-only values count
/// as unset, so a stray `YANDEX_MAPKIT_API_KEY=` line cannot shadow the
/// bundled key.
#[cfg(feature = "desktop")]
fn env_override() -> Option<String> {
    let _ = dotenvy::dotenv();
    env_var_or_none(envfile::YANDEX_MAPKIT_API_KEY)
}

#[cfg(feature = "desktop")]
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Stand-in bundle for the case where no asset root was found at all.
#[cfg(feature = "desktop")]
struct NoAssets;

#[cfg(feature = "desktop")]
impl AssetBundle for NoAssets {
    fn read_text(&self, path: &str) -> Result<String, crate::assets::BundleError> {
        Err(crate::assets::BundleError::NotFound(path.to_string()))
    }
}
