//! Global Yandex MapKit configuration.
//!
//! The MapKit SDK is configured process-wide, once, before the first map
//! view exists. This module is that configuration surface: the startup path
//! writes through [`MapSdk`], map components read the result back through
//! the accessors on [`MapKit`].

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Write side of the MapKit global configuration.
///
/// The startup path talks to the SDK only through this trait. [`MapKit`]
/// is the process-global implementation; platform shells may bind their
/// own native entry points instead.
pub trait MapSdk {
    fn set_api_key(&self, key: &str);
    fn set_locale(&self, locale: &str);
}

/// Snapshot of the configured SDK state for diagnostics surfaces.
///
/// Carries the raw key; callers presenting it must mask it themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapKitConfig {
    pub api_key: String,
    pub locale: Option<String>,
}

static API_KEY: OnceCell<String> = OnceCell::new();
static LOCALE: OnceCell<String> = OnceCell::new();

/// Process-wide MapKit facade. Both cells are write-once; repeated sets
/// keep the first value.
pub struct MapKit;

impl MapKit {
    pub fn api_key() -> Option<&'static str> {
        API_KEY.get().map(String::as_str)
    }

    pub fn locale() -> Option<&'static str> {
        LOCALE.get().map(String::as_str)
    }

    /// True once an API key has been handed to the SDK.
    pub fn is_configured() -> bool {
        API_KEY.get().is_some()
    }

    pub fn config() -> Option<MapKitConfig> {
        API_KEY.get().map(|key| MapKitConfig {
            api_key: key.clone(),
            locale: LOCALE.get().cloned(),
        })
    }
}

impl MapSdk for MapKit {
    fn set_api_key(&self, key: &str) {
        if API_KEY.set(key.to_string()).is_err() {
            tracing::debug!("MapKit API key already set; keeping the first value");
        }
    }

    fn set_locale(&self, locale: &str) {
        if LOCALE.set(locale.to_string()).is_err() {
            tracing::debug!("MapKit locale already set; keeping the first value");
        }
    }
}
