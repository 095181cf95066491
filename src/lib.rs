//! Startup shim for the Janarym map application.
//!
//! Each platform shell links this crate and calls one routine at launch:
//! extract the Yandex MapKit API key from the bundled env file and hand it
//! to the SDK before the first map view is created. The whole path is
//! fail-open: a missing or unreadable key never stops the app from
//! starting, it only leaves maps off behind a warning.
//!
//! Platform selection mirrors the app's build flavors: the `mobile` feature
//! (default) probes the single packaged asset location and calls
//! [`startup::configure_mapkit_at`] with the asset root the shell provides;
//! `desktop` adds the nested framework fallback location, a dotenv override
//! for local runs, the fixed `ru_RU` MapKit locale and the self-locating
//! `startup::configure_mapkit` entry point.

pub mod assets;
pub mod envfile;
pub mod logging;
pub mod mapkit;
pub mod startup;

pub use mapkit::{MapKit, MapKitConfig, MapSdk};
#[cfg(feature = "desktop")]
pub use startup::configure_mapkit;
pub use startup::{
    InitOutcome, KeySource, configure_mapkit_at, initialize_mapkit, load_api_key,
};
