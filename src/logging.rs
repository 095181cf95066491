//! Logging setup for the platform shells.

/// Install the process-wide log subscriber.
///
/// Platform entry points call this before the startup configuration. Uses
/// `try_init`; an embedding shell that already installed its own subscriber
/// keeps it.
pub fn init() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();
}
