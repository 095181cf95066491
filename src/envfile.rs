//! Env-file parsing shared by the platform startup paths.
//!
//! Every platform shell ships the same plaintext `KEY=VALUE` file inside
//! its asset bundle; this module is the one parser they all go through.

/// Name of the env-file entry holding the Yandex MapKit API key.
pub const YANDEX_MAPKIT_API_KEY: &str = "YANDEX_MAPKIT_API_KEY";

/// Extract the value for `key` from env-file text.
///
/// Returns the value from the first trimmed line that reads `<key>=...`,
/// with surrounding whitespace removed. The line is split at the first `=`
/// only, so values may themselves contain `=`. Blank lines, comments and
/// other keys are skipped; no match yields `None`.
///
/// A matching line with nothing after the `=` yields `Some("")`; whether
/// an empty value is usable is the caller's decision.
pub fn extract(content: &str, key: &str) -> Option<String> {
    for raw_line in content.lines() {
        let line = raw_line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, value)) = line.split_once('=') {
            // Exact key match only; `MY_<key>` must not count.
            if name == key {
                return Some(value.trim().to_string());
            }
        }
    }
    None
}
