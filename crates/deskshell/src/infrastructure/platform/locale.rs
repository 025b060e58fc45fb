//! UI language detection from the POSIX locale environment.

/// Environment variables consulted for the UI language, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Returns the first usable locale from `lookup`, as a BCP 47 tag.
///
/// `lookup` is `std::env::var` in production and a map in tests.
pub fn detect_language(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|key| lookup(*key))
        .find_map(|raw| normalize_locale(&raw))
}

/// Converts a POSIX locale (`en_US.UTF-8`, `de_DE@euro`) to a BCP 47 tag
/// (`en-US`, `de-DE`).
///
/// Returns `None` for empty values and for the `C` and `POSIX` locales.
pub fn normalize_locale(raw: &str) -> Option<String> {
    let base = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}
