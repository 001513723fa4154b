//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector builder to report input that is accepted but likely
//! a mistake, such as an empty class name.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about suspicious input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Selector", "empty class value renders as a bare '.'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[selkit {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already been called with this exact message
/// since the last `clear_warnings`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so nothing else touches the global set concurrently.
    #[test]
    fn test_warnings_are_recorded_until_cleared() {
        assert!(!has_warned("Test", "recorded once"));
        warn_once("Test", "recorded once");
        warn_once("Test", "recorded once");
        assert!(has_warned("Test", "recorded once"));
        assert!(!has_warned("Other", "recorded once"));

        clear_warnings();
        assert!(!has_warned("Test", "recorded once"));

        warn_once("Test", "recorded once");
        assert!(has_warned("Test", "recorded once"));
    }
}
