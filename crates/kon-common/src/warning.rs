//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The parser core never prints; the loader and CLI report its issues here.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Format a warning line the way [`warn_once`] prints it, without color.
#[must_use]
pub fn format_warning(component: &str, message: &str) -> String {
    format!("[KON {component}] ⚠ {message}")
}

/// Record `key` and report whether it is new.
fn first_time(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a non-fatal problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Parser", "duplicate attribute 'x' overwrites the earlier value");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let line = format_warning(component, message);
    if first_time(line.clone()) {
        eprintln!("{}", line.yellow());
    }
}

/// Clear all recorded warnings (call when loading a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_warning() {
        assert_eq!(
            format_warning("Loader", "something odd"),
            "[KON Loader] ⚠ something odd"
        );
    }

    #[test]
    fn test_deduplication() {
        let key = format_warning("Test", "dedup-check");
        assert!(first_time(key.clone()));
        assert!(!first_time(key.clone()));
        clear_warnings();
        assert!(first_time(key));
    }
}
