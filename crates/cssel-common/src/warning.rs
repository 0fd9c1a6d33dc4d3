//! Parser warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the selector lexer to report input it accepted leniently.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning and report whether it is new.
///
/// Returns `true` the first time a `(component, message)` pair is seen.
#[must_use]
pub fn record_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about leniently accepted input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Selector", "escape \\110000 is not a code point");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record_once(component, message) {
        eprintln!("{}", format!("[cssel {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before parsing a new input file)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
