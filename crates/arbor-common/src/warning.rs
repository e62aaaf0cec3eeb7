//! Diagnostics with colored terminal output.
//!
//! Provides deduplication so a malformed document that repeats the same
//! problem hundreds of times prints it only once. Used by the tree builder
//! to report recovered markup errors.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock leaves the set usable.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a recovered problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Tree Builder", "dropped end tag </p> with no open element");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Arbor {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if `warn_once` has already printed this message.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call before building a new document)
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
