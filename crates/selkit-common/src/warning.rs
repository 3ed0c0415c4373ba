//! Builder warnings with colored terminal output.
//!
//! Provides deduplication so a selector built in a loop does not spam the
//! same warning. Used by the selector builder to flag legal usage that is
//! probably a mistake, such as rendering an already-rendered expression.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about suspicious usage (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Selector", "render() called on an empty expression");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_report(component, message) {
        eprintln!("{YELLOW}[selkit {component}] ⚠ {message}{RESET}");
    }
}

/// Record the warning, returning `true` only the first time it is seen.
fn first_report(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(format!("[{component}] {message}"))
}
