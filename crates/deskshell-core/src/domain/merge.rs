//! Additive default-merge.
//!
//! Given the default table `D` and a loaded document `C`:
//!
//! ```text
//! for each field f:
//!     if C[f] is absent:
//!         C[f] := D[f]
//!         dirty := true
//! ```
//!
//! A present value is never overwritten, even one the shell does not
//! understand (an unknown theme string, an unknown window state code).  That
//! makes the merge idempotent and lets an older file be healed by a newer
//! binary without a migration step.
//!
//! Persisting the result when `dirty` is the store's job; this module only
//! reports it.

use crate::domain::document::ConfigDocument;

/// Fills every absent field of `doc` from `defaults`.
///
/// Returns `true` if at least one field was filled.
pub fn fill_absent(doc: &mut ConfigDocument, defaults: &ConfigDocument) -> bool {
    // Destructuring both sides without `..` turns a newly added field into a
    // compile error here until it is merged.
    let ConfigDocument {
        theme,
        use_system_title_bar,
        enable_logging,
        enable_trace,
        enable_debug,
        enable_info,
        enable_warn,
        enable_error,
        enable_fatal,
        window_start_position_x,
        window_start_position_y,
        window_start_size_x,
        window_start_size_y,
        window_start_state,
    } = doc;

    let ConfigDocument {
        theme: d_theme,
        use_system_title_bar: d_use_system_title_bar,
        enable_logging: d_enable_logging,
        enable_trace: d_enable_trace,
        enable_debug: d_enable_debug,
        enable_info: d_enable_info,
        enable_warn: d_enable_warn,
        enable_error: d_enable_error,
        enable_fatal: d_enable_fatal,
        window_start_position_x: d_window_start_position_x,
        window_start_position_y: d_window_start_position_y,
        window_start_size_x: d_window_start_size_x,
        window_start_size_y: d_window_start_size_y,
        window_start_state: d_window_start_state,
    } = defaults;

    let mut dirty = false;
    dirty |= fill(theme, d_theme);
    dirty |= fill(use_system_title_bar, d_use_system_title_bar);
    dirty |= fill(enable_logging, d_enable_logging);
    dirty |= fill(enable_trace, d_enable_trace);
    dirty |= fill(enable_debug, d_enable_debug);
    dirty |= fill(enable_info, d_enable_info);
    dirty |= fill(enable_warn, d_enable_warn);
    dirty |= fill(enable_error, d_enable_error);
    dirty |= fill(enable_fatal, d_enable_fatal);
    dirty |= fill(window_start_position_x, d_window_start_position_x);
    dirty |= fill(window_start_position_y, d_window_start_position_y);
    dirty |= fill(window_start_size_x, d_window_start_size_x);
    dirty |= fill(window_start_size_y, d_window_start_size_y);
    dirty |= fill(window_start_state, d_window_start_state);
    dirty
}

fn fill<T: Clone>(slot: &mut Option<T>, default: &Option<T>) -> bool {
    match (slot.is_some(), default) {
        (false, Some(value)) => {
            *slot = Some(value.clone());
            true
        }
        _ => false,
    }
}
