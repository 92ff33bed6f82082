//! Eligibility Filter
//!
//! Decides whether a response status may be persisted.

use crate::config::StatusCodeRules;

/// Returns whether a response with `status` may be cached under `rules`.
///
/// Evaluated in order: an exclude list containing the status rejects first,
/// then an include list missing the status rejects, otherwise the status is
/// cacheable. Exclude wins when both lists name the same status. With
/// neither list configured, every status is cacheable.
pub fn is_cacheable(status: u16, rules: &StatusCodeRules) -> bool {
    if let Some(exclude) = &rules.exclude {
        if exclude.contains(&status) {
            return false;
        }
    }
    if let Some(include) = &rules.include {
        if !include.contains(&status) {
            return false;
        }
    }
    true
}
