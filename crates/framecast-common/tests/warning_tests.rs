//! Tests for the deduplicating warning channel.
//!
//! The warning set is process-global, so everything that calls
//! `clear_warnings` lives in a single test.

use framecast_common::warning::{clear_warnings, warn_once, was_warned};

#[test]
fn test_warn_once_then_clear() {
    warn_once("Test", "record-me");
    assert!(was_warned("Test", "record-me"));
    assert!(!was_warned("Other", "record-me"));

    // Reporting again is a no-op, not a second entry.
    warn_once("Test", "record-me");
    assert!(was_warned("Test", "record-me"));

    clear_warnings();
    assert!(!was_warned("Test", "record-me"));
}

#[test]
fn test_unreported_message_is_not_warned() {
    assert!(!was_warned("Test", "never-reported"));
}
