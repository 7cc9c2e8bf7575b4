//! Unit tests for the record store.
//!
//! These tests cover record creation and selection rules, and the snapshot
//! document format and best-effort import.

mod snapshot_tests;
