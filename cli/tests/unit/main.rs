//! Unit tests for modhelper CLI
//!
//! These tests use mocked ports and run fast without spawning external tools,
//! except where a real `sh` child is the point of the test.

mod provision;
