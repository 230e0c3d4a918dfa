//! Status detection for the virtualization CLI.

use std::sync::LazyLock;

use regex::Regex;

/// Phrase `vagrant up` prints when the machine was already powered on.
///
/// Compatibility constant: matched as a regular expression, so the trailing
/// `.` accepts any character. Changing it changes which runs trigger a
/// follow-up `vagrant provision`.
pub const ALREADY_RUNNING_PATTERN: &str = "Machine is already running.";

#[allow(clippy::expect_used)] // Pattern is a compile-time constant
static ALREADY_RUNNING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ALREADY_RUNNING_PATTERN).expect("valid pattern"));

/// Returns `true` when an output line reports the VM is already running.
#[must_use]
pub fn is_already_running(line: &str) -> bool {
    ALREADY_RUNNING.is_match(line)
}
