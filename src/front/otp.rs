//! Heuristic one-time-passcode detection.

use regex::Regex;
use std::sync::LazyLock;

/// Matches either a 3+3 digit pair with an optional `-`/space separator
/// ("123-456", "123 456", "123456") or a plain run of 4 to 8 digits.
/// The 3+3 branch wins wherever both could match. The regex engine
/// scans left to right without backtracking, so extraction stays linear
/// in the body length.
static OTP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{3}[-\s]?\d{3}|\d{4,8})").unwrap());

static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Returns the first substring of `body` that looks like a verification
/// code, separator preserved, or `None` when nothing matches.
///
/// Whitespace runs (including newlines) are collapsed to single spaces
/// first, since providers wrap codes across lines. This is a heuristic,
/// not a validator: unrelated numeric substrings such as order numbers
/// or amounts can match too.
pub fn extract_otp(body: &str) -> Option<String> {
    let collapsed = WHITESPACE_RUNS.replace_all(body, " ");

    OTP_PATTERN
        .find(&collapsed)
        .map(|code| code.as_str().to_string())
}
