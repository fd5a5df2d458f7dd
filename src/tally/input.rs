use std::sync::LazyLock;

use regex::Regex;

static STRIP_SIGNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+\-\s]").expect("strip pattern is valid")
});

static SCIENTIFIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+e\d+").expect("scientific pattern is valid")
});

/// Strip every `+`, `-`, and whitespace character from a raw field value.
///
/// Pure and total: any input produces a (possibly empty) string of the
/// remaining characters.
pub fn sanitize(raw: &str) -> String {
    STRIP_SIGNS.replace_all(raw, "").into_owned()
}

/// Find a scientific-notation fragment in a sanitized value.
///
/// Matches "one or more digits, `e` or `E`, one or more digits" (e.g.
/// "1e2", "12E34"). A match means the value is rejected as a calorie
/// amount; the matched substring is returned for the user-facing alert.
pub fn scientific_fragment(cleaned: &str) -> Option<String> {
    SCIENTIFIC.find(cleaned).map(|m| m.as_str().to_string())
}
