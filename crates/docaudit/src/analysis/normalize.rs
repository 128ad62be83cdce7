use std::sync::LazyLock;

use regex::Regex;

/// Literal `\n` (backslash + n) left behind by some PDF text layers.
static RE_ESCAPED_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\\n").unwrap());
static RE_LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|[\r\x0C]").unwrap());
static RE_HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{00A0}]+").unwrap());
/// Two or more line breaks, including blank lines holding only spaces.
static RE_LINE_BREAK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n)+").unwrap());

/// Cleans raw extracted text into the canonical form all patterns run
/// against. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let text = RE_ESCAPED_NEWLINE.replace_all(text, "\n");
    let text = RE_LINE_BREAK.replace_all(&text, "\n");
    let text = RE_HORIZONTAL_WS.replace_all(&text, " ");
    let text = RE_LINE_BREAK_RUN.replace_all(&text, "\n");
    text.trim().to_string()
}
