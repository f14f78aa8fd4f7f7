//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a string by replacing all but the first and last three characters with asterisks.
///
/// - If the input string has fewer than 12 characters, it is entirely redacted.
/// - If the input string has 12 or more characters, only the first three and the last three show.
///
/// This design is to allow users to distinguish between different redacted strings but avoid
/// leaking sensitive information.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(""),
            Some(v) => Redact(v),
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.len() {
            0 => f.write_str("EMPTY"),
            n if n < 12 => f.write_str("***"),
            n => {
                f.write_str(&self.0[..3])?;
                f.write_str("***")?;
                f.write_str(&self.0[n - 3..])
            }
        }
    }
}

/// Replace every run of six or more consecutive ASCII digits with `******`.
///
/// Id numbers, phone numbers and similar personal identifiers are long digit
/// runs, so response text passed through this function is safe to log while
/// short values like ages or years stay readable.
pub fn redact_digits(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut run = String::new();

    for ch in content.chars() {
        if ch.is_ascii_digit() {
            run.push(ch);
            continue;
        }
        flush_digit_run(&mut out, &mut run);
        out.push(ch);
    }
    flush_digit_run(&mut out, &mut run);

    out
}

fn flush_digit_run(out: &mut String, run: &mut String) {
    if run.len() >= 6 {
        out.push_str("******");
    } else {
        out.push_str(run);
    }
    run.clear();
}
