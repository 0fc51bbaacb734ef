//! Small text helpers shared by ingestion and the command surface.

use crate::constants::ingestion::TRIM_CHARS;

/// Strip leading/trailing spaces, tabs, CR and LF from a raw field.
pub fn trim_field(raw: &str) -> &str {
    raw.trim_matches(TRIM_CHARS.as_slice())
}

/// Render an integer with `,` thousands separators (`1234567` -> `1,234,567`).
pub fn format_with_commas(value: u64) -> String {
    let raw = value.to_string();
    let mut grouped_reversed = String::with_capacity(raw.len() + (raw.len() / 3));
    for (idx, ch) in raw.chars().rev().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            grouped_reversed.push(',');
        }
        grouped_reversed.push(ch);
    }
    grouped_reversed.chars().rev().collect()
}
