//! Fact-sheet rendering
//!
//! Pure text formatting: field names are title-cased, numbers get two
//! fraction digits with comma thousands separators, and anything else (the
//! `Unknown` sentinel included) renders as-is.

use wattmap_types::Value;

/// Marker rendered into a fact panel when a region has no facts.
pub const FACT_ERROR: &str = "Error";

/// Capitalize the first character of each whitespace-delimited word,
/// lowercasing the rest.
pub fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fixed-precision decimal with thousands separators: `1234.5` → `1,234.50`.
pub fn format_decimal(n: f64) -> String {
    let fixed = format!("{:.2}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if n < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Render one `Value` for a fact-sheet line.
fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) => format_decimal(*n),
        other => other.to_string(),
    }
}

/// Build the list markup for one breakdown sub-structure: one line per
/// (name, value) entry, in entry order. `None` yields the fixed error marker.
pub fn build_fact_sheet(entries: Option<&[(&'static str, &Value)]>) -> String {
    let Some(entries) = entries else {
        return FACT_ERROR.to_string();
    };

    let mut sheet = String::new();
    for (name, value) in entries {
        sheet.push_str("- ");
        sheet.push_str(&title_case(name));
        sheet.push_str(": ");
        sheet.push_str(&format_value(value));
        sheet.push('\n');
    }
    sheet
}
