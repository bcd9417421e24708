//! Minimal CSV line parsing
//!
//! The dataset is a flat, one-row-per-region file; this handles the subset
//! of CSV it actually uses: comma-separated fields, optional double-quoting
//! with embedded commas and doubled quotes, CRLF line endings. Multi-line
//! quoted fields are not supported.

use memchr::memchr;

/// Split one CSV line into its fields.
pub fn parse_line(line: &str) -> Result<Vec<String>, String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let bytes = line.as_bytes();
    let mut fields = Vec::new();
    let mut pos = 0;

    loop {
        if pos > bytes.len() {
            break;
        }
        if pos == bytes.len() {
            // Line end after a comma (or an empty line): one empty field.
            fields.push(String::new());
            break;
        }

        if bytes[pos] == b'"' {
            let (field, next) = parse_quoted(line, pos)?;
            fields.push(field);
            match next {
                Some(next) => pos = next,
                None => break,
            }
        } else {
            match memchr(b',', &bytes[pos..]) {
                Some(off) => {
                    fields.push(line[pos..pos + off].to_string());
                    pos += off + 1;
                    if pos == bytes.len() {
                        fields.push(String::new());
                        break;
                    }
                }
                None => {
                    fields.push(line[pos..].to_string());
                    break;
                }
            }
        }
    }

    Ok(fields)
}

/// Parse a quoted field starting at `start` (which must be a `"`). Returns
/// the unescaped field and the position after the following comma, or `None`
/// at line end.
fn parse_quoted(line: &str, start: usize) -> Result<(String, Option<usize>), String> {
    let bytes = line.as_bytes();
    let mut field = String::new();
    let mut i = start + 1;

    loop {
        let Some(off) = memchr(b'"', &bytes[i..]) else {
            return Err("unterminated quoted field".to_string());
        };
        field.push_str(&line[i..i + off]);
        i += off + 1;

        // A doubled quote is a literal quote inside the field.
        if bytes.get(i) == Some(&b'"') {
            field.push('"');
            i += 1;
            continue;
        }

        return match bytes.get(i) {
            None => Ok((field, None)),
            Some(b',') => Ok((field, Some(i + 1))),
            Some(_) => Err(format!("unexpected character after closing quote at byte {i}")),
        };
    }
}
