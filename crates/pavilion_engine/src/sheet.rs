use std::collections::BTreeMap;

use crate::RecordId;

/// One data row of the export, keyed by the header row's field names.
///
/// The header set is owned by the external spreadsheet, so records carry an
/// open map instead of a fixed shape. A short row simply lacks the trailing
/// keys; it never stores empty-string placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRecord {
    pub id: RecordId,
    pub fields: BTreeMap<String, String>,
}

impl SheetRecord {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Parse a comma-separated export whose first line is the header row.
///
/// Row order is preserved. Each record's `id` is its 1-based line number in
/// the raw text, counting the header as line 1; blank lines are skipped but
/// still consume a line number, so the id sequence may have gaps. The id is
/// only a render key within one fetch, never a stable identity.
///
/// Inputs with fewer than two lines cannot hold a header and a data row and
/// yield an empty vector.
pub fn parse_records(raw: &str) -> Vec<SheetRecord> {
    let lines: Vec<&str> = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let header = split_fields(lines[0]);
    let mut records = Vec::new();
    for (index, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let values = split_fields(line);
        let mut fields = BTreeMap::new();
        // Positional zip against the header: extra values fall off the end,
        // missing trailing values leave the attribute absent.
        for (name, value) in header.iter().zip(values) {
            fields.insert(name.clone(), value);
        }
        records.push(SheetRecord {
            id: (index + 1) as RecordId,
            fields,
        });
    }
    records
}

/// Split one line on unquoted commas, honoring RFC4180-style quoting.
///
/// An unterminated quote is not an error: the scanner stays in the quoted
/// state to the end of the line and flushes whatever accumulated.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Doubled quote inside a quoted field: one literal quote.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(clean_field(&current));
                current.clear();
            }
            other => current.push(other),
        }
    }
    fields.push(clean_field(&current));
    fields
}

/// Flush step: trim whitespace, then strip one layer of surrounding quotes.
fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}
