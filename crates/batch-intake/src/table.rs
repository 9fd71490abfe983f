//! Row-oriented table parsing for uploaded item lists.
//!
//! This module reads the comma-separated table format the batch mode
//! accepts: a header row naming the columns, then one row per item.
//! Fields may be quoted with double quotes; a quoted field may contain
//! commas, line breaks, and doubled quotes for a literal quote. Both
//! LF and CRLF line endings are accepted.

use kinesio_core::CoreError;

/// A parsed table: header names plus data rows. Every row is padded to
/// the header width, so positional lookups never go out of bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parses table text. Malformed input (no header row, an
    /// unterminated quoted field) is a schema failure for the whole
    /// table; no rows are returned partially.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let mut records = parse_records(input)?;
        if records.is_empty() {
            return Err(CoreError::Schema("table has no header row".to_string()));
        }
        let headers = records.remove(0);
        let width = headers.len();
        for row in &mut records {
            row.resize(width, String::new());
        }
        Ok(Self {
            headers,
            rows: records,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of the column with this exact name, if present.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Splits the input into records of fields. A record ends at an
/// unquoted line break; the final record needs no trailing newline.
fn parse_records(input: &str) -> Result<Vec<Vec<String>>, CoreError> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut field_started = false;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                _ => field.push(ch),
            }
            continue;
        }
        match ch {
            '"' if field.is_empty() && !field_started => {
                in_quotes = true;
                field_started = true;
            }
            ',' => {
                record.push(std::mem::take(&mut field));
                field_started = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                field_started = false;
                if !(record.len() == 1 && record[0].is_empty()) {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => {
                field.push(ch);
                field_started = true;
            }
        }
    }

    if in_quotes {
        return Err(CoreError::Schema(
            "unterminated quoted field at end of table".to_string(),
        ));
    }
    if field_started || !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let table = Table::parse("Item,Notes\negg,fried\nbread,\n").unwrap();
        assert_eq!(table.headers(), ["Item", "Notes"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], ["egg", "fried"]);
        assert_eq!(table.rows()[1], ["bread", ""]);
    }

    #[test]
    fn last_row_without_trailing_newline() {
        let table = Table::parse("Item\negg\nbread").unwrap();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1], ["bread"]);
    }

    #[test]
    fn quoted_fields() {
        let table = Table::parse("Item\n\"labneh, egg\"\n\"he said \"\"test\"\"\"\n").unwrap();
        assert_eq!(table.rows()[0], ["labneh, egg"]);
        assert_eq!(table.rows()[1], ["he said \"test\""]);
    }

    #[test]
    fn quoted_field_may_contain_line_break() {
        let table = Table::parse("Item\n\"olive\noil\"\n").unwrap();
        assert_eq!(table.rows()[0], ["olive\noil"]);
    }

    #[test]
    fn crlf_line_endings() {
        let table = Table::parse("Item,Notes\r\negg,fried\r\n").unwrap();
        assert_eq!(table.headers(), ["Item", "Notes"]);
        assert_eq!(table.rows()[0], ["egg", "fried"]);
    }

    #[test]
    fn short_rows_are_padded() {
        let table = Table::parse("Item,Notes,Source\negg\n").unwrap();
        assert_eq!(table.rows()[0], ["egg", "", ""]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = Table::parse("Item\n\negg\n\n").unwrap();
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn unterminated_quote_is_schema_error() {
        let result = Table::parse("Item\n\"egg\n");
        assert!(matches!(result, Err(CoreError::Schema(_))));
    }

    #[test]
    fn empty_input_is_schema_error() {
        assert!(matches!(Table::parse(""), Err(CoreError::Schema(_))));
    }

    #[test]
    fn column_lookup_is_exact() {
        let table = Table::parse("Item,item\negg,spam\n").unwrap();
        assert_eq!(table.column("Item"), Some(0));
        assert_eq!(table.column("item"), Some(1));
        assert_eq!(table.column("Ingredient"), None);
    }
}
