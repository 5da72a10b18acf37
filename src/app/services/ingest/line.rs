//! Raw-line normalization
//!
//! The wire format is simpler than RFC 4180 CSV: ASCII double quotes are
//! stripped first, then the remainder is split on every comma. Embedded commas
//! cannot be escaped, so a quoted field containing one changes the column
//! count and fails the row-shape check downstream.

/// Split one raw input line into its fields
pub fn split_fields(raw: &str) -> Vec<String> {
    raw.trim_end_matches(['\r', '\n'])
        .replace('"', "")
        .split(',')
        .map(|field| field.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_stripped_before_split() {
        let fields = split_fields("1,\"Goroka\",\"Goroka\",\"Papua New Guinea\"");
        assert_eq!(fields, vec!["1", "Goroka", "Goroka", "Papua New Guinea"]);
    }

    #[test]
    fn test_embedded_comma_changes_arity() {
        // No escaping: the quoted comma still splits
        let fields = split_fields("2,\"Foo, Bar\",x");
        assert_eq!(fields, vec!["2", "Foo", " Bar", "x"]);
    }

    #[test]
    fn test_empty_fields_preserved() {
        let fields = split_fields("2B,410,,0,CR2");
        assert_eq!(fields, vec!["2B", "410", "", "0", "CR2"]);
    }

    #[test]
    fn test_trailing_newline_stripped() {
        assert_eq!(split_fields("a,b\r\n"), vec!["a", "b"]);
        assert_eq!(split_fields("a,b\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_blank_line_is_single_empty_field() {
        assert_eq!(split_fields(""), vec![""]);
    }
}
