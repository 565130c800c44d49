//! Splitting fixed-width report output into columns.

/// Split a line on runs of two or more whitespace characters after trimming.
///
/// Single spaces stay inside a column, so `Opening Balances` is one value.
pub fn split_columns(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut columns = Vec::new();
    let mut start = 0;
    let mut run_start: Option<usize> = None;
    let mut run_len = 0;

    for (at, ch) in trimmed.char_indices() {
        if ch.is_whitespace() {
            if run_start.is_none() {
                run_start = Some(at);
            }
            run_len += 1;
            continue;
        }
        if let Some(gap) = run_start.take() {
            if run_len >= 2 {
                columns.push(&trimmed[start..gap]);
                start = at;
            }
        }
        run_len = 0;
    }
    columns.push(&trimmed[start..]);
    columns
}

/// Nesting depth of an account line: two leading spaces per level.
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count() / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_wide_gaps_only() {
        assert_eq!(
            split_columns("          $1,000.00  Equity:Opening Balances"),
            vec!["$1,000.00", "Equity:Opening Balances"]
        );
        assert_eq!(split_columns("a \tb"), vec!["a", "b"]);
        assert_eq!(split_columns("a b c"), vec!["a b c"]);
    }

    #[test]
    fn test_split_blank_line() {
        assert!(split_columns("   ").is_empty());
        assert!(split_columns("").is_empty());
    }

    #[test]
    fn test_split_register_line() {
        let line = "24-Jan-05 Grocery     Expenses:Food      $50      $50";
        assert_eq!(
            split_columns(line),
            vec!["24-Jan-05 Grocery", "Expenses:Food", "$50", "$50"]
        );
    }

    #[test]
    fn test_indent_level() {
        assert_eq!(indent_level("Assets"), 0);
        assert_eq!(indent_level(" x"), 0);
        assert_eq!(indent_level("    Checking"), 2);
        assert_eq!(indent_level("     Checking"), 2);
    }
}
