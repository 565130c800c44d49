//! String utilities for table cells.

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Indent an account name by its report level.
pub fn indent_account(account: &str, level: usize) -> String {
    format!("{}{}", "  ".repeat(level), account)
}

/// Whether an amount string reads as negative (`-$5`, `$-5`, `-5 EUR`).
pub fn is_negative_amount(amount: &str) -> bool {
    amount
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-')
        .starts_with('-')
}
