//! Typed rows for each report kind.

use serde::Serialize;

use super::columns::{indent_level, split_columns};

/// Balance and summary reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceRow {
    pub amount: String,
    pub account: String,
    pub level: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRow {
    pub date: String,
    pub payee: String,
    pub account: String,
    pub amount: String,
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetRow {
    pub actual: String,
    pub budget: String,
    pub remaining: String,
    pub percent: String,
    pub account: String,
    pub level: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearedRow {
    pub cleared: String,
    pub pending: String,
    pub last_cleared: String,
    pub account: String,
    pub level: usize,
}

/// Yields `(level, columns)` for every non-blank line with at least `min`
/// columns.
fn rows(output: &str, min: usize) -> impl Iterator<Item = (usize, Vec<&str>)> {
    output.lines().filter_map(move |line| {
        let columns = split_columns(line);
        if columns.len() < min {
            return None;
        }
        Some((indent_level(line), columns))
    })
}

fn column(columns: &[&str], at: usize) -> String {
    columns.get(at).map(|value| value.to_string()).unwrap_or_default()
}

pub fn parse_balance(output: &str) -> Vec<BalanceRow> {
    rows(output, 2)
        .map(|(level, columns)| BalanceRow {
            amount: column(&columns, 0),
            account: column(&columns, 1),
            level,
        })
        .collect()
}

pub fn parse_register(output: &str) -> Vec<RegisterRow> {
    rows(output, 5)
        .map(|(_, columns)| RegisterRow {
            date: column(&columns, 0),
            payee: column(&columns, 1),
            account: column(&columns, 2),
            amount: column(&columns, 3),
            balance: column(&columns, 4),
        })
        .collect()
}

pub fn parse_budget(output: &str) -> Vec<BudgetRow> {
    rows(output, 4)
        .map(|(level, columns)| BudgetRow {
            actual: column(&columns, 0),
            budget: column(&columns, 1),
            remaining: column(&columns, 2),
            percent: column(&columns, 3),
            account: column(&columns, 4),
            level,
        })
        .collect()
}

pub fn parse_cleared(output: &str) -> Vec<ClearedRow> {
    rows(output, 3)
        .map(|(level, columns)| ClearedRow {
            cleared: column(&columns, 0),
            pending: column(&columns, 1),
            last_cleared: column(&columns, 2),
            account: column(&columns, 3),
            level,
        })
        .collect()
}

pub fn parse_accounts(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
