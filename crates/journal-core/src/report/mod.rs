//! Reports produced by the external `ledger` tool.
//!
//! The tool prints fixed-width text; [`columns`] splits it and [`rows`]
//! maps the columns onto typed rows per report kind.

mod columns;
mod command;
mod rows;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub use columns::{indent_level, split_columns};
pub use command::LedgerCommand;
pub use rows::{
    parse_accounts, parse_balance, parse_budget, parse_cleared, parse_register, BalanceRow,
    BudgetRow, ClearedRow, RegisterRow,
};

use crate::error::JournalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Asset and liability balances two levels deep
    Summary,
    Balance,
    Register,
    /// Expenses against the periodic budget
    Budget,
    /// Cleared and pending balances
    Cleared,
    Accounts,
}

impl ReportKind {
    pub const ALL: [ReportKind; 6] = [
        ReportKind::Summary,
        ReportKind::Balance,
        ReportKind::Register,
        ReportKind::Budget,
        ReportKind::Cleared,
        ReportKind::Accounts,
    ];

    /// Arguments passed to `ledger` after `-f <file>`.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            ReportKind::Summary => &["balance", "^Assets", "^Liabilities", "--depth", "2"],
            ReportKind::Balance => &["balance"],
            ReportKind::Register => &["register"],
            ReportKind::Budget => &["balance", "^Expenses", "--budget"],
            ReportKind::Cleared => &["balance", "--cleared", "--pending"],
            ReportKind::Accounts => &["accounts"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Summary => "summary",
            ReportKind::Balance => "balance",
            ReportKind::Register => "register",
            ReportKind::Budget => "budget",
            ReportKind::Cleared => "cleared",
            ReportKind::Accounts => "accounts",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = JournalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| JournalError::InvalidInput(format!("unknown report: {}", value)))
    }
}

/// Parsed report; serializes as a plain array of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Balance(Vec<BalanceRow>),
    Register(Vec<RegisterRow>),
    Budget(Vec<BudgetRow>),
    Cleared(Vec<ClearedRow>),
    Accounts(Vec<String>),
}

impl Report {
    /// Parse raw tool output for `kind`.
    pub fn parse(kind: ReportKind, output: &str) -> Self {
        match kind {
            ReportKind::Summary | ReportKind::Balance => Report::Balance(parse_balance(output)),
            ReportKind::Register => Report::Register(parse_register(output)),
            ReportKind::Budget => Report::Budget(parse_budget(output)),
            ReportKind::Cleared => Report::Cleared(parse_cleared(output)),
            ReportKind::Accounts => Report::Accounts(parse_accounts(output)),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Report::Balance(rows) => rows.len(),
            Report::Register(rows) => rows.len(),
            Report::Budget(rows) => rows.len(),
            Report::Cleared(rows) => rows.len(),
            Report::Accounts(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
