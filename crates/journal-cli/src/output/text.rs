//! Text and table output for transactions and reports.

use journal_core::{format_transaction, ListedTransaction, Report, ReportKind, Transaction};

use crate::ui::theme::{styled, styles};
use crate::ui::{
    header, indent_account, is_negative_amount, kv, print, table, truncate, Column, UiContext,
};

const PAYEE_WIDTH: usize = 40;

/// `*` for cleared, `!` for pending, empty otherwise.
fn status_marker(transaction: &Transaction) -> &'static str {
    if transaction.cleared {
        "*"
    } else if transaction.pending {
        "!"
    } else {
        ""
    }
}

/// First explicit amount, which is what a reader scans a list for.
fn headline_amount(transaction: &Transaction) -> &str {
    transaction
        .postings
        .iter()
        .map(|posting| posting.amount.as_str())
        .find(|amount| !amount.is_empty())
        .unwrap_or("")
}

pub fn print_transaction_list(
    ui: &UiContext,
    listed: &[ListedTransaction],
    total: usize,
    quiet: bool,
) {
    if quiet {
        for item in listed {
            println!("{}", item.id);
        }
        return;
    }

    let context = format!("{} of {}", listed.len(), total);
    print(ui, &header(ui, "list", Some(&context)));

    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::new("St"),
        Column::new("Payee"),
        Column::right("Amount"),
    ];
    let rows: Vec<Vec<String>> = listed
        .iter()
        .map(|item| {
            let txn = &item.transaction;
            vec![
                item.id.to_string(),
                txn.date.clone(),
                status_marker(txn).to_string(),
                if ui.mode.is_pretty() {
                    truncate(&txn.payee, PAYEE_WIDTH)
                } else {
                    txn.payee.clone()
                },
                headline_amount(txn).to_string(),
            ]
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", table(ui, &columns, &rows));
    }
}

pub fn print_transaction(ui: &UiContext, item: &ListedTransaction, quiet: bool) {
    let txn = &item.transaction;
    if quiet {
        print!("{}", format_transaction(txn));
        return;
    }

    let status = match status_marker(txn) {
        "*" => styled("cleared", styles::cleared(), ui.color),
        "!" => "pending".to_string(),
        _ => "uncleared".to_string(),
    };

    println!("{}", kv(ui, "ID", &item.id.to_string()));
    println!("{}", kv(ui, "Date", &txn.date));
    println!("{}", kv(ui, "Status", &status));
    println!("{}", kv(ui, "Payee", &txn.payee));

    if !ui.mode.is_pretty() {
        for posting in &txn.postings {
            println!(
                "posting={}\t{}\t{}",
                posting.account, posting.amount, posting.comment
            );
        }
        return;
    }

    println!();
    let account_width = txn
        .postings
        .iter()
        .map(|posting| posting.account.chars().count())
        .max()
        .unwrap_or(0);
    let amount_width = txn
        .postings
        .iter()
        .map(|posting| posting.amount.chars().count())
        .max()
        .unwrap_or(0);
    for posting in &txn.postings {
        let amount = format!("{:>width$}", posting.amount, width = amount_width);
        let amount = if is_negative_amount(&posting.amount) {
            styled(&amount, styles::negative(), ui.color)
        } else {
            amount
        };
        let mut line = format!(
            "  {:<width$}  {}",
            posting.account,
            amount,
            width = account_width
        );
        if !posting.comment.is_empty() {
            line.push_str(&styled(
                &format!("  ; {}", posting.comment),
                styles::dim(),
                ui.color,
            ));
        }
        println!("{}", line.trim_end());
    }
}

pub fn print_accounts(ui: &UiContext, accounts: &[String]) {
    if ui.mode.is_pretty() {
        print(ui, &header(ui, "accounts", Some(&accounts.len().to_string())));
    }
    for account in accounts {
        println!("{}", account);
    }
}

pub fn print_report(ui: &UiContext, kind: ReportKind, report: &Report) {
    print(ui, &header(ui, "report", Some(kind.as_str())));
    if report.is_empty() {
        return;
    }

    let (columns, rows): (Vec<Column>, Vec<Vec<String>>) = match report {
        Report::Balance(rows) => (
            vec![Column::right("Amount"), Column::new("Account")],
            rows.iter()
                .map(|row| {
                    vec![
                        row.amount.clone(),
                        indent_account(&row.account, row.level),
                    ]
                })
                .collect(),
        ),
        Report::Register(rows) => (
            vec![
                Column::new("Date"),
                Column::new("Payee"),
                Column::new("Account"),
                Column::right("Amount"),
                Column::right("Balance"),
            ],
            rows.iter()
                .map(|row| {
                    vec![
                        row.date.clone(),
                        row.payee.clone(),
                        row.account.clone(),
                        row.amount.clone(),
                        row.balance.clone(),
                    ]
                })
                .collect(),
        ),
        Report::Budget(rows) => (
            vec![
                Column::right("Actual"),
                Column::right("Budget"),
                Column::right("Remaining"),
                Column::right("Used"),
                Column::new("Account"),
            ],
            rows.iter()
                .map(|row| {
                    vec![
                        row.actual.clone(),
                        row.budget.clone(),
                        row.remaining.clone(),
                        row.percent.clone(),
                        indent_account(&row.account, row.level),
                    ]
                })
                .collect(),
        ),
        Report::Cleared(rows) => (
            vec![
                Column::right("Cleared"),
                Column::right("Pending"),
                Column::new("Last Cleared"),
                Column::new("Account"),
            ],
            rows.iter()
                .map(|row| {
                    vec![
                        row.cleared.clone(),
                        row.pending.clone(),
                        row.last_cleared.clone(),
                        indent_account(&row.account, row.level),
                    ]
                })
                .collect(),
        ),
        Report::Accounts(accounts) => (
            vec![Column::new("Account")],
            accounts.iter().map(|account| vec![account.clone()]).collect(),
        ),
    };

    println!("{}", table(ui, &columns, &rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::Posting;

    fn txn() -> Transaction {
        Transaction {
            date: "2024/01/05".to_string(),
            cleared: false,
            pending: true,
            payee: "Grocery".to_string(),
            postings: vec![
                Posting::new("Assets:Checking", ""),
                Posting::new("Expenses:Food", "$50"),
            ],
        }
    }

    #[test]
    fn test_status_marker() {
        assert_eq!(status_marker(&txn()), "!");
        let cleared = Transaction {
            cleared: true,
            pending: false,
            ..txn()
        };
        assert_eq!(status_marker(&cleared), "*");
        let open = Transaction {
            pending: false,
            ..txn()
        };
        assert_eq!(status_marker(&open), "");
    }

    #[test]
    fn test_headline_amount_skips_elided() {
        assert_eq!(headline_amount(&txn()), "$50");
        let bare = Transaction {
            postings: vec![Posting::new("Assets", "")],
            ..txn()
        };
        assert_eq!(headline_amount(&bare), "");
    }
}
