//! The journal service: reads and mutations over a [`TextSource`].

use std::collections::BTreeSet;

use tracing::info;

use crate::error::{JournalError, Result};
use crate::format::Formatter;
use crate::identity::{assign, to_file_index};
use crate::model::{ListedTransaction, NewTransaction, Transaction};
use crate::mutation::{Mutation, MutationPlanner};
use crate::parse::Snapshot;
use crate::storage::TextSource;

/// Journal operations addressed by presentation id.
///
/// Every call reads the full text and parses it again; nothing is cached
/// between calls, so ids always reflect the text as it is now.
#[derive(Debug)]
pub struct Journal<S: TextSource> {
    source: S,
    planner: MutationPlanner,
}

impl<S: TextSource> Journal<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            planner: MutationPlanner::default(),
        }
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.planner = MutationPlanner::new(formatter);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }

    /// Records most recent first, optionally only the first `limit`.
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<ListedTransaction>> {
        let text = self.source.read()?;
        let snapshot = Snapshot::parse(&text);
        let mut listed = assign(snapshot.records());
        if let Some(limit) = limit {
            listed.truncate(limit);
        }
        Ok(listed)
    }

    pub fn count(&self) -> Result<usize> {
        let text = self.source.read()?;
        Ok(Snapshot::parse(&text).total_count())
    }

    pub fn get(&self, id: usize) -> Result<ListedTransaction> {
        let text = self.source.read()?;
        let snapshot = Snapshot::parse(&text);
        let transaction = record_at(&snapshot, id)?.clone();
        Ok(ListedTransaction { id, transaction })
    }

    /// Append a record; it becomes id 0.
    pub fn insert(&mut self, transaction: &NewTransaction) -> Result<ListedTransaction> {
        let text = self.source.read()?;
        let updated = self
            .planner
            .apply(&text, &Mutation::Insert(transaction.clone()))?;
        self.source.write(&updated)?;

        let stored = transaction.clone().into_transaction()?;
        info!(payee = %stored.payee, date = %stored.date, "inserted transaction");
        Ok(ListedTransaction {
            id: 0,
            transaction: stored,
        })
    }

    /// Overwrite the record at `id` in place; its id does not change.
    pub fn replace(&mut self, id: usize, transaction: &NewTransaction) -> Result<ListedTransaction> {
        self.replace_checked(id, None, transaction)
    }

    /// Like [`Journal::replace`], but only while the record at `id` still
    /// equals `expected`, the record the caller read earlier.
    pub fn replace_if_unchanged(
        &mut self,
        id: usize,
        expected: &Transaction,
        transaction: &NewTransaction,
    ) -> Result<ListedTransaction> {
        self.replace_checked(id, Some(expected), transaction)
    }

    /// Remove the record at `id` and return it. Older records keep their
    /// ids; newer ones shift down by one.
    pub fn delete(&mut self, id: usize) -> Result<Transaction> {
        self.delete_checked(id, None)
    }

    /// Like [`Journal::delete`], but only while the record at `id` still
    /// equals `expected`.
    pub fn delete_if_unchanged(&mut self, id: usize, expected: &Transaction) -> Result<Transaction> {
        self.delete_checked(id, Some(expected))
    }

    fn replace_checked(
        &mut self,
        id: usize,
        expected: Option<&Transaction>,
        transaction: &NewTransaction,
    ) -> Result<ListedTransaction> {
        let text = self.source.read()?;
        if let Some(expected) = expected {
            ensure_unchanged(record_at(&Snapshot::parse(&text), id)?, id, expected)?;
        }
        let updated = self.planner.apply(
            &text,
            &Mutation::Replace {
                id,
                transaction: transaction.clone(),
            },
        )?;
        self.source.write(&updated)?;

        let stored = transaction.clone().into_transaction()?;
        info!(id, payee = %stored.payee, "replaced transaction");
        Ok(ListedTransaction {
            id,
            transaction: stored,
        })
    }

    fn delete_checked(&mut self, id: usize, expected: Option<&Transaction>) -> Result<Transaction> {
        let text = self.source.read()?;
        let removed = record_at(&Snapshot::parse(&text), id)?.clone();
        if let Some(expected) = expected {
            ensure_unchanged(&removed, id, expected)?;
        }
        let updated = self.planner.apply(&text, &Mutation::Delete { id })?;
        self.source.write(&updated)?;

        info!(id, payee = %removed.payee, "deleted transaction");
        Ok(removed)
    }

    /// Distinct posting accounts, sorted.
    pub fn accounts(&self) -> Result<Vec<String>> {
        let text = self.source.read()?;
        let snapshot = Snapshot::parse(&text);
        let accounts: BTreeSet<&str> = snapshot
            .records()
            .iter()
            .flat_map(|record| record.transaction.postings.iter())
            .map(|posting| posting.account.as_str())
            .collect();
        Ok(accounts.into_iter().map(str::to_string).collect())
    }
}

fn record_at<'s>(snapshot: &'s Snapshot<'_>, id: usize) -> Result<&'s Transaction> {
    let file_index = to_file_index(id, snapshot.total_count())?;
    snapshot
        .records()
        .get(file_index)
        .map(|record| &record.transaction)
        .ok_or_else(|| JournalError::NotFound(format!("transaction {}", id)))
}

fn ensure_unchanged(current: &Transaction, id: usize, expected: &Transaction) -> Result<()> {
    if current == expected {
        Ok(())
    } else {
        Err(JournalError::NotFound(format!(
            "transaction {} changed since it was read",
            id
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryTextSource;

    const TEXT: &str = "2024/01/01 * Opening\n  Assets:Checking  $1000\n  Equity:Opening Balances\n\n2024/01/10 Grocery\n  Expenses:Food  $50\n  Assets:Checking\n";

    fn journal() -> Journal<MemoryTextSource> {
        Journal::new(MemoryTextSource::new(TEXT))
    }

    fn coffee() -> NewTransaction {
        NewTransaction::new("2024/01/12", "Coffee")
            .with_posting("Expenses:Coffee", "$4")
            .with_posting("Assets:Checking", "")
    }

    #[test]
    fn test_list_most_recent_first() {
        let listed = journal().list(None).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, 0);
        assert_eq!(listed[0].transaction.payee, "Grocery");
        assert_eq!(listed[1].transaction.payee, "Opening");
    }

    #[test]
    fn test_list_limit() {
        let listed = journal().list(Some(1)).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].transaction.payee, "Grocery");
    }

    #[test]
    fn test_get_and_not_found() {
        let journal = journal();
        assert_eq!(journal.get(1).unwrap().transaction.payee, "Opening");
        assert!(journal.get(2).unwrap_err().is_not_found());
    }

    #[test]
    fn test_insert_becomes_id_zero() {
        let mut journal = journal();
        let inserted = journal.insert(&coffee()).unwrap();
        assert_eq!(inserted.id, 0);
        assert_eq!(journal.get(0).unwrap().transaction.payee, "Coffee");
        assert_eq!(journal.count().unwrap(), 3);
        assert!(journal.source().text().starts_with(TEXT));
    }

    #[test]
    fn test_invalid_insert_does_not_write() {
        let mut journal = journal();
        let err = journal
            .insert(&NewTransaction::new("2024/01/12", "Coffee"))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(journal.source().writes(), 0);
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut journal = journal();
        journal.replace(1, &coffee()).unwrap();
        let listed = journal.list(None).unwrap();
        assert_eq!(listed[0].transaction.payee, "Grocery");
        assert_eq!(listed[1].transaction.payee, "Coffee");
    }

    #[test]
    fn test_delete_returns_removed() {
        let mut journal = journal();
        let removed = journal.delete(0).unwrap();
        assert_eq!(removed.payee, "Grocery");
        assert_eq!(journal.count().unwrap(), 1);
        assert!(journal.delete(1).unwrap_err().is_not_found());
        assert_eq!(journal.source().writes(), 1);
    }

    #[test]
    fn test_accounts_sorted_and_distinct() {
        assert_eq!(
            journal().accounts().unwrap(),
            vec![
                "Assets:Checking".to_string(),
                "Equity:Opening Balances".to_string(),
                "Expenses:Food".to_string(),
            ]
        );
    }

    #[test]
    fn test_custom_formatter() {
        let mut journal = Journal::new(MemoryTextSource::default()).with_formatter(Formatter::new(20));
        journal.insert(&coffee()).unwrap();
        assert!(journal
            .source()
            .text()
            .contains(&format!("  Expenses:Coffee{}$4\n", " ".repeat(5))));
    }

    #[test]
    fn test_delete_if_unchanged() {
        let mut journal = journal();
        let read = journal.get(0).unwrap().transaction;
        let removed = journal.delete_if_unchanged(0, &read).unwrap();
        assert_eq!(removed, read);
        assert_eq!(journal.count().unwrap(), 1);
    }

    #[test]
    fn test_delete_refuses_after_concurrent_insert() {
        let journal = journal();
        let read = journal.get(0).unwrap().transaction;
        assert_eq!(read.payee, "Grocery");

        // Another writer appends; id 0 now names the new record.
        let mut text = journal.source().text().to_string();
        text.push_str("\n2024/01/11 Rent\n  Expenses:Rent  $900\n  Assets:Checking\n");
        let mut journal = Journal::new(MemoryTextSource::new(text));

        let err = journal.delete_if_unchanged(0, &read).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("changed since it was read"));
        assert_eq!(journal.count().unwrap(), 3);
        assert_eq!(journal.source().writes(), 0);
    }

    #[test]
    fn test_replace_refuses_after_concurrent_change() {
        let read = journal().get(1).unwrap().transaction;
        let changed = TEXT.replace("Opening", "Opening balance");
        let mut journal = Journal::new(MemoryTextSource::new(changed.clone()));

        let err = journal.replace_if_unchanged(1, &read, &coffee()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(journal.source().text(), changed);

        let mut journal = self::journal();
        journal.replace_if_unchanged(1, &read, &coffee()).unwrap();
        assert_eq!(journal.get(1).unwrap().transaction.payee, "Coffee");
    }
}
