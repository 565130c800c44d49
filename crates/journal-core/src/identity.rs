//! Mapping between file order and presentation order.
//!
//! Callers see the most recently written record as id 0. Both directions
//! take `total_count` explicitly, and the count must come from the same
//! parse that located the target record.

use crate::error::{JournalError, Result};
use crate::model::{ListedTransaction, ParsedTransaction};

/// File index → presentation id.
pub fn to_presentation_id(file_index: usize, total_count: usize) -> Result<usize> {
    if file_index >= total_count {
        return Err(out_of_range(file_index, total_count));
    }
    Ok(total_count - 1 - file_index)
}

/// Presentation id → file index.
pub fn to_file_index(presentation_id: usize, total_count: usize) -> Result<usize> {
    if presentation_id >= total_count {
        return Err(out_of_range(presentation_id, total_count));
    }
    Ok(total_count - 1 - presentation_id)
}

/// Pair records (file order) with their presentation ids, most recent first.
pub fn assign(records: &[ParsedTransaction]) -> Vec<ListedTransaction> {
    let total_count = records.len();
    records
        .iter()
        .enumerate()
        .rev()
        .map(|(file_index, record)| ListedTransaction {
            id: total_count - 1 - file_index,
            transaction: record.transaction.clone(),
        })
        .collect()
}

fn out_of_range(id: usize, total_count: usize) -> JournalError {
    JournalError::NotFound(format!(
        "transaction {} (journal has {} transactions)",
        id, total_count
    ))
}
