//! Domain model for a UDP balance transaction.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Classify a signed amount. Zero counts as income so that reversal
    /// placeholders render on the credit side.
    pub fn from_amount(amount: f64) -> Self {
        if amount >= 0.0 {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }
}

/// One signed movement on a UDP budget account. Append-only history from
/// the perspective of this crate; records and their ids are minted by the
/// remote backend, aggregation never creates or edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTransaction {
    pub id: String,
    pub account_id: String,
    pub date: NaiveDateTime,
    pub description: String,
    /// Positive for income, negative for expense
    pub amount: f64,
    /// Account balance after this transaction
    pub balance: f64,
    pub transaction_type: TransactionType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_amount_sign() {
        assert_eq!(TransactionType::from_amount(12.5), TransactionType::Income);
        assert_eq!(TransactionType::from_amount(0.0), TransactionType::Income);
        assert_eq!(TransactionType::from_amount(-3.0), TransactionType::Expense);
    }
}
