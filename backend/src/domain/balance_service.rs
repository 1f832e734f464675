//! Balance aggregation service for UDP budget accounts.
//!
//! Turns a flat transaction history into month-bucketed income/expense
//! figures for the dashboard chart, reconciled against the authoritative
//! current balance fetched from the account record. Total expenses are
//! back-computed from the reconciliation identity rather than summed from
//! negative amounts: raw history may disagree with the live balance, so
//! expense totals are forced to agree with it. This is an approximation of
//! the ledger, not a replay of it.

use crate::domain::calendar::CalendarService;
use crate::domain::commands::balance::MonthlyBalanceQuery;
use crate::domain::models::transaction::BalanceTransaction;
use chrono::Datelike;
use log::{info, warn};
use shared::{MonthlyBalanceSummary, MonthlyBucket};

const BALANCE_EPSILON: f64 = 0.001;

/// Service responsible for balance aggregation and reconciliation
#[derive(Debug, Clone, Default)]
pub struct BalanceService {
    calendar: CalendarService,
}

impl BalanceService {
    pub fn new() -> Self {
        Self {
            calendar: CalendarService::new(),
        }
    }

    /// Aggregate one year of history into twelve monthly buckets.
    ///
    /// The algorithm:
    /// 1. Sum positive amounts per calendar month of `year`
    /// 2. Derive the yearly expense total from the reconciliation identity
    ///    `total_expenses = max(0, total_income - current_balance)`
    /// 3. Apportion expenses to months in proportion to each month's share
    ///    of income (equal twelfths when the year had no income)
    /// 4. `net = income - expenses` per bucket
    ///
    /// An empty history yields twelve zeroed buckets, not an error.
    pub fn aggregate_monthly(
        &self,
        transactions: &[BalanceTransaction],
        year: i32,
        current_balance: f64,
    ) -> Vec<MonthlyBucket> {
        let mut income_by_month = [0.0f64; 12];
        for transaction in transactions {
            if transaction.date.year() == year && transaction.amount > 0.0 {
                income_by_month[(transaction.date.month() - 1) as usize] += transaction.amount;
            }
        }

        let total_income: f64 = income_by_month.iter().sum();
        let total_expenses = (total_income - current_balance).max(0.0);
        info!(
            "Aggregating {} transactions for {}: income {:.2}, reconciled expenses {:.2}",
            transactions.len(),
            year,
            total_income,
            total_expenses
        );

        (1..=12)
            .map(|month| {
                let income = income_by_month[(month - 1) as usize];
                let expenses = if total_income > 0.0 {
                    total_expenses * income / total_income
                } else {
                    total_expenses / 12.0
                };
                MonthlyBucket {
                    month,
                    label: self.calendar.month_name(month).to_string(),
                    income,
                    expenses,
                    net: income - expenses,
                }
            })
            .collect()
    }

    /// Build the full chart/table summary DTO for an account year.
    pub fn monthly_summary(
        &self,
        query: &MonthlyBalanceQuery,
        transactions: &[BalanceTransaction],
    ) -> MonthlyBalanceSummary {
        let months = self.aggregate_monthly(transactions, query.year, query.current_balance);
        MonthlyBalanceSummary {
            account_id: query.account_id.clone(),
            year: query.year,
            current_balance: query.current_balance,
            months,
        }
    }

    /// The stored balance just before the first day of a month, i.e. the
    /// balance at the end of the previous month. Zero when no earlier
    /// transaction exists.
    pub fn starting_balance_for_month(
        &self,
        month: u32,
        year: i32,
        transactions: &[BalanceTransaction],
    ) -> f64 {
        let mut sorted: Vec<&BalanceTransaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date)); // newest first

        for transaction in sorted {
            let t_year = transaction.date.year();
            let t_month = transaction.date.month();
            let before_target = t_year < year || (t_year == year && t_month < month);
            if before_target {
                return transaction.balance;
            }
        }
        0.0
    }

    /// Opening balance convention for the reconciliation invariant: the
    /// stored balance on the latest transaction before January 1.
    pub fn opening_balance_for_year(&self, year: i32, transactions: &[BalanceTransaction]) -> f64 {
        self.starting_balance_for_month(1, year, transactions)
    }

    /// Latest stored balance in the history; used when the live scalar has
    /// not been fetched yet.
    pub fn current_balance_from_history(&self, transactions: &[BalanceTransaction]) -> f64 {
        transactions
            .iter()
            .max_by_key(|t| t.date)
            .map(|t| t.balance)
            .unwrap_or(0.0)
    }

    /// Validate that every record's stored balance equals the running sum.
    /// Diagnostic pass; returns one human-readable line per discrepancy.
    pub fn validate_running_balances(&self, transactions: &[BalanceTransaction]) -> Vec<String> {
        let mut sorted: Vec<&BalanceTransaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));

        let mut errors = Vec::new();
        let mut expected_balance = 0.0;

        for transaction in sorted {
            expected_balance += transaction.amount;
            if (transaction.balance - expected_balance).abs() > BALANCE_EPSILON {
                let error = format!(
                    "Transaction {} has incorrect balance: expected {:.2}, actual {:.2}",
                    transaction.id, expected_balance, transaction.balance
                );
                warn!("Balance validation error: {}", error);
                errors.push(error);
            }
        }

        errors
    }
}
