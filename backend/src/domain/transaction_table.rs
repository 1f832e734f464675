//! Transaction table domain logic for the facility portal.
//!
//! Transforms raw UDP transaction history into formatted, user-friendly
//! table rows, and paginates the in-memory list for the dashboard. Pure
//! formatting and slicing logic, independent of any UI framework.

use crate::domain::calendar::CalendarService;
use crate::domain::commands::transactions::{PaginationInfo, TransactionPageQuery, TransactionPageResult};
use crate::domain::models::transaction::BalanceTransaction;
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use shared::{AmountType, FormattedTransaction, TransactionTableRequest, TransactionTableResponse};

/// Configuration for transaction table display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionTableConfig {
    pub show_currency_symbol: bool,
    pub date_format: DateFormat,
    pub amount_format: AmountFormat,
    /// Rows per page when the query does not set a limit
    pub default_page_size: u32,
}

/// Date formatting options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DateFormat {
    MonthDayYear, // "June 13, 2025"
    ShortDate,    // "06/13/2025"
    Iso,          // "2025-06-13"
}

/// Amount formatting options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AmountFormat {
    PlusMinusSign,  // "+$10.00" / "-$5.00"
    ParenthesesNeg, // "$10.00" / "($5.00)"
    ColorOnly,      // "$10.00" (styled with color)
}

impl Default for TransactionTableConfig {
    fn default() -> Self {
        Self {
            show_currency_symbol: true,
            date_format: DateFormat::MonthDayYear,
            amount_format: AmountFormat::PlusMinusSign,
            default_page_size: 20,
        }
    }
}

/// Transaction table service that handles all table-related business logic
#[derive(Debug, Clone, Default)]
pub struct TransactionTableService {
    config: TransactionTableConfig,
    calendar: CalendarService,
}

impl TransactionTableService {
    /// Create a new TransactionTableService with default configuration
    pub fn new() -> Self {
        Self {
            config: TransactionTableConfig::default(),
            calendar: CalendarService::new(),
        }
    }

    /// Create a new TransactionTableService with custom configuration
    pub fn with_config(config: TransactionTableConfig) -> Self {
        Self {
            config,
            calendar: CalendarService::new(),
        }
    }

    /// Paginate the in-memory history, newest first. Cursor semantics:
    /// return rows strictly after the `after` id in display order.
    pub fn paginate(
        &self,
        transactions: &[BalanceTransaction],
        query: &TransactionPageQuery,
    ) -> TransactionPageResult {
        let mut ordered = transactions.to_vec();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(after_id) = &query.after {
            if let Some(idx) = ordered.iter().position(|t| &t.id == after_id) {
                ordered = ordered.into_iter().skip(idx + 1).collect();
            }
        }

        // A zero limit would report has_more with no cursor to continue from
        let limit = query.limit.unwrap_or(self.config.default_page_size).max(1) as usize;
        let has_more = ordered.len() > limit;
        ordered.truncate(limit);

        let next_cursor = if has_more {
            ordered.last().map(|t| t.id.clone())
        } else {
            None
        };

        TransactionPageResult {
            transactions: ordered,
            pagination: PaginationInfo { has_more, next_cursor },
        }
    }

    /// One formatted page for the dashboard table.
    pub fn table_page(
        &self,
        transactions: &[BalanceTransaction],
        request: &TransactionTableRequest,
    ) -> TransactionTableResponse {
        let query = TransactionPageQuery {
            after: request.after.clone(),
            limit: request.limit,
        };
        let page = self.paginate(transactions, &query);
        TransactionTableResponse {
            formatted_transactions: self.format_transactions_for_table(&page.transactions),
            pagination: shared::PaginationInfo {
                has_more: page.pagination.has_more,
                next_cursor: page.pagination.next_cursor,
            },
        }
    }

    /// Format a list of transactions for table display
    pub fn format_transactions_for_table(
        &self,
        transactions: &[BalanceTransaction],
    ) -> Vec<FormattedTransaction> {
        transactions.iter().map(|tx| self.format_single_transaction(tx)).collect()
    }

    /// Format a single transaction for display
    pub fn format_single_transaction(&self, transaction: &BalanceTransaction) -> FormattedTransaction {
        FormattedTransaction {
            id: transaction.id.clone(),
            formatted_date: self.format_date(transaction.date),
            description: transaction.description.clone(),
            formatted_amount: self.format_amount(transaction.amount),
            amount_type: self.classify_amount(transaction.amount),
            formatted_balance: self.format_balance(transaction.balance),
            raw_amount: transaction.amount,
            raw_balance: transaction.balance,
            raw_date: transaction.date.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// Format a date for display based on configuration
    pub fn format_date(&self, date: NaiveDateTime) -> String {
        match self.config.date_format {
            DateFormat::MonthDayYear => format!(
                "{} {}, {}",
                self.calendar.month_name(date.month()),
                date.day(),
                date.year()
            ),
            DateFormat::ShortDate => format!("{:02}/{:02}/{}", date.month(), date.day(), date.year()),
            DateFormat::Iso => format!("{}-{:02}-{:02}", date.year(), date.month(), date.day()),
        }
    }

    /// Format an amount for display based on configuration
    pub fn format_amount(&self, amount: f64) -> String {
        let abs_amount = amount.abs();
        let currency = if self.config.show_currency_symbol { "$" } else { "" };
        let formatted_value = format!("{}{:.2}", currency, abs_amount);

        match self.config.amount_format {
            AmountFormat::PlusMinusSign => {
                if amount >= 0.0 {
                    format!("+{}", formatted_value)
                } else {
                    format!("-{}", formatted_value)
                }
            }
            AmountFormat::ParenthesesNeg => {
                if amount >= 0.0 {
                    formatted_value
                } else {
                    format!("({})", formatted_value)
                }
            }
            AmountFormat::ColorOnly => formatted_value,
        }
    }

    /// Format a balance for display
    pub fn format_balance(&self, balance: f64) -> String {
        let currency = if self.config.show_currency_symbol { "$" } else { "" };
        format!("{}{:.2}", currency, balance)
    }

    /// Classify amount type for styling purposes
    pub fn classify_amount(&self, amount: f64) -> AmountType {
        if amount > 0.0 {
            AmountType::Positive
        } else if amount < 0.0 {
            AmountType::Negative
        } else {
            AmountType::Zero
        }
    }

    /// Get CSS class name for amount styling
    pub fn amount_css_class(&self, amount: f64) -> &'static str {
        match self.classify_amount(amount) {
            AmountType::Positive => "amount positive",
            AmountType::Negative => "amount negative",
            AmountType::Zero => "amount zero",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_service() -> TransactionTableService {
        TransactionTableService::new()
    }

    fn tx(id: &str, day: u32, amount: f64, balance: f64) -> BalanceTransaction {
        BalanceTransaction {
            id: id.to_string(),
            account_id: "udp-1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, day)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            description: format!("Movement {}", id),
            amount,
            balance,
            transaction_type: crate::domain::models::transaction::TransactionType::from_amount(amount),
        }
    }

    #[test]
    fn formats_a_row_for_display() {
        let service = create_test_service();
        let row = service.format_single_transaction(&tx("t1", 13, -5.0, 95.0));

        assert_eq!(row.formatted_date, "June 13, 2025");
        assert_eq!(row.formatted_amount, "-$5.00");
        assert_eq!(row.formatted_balance, "$95.00");
        assert_eq!(row.amount_type, AmountType::Negative);
        assert_eq!(row.raw_date, "2025-06-13T09:00:00");
    }

    #[test]
    fn date_format_options() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();

        let service = TransactionTableService::with_config(TransactionTableConfig {
            date_format: DateFormat::ShortDate,
            ..TransactionTableConfig::default()
        });
        assert_eq!(service.format_date(date), "06/03/2025");

        let service = TransactionTableService::with_config(TransactionTableConfig {
            date_format: DateFormat::Iso,
            ..TransactionTableConfig::default()
        });
        assert_eq!(service.format_date(date), "2025-06-03");
    }

    #[test]
    fn amount_format_options() {
        let service = TransactionTableService::with_config(TransactionTableConfig {
            amount_format: AmountFormat::ParenthesesNeg,
            ..TransactionTableConfig::default()
        });
        assert_eq!(service.format_amount(10.0), "$10.00");
        assert_eq!(service.format_amount(-5.0), "($5.00)");

        let service = TransactionTableService::with_config(TransactionTableConfig {
            show_currency_symbol: false,
            amount_format: AmountFormat::ColorOnly,
            ..TransactionTableConfig::default()
        });
        assert_eq!(service.format_amount(-5.0), "5.00");
    }

    #[test]
    fn classifies_amounts_for_styling() {
        let service = create_test_service();
        assert_eq!(service.classify_amount(1.0), AmountType::Positive);
        assert_eq!(service.classify_amount(-1.0), AmountType::Negative);
        assert_eq!(service.classify_amount(0.0), AmountType::Zero);
        assert_eq!(service.amount_css_class(-1.0), "amount negative");
    }

    #[test]
    fn paginates_newest_first_with_cursor() {
        let service = create_test_service();
        let transactions = vec![
            tx("t1", 1, 10.0, 10.0),
            tx("t2", 5, 20.0, 30.0),
            tx("t3", 10, -5.0, 25.0),
            tx("t4", 20, 15.0, 40.0),
        ];

        let first_page = service.paginate(
            &transactions,
            &TransactionPageQuery { after: None, limit: Some(2) },
        );
        assert_eq!(first_page.transactions[0].id, "t4");
        assert_eq!(first_page.transactions[1].id, "t3");
        assert!(first_page.pagination.has_more);
        assert_eq!(first_page.pagination.next_cursor.as_deref(), Some("t3"));

        let second_page = service.paginate(
            &transactions,
            &TransactionPageQuery { after: Some("t3".to_string()), limit: Some(2) },
        );
        assert_eq!(second_page.transactions[0].id, "t2");
        assert_eq!(second_page.transactions[1].id, "t1");
        assert!(!second_page.pagination.has_more);
        assert!(second_page.pagination.next_cursor.is_none());
    }

    #[test]
    fn zero_limit_still_yields_a_usable_cursor() {
        let service = create_test_service();
        let transactions = vec![tx("t1", 1, 10.0, 10.0), tx("t2", 5, 20.0, 30.0)];

        let page = service.paginate(
            &transactions,
            &TransactionPageQuery { after: None, limit: Some(0) },
        );
        assert_eq!(page.transactions.len(), 1);
        assert_eq!(page.transactions[0].id, "t2");
        assert!(page.pagination.has_more);
        assert_eq!(page.pagination.next_cursor.as_deref(), Some("t2"));
    }

    #[test]
    fn pagination_of_empty_history() {
        let service = create_test_service();
        let page = service.paginate(&[], &TransactionPageQuery::default());
        assert!(page.transactions.is_empty());
        assert!(!page.pagination.has_more);
    }

    #[test]
    fn table_page_maps_to_dto() {
        let service = create_test_service();
        let transactions = vec![tx("t1", 1, 10.0, 10.0), tx("t2", 5, -2.5, 7.5)];

        let response = service.table_page(
            &transactions,
            &TransactionTableRequest { after: None, limit: Some(10) },
        );
        assert_eq!(response.formatted_transactions.len(), 2);
        assert_eq!(response.formatted_transactions[0].id, "t2");
        assert_eq!(response.formatted_transactions[0].formatted_amount, "-$2.50");
        assert!(!response.pagination.has_more);
    }
}
