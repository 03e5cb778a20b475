//! # Report Types
//!
//! Row and summary types for the management reports.
//!
//! The storage layer fills these from join queries; the summary types own the
//! total arithmetic so it is pure and testable here. An empty data set is a
//! valid report: empty rows, zero totals - never an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Sales Report
// =============================================================================

/// One sale joined with its customer and item names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SalesReportRow {
    pub sale_id: i64,
    pub sale_date: NaiveDate,
    pub customer_name: String,
    pub item_name: String,
    pub quantity_sold: i64,
    pub total_sale_amount_cents: i64,
}

/// All sales with the grand total of sale amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    pub rows: Vec<SalesReportRow>,
    pub total_sales_cents: i64,
}

impl SalesReport {
    /// Builds the report from its rows, computing the grand total.
    pub fn from_rows(rows: Vec<SalesReportRow>) -> Self {
        let total_sales_cents = rows.iter().map(|r| r.total_sale_amount_cents).sum();
        SalesReport {
            rows,
            total_sales_cents,
        }
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total_sales(&self) -> Money {
        Money::from_cents(self.total_sales_cents)
    }

    /// True when no sales have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Profit & Loss Report
// =============================================================================

/// One sale with its per-sale profit.
///
/// Profit = (snapshotted sales price - item purchase price) × quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProfitLossRow {
    pub sale_id: i64,
    pub sale_date: NaiveDate,
    pub item_name: String,
    pub quantity_sold: i64,
    pub total_sale_amount_cents: i64,
    pub profit_cents: i64,
}

/// All sales with running totals of revenue and profit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitLossReport {
    pub rows: Vec<ProfitLossRow>,
    pub total_sales_cents: i64,
    pub total_profit_cents: i64,
}

impl ProfitLossReport {
    /// Builds the report from its rows, computing both totals.
    pub fn from_rows(rows: Vec<ProfitLossRow>) -> Self {
        let total_sales_cents = rows.iter().map(|r| r.total_sale_amount_cents).sum();
        let total_profit_cents = rows.iter().map(|r| r.profit_cents).sum();
        ProfitLossReport {
            rows,
            total_sales_cents,
            total_profit_cents,
        }
    }

    /// Returns total revenue as Money.
    #[inline]
    pub fn total_sales(&self) -> Money {
        Money::from_cents(self.total_sales_cents)
    }

    /// Returns total profit as Money.
    #[inline]
    pub fn total_profit(&self) -> Money {
        Money::from_cents(self.total_profit_cents)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Employee Performance Report
// =============================================================================

/// Sales and commission totals for one employee.
///
/// Employees with no sales appear with zero totals - the report covers the
/// whole roster, not just active sellers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct EmployeePerformanceRow {
    pub employee_id: i64,
    pub employee_name: String,
    pub total_sales_cents: i64,
    pub total_commission_cents: i64,
}

impl EmployeePerformanceRow {
    /// Returns the employee's sales total as Money.
    #[inline]
    pub fn total_sales(&self) -> Money {
        Money::from_cents(self.total_sales_cents)
    }

    /// Returns the employee's commission total as Money.
    #[inline]
    pub fn total_commission(&self) -> Money {
        Money::from_cents(self.total_commission_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sale_id: i64, amount: i64) -> SalesReportRow {
        SalesReportRow {
            sale_id,
            sale_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            customer_name: "A".to_string(),
            item_name: "Ashwagandha Churna".to_string(),
            quantity_sold: 1,
            total_sale_amount_cents: amount,
        }
    }

    #[test]
    fn test_sales_report_total_is_row_sum() {
        let report = SalesReport::from_rows(vec![row(1, 50000), row(2, 12500), row(3, 0)]);
        assert_eq!(report.total_sales_cents, 62500);
        assert_eq!(report.total_sales().cents(), 62500);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_sales_report_empty_is_zero_total() {
        let report = SalesReport::from_rows(vec![]);
        assert!(report.is_empty());
        assert_eq!(report.total_sales_cents, 0);
    }

    #[test]
    fn test_profit_loss_totals() {
        let rows = vec![
            ProfitLossRow {
                sale_id: 1,
                sale_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
                item_name: "Ashwagandha Churna".to_string(),
                quantity_sold: 5,
                total_sale_amount_cents: 50000,
                profit_cents: 20000,
            },
            ProfitLossRow {
                sale_id: 2,
                sale_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
                item_name: "Amla Juice".to_string(),
                quantity_sold: 2,
                total_sale_amount_cents: 5000,
                profit_cents: -500,
            },
        ];

        let report = ProfitLossReport::from_rows(rows);
        assert_eq!(report.total_sales_cents, 55000);
        // Loss-making sales subtract from the total.
        assert_eq!(report.total_profit_cents, 19500);

        let row_sum: i64 = report.rows.iter().map(|r| r.profit_cents).sum();
        assert_eq!(row_sum, report.total_profit_cents);
    }

    #[test]
    fn test_report_serializes_for_presentation() {
        let report = SalesReport::from_rows(vec![row(1, 50000)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_sales_cents"], 50000);
        assert_eq!(json["rows"][0]["customer_name"], "A");
    }
}
