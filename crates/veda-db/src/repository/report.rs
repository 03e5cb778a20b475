//! # Report Repository
//!
//! Read-only join queries behind the management reports. Nothing here
//! mutates; empty tables produce empty reports with zero totals, which is a
//! valid outcome, not an error.
//!
//! Row shapes live in `veda_core::reports`; the summaries' total arithmetic
//! is pure code there, so these queries only fetch rows.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use veda_core::reports::{
    EmployeePerformanceRow, ProfitLossReport, ProfitLossRow, SalesReport, SalesReportRow,
};
use veda_core::Item;

/// Repository for report queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Sales report: every sale joined with customer and item names, plus
    /// the grand total of sale amounts.
    pub async fn sales_report(&self) -> DbResult<SalesReport> {
        let rows = sqlx::query_as::<_, SalesReportRow>(
            r#"
            SELECT
                s.sale_id,
                s.sale_date,
                c.name AS customer_name,
                i.name AS item_name,
                s.quantity_sold,
                s.total_sale_amount_cents
            FROM sales s
            INNER JOIN customers c ON c.customer_id = s.customer_id
            INNER JOIN items i ON i.item_id = s.item_id
            ORDER BY s.sale_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "Sales report generated");
        Ok(SalesReport::from_rows(rows))
    }

    /// Inventory report: one row per item with all item fields.
    pub async fn inventory_report(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT
                item_id, name, description, purchase_price_cents,
                selling_price_cents, stock_shop, stock_warehouse,
                created_at, updated_at
            FROM items
            ORDER BY item_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = items.len(), "Inventory report generated");
        Ok(items)
    }

    /// Profit & loss report: per-sale profit against the item's purchase
    /// price, plus running totals of revenue and profit.
    ///
    /// Profit uses the snapshotted `sales_price_cents`, so repricing an item
    /// after a sale never changes historical report rows.
    pub async fn profit_loss_report(&self) -> DbResult<ProfitLossReport> {
        let rows = sqlx::query_as::<_, ProfitLossRow>(
            r#"
            SELECT
                s.sale_id,
                s.sale_date,
                i.name AS item_name,
                s.quantity_sold,
                s.total_sale_amount_cents,
                (s.sales_price_cents - i.purchase_price_cents) * s.quantity_sold AS profit_cents
            FROM sales s
            INNER JOIN items i ON i.item_id = s.item_id
            ORDER BY s.sale_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "Profit/loss report generated");
        Ok(ProfitLossReport::from_rows(rows))
    }

    /// Employee performance report: sales and commission totals per
    /// employee, zero for employees with no sales.
    pub async fn employee_performance_report(&self) -> DbResult<Vec<EmployeePerformanceRow>> {
        let rows = sqlx::query_as::<_, EmployeePerformanceRow>(
            r#"
            SELECT
                e.employee_id,
                e.name AS employee_name,
                COALESCE(SUM(s.total_sale_amount_cents), 0) AS total_sales_cents,
                COALESCE(SUM(s.commission_earned_cents), 0) AS total_commission_cents
            FROM employees e
            LEFT JOIN sales s ON s.salesperson_id = e.employee_id
            GROUP BY e.employee_id, e.name
            ORDER BY e.employee_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "Employee performance report generated");
        Ok(rows)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use veda_core::{NewCustomer, NewEmployee, NewItem, SaleRequest};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Two items, two salespeople, two sales:
    ///   - 5 × Ashwagandha at ₹100.00 (cost ₹60.00) by Meera (10%)
    ///   - 2 × Amla Juice at ₹25.00 (cost ₹30.00, sold at a loss) by Meera
    /// Arjun makes no sales.
    async fn seed_sales(db: &Database) {
        let ashwagandha = db
            .items()
            .insert(&NewItem {
                name: "Ashwagandha".to_string(),
                description: None,
                purchase_price_cents: 6000,
                selling_price_cents: 10000,
                stock_shop: 50,
                stock_warehouse: 0,
            })
            .await
            .unwrap();

        let amla = db
            .items()
            .insert(&NewItem {
                name: "Amla Juice".to_string(),
                description: None,
                purchase_price_cents: 3000,
                selling_price_cents: 2500,
                stock_shop: 20,
                stock_warehouse: 0,
            })
            .await
            .unwrap();

        let meera = db
            .employees()
            .insert(&NewEmployee {
                name: "Meera Joshi".to_string(),
                designation: "Salesperson".to_string(),
                salary_cents: 2_500_000,
                commission_rate_bps: 1000,
            })
            .await
            .unwrap();

        db.employees()
            .insert(&NewEmployee {
                name: "Arjun Nair".to_string(),
                designation: "Trainee".to_string(),
                salary_cents: 1_500_000,
                commission_rate_bps: 500,
            })
            .await
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        db.sales()
            .process_sale(&SaleRequest {
                item_id: ashwagandha.item_id,
                quantity: 5,
                salesperson_id: meera.employee_id,
                customer: NewCustomer::new("A"),
                sale_date: date,
            })
            .await
            .unwrap();

        db.sales()
            .process_sale(&SaleRequest {
                item_id: amla.item_id,
                quantity: 2,
                salesperson_id: meera.employee_id,
                customer: NewCustomer::new("B"),
                sale_date: date,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_all_reports_empty_without_data() {
        let db = test_db().await;

        let sales = db.reports().sales_report().await.unwrap();
        assert!(sales.is_empty());
        assert_eq!(sales.total_sales_cents, 0);

        let inventory = db.reports().inventory_report().await.unwrap();
        assert!(inventory.is_empty());

        let pnl = db.reports().profit_loss_report().await.unwrap();
        assert!(pnl.is_empty());
        assert_eq!(pnl.total_profit_cents, 0);

        let performance = db.reports().employee_performance_report().await.unwrap();
        assert!(performance.is_empty());
    }

    #[tokio::test]
    async fn test_sales_report_joins_and_totals() {
        let db = test_db().await;
        seed_sales(&db).await;

        let report = db.reports().sales_report().await.unwrap();
        assert_eq!(report.rows.len(), 2);

        let first = &report.rows[0];
        assert_eq!(first.customer_name, "A");
        assert_eq!(first.item_name, "Ashwagandha");
        assert_eq!(first.quantity_sold, 5);
        assert_eq!(first.total_sale_amount_cents, 50000);

        let second = &report.rows[1];
        assert_eq!(second.customer_name, "B");
        assert_eq!(second.item_name, "Amla Juice");
        assert_eq!(second.total_sale_amount_cents, 5000);

        // Grand total equals the sum over all rows.
        assert_eq!(report.total_sales_cents, 55000);
        let row_sum: i64 = report
            .rows
            .iter()
            .map(|r| r.total_sale_amount_cents)
            .sum();
        assert_eq!(report.total_sales_cents, row_sum);
    }

    #[tokio::test]
    async fn test_inventory_report_reflects_stock_after_sales() {
        let db = test_db().await;
        seed_sales(&db).await;

        let report = db.reports().inventory_report().await.unwrap();
        assert_eq!(report.len(), 2);

        let ashwagandha = report.iter().find(|i| i.name == "Ashwagandha").unwrap();
        assert_eq!(ashwagandha.stock_shop, 45);
        assert_eq!(ashwagandha.purchase_price_cents, 6000);
        assert_eq!(ashwagandha.selling_price_cents, 10000);
    }

    #[tokio::test]
    async fn test_profit_loss_per_row_and_totals() {
        let db = test_db().await;
        seed_sales(&db).await;

        let report = db.reports().profit_loss_report().await.unwrap();
        assert_eq!(report.rows.len(), 2);

        // (100.00 - 60.00) × 5 = ₹200.00 profit.
        assert_eq!(report.rows[0].profit_cents, 20000);
        // (25.00 - 30.00) × 2 = -₹10.00: sold at a loss.
        assert_eq!(report.rows[1].profit_cents, -1000);

        assert_eq!(report.total_sales_cents, 55000);
        assert_eq!(report.total_profit_cents, 19000);

        // Round-trip: summing row profits reproduces the total.
        let row_sum: i64 = report.rows.iter().map(|r| r.profit_cents).sum();
        assert_eq!(row_sum, report.total_profit_cents);
    }

    #[tokio::test]
    async fn test_employee_performance_includes_idle_employees() {
        let db = test_db().await;
        seed_sales(&db).await;

        let report = db.reports().employee_performance_report().await.unwrap();
        assert_eq!(report.len(), 2);

        let meera = report
            .iter()
            .find(|r| r.employee_name == "Meera Joshi")
            .unwrap();
        // ₹500.00 + ₹50.00 of sales; 10% commission on each.
        assert_eq!(meera.total_sales_cents, 55000);
        assert_eq!(meera.total_commission_cents, 5500);

        let arjun = report
            .iter()
            .find(|r| r.employee_name == "Arjun Nair")
            .unwrap();
        assert_eq!(arjun.total_sales_cents, 0);
        assert_eq!(arjun.total_commission_cents, 0);
    }
}
