//! # Sale Repository
//!
//! Database operations for sales, including the compound sale transaction.
//!
//! ## The Sale Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 process_sale() - one transaction                        │
//! │                                                                         │
//! │  validate quantity + customer name        (before any write)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN                                                                  │
//! │   ├── resolve item            ── missing? ──► NotFound, rollback        │
//! │   ├── resolve salesperson     ── missing? ──► NotFound, rollback        │
//! │   ├── INSERT customer                                                   │
//! │   ├── UPDATE items SET stock_shop = stock_shop - qty                    │
//! │   │        WHERE … AND stock_shop >= qty                                │
//! │   │                   └── 0 rows? ──► InsufficientStock, rollback       │
//! │   ├── INSERT sale (price snapshot, total, commission)                   │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Rollback discards the customer row and the stock change together:     │
//! │  no customer without a sale, no stock change without a sale.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note: every sale records a brand-new customer row, even for a repeat
//! customer. That mirrors the walk-in counter flow this system models;
//! dedup-by-contact is a deliberate non-feature for now.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use veda_core::validation::{validate_customer_name, validate_email, validate_sale_quantity};
use veda_core::{CompletedSale, Employee, Item, Sale, SaleRequest};

const SALE_COLUMNS: &str = "sale_id, sale_date, customer_id, salesperson_id, item_id, \
     quantity_sold, sales_price_cents, total_sale_amount_cents, commission_earned_cents, created_at";

const ITEM_COLUMNS: &str = "item_id, name, description, purchase_price_cents, \
     selling_price_cents, stock_shop, stock_warehouse, created_at, updated_at";

const EMPLOYEE_COLUMNS: &str =
    "employee_id, name, designation, salary_cents, commission_rate_bps, created_at";

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Processes a sale: records the customer, decrements shop stock, and
    /// writes the immutable sale row - all in one transaction.
    ///
    /// ## Preconditions
    /// - quantity >= 1 (and within the sanity bound)
    /// - customer name present
    /// - item and salesperson exist
    /// - item has at least `quantity` units of shop stock
    ///
    /// ## Money Math
    /// - `sales_price` is snapshotted from the item's current selling price
    /// - `total = sales_price × quantity`
    /// - `commission = commission_rate × total`, rounded half-up
    ///
    /// ## Returns
    /// The created [`Sale`] and the [`Item`] with its decremented stock.
    ///
    /// ## Atomicity
    /// Any failure after BEGIN rolls the whole transaction back; a sale that
    /// fails on stock leaves no orphaned customer row behind.
    pub async fn process_sale(&self, request: &SaleRequest) -> DbResult<CompletedSale> {
        validate_sale_quantity(request.quantity)?;
        validate_customer_name(&request.customer.name)?;
        validate_email(request.customer.email.as_deref())?;

        debug!(
            item_id = %request.item_id,
            quantity = %request.quantity,
            salesperson_id = %request.salesperson_id,
            "Processing sale"
        );

        let mut tx = self.pool.begin().await?;

        // Resolve both references inside the transaction so the snapshot
        // price and commission rate are the ones the sale is committed with.
        let item = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE item_id = ?1"
        ))
        .bind(request.item_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("Item", request.item_id))?;

        let salesperson = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = ?1"
        ))
        .bind(request.salesperson_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("Employee", request.salesperson_id))?;

        // Fail before writing anything when stock is visibly short. The
        // guarded UPDATE below remains the authoritative check.
        if item.stock_shop < request.quantity {
            return Err(DbError::insufficient_stock(
                item.name,
                "shop",
                item.stock_shop,
                request.quantity,
            ));
        }

        let now = Utc::now();
        let customer_name = request.customer.name.trim().to_string();

        let customer_id = sqlx::query(
            r#"
            INSERT INTO customers (name, email, contact_number, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&customer_name)
        .bind(&request.customer.email)
        .bind(&request.customer.contact_number)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let updated = sqlx::query(
            r#"
            UPDATE items
            SET stock_shop = stock_shop - ?1, updated_at = ?2
            WHERE item_id = ?3 AND stock_shop >= ?1
            "#,
        )
        .bind(request.quantity)
        .bind(now)
        .bind(request.item_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            // Dropping the transaction rolls back the customer insert.
            return Err(DbError::insufficient_stock(
                item.name,
                "shop",
                item.stock_shop,
                request.quantity,
            ));
        }

        let sales_price = item.selling_price();
        let total = sales_price.multiply_quantity(request.quantity);
        let commission = total.calculate_commission(salesperson.commission_rate());

        let sale_id = sqlx::query(
            r#"
            INSERT INTO sales (
                sale_date, customer_id, salesperson_id, item_id,
                quantity_sold, sales_price_cents, total_sale_amount_cents,
                commission_earned_cents, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(request.sale_date)
        .bind(customer_id)
        .bind(request.salesperson_id)
        .bind(request.item_id)
        .bind(request.quantity)
        .bind(sales_price.cents())
        .bind(total.cents())
        .bind(commission.cents())
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let updated_item = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE item_id = ?1"
        ))
        .bind(request.item_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            sale_id = %sale_id,
            total = %total,
            commission = %commission,
            remaining_stock = %updated_item.stock_shop,
            "Sale processed"
        );

        let sale = Sale {
            sale_id,
            sale_date: request.sale_date,
            customer_id,
            salesperson_id: request.salesperson_id,
            item_id: request.item_id,
            quantity_sold: request.quantity,
            sales_price_cents: sales_price.cents(),
            total_sale_amount_cents: total.cents(),
            commission_earned_cents: commission.cents(),
            created_at: now,
        };

        Ok(CompletedSale {
            sale,
            item: updated_item,
        })
    }

    /// Gets a sale by id.
    pub async fn get_by_id(&self, sale_id: i64) -> DbResult<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales WHERE sale_id = ?1"
        ))
        .bind(sale_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Lists all sales in id order.
    pub async fn list_all(&self) -> DbResult<Vec<Sale>> {
        let sales = sqlx::query_as::<_, Sale>(&format!(
            "SELECT {SALE_COLUMNS} FROM sales ORDER BY sale_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(sales)
    }

    /// Counts sales (for diagnostics and atomicity tests).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
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
    use veda_core::{NewCustomer, NewEmployee, NewItem};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    /// Seeds the canonical fixture: Ashwagandha at ₹100.00 selling /
    /// ₹60.00 purchase with 50 units at the counter, and a salesperson
    /// on 10% commission.
    async fn seed_fixture(db: &Database) -> (Item, Employee) {
        let item = db
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

        let salesperson = db
            .employees()
            .insert(&NewEmployee {
                name: "Meera Joshi".to_string(),
                designation: "Salesperson".to_string(),
                salary_cents: 2_500_000,
                commission_rate_bps: 1000, // 10%
            })
            .await
            .unwrap();

        (item, salesperson)
    }

    fn request(item: &Item, salesperson: &Employee, quantity: i64) -> SaleRequest {
        SaleRequest {
            item_id: item.item_id,
            quantity,
            salesperson_id: salesperson.employee_id,
            customer: NewCustomer::new("A"),
            sale_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_process_sale_happy_path() {
        let db = test_db().await;
        let (item, salesperson) = seed_fixture(&db).await;

        let completed = db
            .sales()
            .process_sale(&request(&item, &salesperson, 5))
            .await
            .unwrap();

        // 5 × ₹100.00 = ₹500.00 total, 10% commission = ₹50.00.
        assert_eq!(completed.sale.total_sale_amount_cents, 50000);
        assert_eq!(completed.sale.commission_earned_cents, 5000);
        assert_eq!(completed.sale.sales_price_cents, 10000);
        assert_eq!(completed.sale.quantity_sold, 5);
        assert_eq!(completed.item.stock_shop, 45);

        // Exactly one sale and one customer row exist.
        assert_eq!(db.sales().count().await.unwrap(), 1);
        assert_eq!(db.customers().count().await.unwrap(), 1);

        // The sale is durably readable and references the new customer.
        let stored = db
            .sales()
            .get_by_id(completed.sale.sale_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.customer_id, completed.sale.customer_id);
        assert_eq!(stored.salesperson_id, salesperson.employee_id);
        assert_eq!(
            stored.sale_date,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        );
    }

    #[tokio::test]
    async fn test_insufficient_stock_rolls_back_everything() {
        let db = test_db().await;
        let (item, salesperson) = seed_fixture(&db).await;

        let err = db
            .sales()
            .process_sale(&request(&item, &salesperson, 51))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::InsufficientStock {
                available: 50,
                requested: 51,
                ..
            }
        ));

        // No sale, no orphaned customer, stock untouched.
        assert_eq!(db.sales().count().await.unwrap(), 0);
        assert_eq!(db.customers().count().await.unwrap(), 0);
        let unchanged = db.items().get_by_id(item.item_id).await.unwrap().unwrap();
        assert_eq!(unchanged.stock_shop, 50);
    }

    #[tokio::test]
    async fn test_invalid_quantity_rejected_before_any_write() {
        let db = test_db().await;
        let (item, salesperson) = seed_fixture(&db).await;

        for quantity in [0, -1, 1000] {
            let err = db
                .sales()
                .process_sale(&request(&item, &salesperson, quantity))
                .await
                .unwrap_err();
            assert!(matches!(err, DbError::Validation(_)), "quantity {quantity}");
        }

        assert_eq!(db.sales().count().await.unwrap(), 0);
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_item_and_salesperson() {
        let db = test_db().await;
        let (item, salesperson) = seed_fixture(&db).await;

        let mut bad_item = request(&item, &salesperson, 1);
        bad_item.item_id = 999;
        assert!(matches!(
            db.sales().process_sale(&bad_item).await,
            Err(DbError::NotFound { .. })
        ));

        let mut bad_salesperson = request(&item, &salesperson, 1);
        bad_salesperson.salesperson_id = 999;
        assert!(matches!(
            db.sales().process_sale(&bad_salesperson).await,
            Err(DbError::NotFound { .. })
        ));

        // Neither failure left a customer behind.
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_customer_name_rejected() {
        let db = test_db().await;
        let (item, salesperson) = seed_fixture(&db).await;

        let mut no_name = request(&item, &salesperson, 1);
        no_name.customer.name = "  ".to_string();
        assert!(matches!(
            db.sales().process_sale(&no_name).await,
            Err(DbError::Validation(_))
        ));
        assert_eq!(db.customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sales_price_is_snapshotted() {
        let db = test_db().await;
        let (item, salesperson) = seed_fixture(&db).await;

        let first = db
            .sales()
            .process_sale(&request(&item, &salesperson, 1))
            .await
            .unwrap();
        assert_eq!(first.sale.sales_price_cents, 10000);

        // Reprice the item directly, then sell again.
        sqlx::query("UPDATE items SET selling_price_cents = 12000 WHERE item_id = ?1")
            .bind(item.item_id)
            .execute(db.pool())
            .await
            .unwrap();

        let second = db
            .sales()
            .process_sale(&request(&item, &salesperson, 1))
            .await
            .unwrap();
        assert_eq!(second.sale.sales_price_cents, 12000);

        // The earlier sale still carries the old price.
        let stored_first = db
            .sales()
            .get_by_id(first.sale.sale_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored_first.sales_price_cents, 10000);
    }

    #[tokio::test]
    async fn test_each_sale_records_a_new_customer() {
        let db = test_db().await;
        let (item, salesperson) = seed_fixture(&db).await;

        // The same walk-in details on two sales produce two customer rows.
        db.sales()
            .process_sale(&request(&item, &salesperson, 1))
            .await
            .unwrap();
        db.sales()
            .process_sale(&request(&item, &salesperson, 1))
            .await
            .unwrap();

        assert_eq!(db.customers().count().await.unwrap(), 2);
        assert_eq!(db.sales().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_selling_down_to_zero_then_failing() {
        let db = test_db().await;
        let (item, salesperson) = seed_fixture(&db).await;

        let completed = db
            .sales()
            .process_sale(&request(&item, &salesperson, 50))
            .await
            .unwrap();
        assert_eq!(completed.item.stock_shop, 0);

        // The shelf is empty; one more unit must fail.
        assert!(matches!(
            db.sales()
                .process_sale(&request(&item, &salesperson, 1))
                .await,
            Err(DbError::InsufficientStock { .. })
        ));
    }

    #[tokio::test]
    async fn test_commission_uses_salesperson_rate() {
        let db = test_db().await;
        let (item, _) = seed_fixture(&db).await;

        let flat = db
            .employees()
            .insert(&NewEmployee {
                name: "Arjun Nair".to_string(),
                designation: "Trainee".to_string(),
                salary_cents: 1_500_000,
                commission_rate_bps: 0,
            })
            .await
            .unwrap();

        let completed = db
            .sales()
            .process_sale(&request(&item, &flat, 5))
            .await
            .unwrap();
        assert_eq!(completed.sale.total_sale_amount_cents, 50000);
        assert_eq!(completed.sale.commission_earned_cents, 0);
    }
}
