//! # Item Repository
//!
//! Database operations for inventory items.
//!
//! ## Stock Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Two-Location Stock Flow                             │
//! │                                                                         │
//! │   restock_warehouse()      receive()            issue() / sale          │
//! │  ───────────────────►  ───────────────►   ──────────────────────►      │
//! │   supplier            WAREHOUSE          SHOP COUNTER         customer  │
//! │                       stock_warehouse    stock_shop                     │
//! │                                              ▲                          │
//! │                                              │ reconcile()              │
//! │                                        end-of-day physical count        │
//! │                                        overwrites the recorded value    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Guarded Updates
//! Every decrement runs as `UPDATE … SET stock = stock - ?n WHERE … AND
//! stock >= ?n`. The WHERE clause is the compare-and-swap: if another call
//! got there first, zero rows match and the caller gets a typed error
//! instead of a negative stock count.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use veda_core::validation::{
    validate_adjustment_quantity, validate_item_name, validate_price_cents, validate_stock_count,
};
use veda_core::{Item, NewItem};

/// All columns of the items table, in struct field order.
const ITEM_COLUMNS: &str = "item_id, name, description, purchase_price_cents, \
     selling_price_cents, stock_shop, stock_warehouse, created_at, updated_at";

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let item = repo.insert(&NewItem::new("Ashwagandha Churna", 6000, 10000)).await?;
/// let item = repo.issue(item.item_id, 5).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a new item after validating its fields.
    ///
    /// ## Validation
    /// - name non-empty
    /// - both prices non-negative
    /// - both opening stock counts non-negative
    ///
    /// ## Returns
    /// The stored item with its database-assigned id.
    pub async fn insert(&self, new_item: &NewItem) -> DbResult<Item> {
        validate_item_name(&new_item.name)?;
        validate_price_cents("purchase price", new_item.purchase_price_cents)?;
        validate_price_cents("selling price", new_item.selling_price_cents)?;
        validate_stock_count("shop stock", new_item.stock_shop)?;
        validate_stock_count("warehouse stock", new_item.stock_warehouse)?;

        let name = new_item.name.trim().to_string();
        let now = Utc::now();

        debug!(name = %name, "Inserting item");

        let result = sqlx::query(
            r#"
            INSERT INTO items (
                name, description, purchase_price_cents, selling_price_cents,
                stock_shop, stock_warehouse, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&name)
        .bind(&new_item.description)
        .bind(new_item.purchase_price_cents)
        .bind(new_item.selling_price_cents)
        .bind(new_item.stock_shop)
        .bind(new_item.stock_warehouse)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let item_id = result.last_insert_rowid();

        Ok(Item {
            item_id,
            name,
            description: new_item.description.clone(),
            purchase_price_cents: new_item.purchase_price_cents,
            selling_price_cents: new_item.selling_price_cents,
            stock_shop: new_item.stock_shop,
            stock_warehouse: new_item.stock_warehouse,
            created_at: now,
            updated_at: now,
        })
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, item_id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE item_id = ?1"
        ))
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Gets an item by its exact name.
    ///
    /// The counter flows look items up by the name shown in the picker.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE name = ?1 LIMIT 1"
        ))
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Lists all items ordered by name.
    pub async fn list_all(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Lists items that currently have shop stock to sell.
    ///
    /// The sale flow offers only these.
    pub async fn list_in_stock(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE stock_shop > 0 ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Lists items whose shop stock is at or below the given threshold.
    ///
    /// Feeds the low-stock alert view.
    pub async fn list_low_stock(&self, threshold: i64) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE stock_shop <= ?1 ORDER BY stock_shop, name"
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Issues (removes) a quantity from shop stock.
    ///
    /// ## Preconditions
    /// - `quantity >= 0`
    /// - `quantity <= stock_shop`
    ///
    /// On failure nothing changes: a negative quantity is rejected before
    /// the query runs, and the guarded UPDATE refuses to take stock below
    /// zero even under concurrent callers.
    ///
    /// ## Returns
    /// The item with its decremented stock.
    pub async fn issue(&self, item_id: i64, quantity: i64) -> DbResult<Item> {
        validate_adjustment_quantity("issue quantity", quantity)?;

        debug!(item_id = %item_id, quantity = %quantity, "Issuing shop stock");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE items
            SET stock_shop = stock_shop - ?1, updated_at = ?2
            WHERE item_id = ?3 AND stock_shop >= ?1
            "#,
        )
        .bind(quantity)
        .bind(now)
        .bind(item_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Distinguish a missing item from short stock.
            let item = self
                .get_by_id(item_id)
                .await?
                .ok_or_else(|| DbError::not_found("Item", item_id))?;
            return Err(DbError::insufficient_stock(
                item.name,
                "shop",
                item.stock_shop,
                quantity,
            ));
        }

        self.get_by_id(item_id)
            .await?
            .ok_or_else(|| DbError::not_found("Item", item_id))
    }

    /// Receives a quantity into shop stock from the warehouse.
    ///
    /// A single guarded UPDATE moves both columns, so the transfer can never
    /// half-apply or overdraw the warehouse.
    pub async fn receive(&self, item_id: i64, quantity: i64) -> DbResult<Item> {
        validate_adjustment_quantity("receive quantity", quantity)?;

        debug!(item_id = %item_id, quantity = %quantity, "Receiving stock into shop");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE items
            SET stock_warehouse = stock_warehouse - ?1,
                stock_shop = stock_shop + ?1,
                updated_at = ?2
            WHERE item_id = ?3 AND stock_warehouse >= ?1
            "#,
        )
        .bind(quantity)
        .bind(now)
        .bind(item_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            let item = self
                .get_by_id(item_id)
                .await?
                .ok_or_else(|| DbError::not_found("Item", item_id))?;
            return Err(DbError::insufficient_stock(
                item.name,
                "warehouse",
                item.stock_warehouse,
                quantity,
            ));
        }

        self.get_by_id(item_id)
            .await?
            .ok_or_else(|| DbError::not_found("Item", item_id))
    }

    /// Reconciles shop stock against a physical count.
    ///
    /// Unconditionally overwrites `stock_shop` with the observed quantity -
    /// no transfer arithmetic. This is the end-of-day count correcting
    /// whatever the records drifted to.
    pub async fn reconcile(&self, item_id: i64, observed_quantity: i64) -> DbResult<Item> {
        validate_adjustment_quantity("observed quantity", observed_quantity)?;

        debug!(item_id = %item_id, observed = %observed_quantity, "Reconciling shop stock");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE items
            SET stock_shop = ?1, updated_at = ?2
            WHERE item_id = ?3
            "#,
        )
        .bind(observed_quantity)
        .bind(now)
        .bind(item_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", item_id));
        }

        self.get_by_id(item_id)
            .await?
            .ok_or_else(|| DbError::not_found("Item", item_id))
    }

    /// Adds a delivered quantity to warehouse stock.
    pub async fn restock_warehouse(&self, item_id: i64, quantity: i64) -> DbResult<Item> {
        validate_adjustment_quantity("restock quantity", quantity)?;

        debug!(item_id = %item_id, quantity = %quantity, "Restocking warehouse");

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE items
            SET stock_warehouse = stock_warehouse + ?1, updated_at = ?2
            WHERE item_id = ?3
            "#,
        )
        .bind(quantity)
        .bind(now)
        .bind(item_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Item", item_id));
        }

        self.get_by_id(item_id)
            .await?
            .ok_or_else(|| DbError::not_found("Item", item_id))
    }

    /// Counts items (for diagnostics and the seed guard).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
