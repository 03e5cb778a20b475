//! # Domain Types
//!
//! Core domain types used throughout Veda POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    Employee     │   │      Sale       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  item_id        │   │  employee_id    │   │  sale_id        │       │
//! │  │  name           │   │  name           │   │  customer_id FK │       │
//! │  │  prices (cents) │   │  commission bps │   │  item_id     FK │       │
//! │  │  stock_shop     │   │  salary (cents) │   │  totals (cents) │       │
//! │  │  stock_warehouse│   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Customer     │   │ CommissionRate  │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  customer_id    │   │  bps (u32)      │                             │
//! │  │  email/contact  │   │  1000 = 10%     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entity ids are database-assigned integers (`INTEGER PRIMARY KEY`); the
//! `New*` input types carry caller-supplied fields for the add operations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Commission Rate
// =============================================================================

/// Salesperson commission rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% commission
///
/// Management enters rates as percentages (0-100); storage and arithmetic
/// use bps so commission math stays in integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRate(u32);

impl CommissionRate {
    /// Creates a commission rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        CommissionRate(bps)
    }

    /// Creates a commission rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        CommissionRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero commission rate.
    #[inline]
    pub const fn zero() -> Self {
        CommissionRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for CommissionRate {
    fn default() -> Self {
        CommissionRate::zero()
    }
}

// =============================================================================
// Item
// =============================================================================

/// A product item tracked across the shop counter and the warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Database-assigned identifier.
    pub item_id: i64,

    /// Display name, unique enough for counter staff to search by.
    pub name: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// What the shop paid per unit, in cents.
    pub purchase_price_cents: i64,

    /// What the shop charges per unit, in cents.
    pub selling_price_cents: i64,

    /// Units currently at the shop counter. Never negative.
    pub stock_shop: i64,

    /// Units currently in the warehouse. Never negative.
    pub stock_warehouse: i64,

    /// When the item was created.
    pub created_at: DateTime<Utc>,

    /// When stock or details last changed.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Returns the selling price as a Money type.
    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_cents(self.selling_price_cents)
    }

    /// Returns the purchase price as a Money type.
    #[inline]
    pub fn purchase_price(&self) -> Money {
        Money::from_cents(self.purchase_price_cents)
    }

    /// Checks whether the shop can issue the given quantity from counter stock.
    #[inline]
    pub fn can_issue(&self, quantity: i64) -> bool {
        quantity >= 0 && quantity <= self.stock_shop
    }

    /// Total units on hand across both locations.
    #[inline]
    pub fn total_stock(&self) -> i64 {
        self.stock_shop + self.stock_warehouse
    }
}

/// Caller-supplied fields for adding an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub purchase_price_cents: i64,
    pub selling_price_cents: i64,
    /// Opening counter stock (defaults to 0 via [`NewItem::new`]).
    pub stock_shop: i64,
    /// Opening warehouse stock (defaults to 0 via [`NewItem::new`]).
    pub stock_warehouse: i64,
}

impl NewItem {
    /// Creates a new item input with empty description and zero opening stock.
    pub fn new(name: impl Into<String>, purchase_price_cents: i64, selling_price_cents: i64) -> Self {
        NewItem {
            name: name.into(),
            description: None,
            purchase_price_cents,
            selling_price_cents,
            stock_shop: 0,
            stock_warehouse: 0,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer recorded at sale time.
///
/// The sale flow records a fresh customer row per transaction (walk-in
/// counter sales); see `SaleRepository::process_sale` for the consequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub customer_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied customer fields, captured as part of a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
}

impl NewCustomer {
    /// Creates a customer input with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        NewCustomer {
            name: name.into(),
            email: None,
            contact_number: None,
        }
    }
}

// =============================================================================
// Employee
// =============================================================================

/// A shop employee who can act as salesperson on sales.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub designation: String,
    /// Monthly salary in cents.
    pub salary_cents: i64,
    /// Commission rate in basis points (1000 = 10%).
    pub commission_rate_bps: u32,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Returns the commission rate.
    #[inline]
    pub fn commission_rate(&self) -> CommissionRate {
        CommissionRate::from_bps(self.commission_rate_bps)
    }

    /// Returns the salary as Money.
    #[inline]
    pub fn salary(&self) -> Money {
        Money::from_cents(self.salary_cents)
    }
}

/// Caller-supplied fields for adding an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub designation: String,
    pub salary_cents: i64,
    pub commission_rate_bps: u32,
}

// =============================================================================
// Sale
// =============================================================================

/// A recorded sale transaction.
///
/// ## Snapshot Pattern
/// `sales_price_cents` freezes the item's selling price at sale time, so
/// repricing an item never rewrites sale history or report output.
/// Sales are immutable once created - there is no update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Sale {
    pub sale_id: i64,
    pub sale_date: NaiveDate,
    pub customer_id: i64,
    pub salesperson_id: i64,
    pub item_id: i64,
    /// Units sold. Always positive.
    pub quantity_sold: i64,
    /// Item selling price at sale time (frozen).
    pub sales_price_cents: i64,
    /// sales_price × quantity.
    pub total_sale_amount_cents: i64,
    /// Salesperson commission on the total.
    pub commission_earned_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// Returns the snapshotted unit price as Money.
    #[inline]
    pub fn sales_price(&self) -> Money {
        Money::from_cents(self.sales_price_cents)
    }

    /// Returns the sale total as Money.
    #[inline]
    pub fn total_sale_amount(&self) -> Money {
        Money::from_cents(self.total_sale_amount_cents)
    }

    /// Returns the commission earned as Money.
    #[inline]
    pub fn commission_earned(&self) -> Money {
        Money::from_cents(self.commission_earned_cents)
    }
}

/// Input for the compound sale operation.
///
/// Bundles everything the counter flow captures: what was sold, who sold it,
/// and the walk-in customer's details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRequest {
    pub item_id: i64,
    pub quantity: i64,
    pub salesperson_id: i64,
    pub customer: NewCustomer,
    pub sale_date: NaiveDate,
}

/// Result of a processed sale: the recorded sale plus the item with its
/// decremented counter stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedSale {
    pub sale: Sale,
    pub item: Item,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_rate_from_bps() {
        let rate = CommissionRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_commission_rate_from_percentage() {
        let rate = CommissionRate::from_percentage(10.0);
        assert_eq!(rate.bps(), 1000);

        let fractional = CommissionRate::from_percentage(2.5);
        assert_eq!(fractional.bps(), 250);
    }

    #[test]
    fn test_commission_rate_default_is_zero() {
        assert!(CommissionRate::default().is_zero());
    }

    #[test]
    fn test_item_can_issue() {
        let item = Item {
            item_id: 1,
            name: "Ashwagandha Churna".to_string(),
            description: None,
            purchase_price_cents: 6000,
            selling_price_cents: 10000,
            stock_shop: 50,
            stock_warehouse: 200,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(item.can_issue(0));
        assert!(item.can_issue(50));
        assert!(!item.can_issue(51));
        assert!(!item.can_issue(-1));
        assert_eq!(item.total_stock(), 250);
    }

    #[test]
    fn test_new_item_defaults() {
        let input = NewItem::new("Triphala Churna", 4000, 7500);
        assert_eq!(input.stock_shop, 0);
        assert_eq!(input.stock_warehouse, 0);
        assert!(input.description.is_none());
    }

    #[test]
    fn test_sale_money_helpers() {
        let sale = Sale {
            sale_id: 1,
            sale_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            customer_id: 1,
            salesperson_id: 1,
            item_id: 1,
            quantity_sold: 5,
            sales_price_cents: 10000,
            total_sale_amount_cents: 50000,
            commission_earned_cents: 5000,
            created_at: Utc::now(),
        };

        assert_eq!(sale.sales_price().cents(), 10000);
        assert_eq!(sale.total_sale_amount().cents(), 50000);
        assert_eq!(sale.commission_earned().cents(), 5000);
    }
}
