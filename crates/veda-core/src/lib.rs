//! # veda-core: Pure Business Logic for Veda POS
//!
//! This crate is the **heart** of Veda POS. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Veda POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Presentation Layer (not in this workspace)         │   │
//! │  │    inventory forms ──► sale form ──► report tables              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ veda-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  reports  │  │ validation│   │   │
//! │  │   │   Item    │  │   Money   │  │ SalesRept │  │   rules   │   │   │
//! │  │   │   Sale    │  │ Commission│  │ ProfitLoss│  │   checks  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    veda-db (Database Layer)                     │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Customer, Employee, Sale)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`reports`] - Report row and summary types
//! - [`error`] - Validation error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use veda_core::money::Money;
//! use veda_core::types::CommissionRate;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(10000); // ₹100.00
//!
//! // A 5-unit sale at a 10% commission rate
//! let total = price.multiply_quantity(5);
//! let commission = total.calculate_commission(CommissionRate::from_percentage(10.0));
//!
//! assert_eq!(total.cents(), 50000);
//! assert_eq!(commission.cents(), 5000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use veda_core::Money` instead of
// `use veda_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use reports::*;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item in one sale
///
/// ## Business Reason
/// Prevents accidental over-selling (e.g., typing 1000 instead of 10).
/// Configurable per-store in future versions.
pub const MAX_SALE_QUANTITY: i64 = 999;

/// Maximum length for item/customer/employee names
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum commission rate in basis points (10000 = 100%)
pub const MAX_COMMISSION_RATE_BPS: u32 = 10000;
