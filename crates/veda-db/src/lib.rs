//! # veda-db: Database Layer for Veda POS
//!
//! This crate provides database access for the Veda POS system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Veda POS Data Flow                               │
//! │                                                                         │
//! │  Presentation layer (forms, report tables - not in this workspace)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     veda-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │    │  (item, sale, │    │  (embedded)  │   │   │
//! │  │   │               │    │   report, …)  │    │              │   │   │
//! │  │   │ SqlitePool    │◄───│ guarded stock │    │ 001_init.sql │   │   │
//! │  │   │ Management    │    │ sale txn      │    │              │   │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (veda.db)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (item, customer, employee, sale, report)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use veda_db::{Database, DbConfig};
//! use veda_core::NewItem;
//!
//! // Create database with default config (runs migrations)
//! let db = Database::new(DbConfig::new("path/to/veda.db")).await?;
//!
//! // Inventory
//! let item = db.items().insert(&NewItem::new("Ashwagandha Churna", 6000, 10000)).await?;
//! let item = db.items().receive(item.item_id, 30).await?;
//!
//! // Reports
//! let sales = db.reports().sales_report().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::employee::EmployeeRepository;
pub use repository::item::ItemRepository;
pub use repository::report::ReportRepository;
pub use repository::sale::SaleRepository;
