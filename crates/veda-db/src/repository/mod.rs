//! # Repository Module
//!
//! Database repository implementations for Veda POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.   │
//! │                                                                         │
//! │  Caller (presentation layer)                                            │
//! │       │                                                                 │
//! │       │  db.items().issue(item_id, 5)                                   │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ItemRepository                                                         │
//! │  ├── insert(&self, new_item)                                            │
//! │  ├── issue(&self, item_id, quantity)                                    │
//! │  ├── receive(&self, item_id, quantity)                                  │
//! │  └── reconcile(&self, item_id, observed)                                │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                         │
//! │  • SQL is isolated in one place                                         │
//! │  • Validation runs before any statement executes                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`item::ItemRepository`] - Item CRUD and stock operations
//! - [`customer::CustomerRepository`] - Customer records
//! - [`employee::EmployeeRepository`] - Employee roster
//! - [`sale::SaleRepository`] - The atomic sale transaction
//! - [`report::ReportRepository`] - Read-only report queries

pub mod customer;
pub mod employee;
pub mod item;
pub mod report;
pub mod sale;
