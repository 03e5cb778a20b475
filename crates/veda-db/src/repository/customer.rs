//! # Customer Repository
//!
//! Database operations for customers.
//!
//! Most customer rows are written by `SaleRepository::process_sale` inside
//! the sale transaction; this repository covers the standalone add operation
//! and the read paths.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use veda_core::validation::{validate_customer_name, validate_email};
use veda_core::{Customer, NewCustomer};

const CUSTOMER_COLUMNS: &str = "customer_id, name, email, contact_number, created_at";

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a new customer after validating the name and email.
    pub async fn insert(&self, new_customer: &NewCustomer) -> DbResult<Customer> {
        validate_customer_name(&new_customer.name)?;
        validate_email(new_customer.email.as_deref())?;

        let name = new_customer.name.trim().to_string();
        let now = Utc::now();

        debug!(name = %name, "Inserting customer");

        let result = sqlx::query(
            r#"
            INSERT INTO customers (name, email, contact_number, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&name)
        .bind(&new_customer.email)
        .bind(&new_customer.contact_number)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Customer {
            customer_id: result.last_insert_rowid(),
            name,
            email: new_customer.email.clone(),
            contact_number: new_customer.contact_number.clone(),
            created_at: now,
        })
    }

    /// Gets a customer by id.
    pub async fn get_by_id(&self, customer_id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE customer_id = ?1"
        ))
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Lists all customers in insertion order.
    pub async fn list_all(&self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers ORDER BY customer_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Counts customers (used by atomicity tests and diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
