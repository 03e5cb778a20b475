//! # Employee Repository
//!
//! Database operations for employees. Employees are added by management and
//! then referenced as salespeople on sales; there is no delete path because
//! historical sales keep pointing at them.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use veda_core::validation::{validate_commission_rate_bps, validate_employee_name};
use veda_core::{Employee, NewEmployee};

const EMPLOYEE_COLUMNS: &str =
    "employee_id, name, designation, salary_cents, commission_rate_bps, created_at";

/// Repository for employee database operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        EmployeeRepository { pool }
    }

    /// Inserts a new employee after validating name and commission rate.
    pub async fn insert(&self, new_employee: &NewEmployee) -> DbResult<Employee> {
        validate_employee_name(&new_employee.name)?;
        validate_commission_rate_bps(new_employee.commission_rate_bps)?;

        let name = new_employee.name.trim().to_string();
        let now = Utc::now();

        debug!(name = %name, commission_bps = %new_employee.commission_rate_bps, "Inserting employee");

        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, designation, salary_cents, commission_rate_bps, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&name)
        .bind(&new_employee.designation)
        .bind(new_employee.salary_cents)
        .bind(new_employee.commission_rate_bps)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Employee {
            employee_id: result.last_insert_rowid(),
            name,
            designation: new_employee.designation.clone(),
            salary_cents: new_employee.salary_cents,
            commission_rate_bps: new_employee.commission_rate_bps,
            created_at: now,
        })
    }

    /// Gets an employee by id.
    pub async fn get_by_id(&self, employee_id: i64) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = ?1"
        ))
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Gets an employee by exact name (the salesperson picker works by name).
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE name = ?1 LIMIT 1"
        ))
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// Lists all employees.
    pub async fn list_all(&self) -> DbResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY employee_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Counts employees (for diagnostics and the seed guard).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    fn salesperson() -> NewEmployee {
        NewEmployee {
            name: "Meera Joshi".to_string(),
            designation: "Salesperson".to_string(),
            salary_cents: 2_500_000,
            commission_rate_bps: 1000, // 10%
        }
    }

    #[tokio::test]
    async fn test_insert_and_fetch_employee() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let employee = db.employees().insert(&salesperson()).await.unwrap();
        assert!(employee.employee_id > 0);
        assert_eq!(employee.commission_rate().bps(), 1000);

        let fetched = db
            .employees()
            .get_by_id(employee.employee_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.name, "Meera Joshi");
        assert_eq!(fetched.salary().cents(), 2_500_000);

        let by_name = db
            .employees()
            .get_by_name("Meera Joshi")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_name.employee_id, employee.employee_id);
    }

    #[tokio::test]
    async fn test_insert_rejects_bad_input() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut no_name = salesperson();
        no_name.name = "".to_string();
        assert!(matches!(
            db.employees().insert(&no_name).await,
            Err(DbError::Validation(_))
        ));

        let mut rate_too_high = salesperson();
        rate_too_high.commission_rate_bps = 10001; // > 100%
        assert!(matches!(
            db.employees().insert(&rate_too_high).await,
            Err(DbError::Validation(_))
        ));

        assert_eq!(db.employees().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_all_in_id_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        db.employees().insert(&salesperson()).await.unwrap();

        let mut second = salesperson();
        second.name = "Arjun Nair".to_string();
        second.commission_rate_bps = 500;
        db.employees().insert(&second).await.unwrap();

        let all = db.employees().list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Meera Joshi");
        assert_eq!(all[1].name, "Arjun Nair");
    }
}
