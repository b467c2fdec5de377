use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;
use crate::errors::AppError;
use crate::models::employee::Employee;
use super::{require_id, EmployeeRepository, RepoResult};

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, full_name, salary, age, job_title, email, \
    contract_hire_date, contract_termination_date";

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    log::error!("Database error during {}: {:?}", context, err);
    AppError::from(err)
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let sql = format!("SELECT {} FROM employees ORDER BY created_at, id", EMPLOYEE_COLUMNS);

        sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("employee listing", err))
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Employee>> {
        let sql = format!("SELECT {} FROM employees WHERE id = $1", EMPLOYEE_COLUMNS);

        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("employee lookup", err))
    }

    async fn save(&self, employee: Employee) -> RepoResult<Employee> {
        let id = require_id(&employee)?;
        let sql = format!(
            r#"
            INSERT INTO employees (
                id, first_name, last_name, full_name, salary, age, job_title, email,
                contract_hire_date, contract_termination_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                full_name = EXCLUDED.full_name,
                salary = EXCLUDED.salary,
                age = EXCLUDED.age,
                job_title = EXCLUDED.job_title,
                email = EXCLUDED.email,
                contract_hire_date = EXCLUDED.contract_hire_date,
                contract_termination_date = EXCLUDED.contract_termination_date
            RETURNING {}
            "#,
            EMPLOYEE_COLUMNS
        );

        sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.full_name)
            .bind(employee.salary)
            .bind(employee.age)
            .bind(&employee.job_title)
            .bind(&employee.email)
            .bind(employee.contract_hire_date)
            .bind(employee.contract_termination_date)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_sqlx_error("employee save", err))
    }
}
