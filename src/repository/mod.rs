pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;
use crate::errors::AppError;
use crate::models::employee::Employee;

pub use memory::InMemoryEmployeeRepository;
pub use postgres::PgEmployeeRepository;

pub type RepoResult<T> = Result<T, AppError>;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Employee>>;

    /// Inserts the employee, or replaces the stored record with the same id.
    async fn save(&self, employee: Employee) -> RepoResult<Employee>;
}

pub(crate) fn require_id(employee: &Employee) -> RepoResult<Uuid> {
    employee
        .id
        .ok_or_else(|| AppError::InternalServerError("Employee id must be assigned before save".to_string()))
}
