use std::sync::Arc;
use log::{debug, info};
use uuid::Uuid;
use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::repository::EmployeeRepository;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

#[derive(Clone)]
pub struct EmployeeController {
    repository: Arc<dyn EmployeeRepository>,
    new_id: fn() -> Uuid,
}

impl EmployeeController {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self::with_id_source(repository, Uuid::new_v4)
    }

    pub fn with_id_source(repository: Arc<dyn EmployeeRepository>, new_id: fn() -> Uuid) -> Self {
        Self { repository, new_id }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Employee, AppError> {
        match self.repository.find_by_id(id).await? {
            Some(employee) => Ok(employee),
            None => {
                debug!("No employee with id {}", id);
                Err(AppError::NotFound(EMPLOYEE_NOT_FOUND.to_string()))
            }
        }
    }

    /// Persists `payload` under a freshly generated id. Any id the caller sent
    /// is discarded; the other fields are stored as given.
    pub async fn create(&self, mut payload: Employee) -> Result<Employee, AppError> {
        payload.id = Some((self.new_id)());

        let saved = self.repository.save(payload).await?;
        info!(
            "Created employee {} (employed: {})",
            saved.id.map(|id| id.to_string()).unwrap_or_default(),
            saved.is_employed()
        );
        Ok(saved)
    }
}
