use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use crate::models::employee::Employee;
use super::{require_id, EmployeeRepository, RepoResult};

#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.employees.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.id == Some(id)).cloned())
    }

    async fn save(&self, employee: Employee) -> RepoResult<Employee> {
        let id = require_id(&employee)?;
        let mut employees = self.employees.write().await;

        match employees.iter_mut().find(|e| e.id == Some(id)) {
            Some(existing) => *existing = employee.clone(),
            None => employees.push(employee.clone()),
        }

        Ok(employee)
    }
}
