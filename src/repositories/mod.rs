pub mod postgres;

use async_trait::async_trait;

use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeFilter, EmployeePayload};

pub use postgres::{PgDepartmentRepository, PgEmployeeRepository};

pub type RepositoryResult<T> = Result<T, sqlx::Error>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list_employees(&self, filter: &EmployeeFilter) -> RepositoryResult<Vec<Employee>>;

    async fn find_employee(&self, emp_id: &str) -> RepositoryResult<Option<Employee>>;

    // None when the insert routine yields no id
    async fn add_employee(&self, employee: &EmployeePayload) -> RepositoryResult<Option<String>>;

    async fn update_employee(&self, emp_id: &str, employee: &EmployeePayload) -> RepositoryResult<u64>;

    // also renumbers the remaining ids
    async fn delete_employee(&self, emp_id: &str) -> RepositoryResult<u64>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn list_departments(&self) -> RepositoryResult<Vec<Department>>;
    async fn find_department(&self, dep_id: &str) -> RepositoryResult<Option<Department>>;
    async fn department_exists(&self, dep_id: &str) -> RepositoryResult<bool>;
}
