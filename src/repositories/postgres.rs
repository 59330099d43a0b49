use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{DepartmentRepository, EmployeeRepository, RepositoryResult};
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeFilter, EmployeePayload};

const EMPLOYEE_SELECT: &str = r#"
    SELECT
        e.emp_id, e.emp_firstname, e.emp_lastname, e.emp_birth, e.emp_email,
        e.emp_photo, e.emp_date, e.emp_phone,
        d.dep_id, d.dep_title, d.dep_salary::float8 AS dep_salary, d.dep_des
    FROM employee e
    LEFT JOIN department d ON e.dep_id = d.dep_id
"#;

const DEPARTMENT_SELECT: &str =
    "SELECT dep_id, dep_title, dep_salary::float8 AS dep_salary, dep_des FROM department";

/// Every filter value goes through `push_bind`; nothing from the request is
/// spliced into the SQL text.
pub(crate) fn employee_list_query(filter: &EmployeeFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(EMPLOYEE_SELECT);
    query.push(" WHERE 1=1");

    if let Some(department) = &filter.department {
        query.push(" AND e.dep_id = ").push_bind(department.clone());
    }

    if let Some(term) = &filter.search_term {
        let pattern = format!("%{}%", term);
        query
            .push(" AND (e.emp_firstname LIKE ")
            .push_bind(pattern.clone())
            .push(" OR e.emp_lastname LIKE ")
            .push_bind(pattern)
            .push(")");
    }

    query
}

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn list_employees(&self, filter: &EmployeeFilter) -> RepositoryResult<Vec<Employee>> {
        let mut query = employee_list_query(filter);
        query.build_query_as::<Employee>().fetch_all(&self.pool).await
    }

    async fn find_employee(&self, emp_id: &str) -> RepositoryResult<Option<Employee>> {
        let sql = format!("{} WHERE TRIM(e.emp_id) = $1", EMPLOYEE_SELECT);
        sqlx::query_as::<_, Employee>(&sql)
            .bind(emp_id.trim())
            .fetch_optional(&self.pool)
            .await
    }

    async fn add_employee(&self, employee: &EmployeePayload) -> RepositoryResult<Option<String>> {
        let emp_id = sqlx::query_scalar::<_, String>(
            "SELECT emp_id FROM sp_add_employee($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(employee.emp_firstname.as_deref())
        .bind(employee.emp_lastname.as_deref())
        .bind(employee.emp_birth)
        .bind(employee.emp_email.as_deref())
        .bind(employee.emp_photo.as_deref())
        .bind(employee.emp_date)
        .bind(employee.emp_phone.as_deref())
        .bind(employee.dep_id.as_deref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(emp_id.map(|id| id.trim().to_string()))
    }

    async fn update_employee(&self, emp_id: &str, employee: &EmployeePayload) -> RepositoryResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE employee
            SET emp_firstname = $1,
                emp_lastname = $2,
                emp_birth = $3,
                emp_email = $4,
                emp_photo = $5,
                emp_date = $6,
                emp_phone = $7,
                dep_id = $8
            WHERE emp_id = $9
            "#,
        )
        .bind(employee.emp_firstname.as_deref())
        .bind(employee.emp_lastname.as_deref())
        .bind(employee.emp_birth)
        .bind(employee.emp_email.as_deref())
        .bind(employee.emp_photo.as_deref())
        .bind(employee.emp_date)
        .bind(employee.emp_phone.as_deref())
        .bind(employee.dep_id.as_deref())
        .bind(emp_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_employee(&self, emp_id: &str) -> RepositoryResult<u64> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM employee WHERE emp_id = $1")
            .bind(emp_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("CALL sp_reorder_emp_ids()")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(deleted)
    }
}

#[derive(Clone)]
pub struct PgDepartmentRepository {
    pool: PgPool,
}

impl PgDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PgDepartmentRepository {
    async fn list_departments(&self) -> RepositoryResult<Vec<Department>> {
        sqlx::query_as::<_, Department>(DEPARTMENT_SELECT)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_department(&self, dep_id: &str) -> RepositoryResult<Option<Department>> {
        let sql = format!("{} WHERE dep_id = $1", DEPARTMENT_SELECT);
        sqlx::query_as::<_, Department>(&sql)
            .bind(dep_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn department_exists(&self, dep_id: &str) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM department WHERE dep_id = $1)")
            .bind(dep_id)
            .fetch_one(&self.pool)
            .await
    }
}
