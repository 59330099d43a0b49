#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

use employee_api::models::department::Department;
use employee_api::models::employee::{Employee, EmployeeFilter, EmployeePayload};
use employee_api::repositories::{DepartmentRepository, EmployeeRepository, RepositoryResult};

#[derive(Clone, Debug)]
struct StoredEmployee {
    emp_id: String,
    fields: EmployeePayload,
}

/// In-memory stand-in for the database, including the id allocation and
/// renumbering done by the stored routines.
#[derive(Default)]
pub struct InMemoryDirectory {
    employees: Mutex<Vec<StoredEmployee>>,
    departments: Mutex<Vec<Department>>,
}

fn format_id(n: usize) -> String {
    format!("E{:03}", n)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

impl InMemoryDirectory {
    pub fn seeded() -> Self {
        let directory = InMemoryDirectory::default();

        directory.departments.lock().unwrap().extend([
            Department {
                dep_id: "D01".to_string(),
                dep_title: Some("Engineering".to_string()),
                dep_salary: Some(45000.0),
                dep_des: Some("Builds the product".to_string()),
            },
            Department {
                dep_id: "D02".to_string(),
                dep_title: Some("Accounting".to_string()),
                dep_salary: Some(32000.5),
                dep_des: None,
            },
        ]);

        let people = [
            ("Somchai", "Jaidee", Some("D01")),
            ("Malee", "Srisuk", Some("D02")),
            ("Anan", "Somboon", Some("D01")),
            ("Pim", "Rattana", None),
        ];
        let mut employees = directory.employees.lock().unwrap();
        for (i, (first, last, dep)) in people.iter().enumerate() {
            employees.push(StoredEmployee {
                // stored ids carry trailing padding like a fixed-width column
                emp_id: format!("{}  ", format_id(i + 1)),
                fields: EmployeePayload {
                    emp_firstname: Some(first.to_string()),
                    emp_lastname: Some(last.to_string()),
                    emp_birth: Some(date(1990, 1, 1 + i as u32)),
                    emp_email: Some(format!("{}@example.com", first.to_lowercase())),
                    emp_photo: Some(String::new()),
                    emp_date: Some(date(2020, 6, 1)),
                    emp_phone: Some("0800000000".to_string()),
                    dep_id: dep.map(str::to_string),
                },
            });
        }
        drop(employees);

        directory
    }

    pub fn employee_ids(&self) -> Vec<String> {
        self.employees
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.emp_id.trim().to_string())
            .collect()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.lock().unwrap().len()
    }

    fn to_record(&self, stored: &StoredEmployee) -> Employee {
        let departments = self.departments.lock().unwrap();
        let department = stored
            .fields
            .dep_id
            .as_ref()
            .and_then(|dep_id| departments.iter().find(|d| &d.dep_id == dep_id));

        Employee {
            emp_id: stored.emp_id.clone(),
            emp_firstname: stored.fields.emp_firstname.clone(),
            emp_lastname: stored.fields.emp_lastname.clone(),
            emp_birth: stored.fields.emp_birth,
            emp_email: stored.fields.emp_email.clone(),
            emp_photo: stored.fields.emp_photo.clone(),
            emp_date: stored.fields.emp_date,
            emp_phone: stored.fields.emp_phone.clone(),
            dep_id: department.map(|d| d.dep_id.clone()),
            dep_title: department.and_then(|d| d.dep_title.clone()),
            dep_salary: department.and_then(|d| d.dep_salary),
            dep_des: department.and_then(|d| d.dep_des.clone()),
        }
    }
}

fn name_matches(field: &Option<String>, term: &str) -> bool {
    field.as_deref().map_or(false, |name| name.contains(term))
}

#[async_trait]
impl EmployeeRepository for InMemoryDirectory {
    async fn list_employees(&self, filter: &EmployeeFilter) -> RepositoryResult<Vec<Employee>> {
        let employees = self.employees.lock().unwrap().clone();
        Ok(employees
            .iter()
            .filter(|e| match &filter.department {
                Some(dep_id) => e.fields.dep_id.as_ref() == Some(dep_id),
                None => true,
            })
            .filter(|e| match &filter.search_term {
                Some(term) => {
                    name_matches(&e.fields.emp_firstname, term) || name_matches(&e.fields.emp_lastname, term)
                }
                None => true,
            })
            .map(|e| self.to_record(e))
            .collect())
    }

    async fn find_employee(&self, emp_id: &str) -> RepositoryResult<Option<Employee>> {
        let employees = self.employees.lock().unwrap().clone();
        Ok(employees
            .iter()
            .find(|e| e.emp_id.trim() == emp_id.trim())
            .map(|e| self.to_record(e)))
    }

    async fn add_employee(&self, employee: &EmployeePayload) -> RepositoryResult<Option<String>> {
        let mut employees = self.employees.lock().unwrap();
        let emp_id = format_id(employees.len() + 1);
        employees.push(StoredEmployee {
            emp_id: emp_id.clone(),
            fields: employee.clone(),
        });
        Ok(Some(emp_id))
    }

    async fn update_employee(&self, emp_id: &str, employee: &EmployeePayload) -> RepositoryResult<u64> {
        let mut employees = self.employees.lock().unwrap();
        let mut affected = 0;
        for stored in employees.iter_mut().filter(|e| e.emp_id.trim() == emp_id) {
            stored.fields = employee.clone();
            affected += 1;
        }
        Ok(affected)
    }

    async fn delete_employee(&self, emp_id: &str) -> RepositoryResult<u64> {
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|e| e.emp_id.trim() != emp_id);
        let deleted = (before - employees.len()) as u64;

        employees.sort_by(|a, b| a.emp_id.cmp(&b.emp_id));
        for (i, stored) in employees.iter_mut().enumerate() {
            stored.emp_id = format_id(i + 1);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDirectory {
    async fn list_departments(&self) -> RepositoryResult<Vec<Department>> {
        Ok(self.departments.lock().unwrap().clone())
    }

    async fn find_department(&self, dep_id: &str) -> RepositoryResult<Option<Department>> {
        Ok(self
            .departments
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.dep_id == dep_id)
            .cloned())
    }

    async fn department_exists(&self, dep_id: &str) -> RepositoryResult<bool> {
        Ok(self.departments.lock().unwrap().iter().any(|d| d.dep_id == dep_id))
    }
}

/// Builds the router over an in-memory directory.
macro_rules! init_app {
    ($directory:expr) => {{
        let directory: std::sync::Arc<$crate::common::InMemoryDirectory> = $directory;
        let employees: std::sync::Arc<dyn employee_api::repositories::EmployeeRepository> = directory.clone();
        let departments: std::sync::Arc<dyn employee_api::repositories::DepartmentRepository> = directory;
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(employee_api::routes::cors())
                .app_data(actix_web::web::Data::from(employees))
                .app_data(actix_web::web::Data::from(departments))
                .configure(employee_api::routes::configure),
        )
        .await
    }};
}
