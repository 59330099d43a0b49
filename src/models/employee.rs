use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub emp_id: String,
    pub emp_firstname: Option<String>,
    pub emp_lastname: Option<String>,
    pub emp_birth: Option<NaiveDate>,
    pub emp_email: Option<String>,
    pub emp_photo: Option<String>,
    pub emp_date: Option<NaiveDate>,
    pub emp_phone: Option<String>,
    pub dep_id: Option<String>,
    pub dep_title: Option<String>,
    pub dep_salary: Option<f64>,
    pub dep_des: Option<String>,
}

#[derive(Deserialize, Validate, Debug, Clone, Default, PartialEq)]
pub struct EmployeePayload {
    #[validate(length(max = 50))]
    pub emp_firstname: Option<String>,
    #[validate(length(max = 50))]
    pub emp_lastname: Option<String>,
    pub emp_birth: Option<NaiveDate>,
    #[validate(email, length(max = 50))]
    pub emp_email: Option<String>,
    pub emp_photo: Option<String>,
    pub emp_date: Option<NaiveDate>,
    #[validate(length(max = 20))]
    pub emp_phone: Option<String>,
    #[validate(length(max = 20))]
    pub dep_id: Option<String>,
}

impl EmployeePayload {
    pub fn with_insert_defaults(mut self, today: NaiveDate) -> Self {
        self.emp_photo.get_or_insert_with(String::new);
        self.emp_date.get_or_insert(today);
        self
    }

    pub fn with_update_defaults(mut self) -> Self {
        // everything else is written as NULL when absent
        self.emp_photo.get_or_insert_with(String::new);
        self
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct EmployeeQueryParams {
    pub department: Option<String>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub search_term: Option<String>,
}

impl From<EmployeeQueryParams> for EmployeeFilter {
    fn from(params: EmployeeQueryParams) -> Self {
        let department = params
            .department
            .filter(|dep| !dep.is_empty() && !dep.eq_ignore_ascii_case("all"));
        let search_term = params.search_term.filter(|term| !term.trim().is_empty());

        EmployeeFilter {
            department,
            search_term,
        }
    }
}
