use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub dep_id: String,
    pub dep_title: Option<String>,
    pub dep_salary: Option<f64>,
    pub dep_des: Option<String>,
}
