use actix_web::{web, HttpResponse};
use chrono::Local;
use serde_json::json;

use crate::errors::AppError;
use crate::models::employee::{EmployeeFilter, EmployeePayload, EmployeeQueryParams};
use crate::repositories::{DepartmentRepository, EmployeeRepository};
use crate::utils::validation::validate_payload;

pub async fn get_employees(
    employees: web::Data<dyn EmployeeRepository>,
    query: web::Query<EmployeeQueryParams>,
) -> Result<HttpResponse, AppError> {
    let filter = EmployeeFilter::from(query.into_inner());

    let rows = employees
        .list_employees(&filter)
        .await
        .map_err(|err| AppError::database("Failed to fetch employees", err))?;

    Ok(HttpResponse::Ok().json(rows))
}

pub async fn get_employee(
    employees: web::Data<dyn EmployeeRepository>,
    emp_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let emp_id = emp_id.trim();
    if emp_id.is_empty() {
        return Err(AppError::BadRequest("Invalid emp_id".to_string()));
    }

    log::debug!("Looking up employee {:?}", emp_id);

    let employee = employees
        .find_employee(emp_id)
        .await
        .map_err(|err| AppError::database("Failed to fetch employee", err))?;

    match employee {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(AppError::NotFound("Employee not found".to_string())),
    }
}

pub async fn create_employee(
    employees: web::Data<dyn EmployeeRepository>,
    departments: web::Data<dyn DepartmentRepository>,
    new_employee: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*new_employee)?;
    let new_employee = new_employee.into_inner().with_insert_defaults(Local::now().date_naive());

    if let Some(dep_id) = new_employee.dep_id.as_deref().filter(|dep_id| !dep_id.is_empty()) {
        let exists = departments
            .department_exists(dep_id)
            .await
            .map_err(|err| AppError::database("Failed to add employee", err))?;

        if !exists {
            log::warn!("Rejected new employee: department {:?} does not exist", dep_id);
            return Err(AppError::BadRequest("Department does not exist".to_string()));
        }
    }

    let emp_id = employees
        .add_employee(&new_employee)
        .await
        .map_err(|err| AppError::database("Failed to add employee", err))?;

    match emp_id {
        Some(emp_id) => {
            log::info!("Created employee {}", emp_id);
            Ok(HttpResponse::Created().json(json!({
                "message": "Employee created successfully",
                "emp_id": emp_id,
            })))
        }
        None => {
            log::error!("sp_add_employee returned no employee id");
            Err(AppError::InternalServerError(
                "Failed to generate employee id".to_string(),
            ))
        }
    }
}

pub async fn update_employee(
    employees: web::Data<dyn EmployeeRepository>,
    emp_id: web::Path<String>,
    updates: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*updates)?;
    let emp_id = emp_id.into_inner();
    let updates = updates.into_inner().with_update_defaults();

    let rows_affected = employees
        .update_employee(&emp_id, &updates)
        .await
        .map_err(|err| AppError::database("Failed to update employee", err))?;

    log::info!("Updated employee {} ({} rows affected)", emp_id, rows_affected);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee updated successfully",
        "emp_id": emp_id,
    })))
}

pub async fn delete_employee(
    employees: web::Data<dyn EmployeeRepository>,
    emp_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let emp_id = emp_id.into_inner();

    let deleted = employees
        .delete_employee(&emp_id)
        .await
        .map_err(|err| AppError::database("Failed to delete or reorder employees", err))?;

    log::info!("Deleted employee {} ({} rows), ids reordered", emp_id, deleted);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted and ids reordered successfully",
    })))
}
