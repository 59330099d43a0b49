use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::repositories::DepartmentRepository;

pub async fn get_departments(
    departments: web::Data<dyn DepartmentRepository>,
) -> Result<HttpResponse, AppError> {
    let rows = departments
        .list_departments()
        .await
        .map_err(|err| AppError::database("Failed to fetch departments", err))?;

    Ok(HttpResponse::Ok().json(rows))
}

pub async fn get_department(
    departments: web::Data<dyn DepartmentRepository>,
    dep_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let department = departments
        .find_department(&dep_id)
        .await
        .map_err(|err| AppError::database("Failed to fetch department", err))?;

    match department {
        Some(department) => Ok(HttpResponse::Ok().json(department)),
        None => Err(AppError::NotFound("Department not found".to_string())),
    }
}
