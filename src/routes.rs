use actix_cors::Cors;
use actix_web::web;

use crate::errors::AppError;
use crate::handlers;

// any origin, any method, any header
pub fn cors() -> Cors {
    Cors::permissive()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        AppError::BadRequest(format!("Invalid request body: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid query string: {}", err)).into()
    }))
    .service(
        web::resource("/api/employee")
            .route(web::get().to(handlers::employee::get_employees))
            .route(web::post().to(handlers::employee::create_employee)),
    )
    .service(
        web::resource("/api/employee/{id}")
            .route(web::get().to(handlers::employee::get_employee))
            .route(web::put().to(handlers::employee::update_employee))
            .route(web::delete().to(handlers::employee::delete_employee)),
    )
    .service(
        web::resource("/api/department")
            .route(web::get().to(handlers::department::get_departments)),
    )
    .service(
        web::resource("/api/department/{id}")
            .route(web::get().to(handlers::department::get_department)),
    );
}
