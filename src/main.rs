use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use employee_api::config::Config;
use employee_api::db;
use employee_api::repositories::{
    DepartmentRepository, EmployeeRepository, PgDepartmentRepository, PgEmployeeRepository,
};
use employee_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    let pool = db::create_pool(&config.database)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;

    let employees: Arc<dyn EmployeeRepository> = Arc::new(PgEmployeeRepository::new(pool.clone()));
    let departments: Arc<dyn DepartmentRepository> = Arc::new(PgDepartmentRepository::new(pool.clone()));
    let employees = web::Data::from(employees);
    let departments = web::Data::from(departments);

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .wrap(Logger::default())
            .app_data(employees.clone())
            .app_data(departments.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}
