pub mod config;
pub mod controllers;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repository;

use std::sync::Arc;
use actix_web::web;
use log::info;
use crate::config::Config;
use crate::errors::AppError;
use crate::repository::{EmployeeRepository, InMemoryEmployeeRepository, PgEmployeeRepository};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::employee::map_json_error))
        .app_data(web::PathConfig::default().error_handler(handlers::employee::map_path_error))
        .service(
            web::resource("/api/v1/employee")
                .route(web::get().to(handlers::employee::get_employees))
                .route(web::post().to(handlers::employee::create_employee)),
        )
        .service(
            web::resource("/api/v1/employee/{uuid}")
                .route(web::get().to(handlers::employee::get_employee)),
        );
}

pub async fn build_repository(config: &Config) -> Result<Arc<dyn EmployeeRepository>, AppError> {
    match &config.database_url {
        Some(database_url) => {
            let pool = db::create_pool(database_url, config).await?;
            db::run_migrations(&pool).await?;
            info!("Using PostgreSQL employee repository");
            Ok(Arc::new(PgEmployeeRepository::new(pool)))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory employee repository");
            Ok(Arc::new(InMemoryEmployeeRepository::new()))
        }
    }
}
