use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use employee_api::config::Config;
use employee_api::controllers::employee::EmployeeController;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let repository = employee_api::build_repository(&config)
        .await
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    let controller = web::Data::new(EmployeeController::new(repository));

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(controller.clone())
            .configure(employee_api::configure)
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
