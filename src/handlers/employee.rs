use actix_web::{error, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use crate::controllers::employee::EmployeeController;
use crate::errors::AppError;
use crate::models::employee::Employee;

pub async fn get_employees(
    controller: web::Data<EmployeeController>,
) -> Result<HttpResponse, AppError> {
    let employees = controller.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    controller: web::Data<EmployeeController>,
    employee_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let employee = controller.get(employee_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    controller: web::Data<EmployeeController>,
    new_employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let employee = controller.create(new_employee.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

pub fn map_json_error(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("Invalid employee payload: {}", err)).into()
}

pub fn map_path_error(_err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest("Invalid employee ID".to_string()).into()
}
