use actix_web::{HttpResponse, Responder, web};

use crate::service::WorkTimeManagement;

/// List employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = Vec<crate::model::employee::Employee>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    service: web::Data<dyn WorkTimeManagement>,
) -> actix_web::Result<impl Responder> {
    let employees = service.list_employees().await?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Work time entries of an employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/work-time",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Entries logged by the employee", body = Vec<crate::model::work_time::WorkTimeEntry>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employee_entries(
    service: web::Data<dyn WorkTimeManagement>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let entries = service.list_entries_for_employee(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// Tasks an employee worked on
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/tasks",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "One task per logged entry", body = Vec<crate::model::task::Task>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employee_tasks(
    service: web::Data<dyn WorkTimeManagement>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let tasks = service.list_tasks_for_employee(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Worked time summary of an employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/summary",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Entry count and total minutes", body = crate::model::work_time::EmployeeWorkSummary),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn employee_summary(
    service: web::Data<dyn WorkTimeManagement>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let summary = service.summarize_employee(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(summary))
}
