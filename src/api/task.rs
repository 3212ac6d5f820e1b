use actix_web::{HttpResponse, Responder, web};

use crate::service::WorkTimeManagement;

/// List tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "All tasks", body = Vec<crate::model::task::Task>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Task"
)]
pub async fn list_tasks(
    service: web::Data<dyn WorkTimeManagement>,
) -> actix_web::Result<impl Responder> {
    let tasks = service.list_tasks().await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Employees who worked on a task
#[utoipa::path(
    get,
    path = "/api/tasks/{task_id}/employees",
    params(
        ("task_id", Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "One employee per logged entry", body = Vec<crate::model::employee::Employee>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Task"
)]
pub async fn list_task_employees(
    service: web::Data<dyn WorkTimeManagement>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employees = service.list_employees_for_task(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employees))
}
