use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::debug;

use crate::error::WorkTimeError;
use crate::model::work_time::{CreatedResponse, WorkTimePayload};
use crate::service::WorkTimeManagement;

type Service = web::Data<dyn WorkTimeManagement>;

/// List work time entries
#[utoipa::path(
    get,
    path = "/api/work-time",
    responses(
        (status = 200, description = "All work time entries with employee and task", body = Vec<crate::model::work_time::WorkTimeEntry>),
        (status = 500, description = "Internal server error")
    ),
    tag = "WorkTime"
)]
pub async fn list_entries(service: Service) -> actix_web::Result<impl Responder> {
    let entries = service.list_all().await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// Get work time entry by ID
#[utoipa::path(
    get,
    path = "/api/work-time/{id}",
    params(
        ("id", Path, description = "Work time entry ID")
    ),
    responses(
        (status = 200, description = "Work time entry found", body = crate::model::work_time::WorkTimeEntry),
        (status = 404, description = "Work time entry not found", body = Object, example = json!({
            "message": "work time entry 1 was not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "WorkTime"
)]
pub async fn get_entry(service: Service, path: web::Path<u64>) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    match service.try_get(id).await? {
        Some(entry) => Ok(HttpResponse::Ok().json(entry)),
        None => Err(WorkTimeError::NotFound(format!("work time entry {id}")).into()),
    }
}

/// Create work time entry
#[utoipa::path(
    post,
    path = "/api/work-time",
    request_body = WorkTimePayload,
    responses(
        (status = 201, description = "Work time entry created", body = CreatedResponse),
        (status = 400, description = "Missing body or invalid fields", body = Object, example = json!({
            "message": "Validation failed",
            "errors": {
                "start_time": ["start time must be earlier than stop time"],
                "stop_time": ["stop time must be later than start time"]
            }
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "WorkTime"
)]
pub async fn create_entry(
    service: Service,
    payload: web::Json<Option<WorkTimePayload>>,
) -> actix_web::Result<impl Responder> {
    let payload = payload
        .into_inner()
        .ok_or_else(|| WorkTimeError::InvalidArgument("work time entry is required".to_string()))?;

    let draft = payload.validate().map_err(WorkTimeError::from)?;
    let id = service.create(draft).await?;

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

/// Update work time entry
#[utoipa::path(
    put,
    path = "/api/work-time/{id}",
    params(
        ("id", Path, description = "Work time entry ID")
    ),
    request_body = WorkTimePayload,
    responses(
        (status = 200, description = "Work time entry updated", body = Object, example = json!({
            "message": "Work time entry updated successfully"
        })),
        (status = 400, description = "Missing body or invalid fields"),
        (status = 404, description = "Work time entry not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "WorkTime"
)]
pub async fn update_entry(
    service: Service,
    path: web::Path<u64>,
    payload: web::Json<Option<WorkTimePayload>>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();
    let payload = payload
        .into_inner()
        .ok_or_else(|| WorkTimeError::InvalidArgument("work time entry is required".to_string()))?;

    if service.try_get(id).await?.is_none() {
        debug!(id, "Update skipped, entry missing");
        return Err(WorkTimeError::NotFound(format!("work time entry {id}")).into());
    }

    let draft = payload.validate().map_err(WorkTimeError::from)?;

    if !service.update(id, draft).await? {
        return Err(WorkTimeError::NotFound(format!("work time entry {id}")).into());
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Work time entry updated successfully"
    })))
}

/// Delete work time entry
#[utoipa::path(
    delete,
    path = "/api/work-time/{id}",
    params(
        ("id", Path, description = "Work time entry ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Successfully deleted"
        })),
        (status = 404, description = "Work time entry not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "WorkTime"
)]
pub async fn delete_entry(
    service: Service,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    if !service.delete(id).await? {
        return Err(WorkTimeError::NotFound(format!("work time entry {id}")).into());
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Successfully deleted"
    })))
}

/// Employee who logged the entry
#[utoipa::path(
    get,
    path = "/api/work-time/{id}/employee",
    params(
        ("id", Path, description = "Work time entry ID")
    ),
    responses(
        (status = 200, description = "Employee of the entry", body = crate::model::employee::Employee),
        (status = 404, description = "Work time entry not found")
    ),
    tag = "WorkTime"
)]
pub async fn get_entry_employee(
    service: Service,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let employee = service.get_employee(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Task the entry was logged against
#[utoipa::path(
    get,
    path = "/api/work-time/{id}/task",
    params(
        ("id", Path, description = "Work time entry ID")
    ),
    responses(
        (status = 200, description = "Task of the entry", body = crate::model::task::Task),
        (status = 404, description = "Work time entry not found")
    ),
    tag = "WorkTime"
)]
pub async fn get_entry_task(
    service: Service,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let task = service.get_task(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(task))
}
