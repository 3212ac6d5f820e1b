use crate::model::employee::Employee;
use crate::model::task::Task;
use crate::model::work_time::{
    CreatedResponse, EmployeeWorkSummary, WorkTimeEntry, WorkTimePayload,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Work Time API",
        version = "1.0.0",
        description = r#"
## Work Time Tracking

Records the time employees spend on tasks and reports on it.

### Key Features
- **Work Time Entries**
  - Create, update, delete, list, and view entries
  - Start time must be earlier than stop time
- **Relationships**
  - Employees who worked on a task, tasks an employee worked on
- **Reporting**
  - Total worked minutes per employee

### Response Format
- JSON-based RESTful responses
- Times are `HH:MM`, dates are `YYYY-MM-DD`

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::work_time::list_entries,
        crate::api::work_time::get_entry,
        crate::api::work_time::create_entry,
        crate::api::work_time::update_entry,
        crate::api::work_time::delete_entry,
        crate::api::work_time::get_entry_employee,
        crate::api::work_time::get_entry_task,

        crate::api::employee::list_employees,
        crate::api::employee::list_employee_entries,
        crate::api::employee::list_employee_tasks,
        crate::api::employee::employee_summary,

        crate::api::task::list_tasks,
        crate::api::task::list_task_employees
    ),
    components(
        schemas(
            WorkTimeEntry,
            WorkTimePayload,
            CreatedResponse,
            EmployeeWorkSummary,
            Employee,
            Task
        )
    ),
    tags(
        (name = "WorkTime", description = "Work time entry APIs"),
        (name = "Employee", description = "Employee lookup and reporting APIs"),
        (name = "Task", description = "Task lookup APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_work_time_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/work-time"));
        assert!(doc.paths.paths.contains_key("/api/work-time/{id}"));
        assert!(doc.paths.paths.contains_key("/api/tasks/{task_id}/employees"));
    }
}
