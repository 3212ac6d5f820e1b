use async_trait::async_trait;

use crate::error::WorkTimeError;
use crate::model::{
    employee::Employee,
    task::Task,
    work_time::{EmployeeWorkSummary, WorkTimeDraft, WorkTimeEntry},
};

pub mod work_time;

pub use work_time::WorkTimeService;

/// CRUD and relationship queries over work-time entries.
///
/// Lookups that are expected to miss (`try_get`, `update`, `delete`) report the
/// miss in their return value. `get_employee` and `get_task` assume the entry
/// exists and fail with [`WorkTimeError::NotFound`] otherwise. `update` checks
/// for the entry before validating the draft, so a miss wins over bad times.
#[async_trait]
pub trait WorkTimeManagement: Send + Sync {
    async fn list_all(&self) -> Result<Vec<WorkTimeEntry>, WorkTimeError>;
    async fn try_get(&self, id: u64) -> Result<Option<WorkTimeEntry>, WorkTimeError>;
    async fn create(&self, draft: WorkTimeDraft) -> Result<u64, WorkTimeError>;
    async fn update(&self, id: u64, draft: WorkTimeDraft) -> Result<bool, WorkTimeError>;
    async fn delete(&self, id: u64) -> Result<bool, WorkTimeError>;

    async fn list_employees_for_task(&self, task_id: u64) -> Result<Vec<Employee>, WorkTimeError>;
    async fn list_tasks_for_employee(&self, employee_id: u64) -> Result<Vec<Task>, WorkTimeError>;
    async fn list_entries_for_employee(
        &self,
        employee_id: u64,
    ) -> Result<Vec<WorkTimeEntry>, WorkTimeError>;

    async fn get_employee(&self, entry_id: u64) -> Result<Employee, WorkTimeError>;
    async fn get_task(&self, entry_id: u64) -> Result<Task, WorkTimeError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, WorkTimeError>;
    async fn list_tasks(&self) -> Result<Vec<Task>, WorkTimeError>;
    async fn summarize_employee(
        &self,
        employee_id: u64,
    ) -> Result<EmployeeWorkSummary, WorkTimeError>;
}
