use async_trait::async_trait;
use thiserror::Error;

use crate::model::{
    employee::Employee,
    task::Task,
    work_time::{WorkTimeDraft, WorkTimeEntry},
};

#[cfg(test)]
pub mod memory;
pub mod mysql;

pub use mysql::MySqlRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("error with sqlx")]
    Database(#[from] sqlx::Error),

    #[error("a referenced task or employee does not exist")]
    MissingReference,
}

/// Persistence port for work-time entries and the read-only employee and
/// task tables they reference.
///
/// Write methods return the affected-row count of the committed statement.
#[async_trait]
pub trait WorkTimeRepository: Send + Sync + 'static {
    /// Every entry with its employee and task resolved.
    async fn list_entries(&self) -> Result<Vec<WorkTimeEntry>, StoreError>;

    async fn find_entry(&self, id: u64) -> Result<Option<WorkTimeEntry>, StoreError>;

    async fn find_entry_with_relations(
        &self,
        id: u64,
    ) -> Result<Option<WorkTimeEntry>, StoreError>;

    async fn insert_entry(&self, draft: &WorkTimeDraft) -> Result<u64, StoreError>;
    async fn update_entry(&self, id: u64, draft: &WorkTimeDraft) -> Result<u64, StoreError>;
    async fn delete_entry(&self, id: u64) -> Result<u64, StoreError>;

    async fn list_entries_for_employee(
        &self,
        employee_id: u64,
    ) -> Result<Vec<WorkTimeEntry>, StoreError>;

    /// One employee per matching entry, in entry order.
    async fn list_employees_for_task(&self, task_id: u64) -> Result<Vec<Employee>, StoreError>;

    /// One task per matching entry, in entry order.
    async fn list_tasks_for_employee(&self, employee_id: u64) -> Result<Vec<Task>, StoreError>;

    async fn find_employee_for_entry(&self, entry_id: u64)
    -> Result<Option<Employee>, StoreError>;
    async fn find_task_for_entry(&self, entry_id: u64) -> Result<Option<Task>, StoreError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;
}
