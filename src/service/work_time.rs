use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::error::WorkTimeError;
use crate::model::{
    employee::Employee,
    task::Task,
    work_time::{EmployeeWorkSummary, WorkTimeDraft, WorkTimeEntry},
};
use crate::service::WorkTimeManagement;
use crate::store::WorkTimeRepository;

fn entry_not_found(id: u64) -> WorkTimeError {
    WorkTimeError::NotFound(format!("work time entry {id}"))
}

#[derive(Debug, Clone)]
pub struct WorkTimeService<R>
where
    R: WorkTimeRepository,
{
    repository: R,
}

impl<R> WorkTimeService<R>
where
    R: WorkTimeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> WorkTimeManagement for WorkTimeService<R>
where
    R: WorkTimeRepository,
{
    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<WorkTimeEntry>, WorkTimeError> {
        Ok(self.repository.list_entries().await?)
    }

    #[instrument(skip(self))]
    async fn try_get(&self, id: u64) -> Result<Option<WorkTimeEntry>, WorkTimeError> {
        Ok(self.repository.find_entry_with_relations(id).await?)
    }

    #[instrument(skip(self, draft), fields(task_id = draft.task_id, employee_id = draft.employee_id))]
    async fn create(&self, draft: WorkTimeDraft) -> Result<u64, WorkTimeError> {
        draft.validate()?;

        let id = self.repository.insert_entry(&draft).await?;
        info!(id, "Work time entry created");

        Ok(id)
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: u64, draft: WorkTimeDraft) -> Result<bool, WorkTimeError> {
        if self.repository.find_entry(id).await?.is_none() {
            debug!("Work time entry not found");
            return Ok(false);
        }

        draft.validate()?;

        let affected = self.repository.update_entry(id, &draft).await?;
        Ok(affected > 0)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> Result<bool, WorkTimeError> {
        if self.repository.find_entry(id).await?.is_none() {
            debug!("Work time entry not found");
            return Ok(false);
        }

        let affected = self.repository.delete_entry(id).await?;
        Ok(affected > 0)
    }

    async fn list_employees_for_task(&self, task_id: u64) -> Result<Vec<Employee>, WorkTimeError> {
        Ok(self.repository.list_employees_for_task(task_id).await?)
    }

    async fn list_tasks_for_employee(&self, employee_id: u64) -> Result<Vec<Task>, WorkTimeError> {
        Ok(self.repository.list_tasks_for_employee(employee_id).await?)
    }

    async fn list_entries_for_employee(
        &self,
        employee_id: u64,
    ) -> Result<Vec<WorkTimeEntry>, WorkTimeError> {
        Ok(self.repository.list_entries_for_employee(employee_id).await?)
    }

    #[instrument(skip(self))]
    async fn get_employee(&self, entry_id: u64) -> Result<Employee, WorkTimeError> {
        self.repository
            .find_employee_for_entry(entry_id)
            .await?
            .ok_or_else(|| entry_not_found(entry_id))
    }

    #[instrument(skip(self))]
    async fn get_task(&self, entry_id: u64) -> Result<Task, WorkTimeError> {
        self.repository
            .find_task_for_entry(entry_id)
            .await?
            .ok_or_else(|| entry_not_found(entry_id))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, WorkTimeError> {
        Ok(self.repository.list_employees().await?)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, WorkTimeError> {
        Ok(self.repository.list_tasks().await?)
    }

    #[instrument(skip(self))]
    async fn summarize_employee(
        &self,
        employee_id: u64,
    ) -> Result<EmployeeWorkSummary, WorkTimeError> {
        let entries = self.repository.list_entries_for_employee(employee_id).await?;

        Ok(EmployeeWorkSummary {
            employee_id,
            entry_count: entries.len(),
            total_minutes: entries.iter().map(WorkTimeEntry::worked_minutes).sum(),
        })
    }
}
