use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::{FromRow, MySqlPool};

use crate::model::{
    employee::Employee,
    task::Task,
    work_time::{WorkTimeDraft, WorkTimeEntry},
};
use crate::store::{StoreError, WorkTimeRepository};

const SELECT_ENTRY: &str = r#"
    SELECT id, task_id, employee_id, work_date, start_time, stop_time
    FROM work_time_entries
"#;

const SELECT_ENTRY_WITH_RELATIONS: &str = r#"
    SELECT
        w.id, w.task_id, w.employee_id, w.work_date, w.start_time, w.stop_time,
        e.first_name AS employee_first_name,
        e.last_name AS employee_last_name,
        e.phone_number AS employee_phone_number,
        e.email AS employee_email,
        t.name AS task_name,
        t.description AS task_description
    FROM work_time_entries w
    INNER JOIN employees e ON e.id = w.employee_id
    INNER JOIN tasks t ON t.id = w.task_id
"#;

#[derive(FromRow)]
struct EntryRow {
    id: u64,
    task_id: u64,
    employee_id: u64,
    work_date: NaiveDate,
    start_time: NaiveTime,
    stop_time: NaiveTime,
}

impl From<EntryRow> for WorkTimeEntry {
    fn from(row: EntryRow) -> Self {
        Self {
            id: row.id,
            task_id: row.task_id,
            employee_id: row.employee_id,
            work_date: row.work_date,
            start_time: row.start_time,
            stop_time: row.stop_time,
            employee: None,
            task: None,
        }
    }
}

#[derive(FromRow)]
struct EntryWithRelationsRow {
    #[sqlx(flatten)]
    entry: EntryRow,
    employee_first_name: String,
    employee_last_name: String,
    employee_phone_number: Option<String>,
    employee_email: String,
    task_name: String,
    task_description: Option<String>,
}

impl From<EntryWithRelationsRow> for WorkTimeEntry {
    fn from(row: EntryWithRelationsRow) -> Self {
        let employee = Employee {
            id: row.entry.employee_id,
            first_name: row.employee_first_name,
            last_name: row.employee_last_name,
            phone_number: row.employee_phone_number,
            email: row.employee_email,
        };
        let task = Task {
            id: row.entry.task_id,
            name: row.task_name,
            description: row.task_description,
        };

        let mut entry = WorkTimeEntry::from(row.entry);
        entry.employee = Some(employee);
        entry.task = Some(task);
        entry
    }
}

/// Maps a foreign key failure to `MissingReference`, everything else passes through.
fn write_error(err: sqlx::Error) -> StoreError {
    if let Some(database_error) = err.as_database_error()
        && database_error.is_foreign_key_violation()
    {
        return StoreError::MissingReference;
    }

    StoreError::Database(err)
}

#[derive(Clone)]
pub struct MySqlRepository {
    pool: MySqlPool,
}

impl MySqlRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkTimeRepository for MySqlRepository {
    async fn list_entries(&self) -> Result<Vec<WorkTimeEntry>, StoreError> {
        let sql = format!("{SELECT_ENTRY_WITH_RELATIONS} ORDER BY w.id");
        let rows = sqlx::query_as::<_, EntryWithRelationsRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_entry(&self, id: u64) -> Result<Option<WorkTimeEntry>, StoreError> {
        let sql = format!("{SELECT_ENTRY} WHERE id = ?");
        let row = sqlx::query_as::<_, EntryRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn find_entry_with_relations(
        &self,
        id: u64,
    ) -> Result<Option<WorkTimeEntry>, StoreError> {
        let sql = format!("{SELECT_ENTRY_WITH_RELATIONS} WHERE w.id = ?");
        let row = sqlx::query_as::<_, EntryWithRelationsRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn insert_entry(&self, draft: &WorkTimeDraft) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO work_time_entries
            (task_id, employee_id, work_date, start_time, stop_time)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(draft.task_id)
        .bind(draft.employee_id)
        .bind(draft.work_date)
        .bind(draft.start_time)
        .bind(draft.stop_time)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(result.last_insert_id())
    }

    async fn update_entry(&self, id: u64, draft: &WorkTimeDraft) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE work_time_entries
            SET task_id = ?, employee_id = ?, work_date = ?, start_time = ?, stop_time = ?
            WHERE id = ?
            "#,
        )
        .bind(draft.task_id)
        .bind(draft.employee_id)
        .bind(draft.work_date)
        .bind(draft.start_time)
        .bind(draft.stop_time)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(result.rows_affected())
    }

    async fn delete_entry(&self, id: u64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM work_time_entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn list_entries_for_employee(
        &self,
        employee_id: u64,
    ) -> Result<Vec<WorkTimeEntry>, StoreError> {
        let sql = format!("{SELECT_ENTRY} WHERE employee_id = ? ORDER BY id");
        let rows = sqlx::query_as::<_, EntryRow>(&sql)
            .bind(employee_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_employees_for_task(&self, task_id: u64) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT e.id, e.first_name, e.last_name, e.phone_number, e.email
            FROM work_time_entries w
            INNER JOIN employees e ON e.id = w.employee_id
            WHERE w.task_id = ?
            ORDER BY w.id
            "#,
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn list_tasks_for_employee(&self, employee_id: u64) -> Result<Vec<Task>, StoreError> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.name, t.description
            FROM work_time_entries w
            INNER JOIN tasks t ON t.id = w.task_id
            WHERE w.employee_id = ?
            ORDER BY w.id
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn find_employee_for_entry(
        &self,
        entry_id: u64,
    ) -> Result<Option<Employee>, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT e.id, e.first_name, e.last_name, e.phone_number, e.email
            FROM work_time_entries w
            INNER JOIN employees e ON e.id = w.employee_id
            WHERE w.id = ?
            "#,
        )
        .bind(entry_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_task_for_entry(&self, entry_id: u64) -> Result<Option<Task>, StoreError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT t.id, t.name, t.description
            FROM work_time_entries w
            INNER JOIN tasks t ON t.id = w.task_id
            WHERE w.id = ?
            "#,
        )
        .bind(entry_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, phone_number, email FROM employees ORDER BY last_name, first_name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, name, description FROM tasks ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }
}
