use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::model::{
    employee::Employee,
    task::Task,
    work_time::{WorkTimeDraft, WorkTimeEntry},
};
use crate::store::{StoreError, WorkTimeRepository};

fn entry_from_draft(id: u64, draft: &WorkTimeDraft) -> WorkTimeEntry {
    WorkTimeEntry {
        id,
        task_id: draft.task_id,
        employee_id: draft.employee_id,
        work_date: draft.work_date,
        start_time: draft.start_time,
        stop_time: draft.stop_time,
        employee: None,
        task: None,
    }
}

#[derive(Default)]
struct MemoryState {
    employees: BTreeMap<u64, Employee>,
    tasks: BTreeMap<u64, Task>,
    entries: BTreeMap<u64, WorkTimeEntry>,
    next_id: u64,
}

impl MemoryState {
    fn check_references(&self, draft: &WorkTimeDraft) -> Result<(), StoreError> {
        if self.employees.contains_key(&draft.employee_id) && self.tasks.contains_key(&draft.task_id)
        {
            Ok(())
        } else {
            Err(StoreError::MissingReference)
        }
    }

    fn resolve(&self, entry: &WorkTimeEntry) -> WorkTimeEntry {
        let mut resolved = entry.clone();
        resolved.employee = self.employees.get(&entry.employee_id).cloned();
        resolved.task = self.tasks.get(&entry.task_id).cloned();
        resolved
    }
}

/// In-process stand-in for the MySQL tables, enforcing the same foreign keys.
#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<MemoryState>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(self, id: u64, first_name: &str, last_name: &str) -> Self {
        let employee = Employee {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone_number: None,
            email: format!("{}.{}@company.com", first_name, last_name).to_lowercase(),
        };
        self.state.lock().unwrap().employees.insert(id, employee);
        self
    }

    pub fn with_task(self, id: u64, name: &str) -> Self {
        let task = Task {
            id,
            name: name.to_string(),
            description: None,
        };
        self.state.lock().unwrap().tasks.insert(id, task);
        self
    }
}

#[async_trait]
impl WorkTimeRepository for MemoryRepository {
    async fn list_entries(&self) -> Result<Vec<WorkTimeEntry>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state.entries.values().map(|e| state.resolve(e)).collect())
    }

    async fn find_entry(&self, id: u64) -> Result<Option<WorkTimeEntry>, StoreError> {
        Ok(self.state.lock().unwrap().entries.get(&id).cloned())
    }

    async fn find_entry_with_relations(
        &self,
        id: u64,
    ) -> Result<Option<WorkTimeEntry>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state.entries.get(&id).map(|e| state.resolve(e)))
    }

    async fn insert_entry(&self, draft: &WorkTimeDraft) -> Result<u64, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.check_references(draft)?;

        state.next_id += 1;
        let id = state.next_id;
        state.entries.insert(id, entry_from_draft(id, draft));
        Ok(id)
    }

    async fn update_entry(&self, id: u64, draft: &WorkTimeDraft) -> Result<u64, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.check_references(draft)?;

        match state.entries.get_mut(&id) {
            Some(entry) => {
                *entry = entry_from_draft(id, draft);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_entry(&self, id: u64) -> Result<u64, StoreError> {
        let removed = self.state.lock().unwrap().entries.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn list_entries_for_employee(
        &self,
        employee_id: u64,
    ) -> Result<Vec<WorkTimeEntry>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .entries
            .values()
            .filter(|e| e.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn list_employees_for_task(&self, task_id: u64) -> Result<Vec<Employee>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .entries
            .values()
            .filter(|e| e.task_id == task_id)
            .filter_map(|e| state.employees.get(&e.employee_id).cloned())
            .collect())
    }

    async fn list_tasks_for_employee(&self, employee_id: u64) -> Result<Vec<Task>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .entries
            .values()
            .filter(|e| e.employee_id == employee_id)
            .filter_map(|e| state.tasks.get(&e.task_id).cloned())
            .collect())
    }

    async fn find_employee_for_entry(
        &self,
        entry_id: u64,
    ) -> Result<Option<Employee>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .entries
            .get(&entry_id)
            .and_then(|e| state.employees.get(&e.employee_id).cloned()))
    }

    async fn find_task_for_entry(&self, entry_id: u64) -> Result<Option<Task>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .entries
            .get(&entry_id)
            .and_then(|e| state.tasks.get(&e.task_id).cloned()))
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.state.lock().unwrap().employees.values().cloned().collect())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.state.lock().unwrap().tasks.values().cloned().collect())
    }
}
