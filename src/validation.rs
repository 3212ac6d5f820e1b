use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

use crate::model::work_time::{WorkTimeDraft, WorkTimePayload};

pub const START_TIME: &str = "start_time";
pub const STOP_TIME: &str = "stop_time";

const START_BEFORE_STOP: &str = "start time must be earlier than stop time";
const STOP_AFTER_START: &str = "stop time must be later than start time";

/// Field name to the list of messages raised against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.0.keys().copied().collect::<Vec<_>>().join(", ");
        write!(f, "invalid fields: {fields}")
    }
}

/// Checks the start/stop ordering. A violation is reported on both fields.
pub fn check_time_order(
    start_time: NaiveTime,
    stop_time: NaiveTime,
    errors: &mut ValidationErrors,
) {
    if start_time >= stop_time {
        errors.add(START_TIME, START_BEFORE_STOP);
        errors.add(STOP_TIME, STOP_AFTER_START);
    }
}

fn required<T: Copy>(
    value: Option<T>,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<T> {
    if value.is_none() {
        errors.add(field, format!("{field} is required"));
    }
    value
}

impl WorkTimePayload {
    /// Collects every violation rather than stopping at the first one.
    pub fn validate(&self) -> Result<WorkTimeDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let task_id = required(self.task_id, "task_id", &mut errors);
        let employee_id = required(self.employee_id, "employee_id", &mut errors);
        let work_date = required(self.work_date, "work_date", &mut errors);
        let start_time = required(self.start_time, START_TIME, &mut errors);
        let stop_time = required(self.stop_time, STOP_TIME, &mut errors);

        if let (Some(start), Some(stop)) = (start_time, stop_time) {
            check_time_order(start, stop, &mut errors);
        }

        match (task_id, employee_id, work_date, start_time, stop_time) {
            (Some(task_id), Some(employee_id), Some(work_date), Some(start), Some(stop)) => errors
                .into_result(WorkTimeDraft {
                    task_id,
                    employee_id,
                    work_date,
                    start_time: start,
                    stop_time: stop,
                }),
            _ => Err(errors),
        }
    }
}

impl WorkTimeDraft {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_time_order(self.start_time, self.stop_time, &mut errors);
        errors.into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    impl ValidationErrors {
        pub(crate) fn field(&self, field: &str) -> Option<&[String]> {
            self.0.get(field).map(Vec::as_slice)
        }

        pub(crate) fn has(&self, field: &str) -> bool {
            self.0.contains_key(field)
        }
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn payload(start: NaiveTime, stop: NaiveTime) -> WorkTimePayload {
        WorkTimePayload {
            task_id: Some(1),
            employee_id: Some(2),
            work_date: NaiveDate::from_ymd_opt(2024, 1, 10),
            start_time: Some(start),
            stop_time: Some(stop),
        }
    }

    #[test]
    fn accepts_start_before_stop() {
        let ranges = [
            (time(9, 0), time(17, 0)),
            (time(0, 0), time(0, 1)),
            (time(23, 58), time(23, 59)),
        ];
        for (start, stop) in ranges {
            let draft = payload(start, stop).validate().unwrap();
            assert_eq!(draft.start_time, start);
            assert_eq!(draft.stop_time, stop);
        }
    }

    #[test]
    fn rejects_reversed_times_on_both_fields() {
        let errors = payload(time(17, 0), time(9, 0)).validate().unwrap_err();

        assert_eq!(errors.field(START_TIME), Some(&[START_BEFORE_STOP.to_string()][..]));
        assert_eq!(errors.field(STOP_TIME), Some(&[STOP_AFTER_START.to_string()][..]));
    }

    #[test]
    fn rejects_equal_times_on_both_fields() {
        let errors = payload(time(12, 0), time(12, 0)).validate().unwrap_err();

        assert!(errors.has(START_TIME));
        assert!(errors.has(STOP_TIME));
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = WorkTimePayload::default().validate().unwrap_err();

        for field in ["task_id", "employee_id", "work_date", START_TIME, STOP_TIME] {
            assert!(errors.has(field), "{field} should be reported");
        }
    }

    #[test]
    fn missing_stop_time_skips_ordering_check() {
        let mut p = payload(time(9, 0), time(17, 0));
        p.stop_time = None;

        let errors = p.validate().unwrap_err();

        assert_eq!(errors.field(STOP_TIME), Some(&["stop_time is required".to_string()][..]));
        assert!(!errors.has(START_TIME));
    }

    #[test]
    fn errors_serialize_as_field_map() {
        let errors = payload(time(10, 0), time(9, 0)).validate().unwrap_err();
        let value = serde_json::to_value(&errors).unwrap();

        assert!(value["start_time"].is_array());
        assert!(value["stop_time"].is_array());
    }
}
