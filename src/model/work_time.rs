use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{employee::Employee, task::Task};

/// A record of an employee working on a task for a date and time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "task_id": 1,
        "employee_id": 2,
        "work_date": "2024-01-10",
        "start_time": "09:00",
        "stop_time": "17:00"
    })
)]
pub struct WorkTimeEntry {
    #[schema(example = 1)]
    pub id: u64,

    #[schema(example = 1)]
    pub task_id: u64,

    #[schema(example = 2)]
    pub employee_id: u64,

    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub work_date: NaiveDate,

    #[schema(example = "09:00", value_type = String)]
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,

    #[schema(example = "17:00", value_type = String)]
    #[serde(with = "hhmm")]
    pub stop_time: NaiveTime,

    /// Resolved only by the listing and single-entry lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = true)]
    pub employee: Option<Employee>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = true)]
    pub task: Option<Task>,
}

impl WorkTimeEntry {
    pub fn worked_minutes(&self) -> i64 {
        (self.stop_time - self.start_time).num_minutes().max(0)
    }
}

/// Request body for creating or replacing an entry. Every field is optional so
/// that a missing value is reported by validation instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct WorkTimePayload {
    #[schema(example = 1)]
    pub task_id: Option<u64>,

    #[schema(example = 2)]
    pub employee_id: Option<u64>,

    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub work_date: Option<NaiveDate>,

    #[schema(example = "09:00", value_type = String)]
    #[serde(default, with = "hhmm::option")]
    pub start_time: Option<NaiveTime>,

    #[schema(example = "17:00", value_type = String)]
    #[serde(default, with = "hhmm::option")]
    pub stop_time: Option<NaiveTime>,
}

/// A validated entry that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkTimeDraft {
    pub task_id: u64,
    pub employee_id: u64,
    pub work_date: NaiveDate,
    pub start_time: NaiveTime,
    pub stop_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EmployeeWorkSummary {
    #[schema(example = 2)]
    pub employee_id: u64,
    #[schema(example = 3)]
    pub entry_count: usize,
    #[schema(example = 1440)]
    pub total_minutes: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = 1)]
    pub id: u64,
}

/// Times travel as `HH:MM`. `HH:MM:SS` is accepted on input and written back
/// whenever the seconds are non-zero.
pub mod hhmm {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";
    const FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

    pub fn parse(value: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(value, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(value, FORMAT_WITH_SECONDS))
    }

    pub fn format(time: &NaiveTime) -> String {
        let format = if time.second() == 0 { FORMAT } else { FORMAT_WITH_SECONDS };
        time.format(format).to_string()
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => super::parse(&raw).map(Some).map_err(D::Error::custom),
                None => Ok(None),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_serializes_times_as_hours_and_minutes() {
        let entry = WorkTimeEntry {
            id: 7,
            task_id: 1,
            employee_id: 2,
            work_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            stop_time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            employee: None,
            task: None,
        };

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["start_time"], "09:00");
        assert_eq!(value["stop_time"], "17:30");
        assert_eq!(value["work_date"], "2024-01-10");
        assert!(value.get("employee").is_none());
        assert_eq!(entry.worked_minutes(), 510);
    }

    #[test]
    fn payload_accepts_seconds_and_missing_fields() {
        let payload: WorkTimePayload = serde_json::from_value(json!({
            "task_id": 1,
            "start_time": "08:15:30"
        }))
        .unwrap();

        assert_eq!(payload.task_id, Some(1));
        assert_eq!(payload.employee_id, None);
        assert_eq!(payload.start_time, NaiveTime::from_hms_opt(8, 15, 30));
        assert_eq!(payload.stop_time, None);
    }

    #[test]
    fn entry_keeps_seconds_through_serde() {
        let entry = WorkTimeEntry {
            id: 3,
            task_id: 1,
            employee_id: 2,
            work_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 10).unwrap(),
            stop_time: NaiveTime::from_hms_opt(9, 0, 50).unwrap(),
            employee: None,
            task: None,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["start_time"], "09:00:10");
        assert_eq!(value["stop_time"], "09:00:50");

        let payload: WorkTimePayload = serde_json::from_value(value).unwrap();
        assert_eq!(payload.start_time, Some(entry.start_time));
        assert_eq!(payload.stop_time, Some(entry.stop_time));
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn payload_rejects_malformed_time() {
        let result = serde_json::from_value::<WorkTimePayload>(json!({ "start_time": "9am" }));

        assert!(result.is_err());
    }
}
