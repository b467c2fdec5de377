use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

// Postgres TIMESTAMPTZ keeps microseconds; finer input would not survive a save.
const TIMESTAMP_PRECISION_NANOS: u32 = 1_000;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub salary: i32,
    pub age: i32,
    pub job_title: String,
    pub email: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub contract_hire_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub contract_termination_date: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn is_employed(&self) -> bool {
        self.contract_termination_date.is_none()
    }
}

fn check_precision<E: de::Error>(timestamp: DateTime<Utc>) -> Result<DateTime<Utc>, E> {
    if timestamp.timestamp_subsec_nanos() % TIMESTAMP_PRECISION_NANOS != 0 {
        return Err(E::custom(format!(
            "timestamp {} is more precise than microseconds",
            timestamp.to_rfc3339()
        )));
    }
    Ok(timestamp)
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    check_precision(DateTime::<Utc>::deserialize(deserializer)?)
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateTime<Utc>>::deserialize(deserializer)?
        .map(check_precision)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn deserializes_camel_case_payload_without_id() {
        let payload = json!({
            "firstName": "Jane",
            "lastName": "Smith",
            "fullName": "Jane Smith",
            "salary": 60000,
            "age": 28,
            "jobTitle": "Product Manager",
            "email": "jane.smith@example.com",
            "contractHireDate": "2024-03-01T09:00:00Z"
        });

        let employee: Employee = serde_json::from_value(payload).unwrap();
        assert_eq!(employee.id, None);
        assert_eq!(employee.first_name, "Jane");
        assert_eq!(employee.job_title, "Product Manager");
        assert_eq!(
            employee.contract_hire_date,
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
        );
        assert!(employee.is_employed());
    }

    #[test]
    fn serializes_absent_termination_date_as_null() {
        let employee = Employee {
            id: Some(Uuid::new_v4()),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            full_name: "John Doe".to_string(),
            salary: 80000,
            age: 30,
            job_title: "Software Engineer".to_string(),
            email: "john.doe@example.com".to_string(),
            contract_hire_date: Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap(),
            contract_termination_date: None,
        };

        let value = serde_json::to_value(&employee).unwrap();
        assert!(value["contractTerminationDate"].is_null());
        assert_eq!(value["fullName"], "John Doe");
        assert_eq!(value["id"], employee.id.unwrap().to_string());
    }

    #[test]
    fn missing_hire_date_is_rejected() {
        let payload = json!({
            "firstName": "Jane",
            "lastName": "Smith",
            "fullName": "Jane Smith",
            "salary": 60000,
            "age": 28,
            "jobTitle": "Product Manager",
            "email": "jane.smith@example.com"
        });

        assert!(serde_json::from_value::<Employee>(payload).is_err());
    }

    #[test]
    fn microsecond_timestamps_are_kept_exactly() {
        let payload = json!({
            "firstName": "Jane",
            "lastName": "Smith",
            "fullName": "Jane Smith",
            "salary": 60000,
            "age": 28,
            "jobTitle": "Product Manager",
            "email": "jane.smith@example.com",
            "contractHireDate": "2024-03-01T09:00:00.123456Z",
            "contractTerminationDate": null
        });

        let employee: Employee = serde_json::from_value(payload).unwrap();
        assert_eq!(employee.contract_hire_date.timestamp_subsec_nanos(), 123_456_000);
        assert_eq!(employee.contract_termination_date, None);
    }

    #[test]
    fn sub_microsecond_timestamps_are_rejected() {
        let mut payload = json!({
            "firstName": "Jane",
            "lastName": "Smith",
            "fullName": "Jane Smith",
            "salary": 60000,
            "age": 28,
            "jobTitle": "Product Manager",
            "email": "jane.smith@example.com",
            "contractHireDate": "2024-03-01T09:00:00.123456789Z"
        });
        assert!(serde_json::from_value::<Employee>(payload.clone()).is_err());

        payload["contractHireDate"] = json!("2024-03-01T09:00:00Z");
        payload["contractTerminationDate"] = json!("2025-03-01T09:00:00.000000001Z");
        assert!(serde_json::from_value::<Employee>(payload).is_err());
    }
}
