use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Employee record as exchanged with the REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: f64,
    /// Sent as YYYY-MM-DD; a full timestamp is also accepted on the way in
    #[serde(deserialize_with = "wire_date")]
    pub joining_date: NaiveDate,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Plain date first, then RFC 3339 or a naive timestamp (date part kept)
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|dt| dt.date()))
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").ok().map(|dt| dt.date()))
}

fn wire_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_wire_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid joining_date: {}", raw)))
}

/// Decodes a list row by row; rows that do not fit `Employee` are logged and
/// dropped instead of failing the whole response.
fn lenient_rows<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Employee>, D::Error> {
    let rows = Vec::<Value>::deserialize(deserializer)?;
    Ok(rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<Employee>(row) {
            Ok(employee) => Some(employee),
            Err(e) => {
                log::warn!("⚠️ Empleado descartado por formato inválido: {}", e);
                None
            }
        })
        .collect())
}

impl Employee {
    pub fn has_skill(&self, skill: &str) -> bool {
        let needle = skill.trim().to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == needle)
    }
}

/// Actualización parcial: los campos ausentes no se serializan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl EmployeeUpdate {
    /// Drops empty values before sending.
    ///
    /// The server reads an absent field as "no change" but an empty string as
    /// "clear this value", so blank strings and blank skill lists must never
    /// reach the wire.
    pub fn stripped(self) -> Self {
        Self {
            name: self.name.filter(|v| !v.trim().is_empty()),
            department: self.department.filter(|v| !v.trim().is_empty()),
            salary: self.salary,
            joining_date: self.joining_date,
            skills: self.skills.and_then(|skills| {
                let cleaned: Vec<String> = skills
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if cleaned.is_empty() { None } else { Some(cleaned) }
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.salary.is_none()
            && self.joining_date.is_none()
            && self.skills.is_none()
    }

    /// Minimal update turning `original` into `edited`: unchanged and blank
    /// fields are left out.
    pub fn changes_from(original: &Employee, edited: &Employee) -> Self {
        let mut update = EmployeeUpdate::default();

        if edited.name != original.name {
            update.name = Some(edited.name.clone());
        }
        if edited.department != original.department {
            update.department = Some(edited.department.clone());
        }
        if edited.salary != original.salary {
            update.salary = Some(edited.salary);
        }
        if edited.joining_date != original.joining_date {
            update.joining_date = Some(edited.joining_date);
        }
        if edited.skills != original.skills {
            update.skills = Some(edited.skills.clone());
        }

        update.stripped()
    }
}

/// Criterios de filtro del listado (efímeros, nunca se persisten)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFilters {
    pub name: Option<String>,
    pub department: Option<String>,
    pub skills: Option<String>,
}

impl EmployeeFilters {
    /// Non-blank filters as query pairs, trimmed, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("name", &self.name),
            ("department", &self.department),
            ("skills", &self.skills),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v.to_string()))
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Resultado paginado de `GET /employees`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeePage {
    #[serde(deserialize_with = "lenient_rows")]
    pub employees: Vec<Employee>,
    pub total: u64,
}

impl EmployeePage {
    /// Builds a page from an endpoint that returns a bare list.
    ///
    /// The total is a lower bound: everything skipped plus what came back.
    pub fn from_unpaged(employees: Vec<Employee>, skip: u64) -> Self {
        let total = skip.saturating_add(employees.len() as u64);
        Self { employees, total }
    }
}

/// Bare employee array, decoded with the same per-row tolerance as a page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct EmployeeRows(#[serde(deserialize_with = "lenient_rows")] pub Vec<Employee>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSalary {
    #[serde(alias = "_id")]
    pub department: String,
    pub avg_salary: f64,
}

/// Respuesta genérica de create/update/delete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            employee_id: "E1".to_string(),
            name: "Ana".to_string(),
            department: "Eng".to_string(),
            salary: 1000.0,
            joining_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            skills: vec!["Go".to_string()],
        }
    }

    #[test]
    fn stripped_update_only_serializes_present_fields() {
        let update = EmployeeUpdate {
            name: Some(String::new()),
            department: Some("Sales".to_string()),
            ..EmployeeUpdate::default()
        }
        .stripped();

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"department":"Sales"}"#);
    }

    #[test]
    fn blank_skill_list_is_stripped() {
        let update = EmployeeUpdate {
            skills: Some(vec![" ".to_string(), String::new()]),
            ..EmployeeUpdate::default()
        }
        .stripped();
        assert!(update.is_empty());
    }

    #[test]
    fn changes_from_keeps_only_modified_fields() {
        let original = sample();
        let mut edited = sample();
        edited.salary = 1200.0;
        edited.skills = vec!["Go".to_string(), "Rust".to_string()];

        let update = EmployeeUpdate::changes_from(&original, &edited);
        assert_eq!(update.salary, Some(1200.0));
        assert_eq!(update.skills, Some(vec!["Go".to_string(), "Rust".to_string()]));
        assert!(update.name.is_none());
        assert!(update.department.is_none());
        assert!(update.joining_date.is_none());
    }

    #[test]
    fn clearing_a_name_is_not_sent_as_a_change() {
        let original = sample();
        let mut edited = sample();
        edited.name = String::new();

        assert!(EmployeeUpdate::changes_from(&original, &edited).is_empty());
    }

    #[test]
    fn filters_skip_blank_values() {
        let filters = EmployeeFilters {
            name: Some("  ".to_string()),
            department: Some(" Eng ".to_string()),
            skills: None,
        };
        assert_eq!(filters.query_pairs(), vec![("department", "Eng".to_string())]);
        assert!(!filters.is_empty());
        assert!(EmployeeFilters::default().is_empty());
    }

    #[test]
    fn employee_dates_use_iso_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["joining_date"], "2024-01-01");

        let back: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn unpaged_total_counts_skipped_rows() {
        let page = EmployeePage::from_unpaged(vec![sample()], 20);
        assert_eq!(page.total, 21);
    }

    #[test]
    fn department_average_accepts_aggregation_id() {
        let row: DepartmentSalary =
            serde_json::from_str(r#"{"_id":"Eng","avg_salary":1500.5}"#).unwrap();
        assert_eq!(row.department, "Eng");
        assert_eq!(row.avg_salary, 1500.5);
    }

    #[test]
    fn joining_date_accepts_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_wire_date("2024-01-15"), Some(expected));
        assert_eq!(parse_wire_date("2024-01-15T00:00:00"), Some(expected));
        assert_eq!(parse_wire_date("2024-01-15T09:30:00.123"), Some(expected));
        assert_eq!(parse_wire_date("2024-01-15 09:30:00"), Some(expected));
        assert_eq!(parse_wire_date("2024-01-15T23:30:00+02:00"), Some(expected));
        assert_eq!(parse_wire_date("15/01/2024"), None);

        let employee: Employee = serde_json::from_str(
            r#"{"employee_id":"E1","name":"Ana","department":"Eng","salary":1000.0,"joining_date":"2024-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(employee.joining_date, sample().joining_date);
        assert!(employee.skills.is_empty());
    }

    #[test]
    fn one_bad_row_does_not_sink_the_page() {
        let page: EmployeePage = serde_json::from_str(
            r#"{"employees":[
                {"employee_id":"E1","name":"Ana","department":"Eng","salary":1000.0,"joining_date":"2024-01-01","skills":["Go"]},
                {"employee_id":"E2","name":"Bob","department":"Ops","salary":900.0,"joining_date":"not a date"},
                {"employee_id":"E3","name":"Cy","department":"Ops","salary":900.0,"joining_date":"2023-05-02T08:00:00Z"}
            ],"total":3}"#,
        )
        .unwrap();

        assert_eq!(page.total, 3);
        let ids: Vec<&str> = page.employees.iter().map(|e| e.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["E1", "E3"]);
        assert_eq!(page.employees[0], sample());
    }

    #[test]
    fn bare_rows_drop_undecodable_entries() {
        let rows: EmployeeRows = serde_json::from_str(
            r#"[{"employee_id":"E1","name":"Ana","department":"Eng","salary":1000.0,"joining_date":"2024-01-01","skills":["Go"]},{"employee_id":"E2"}]"#,
        )
        .unwrap();
        assert_eq!(rows.0, vec![sample()]);
    }
}
