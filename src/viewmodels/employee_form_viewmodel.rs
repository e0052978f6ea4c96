// ============================================================================
// EMPLOYEE FORM VIEWMODEL - Borrador de texto -> Employee tipado
// ============================================================================
// Los inputs HTML entregan strings; aquí se convierten y se validan campo a
// campo antes de tocar la red.
// ============================================================================

use chrono::NaiveDate;

use crate::models::{Employee, EmployeeUpdate};
use crate::services::{employee_service, ApiClient, ApiError, FieldErrors};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw form contents, one string per input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: String,
    pub joining_date: String,
    /// Comma separated
    pub skills: String,
}

/// "Go, , Rust ," -> ["Go", "Rust"]
pub fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn required(value: &str, field: &str, label: &str, errors: &mut FieldErrors) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, &format!("{} is required", label));
    }
    value.to_string()
}

impl EmployeeDraft {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
            joining_date: employee.joining_date.format(DATE_FORMAT).to_string(),
            skills: employee.skills.join(", "),
        }
    }

    fn parse_salary(&self, errors: &mut FieldErrors) -> f64 {
        let raw = self.salary.trim();
        if raw.is_empty() {
            errors.insert("salary", "Salary is required");
            return 0.0;
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => value,
            Ok(_) => {
                errors.insert("salary", "Salary must be a non-negative number");
                0.0
            }
            Err(_) => {
                errors.insert("salary", "Salary must be a number");
                0.0
            }
        }
    }

    fn parse_date(&self, errors: &mut FieldErrors) -> Option<NaiveDate> {
        let raw = self.joining_date.trim();
        if raw.is_empty() {
            errors.insert("joining_date", "Joining date is required");
            return None;
        }
        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert("joining_date", "Joining date must be YYYY-MM-DD");
                None
            }
        }
    }

    /// Parses every field, collecting all failures at once
    pub fn to_employee(&self) -> Result<Employee, FieldErrors> {
        let mut errors = FieldErrors::default();

        let employee_id = required(&self.employee_id, "employee_id", "Employee ID", &mut errors);
        let name = required(&self.name, "name", "Name", &mut errors);
        let department = required(&self.department, "department", "Department", &mut errors);
        let salary = self.parse_salary(&mut errors);
        let joining_date = self.parse_date(&mut errors);

        match joining_date {
            Some(joining_date) if errors.is_empty() => Ok(Employee {
                employee_id,
                name,
                department,
                salary,
                joining_date,
                skills: split_skills(&self.skills),
            }),
            _ => Err(errors),
        }
    }

    /// Minimal update against `original`. The id is never editable.
    pub fn to_update(&self, original: &Employee) -> Result<EmployeeUpdate, FieldErrors> {
        let edited = Self {
            employee_id: original.employee_id.clone(),
            ..self.clone()
        }
        .to_employee()?;

        let update = EmployeeUpdate::changes_from(original, &edited);
        if update.is_empty() {
            let mut errors = FieldErrors::default();
            errors.general = Some(ApiError::EmptyUpdate.user_message());
            return Err(errors);
        }
        Ok(update)
    }
}

/// Valida el borrador y crea el empleado.
///
/// Devuelve el `employee_id` del borrador para navegar al detalle. El `id`
/// del ack es el identificador interno de la base de datos y no sirve para
/// `GET /employees/{id}`.
pub async fn create_from_draft(client: &ApiClient, draft: &EmployeeDraft) -> Result<String, FieldErrors> {
    let employee = draft.to_employee()?;
    match employee_service::create_employee(client, &employee).await {
        Ok(_) => {
            log::info!("✅ Empleado creado: {}", employee.employee_id);
            Ok(employee.employee_id)
        }
        Err(e) => {
            log::error!("❌ Error creando empleado: {}", e);
            Err(FieldErrors::from_api_error(&e, "employee_id"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::services::http_transport::mock::MockTransport;
    use crate::stores::MemoryTokenStore;

    fn mock_client(transport: &MockTransport) -> ApiClient {
        ApiClient::with_transport("http://api.test", Rc::new(transport.clone()), Rc::new(MemoryTokenStore::new()))
    }

    fn draft() -> EmployeeDraft {
        EmployeeDraft {
            employee_id: "E1".to_string(),
            name: "Ana".to_string(),
            department: "Eng".to_string(),
            salary: "1500.5".to_string(),
            joining_date: "2024-01-15".to_string(),
            skills: "Rust, , Go ,".to_string(),
        }
    }

    #[test]
    fn parses_a_complete_draft() {
        let employee = draft().to_employee().unwrap();
        assert_eq!(employee.salary, 1500.5);
        assert_eq!(employee.joining_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(employee.skills, vec!["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn reports_every_bad_field() {
        let bad = EmployeeDraft {
            name: "  ".to_string(),
            salary: "-3".to_string(),
            joining_date: "15/01/2024".to_string(),
            ..draft()
        };
        let errors = bad.to_employee().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("salary"), Some("Salary must be a non-negative number"));
        assert_eq!(errors.get("joining_date"), Some("Joining date must be YYYY-MM-DD"));
        assert!(errors.get("employee_id").is_none());
    }

    #[test]
    fn non_numeric_salary() {
        let errors = EmployeeDraft { salary: "lots".to_string(), ..draft() }.to_employee().unwrap_err();
        assert_eq!(errors.get("salary"), Some("Salary must be a number"));
    }

    #[test]
    fn roundtrips_through_an_existing_employee() {
        let employee = draft().to_employee().unwrap();
        let again = EmployeeDraft::from_employee(&employee).to_employee().unwrap();
        assert_eq!(again, employee);
    }

    #[test]
    fn update_only_carries_changes() {
        let original = draft().to_employee().unwrap();
        let edited = EmployeeDraft {
            department: "Sales".to_string(),
            employee_id: "IGNORED".to_string(),
            ..EmployeeDraft::from_employee(&original)
        };

        let update = edited.to_update(&original).unwrap();
        assert_eq!(update.department.as_deref(), Some("Sales"));
        assert!(update.name.is_none());
        assert!(update.salary.is_none());
    }

    #[test]
    fn unchanged_edit_is_refused_locally() {
        let original = draft().to_employee().unwrap();
        let errors = EmployeeDraft::from_employee(&original).to_update(&original).unwrap_err();
        assert_eq!(errors.general.as_deref(), Some("No changes detected"));
    }

    #[test]
    fn created_employee_is_opened_by_its_own_id() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"message":"Employee created","id":"665f1c2ab1e3c4d5e6f70812"}"#);

        let target = block_on(create_from_draft(&mock_client(&transport), &draft())).unwrap();
        assert_eq!(target, "E1");

        transport.respond(200, r#"{"employee_id":"E1","name":"Ana","department":"Eng","salary":1500.5,"joining_date":"2024-01-15","skills":[]}"#);
        let opened = block_on(employee_service::get_employee(&mock_client(&transport), &target)).unwrap();
        assert_eq!(opened.employee_id, "E1");
        assert_eq!(transport.last_request().unwrap().url, "http://api.test/employees/E1");
    }

    #[test]
    fn invalid_draft_is_not_sent() {
        let transport = MockTransport::new();
        let bad = EmployeeDraft { salary: "abc".to_string(), ..draft() };

        let errors = block_on(create_from_draft(&mock_client(&transport), &bad)).unwrap_err();
        assert_eq!(errors.get("salary"), Some("Salary must be a number"));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn duplicate_id_is_reported_on_the_id_field() {
        let transport = MockTransport::new();
        transport.respond(400, r#"{"detail":"Employee ID already exists"}"#);

        let errors = block_on(create_from_draft(&mock_client(&transport), &draft())).unwrap_err();
        assert_eq!(errors.get("employee_id"), Some("Employee ID already exists"));
    }
}
