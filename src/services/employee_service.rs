use crate::models::{
    DepartmentSalary, Employee, EmployeeFilters, EmployeePage, EmployeeRows, EmployeeUpdate, MutationAck,
};
use crate::services::api_client::path_segment;
use crate::services::{ApiClient, ApiError};
use crate::viewmodels::PageWindow;

fn window_query(window: &PageWindow) -> Vec<(&'static str, String)> {
    vec![
        ("skip", window.skip().to_string()),
        ("limit", window.limit().to_string()),
    ]
}

/// Listado filtrado y paginado (`{ employees, total }`)
pub async fn list_employees(
    client: &ApiClient,
    filters: &EmployeeFilters,
    window: &PageWindow,
) -> Result<EmployeePage, ApiError> {
    let mut query = filters.query_pairs();
    query.extend(window_query(window));
    client.get_json("/employees", &query).await
}

/// Listado sin filtros: el endpoint devuelve un array sin `total`
pub async fn list_all_employees(client: &ApiClient, window: &PageWindow) -> Result<Vec<Employee>, ApiError> {
    let rows: EmployeeRows = client.get_json("/employees/employees/all", &window_query(window)).await?;
    Ok(rows.0)
}

pub async fn get_employee(client: &ApiClient, employee_id: &str) -> Result<Employee, ApiError> {
    client
        .get_json(&format!("/employees/{}", path_segment(employee_id)), &[])
        .await
}

pub async fn create_employee(client: &ApiClient, employee: &Employee) -> Result<MutationAck, ApiError> {
    log::info!("➕ Creando empleado: {}", employee.employee_id);
    client.post_json("/employees", employee).await
}

/// Partial update. Blank fields are stripped first; if nothing is left the
/// call is refused locally and never reaches the network.
pub async fn update_employee(
    client: &ApiClient,
    employee_id: &str,
    update: EmployeeUpdate,
) -> Result<MutationAck, ApiError> {
    let update = update.stripped();
    if update.is_empty() {
        log::warn!("⚠️ Update vacío para {}, no se envía", employee_id);
        return Err(ApiError::EmptyUpdate);
    }

    log::info!("📝 Actualizando empleado: {}", employee_id);
    client
        .put_json(&format!("/employees/{}", path_segment(employee_id)), &update)
        .await
}

/// Not idempotent: a second delete of the same id yields `NotFound`
pub async fn delete_employee(client: &ApiClient, employee_id: &str) -> Result<MutationAck, ApiError> {
    log::info!("🗑️ Eliminando empleado: {}", employee_id);
    client
        .delete_json(&format!("/employees/{}", path_segment(employee_id)))
        .await
}

pub async fn department_average_salaries(client: &ApiClient) -> Result<Vec<DepartmentSalary>, ApiError> {
    client.get_json("/employees/avg-salary", &[]).await
}
