use yew::prelude::*;

use super::feedback::loading_indicator;
use crate::hooks::use_session_context;
use crate::models::DepartmentSalary;
use crate::services::{employee_service, ApiError};

#[function_component(DepartmentSalaries)]
pub fn department_salaries() -> Html {
    let ctx = use_session_context();
    let rows = use_state(|| None::<Result<Vec<DepartmentSalary>, ApiError>>);

    {
        let rows = rows.clone();
        let client = ctx.client.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = employee_service::department_average_salaries(&client).await;
                match &result {
                    Ok(found) => log::info!("📊 Promedios por departamento: {}", found.len()),
                    Err(e) => log::error!("❌ Error cargando promedios: {}", e),
                }
                rows.set(Some(result));
            });
            || ()
        });
    }

    let body = match (*rows).as_ref() {
        None => loading_indicator("Loading..."),
        Some(Err(e)) => html! { <div class="alert alert-error">{e.user_message()}</div> },
        Some(Ok(rows)) if rows.is_empty() => html! { <p class="empty">{"No data."}</p> },
        Some(Ok(rows)) => html! {
            <table class="salary-table">
                <thead>
                    <tr><th>{"Department"}</th><th>{"Average Salary"}</th></tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| html! {
                        <tr key={row.department.clone()}>
                            <td>{&row.department}</td>
                            <td>{format!("${:.2}", row.avg_salary)}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <section class="department-salaries">
            <h2>{"Average Salary by Department"}</h2>
            {body}
        </section>
    }
}
