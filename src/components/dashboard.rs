use yew::prelude::*;

use super::app::Screen;
use super::feedback::loading_indicator;
use super::EmployeeCard;
use crate::hooks::use_session_context;
use crate::models::EmployeePage;
use crate::services::{employee_service, ApiError};
use crate::viewmodels::PageWindow;

const PREVIEW_SIZE: u32 = 5;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let ctx = use_session_context();
    let recent = use_state(|| None::<Result<EmployeePage, ApiError>>);

    {
        let recent = recent.clone();
        let client = ctx.client.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let window = PageWindow::first(PREVIEW_SIZE);
                let result = employee_service::list_all_employees(&client, &window)
                    .await
                    .map(|employees| EmployeePage::from_unpaged(employees, window.skip()));
                if let Err(e) = &result {
                    log::error!("❌ Error cargando vista previa: {}", e);
                }
                recent.set(Some(result));
            });
            || ()
        });
    }

    let go = |screen: Screen| props.on_navigate.reform(move |_: MouseEvent| screen.clone());

    let preview = match (*recent).as_ref() {
        None => loading_indicator("Loading..."),
        Some(Err(e)) => html! { <div class="alert alert-error">{e.user_message()}</div> },
        Some(Ok(page)) if page.employees.is_empty() => html! { <p class="empty">{"No employees yet."}</p> },
        Some(Ok(page)) => html! {
            <div class="employee-grid">
                { for page.employees.iter().map(|employee| html! {
                    <EmployeeCard
                        key={employee.employee_id.clone()}
                        employee={employee.clone()}
                        on_select={props.on_navigate.reform(Screen::EmployeeDetails)}
                    />
                }) }
            </div>
        },
    };

    html! {
        <section class="dashboard">
            <h2>{"Dashboard"}</h2>
            <div class="dashboard-actions">
                <button type="button" class="btn-primary" onclick={go(Screen::Employees)}>{"Browse employees"}</button>
                <button type="button" class="btn-secondary" onclick={go(Screen::AddEmployee)}>{"Add employee"}</button>
                <button type="button" class="btn-secondary" onclick={go(Screen::Departments)}>{"Salary by department"}</button>
            </div>
            <h3>{"Recent employees"}</h3>
            {preview}
        </section>
    }
}
