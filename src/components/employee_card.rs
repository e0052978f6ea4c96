use yew::prelude::*;

use crate::models::Employee;

#[derive(Properties, PartialEq)]
pub struct EmployeeCardProps {
    pub employee: Employee,
    pub on_select: Callback<String>,
}

#[function_component(EmployeeCard)]
pub fn employee_card(props: &EmployeeCardProps) -> Html {
    let employee = &props.employee;
    let onclick = {
        let id = employee.employee_id.clone();
        props.on_select.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <div class="employee-card" {onclick}>
            <div class="employee-card-header">
                <span class="employee-name">{&employee.name}</span>
                <span class="employee-id">{&employee.employee_id}</span>
            </div>
            <div class="employee-card-body">
                <span class="employee-department">{&employee.department}</span>
                <span class="employee-salary">{format!("${:.2}", employee.salary)}</span>
                <span class="employee-joined">{employee.joining_date.format("%Y-%m-%d").to_string()}</span>
            </div>
            if !employee.skills.is_empty() {
                <div class="employee-skills">
                    { for employee.skills.iter().map(|skill| html! { <span class="skill-tag">{skill}</span> }) }
                </div>
            }
        </div>
    }
}
