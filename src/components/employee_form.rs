use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::feedback::field_error;
use crate::services::FieldErrors;
use crate::viewmodels::EmployeeDraft;

#[derive(Properties, PartialEq)]
pub struct EmployeeFormFieldsProps {
    pub draft: EmployeeDraft,
    pub errors: FieldErrors,
    pub on_change: Callback<EmployeeDraft>,
    /// The id cannot change once the employee exists
    #[prop_or_default]
    pub lock_id: bool,
}

/// Controlled inputs for every employee field
#[function_component(EmployeeFormFields)]
pub fn employee_form_fields(props: &EmployeeFormFieldsProps) -> Html {
    let on_input = |apply: fn(&mut EmployeeDraft, String)| {
        let current = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = current.clone();
            apply(&mut next, input.value());
            on_change.emit(next);
        })
    };
    let draft = &props.draft;
    let errors = &props.errors;

    html! {
        <>
            <div class="form-group">
                <label for="employee_id">{"Employee ID"}</label>
                <input
                    id="employee_id"
                    type="text"
                    value={draft.employee_id.clone()}
                    disabled={props.lock_id}
                    oninput={on_input(|d, v| d.employee_id = v)}
                />
                {field_error(errors, "employee_id")}
            </div>
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input id="name" type="text" value={draft.name.clone()} oninput={on_input(|d, v| d.name = v)} />
                {field_error(errors, "name")}
            </div>
            <div class="form-group">
                <label for="department">{"Department"}</label>
                <input
                    id="department"
                    type="text"
                    value={draft.department.clone()}
                    oninput={on_input(|d, v| d.department = v)}
                />
                {field_error(errors, "department")}
            </div>
            <div class="form-group">
                <label for="salary">{"Salary"}</label>
                <input
                    id="salary"
                    type="number"
                    min="0"
                    step="0.01"
                    value={draft.salary.clone()}
                    oninput={on_input(|d, v| d.salary = v)}
                />
                {field_error(errors, "salary")}
            </div>
            <div class="form-group">
                <label for="joining_date">{"Joining Date"}</label>
                <input
                    id="joining_date"
                    type="date"
                    value={draft.joining_date.clone()}
                    oninput={on_input(|d, v| d.joining_date = v)}
                />
                {field_error(errors, "joining_date")}
            </div>
            <div class="form-group">
                <label for="skills">{"Skills (comma separated)"}</label>
                <input id="skills" type="text" value={draft.skills.clone()} oninput={on_input(|d, v| d.skills = v)} />
                {field_error(errors, "skills")}
            </div>
        </>
    }
}
