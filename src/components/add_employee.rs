use yew::prelude::*;

use super::feedback::general_error;
use super::EmployeeFormFields;
use crate::hooks::use_session_context;
use crate::services::FieldErrors;
use crate::viewmodels::{create_from_draft, EmployeeDraft};

#[derive(Properties, PartialEq)]
pub struct AddEmployeeProps {
    /// Receives the `employee_id` of the new employee
    pub on_created: Callback<String>,
}

#[function_component(AddEmployee)]
pub fn add_employee(props: &AddEmployeeProps) -> Html {
    let ctx = use_session_context();
    let draft = use_state(EmployeeDraft::default);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);

    let on_change = {
        let draft = draft.clone();
        Callback::from(move |next: EmployeeDraft| draft.set(next))
    };

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let client = ctx.client.clone();
        let on_created = props.on_created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if let Err(invalid) = draft.to_employee() {
                errors.set(invalid);
                return;
            }

            errors.set(FieldErrors::default());
            submitting.set(true);

            let draft = (*draft).clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let client = client.clone();
            let on_created = on_created.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match create_from_draft(&client, &draft).await {
                    Ok(employee_id) => on_created.emit(employee_id),
                    Err(failed) => errors.set(failed),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <section class="employee-form">
            <h2>{"Add Employee"}</h2>
            <form onsubmit={on_submit}>
                {general_error(&errors)}
                <EmployeeFormFields draft={(*draft).clone()} errors={(*errors).clone()} {on_change} />
                <button type="submit" class="btn-primary" disabled={*submitting}>
                    { if *submitting { "Saving..." } else { "Add Employee" } }
                </button>
            </form>
        </section>
    }
}
