// ============================================================================
// EMPLOYEE DETAILS - Ver / editar / eliminar un empleado
// ============================================================================

use yew::prelude::*;

use super::feedback::{general_error, loading_indicator};
use super::EmployeeFormFields;
use crate::hooks::use_session_context;
use crate::models::Employee;
use crate::services::{employee_service, ApiError, FieldErrors};
use crate::viewmodels::EmployeeDraft;

#[derive(Properties, PartialEq)]
pub struct EmployeeDetailsProps {
    pub employee_id: String,
    pub on_deleted: Callback<()>,
    pub on_back: Callback<()>,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(EmployeeDetails)]
pub fn employee_details(props: &EmployeeDetailsProps) -> Html {
    let ctx = use_session_context();
    let employee = use_state(|| None::<Employee>);
    let load_error = use_state(|| None::<ApiError>);
    let reload = use_state(|| 0u32);

    let editing = use_state(|| false);
    let draft = use_state(EmployeeDraft::default);
    let errors = use_state(FieldErrors::default);
    let busy = use_state(|| false);

    {
        let employee = employee.clone();
        let load_error = load_error.clone();
        let client = ctx.client.clone();
        use_effect_with((props.employee_id.clone(), *reload), move |(id, _)| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match employee_service::get_employee(&client, &id).await {
                    Ok(found) => {
                        load_error.set(None);
                        employee.set(Some(found));
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando empleado {}: {}", id, e);
                        load_error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    let on_edit = {
        let employee = employee.clone();
        let draft = draft.clone();
        let editing = editing.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(current) = (*employee).as_ref() {
                draft.set(EmployeeDraft::from_employee(current));
                errors.set(FieldErrors::default());
                editing.set(true);
            }
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let on_change = {
        let draft = draft.clone();
        Callback::from(move |next: EmployeeDraft| draft.set(next))
    };

    let on_save = {
        let employee = employee.clone();
        let draft = draft.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let editing = editing.clone();
        let reload = reload.clone();
        let client = ctx.client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(original) = (*employee).as_ref() else {
                return;
            };
            if *busy {
                return;
            }
            let update = match draft.to_update(original) {
                Ok(update) => update,
                Err(invalid) => {
                    errors.set(invalid);
                    return;
                }
            };

            busy.set(true);
            let id = original.employee_id.clone();
            let errors = errors.clone();
            let busy = busy.clone();
            let editing = editing.clone();
            let reload = reload.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match employee_service::update_employee(&client, &id, update).await {
                    Ok(_) => {
                        editing.set(false);
                        reload.set(reload.wrapping_add(1));
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando {}: {}", id, e);
                        errors.set(FieldErrors::from_api_error(&e, "employee_id"));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_delete = {
        let busy = busy.clone();
        let errors = errors.clone();
        let client = ctx.client.clone();
        let on_deleted = props.on_deleted.clone();
        let id = props.employee_id.clone();

        Callback::from(move |_: MouseEvent| {
            if *busy || !confirm("Delete this employee?") {
                return;
            }
            busy.set(true);
            let busy = busy.clone();
            let errors = errors.clone();
            let client = client.clone();
            let on_deleted = on_deleted.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match employee_service::delete_employee(&client, &id).await {
                    Ok(_) => on_deleted.emit(()),
                    Err(e) => {
                        log::error!("❌ Error eliminando {}: {}", id, e);
                        errors.set(FieldErrors::from_api_error(&e, "employee_id"));
                        busy.set(false);
                    }
                }
            });
        })
    };

    let back = props.on_back.reform(|_: MouseEvent| ());

    let body = match ((*employee).as_ref(), (*load_error).as_ref()) {
        (_, Some(error)) if error.is_not_found() => html! {
            <p class="empty">{"Employee not found."}</p>
        },
        (_, Some(error)) => html! {
            <div class="alert alert-error">{error.user_message()}</div>
        },
        (None, None) => loading_indicator("Loading employee..."),
        (Some(_), None) if *editing => html! {
            <form class="employee-form" onsubmit={on_save}>
                {general_error(&errors)}
                <EmployeeFormFields draft={(*draft).clone()} errors={(*errors).clone()} {on_change} lock_id=true />
                <div class="form-actions">
                    <button type="submit" class="btn-primary" disabled={*busy}>{"Save"}</button>
                    <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                </div>
            </form>
        },
        (Some(current), None) => html! {
            <div class="employee-details">
                {general_error(&errors)}
                <dl>
                    <dt>{"Employee ID"}</dt><dd>{&current.employee_id}</dd>
                    <dt>{"Name"}</dt><dd>{&current.name}</dd>
                    <dt>{"Department"}</dt><dd>{&current.department}</dd>
                    <dt>{"Salary"}</dt><dd>{format!("${:.2}", current.salary)}</dd>
                    <dt>{"Joining Date"}</dt><dd>{current.joining_date.format("%Y-%m-%d").to_string()}</dd>
                    <dt>{"Skills"}</dt><dd>{current.skills.join(", ")}</dd>
                </dl>
                <div class="form-actions">
                    <button type="button" class="btn-primary" onclick={on_edit} disabled={*busy}>{"Edit"}</button>
                    <button type="button" class="btn-danger" onclick={on_delete} disabled={*busy}>{"Delete"}</button>
                </div>
            </div>
        },
    };

    html! {
        <section class="employee-details-screen">
            <button type="button" class="btn-link" onclick={back}>{"‹ Back to list"}</button>
            <h2>{"Employee Details"}</h2>
            {body}
        </section>
    }
}
