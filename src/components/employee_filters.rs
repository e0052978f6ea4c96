use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::EmployeeFilters;

#[derive(Properties, PartialEq)]
pub struct EmployeeFiltersPanelProps {
    /// Raw, undebounced values as typed
    pub filters: EmployeeFilters,
    pub on_change: Callback<EmployeeFilters>,
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[function_component(EmployeeFiltersPanel)]
pub fn employee_filters_panel(props: &EmployeeFiltersPanelProps) -> Html {
    let on_input = |apply: fn(&mut EmployeeFilters, Option<String>)| {
        let current = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = current.clone();
            apply(&mut next, non_blank(input.value()));
            on_change.emit(next);
        })
    };

    let on_clear = props.on_change.reform(|_: MouseEvent| EmployeeFilters::default());
    let value = |field: &Option<String>| field.clone().unwrap_or_default();

    html! {
        <div class="filters">
            <input
                type="text"
                placeholder="Name"
                value={value(&props.filters.name)}
                oninput={on_input(|f, v| f.name = v)}
            />
            <input
                type="text"
                placeholder="Department"
                value={value(&props.filters.department)}
                oninput={on_input(|f, v| f.department = v)}
            />
            <input
                type="text"
                placeholder="Skill"
                value={value(&props.filters.skills)}
                oninput={on_input(|f, v| f.skills = v)}
            />
            if !props.filters.is_empty() {
                <button type="button" class="btn-link" onclick={on_clear}>{"Clear"}</button>
            }
        </div>
    }
}
