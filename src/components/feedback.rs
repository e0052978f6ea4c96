use yew::prelude::*;

use crate::services::FieldErrors;

/// Inline message under an input, or nothing
pub fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <span class="field-error">{message}</span> },
        None => html! {},
    }
}

/// Form-level banner
pub fn general_error(errors: &FieldErrors) -> Html {
    match &errors.general {
        Some(message) => html! { <div class="alert alert-error">{message}</div> },
        None => html! {},
    }
}

pub fn loading_indicator(text: &str) -> Html {
    html! { <div class="loading"><span class="spinner"></span>{text}</div> }
}
