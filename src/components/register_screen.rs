use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::feedback::{field_error, general_error};
use crate::hooks::use_session_context;
use crate::services::{auth_service, FieldErrors};
use crate::viewmodels::validate_signup;

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    pub on_registered: Callback<()>,
    pub on_show_login: Callback<()>,
}

#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let ctx = use_session_context();
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);

    let on_submit = {
        let refs = (username_ref.clone(), email_ref.clone(), password_ref.clone());
        let errors = errors.clone();
        let submitting = submitting.clone();
        let client = ctx.client.clone();
        let on_registered = props.on_registered.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };
            let request = match validate_signup(&value(&refs.0), &value(&refs.1), &value(&refs.2)) {
                Ok(request) => request,
                Err(invalid) => {
                    errors.set(invalid);
                    return;
                }
            };

            errors.set(FieldErrors::default());
            submitting.set(true);

            let errors = errors.clone();
            let submitting = submitting.clone();
            let client = client.clone();
            let on_registered = on_registered.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::register(&client, &request).await {
                    Ok(_) => {
                        log::info!("✅ Cuenta creada: {}", request.username);
                        on_registered.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error en registro: {}", e);
                        errors.set(FieldErrors::from_api_error(&e, "username"));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Create Account"}</h1>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    {general_error(&errors)}
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input type="text" id="username" ref={username_ref} />
                        {field_error(&errors, "username")}
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" ref={email_ref} />
                        {field_error(&errors, "email")}
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" ref={password_ref} />
                        {field_error(&errors, "password")}
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Creating..." } else { "Sign Up" } }
                    </button>

                    <div class="login-footer">
                        <span>{"Already registered?"}</span>
                        <button type="button" class="btn-link" onclick={props.on_show_login.reform(|_| ())}>
                            {"Sign in"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
