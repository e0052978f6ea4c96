use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::feedback::{field_error, general_error};
use crate::hooks::use_session_context;
use crate::models::{SessionUser, UserProfile};
use crate::services::{auth_service, FieldErrors};
use crate::viewmodels::validate_login;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_logged_in: Callback<()>,
    pub on_show_register: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let ctx = use_session_context();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let client = ctx.client.clone();
        let login = ctx.login.clone();
        let on_logged_in = props.on_logged_in.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let request = match validate_login(&username_input.value(), &password_input.value()) {
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
            let login = login.clone();
            let on_logged_in = on_logged_in.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&client, &request).await {
                    Ok(response) => {
                        let profile = response
                            .user
                            .unwrap_or_else(|| UserProfile::from_username(&request.username));
                        login.emit((SessionUser::Known(profile), response.access_token));
                        on_logged_in.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
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
                    <div class="logo-icon">{"👥"}</div>
                    <h1>{"Employee Manager"}</h1>
                    <p>{"Sign in to continue"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    {general_error(&errors)}
                    <div class="form-group">
                        <label for="username">{"Username"}</label>
                        <input type="text" id="username" name="username" placeholder="Enter your username" ref={username_ref} />
                        {field_error(&errors, "username")}
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" name="password" placeholder="Enter your password" ref={password_ref} />
                        {field_error(&errors, "password")}
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Sign In" } }
                    </button>

                    <div class="login-footer">
                        <span>{"No account yet?"}</span>
                        <button type="button" class="btn-link" onclick={props.on_show_register.reform(|_| ())}>
                            {"Create one"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
