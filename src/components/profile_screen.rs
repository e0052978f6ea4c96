use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::feedback::{field_error, general_error, loading_indicator};
use crate::hooks::use_session_context;
use crate::models::{ProfileUpdate, UserProfile};
use crate::services::{user_service, ApiError, FieldErrors};

#[function_component(ProfileScreen)]
pub fn profile_screen() -> Html {
    let ctx = use_session_context();
    let profile = use_state(|| None::<Result<UserProfile, ApiError>>);
    let email = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let saving = use_state(|| false);

    {
        let profile = profile.clone();
        let email = email.clone();
        let client = ctx.client.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = user_service::get_profile(&client).await;
                match &result {
                    Ok(found) => email.set(found.email.clone().unwrap_or_default()),
                    Err(e) => log::error!("❌ Error cargando perfil: {}", e),
                }
                profile.set(Some(result));
            });
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_submit = {
        let profile = profile.clone();
        let email = email.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let client = ctx.client.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let value = email.trim().to_string();
            if !value.contains('@') {
                let mut invalid = FieldErrors::default();
                invalid.insert("email", "Email is invalid");
                errors.set(invalid);
                return;
            }

            errors.set(FieldErrors::default());
            saving.set(true);
            let update = ProfileUpdate {
                username: None,
                email: Some(value),
            };
            let profile = profile.clone();
            let errors = errors.clone();
            let saving = saving.clone();
            let client = client.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match user_service::update_profile(&client, &update).await {
                    Ok(updated) => profile.set(Some(Ok(updated))),
                    Err(e) => {
                        log::error!("❌ Error guardando perfil: {}", e);
                        errors.set(FieldErrors::from_api_error(&e, "email"));
                    }
                }
                saving.set(false);
            });
        })
    };

    let body = match (*profile).as_ref() {
        None => loading_indicator("Loading profile..."),
        Some(Err(e)) => html! { <div class="alert alert-error">{e.user_message()}</div> },
        Some(Ok(user)) => html! {
            <form class="profile-form" onsubmit={on_submit}>
                {general_error(&errors)}
                <div class="form-group">
                    <label>{"Username"}</label>
                    <input type="text" value={user.username.clone()} disabled=true />
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" value={(*email).clone()} oninput={on_email} />
                    {field_error(&errors, "email")}
                </div>
                <button type="submit" class="btn-primary" disabled={*saving}>
                    { if *saving { "Saving..." } else { "Save" } }
                </button>
            </form>
        },
    };

    html! {
        <section class="profile">
            <h2>{"Profile"}</h2>
            {body}
        </section>
    }
}
