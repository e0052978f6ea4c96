use yew::prelude::*;

use super::app::Screen;
use crate::hooks::use_session_context;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Screen,
    pub on_navigate: Callback<Screen>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let ctx = use_session_context();

    let on_logout = {
        let logout = ctx.logout.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            on_navigate.emit(Screen::Login);
        })
    };

    let link = |screen: Screen, label: &'static str| {
        let class = if props.current == screen { "nav-link active" } else { "nav-link" };
        let onclick = props.on_navigate.reform(move |_: MouseEvent| screen.clone());
        html! { <button type="button" {class} {onclick}>{label}</button> }
    };

    // Tras un reload el usuario es un placeholder sin nombre
    let who = ctx
        .session
        .user
        .as_ref()
        .filter(|user| !user.is_placeholder())
        .map(|user| user.display_name().to_string());

    html! {
        <nav class="navbar">
            <div class="navbar-brand">{"👥 Employee Manager"}</div>
            <div class="navbar-links">
                {link(Screen::Dashboard, "Dashboard")}
                {link(Screen::Employees, "Employees")}
                {link(Screen::AddEmployee, "Add Employee")}
                {link(Screen::Departments, "Departments")}
                {link(Screen::Profile, "Profile")}
            </div>
            <div class="navbar-user">
                if let Some(name) = who {
                    <span class="navbar-username">{name}</span>
                }
                <button type="button" class="btn-logout" onclick={on_logout}>{"Logout"}</button>
            </div>
        </nav>
    }
}
