// ============================================================================
// APP - Raíz: provider de sesión + pantalla activa
// ============================================================================
// Sin router: la pantalla activa es un `Screen` en use_state. Las pantallas
// privadas sin sesión caen en Login; las públicas con sesión, en Dashboard.
// ============================================================================

use yew::prelude::*;

use super::{
    AddEmployee, Dashboard, DepartmentSalaries, EmployeeDetails, EmployeeList, LoginScreen, Navbar,
    ProfileScreen, RegisterScreen,
};
use crate::hooks::{use_session_context, SessionContextProvider};

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Login,
    Register,
    Dashboard,
    Employees,
    AddEmployee,
    EmployeeDetails(String),
    Departments,
    Profile,
}

impl Screen {
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Login | Screen::Register)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let screen = use_state(|| Screen::Dashboard);

    let navigate = use_callback(screen.setter(), |next: Screen, setter| {
        log::debug!("🧭 Navegando a {:?}", next);
        setter.set(next);
    });
    let on_unauthorized = use_callback(screen.setter(), |_: (), setter| {
        log::warn!("🔒 401 recibido, volviendo a login");
        setter.set(Screen::Login);
    });

    html! {
        <SessionContextProvider {on_unauthorized}>
            <Shell screen={(*screen).clone()} on_navigate={navigate} />
        </SessionContextProvider>
    }
}

#[derive(Properties, PartialEq)]
struct ShellProps {
    screen: Screen,
    on_navigate: Callback<Screen>,
}

#[function_component(Shell)]
fn shell(props: &ShellProps) -> Html {
    let ctx = use_session_context();
    let logged_in = ctx.session.is_logged_in();

    let screen = match (&props.screen, logged_in) {
        (screen, false) if !screen.is_public() => Screen::Login,
        (screen, true) if screen.is_public() => Screen::Dashboard,
        (screen, _) => screen.clone(),
    };
    let nav = props.on_navigate.clone();

    let body = match &screen {
        Screen::Login => html! {
            <LoginScreen
                on_logged_in={nav.reform(|_| Screen::Dashboard)}
                on_show_register={nav.reform(|_| Screen::Register)}
            />
        },
        Screen::Register => html! {
            <RegisterScreen
                on_registered={nav.reform(|_| Screen::Login)}
                on_show_login={nav.reform(|_| Screen::Login)}
            />
        },
        Screen::Dashboard => html! { <Dashboard on_navigate={nav.clone()} /> },
        Screen::Employees => html! {
            <EmployeeList on_select={nav.reform(Screen::EmployeeDetails)} />
        },
        Screen::AddEmployee => html! {
            <AddEmployee on_created={nav.reform(Screen::EmployeeDetails)} />
        },
        Screen::EmployeeDetails(id) => html! {
            <EmployeeDetails
                key={id.clone()}
                employee_id={id.clone()}
                on_deleted={nav.reform(|_| Screen::Employees)}
                on_back={nav.reform(|_| Screen::Employees)}
            />
        },
        Screen::Departments => html! { <DepartmentSalaries /> },
        Screen::Profile => html! { <ProfileScreen /> },
    };

    html! {
        <div class="app">
            if logged_in {
                <Navbar current={screen.clone()} on_navigate={nav.clone()} />
            }
            <main class="content">{body}</main>
        </div>
    }
}
