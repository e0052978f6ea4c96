// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================
// Un único SessionStore vive en el provider. Sólo cambia por login, logout o
// por el handler de 401 del ApiClient.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::SessionUser;
use crate::services::ApiClient;
use crate::stores::{default_token_store, SessionStore};
use crate::viewmodels::SessionViewModel;

#[derive(Clone)]
pub struct SessionContext {
    pub session: SessionStore,
    pub client: ApiClient,
    /// (user, access token) after a successful authentication
    pub login: Callback<(SessionUser, String)>,
    pub logout: Callback<()>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
            && self.client.same_as(&other.client)
            && self.login == other.login
            && self.logout == other.logout
    }
}

impl SessionContext {
    /// Signed-out context for components rendered outside the provider
    fn detached() -> Self {
        log::warn!("⚠️ SessionContext no encontrado, usando sesión vacía");
        Self {
            session: SessionStore::signed_out(),
            client: ApiClient::new(default_token_store()),
            login: Callback::noop(),
            logout: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
    /// Navigation to the login screen after a 401
    #[prop_or_default]
    pub on_unauthorized: Callback<()>,
}

/// Componente provider que envuelve la app y proporciona el estado de sesión
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let vm = use_memo((), |_| SessionViewModel::new(default_token_store()));
    let session = {
        let vm = vm.clone();
        use_state(move || vm.restore())
    };

    // Mismo token store para cliente y viewmodel
    let client = {
        let setter = session.setter();
        let vm = vm.clone();
        use_memo(props.on_unauthorized.clone(), move |on_unauthorized| {
            let on_unauthorized = on_unauthorized.clone();
            let expire_vm = (*vm).clone();
            let handler = Rc::new(move || {
                setter.set(expire_vm.expire());
                on_unauthorized.emit(());
            });
            ApiClient::new(vm.tokens()).on_unauthorized(handler)
        })
    };

    let login = {
        let session = session.clone();
        let vm = vm.clone();
        Callback::from(move |(user, token): (SessionUser, String)| match vm.login(user, token) {
            Ok(next) => session.set(next),
            Err(e) => log::error!("❌ No se pudo guardar el token: {}", e),
        })
    };

    let logout = {
        let session = session.clone();
        let vm = vm.clone();
        Callback::from(move |_| session.set(vm.logout()))
    };

    let context = SessionContext {
        session: (*session).clone(),
        client: (*client).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::detached)
}
