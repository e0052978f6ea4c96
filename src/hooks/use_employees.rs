// ============================================================================
// USE EMPLOYEES HOOK - Listado paginado con guardia de secuencia
// ============================================================================
// Cada cambio de filtros, página o refetch emite un ticket nuevo; sólo la
// respuesta del último ticket llega al estado.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::{Employee, EmployeeFilters};
use crate::services::{ApiClient, ApiError};
use crate::viewmodels::{
    fetch_employee_page, EmployeeListState, ListAction, ListQuery, PageWindow, QueryAction, RequestSequencer,
};

impl Reducible for EmployeeListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

impl Reducible for ListQuery {
    type Action = QueryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

pub struct UseEmployeesHandle {
    pub items: Vec<Employee>,
    /// Server-side total for the active filters
    pub total: u64,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub refetch: Callback<()>,
}

#[hook]
pub fn use_employees(client: &ApiClient, filters: &EmployeeFilters, window: PageWindow) -> UseEmployeesHandle {
    let state = use_reducer(EmployeeListState::default);
    let sequencer = use_memo((), |_| RequestSequencer::new());
    let generation = use_state(|| 0u32);

    {
        let dispatcher = state.dispatcher();
        let client = client.clone();
        let sequencer = sequencer.clone();
        use_effect_with((filters.clone(), window, *generation), move |(filters, window, _)| {
            let ticket = sequencer.issue();
            dispatcher.dispatch(ListAction::Started(ticket));

            let filters = filters.clone();
            let window = *window;
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_employee_page(&client, &filters, &window).await {
                    Ok(page) => {
                        log::info!("✅ Empleados cargados: {} de {}", page.employees.len(), page.total);
                        dispatcher.dispatch(ListAction::Loaded(ticket, page));
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando empleados: {}", e);
                        dispatcher.dispatch(ListAction::Failed(ticket, e));
                    }
                }
            });
            || ()
        });
    }

    let refetch = {
        let generation = generation.clone();
        Callback::from(move |_| generation.set(generation.wrapping_add(1)))
    };

    UseEmployeesHandle {
        items: state.items.clone(),
        total: state.total,
        loading: state.loading,
        error: state.error.clone(),
        refetch,
    }
}
