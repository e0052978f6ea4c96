// ============================================================================
// EMPLOYEE LIST - Filtros (servidor) + búsqueda (local) + paginación
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::feedback::loading_indicator;
use super::{EmployeeCard, EmployeeFiltersPanel, Pagination};
use crate::config::CONFIG;
use crate::hooks::{use_debounced, use_employees, use_session_context};
use crate::models::EmployeeFilters;
use crate::viewmodels::{EmployeeListView, ListQuery, QueryAction};

#[derive(Properties, PartialEq)]
pub struct EmployeeListProps {
    pub on_select: Callback<String>,
}

#[function_component(EmployeeList)]
pub fn employee_list(props: &EmployeeListProps) -> Html {
    let ctx = use_session_context();
    let typed_filters = use_state(EmployeeFilters::default);
    let search = use_state(String::new);
    let query = use_reducer_eq(|| ListQuery::new(CONFIG.items_per_page));

    let filters = use_debounced((*typed_filters).clone(), CONFIG.search_debounce_ms);
    let window = query.window;
    let list = use_employees(&ctx.client, &query.filters, window);

    // Filtros nuevos -> primera página, en el mismo cambio de query
    {
        let dispatcher = query.dispatcher();
        use_effect_with(filters, move |filters| {
            dispatcher.dispatch(QueryAction::Filters(filters.clone()));
            || ()
        });
    }

    // Página fuera de rango tras un cambio de total
    {
        let dispatcher = query.dispatcher();
        use_effect_with((list.total, list.loading, window), move |(total, loading, window)| {
            if !*loading && window.is_out_of_range(*total) {
                dispatcher.dispatch(QueryAction::Page(window.clamped(*total).page));
            }
            || ()
        });
    }

    let on_filters = {
        let typed_filters = typed_filters.clone();
        Callback::from(move |next: EmployeeFilters| typed_filters.set(next))
    };
    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };
    let on_page = {
        let dispatcher = query.dispatcher();
        Callback::from(move |next: u32| dispatcher.dispatch(QueryAction::Page(next)))
    };
    let on_retry = list.refetch.reform(|_: MouseEvent| ());

    let view = EmployeeListView::compose(&list.items, list.total, &window, &search);

    html! {
        <section class="employee-list">
            <header class="section-header">
                <h2>{"Employees"}</h2>
                <span class="counter">
                    {format!("Showing {} of {} employees", view.shown_count, view.total)}
                </span>
            </header>

            <EmployeeFiltersPanel filters={(*typed_filters).clone()} on_change={on_filters} />
            <input
                type="search"
                class="search"
                placeholder="Search this page"
                value={(*search).clone()}
                oninput={on_search}
            />

            if let Some(error) = &list.error {
                <div class="alert alert-error">
                    {error.user_message()}
                    <button type="button" class="btn-link" onclick={on_retry}>{"Retry"}</button>
                </div>
            }

            if list.loading && list.items.is_empty() {
                {loading_indicator("Loading employees...")}
            } else if view.shown.is_empty() {
                <p class="empty">{"No employees found."}</p>
            } else {
                <div class="employee-grid">
                    { for view.shown.iter().map(|employee| html! {
                        <EmployeeCard
                            key={employee.employee_id.clone()}
                            employee={employee.clone()}
                            on_select={props.on_select.clone()}
                        />
                    }) }
                </div>
            }

            <Pagination {window} total={list.total} {on_page} />
        </section>
    }
}
