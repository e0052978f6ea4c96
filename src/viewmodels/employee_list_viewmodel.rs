// ============================================================================
// EMPLOYEE LIST VIEWMODEL - Paginación, secuenciado y búsqueda local
// ============================================================================
// Dos etapas separadas:
//   1. página del servidor (skip/limit + filtros) -> EmployeeListState
//   2. búsqueda local sobre esa página            -> EmployeeListView
// `total` viene del servidor; `shown_count` de la búsqueda local.
// ============================================================================

use std::cell::Cell;

use crate::models::{Employee, EmployeeFilters, EmployeePage};
use crate::services::{employee_service, ApiClient, ApiError};

/// 1-based page plus page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub items_per_page: u32,
}

impl PageWindow {
    /// Both values are floored at 1
    pub fn new(page: u32, items_per_page: u32) -> Self {
        Self {
            page: page.max(1),
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn first(items_per_page: u32) -> Self {
        Self::new(1, items_per_page)
    }

    pub fn with_page(self, page: u32) -> Self {
        Self::new(page, self.items_per_page)
    }

    /// `(page - 1) * items_per_page`, never negative
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.items_per_page)
    }

    pub fn limit(&self) -> u32 {
        self.items_per_page
    }

    /// At least one page, even for an empty result
    pub fn total_pages(&self, total: u64) -> u32 {
        let per_page = u64::from(self.items_per_page);
        let pages = total.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn is_out_of_range(&self, total: u64) -> bool {
        self.page > self.total_pages(total)
    }

    /// Pulls an out-of-range page back to the last page
    pub fn clamped(self, total: u64) -> Self {
        self.with_page(self.page.min(self.total_pages(total)))
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: u64) -> bool {
        self.page < self.total_pages(total)
    }
}

/// Settled filters plus page window: everything one list request depends on
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filters: EmployeeFilters,
    pub window: PageWindow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryAction {
    /// New debounced filters; a real change also goes back to page 1
    Filters(EmployeeFilters),
    Page(u32),
}

impl ListQuery {
    pub fn new(items_per_page: u32) -> Self {
        Self {
            filters: EmployeeFilters::default(),
            window: PageWindow::first(items_per_page),
        }
    }

    /// Filters and page move together, so a filter change is a single query
    pub fn apply(&self, action: QueryAction) -> Self {
        match action {
            QueryAction::Filters(filters) if filters == self.filters => self.clone(),
            QueryAction::Filters(filters) => Self {
                filters,
                window: self.window.with_page(1),
            },
            QueryAction::Page(page) => Self {
                filters: self.filters.clone(),
                window: self.window.with_page(page),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Issues increasing tickets; only the newest one may write results
#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        RequestTicket(next)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    Started(RequestTicket),
    Loaded(RequestTicket, EmployeePage),
    Failed(RequestTicket, ApiError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeListState {
    pub items: Vec<Employee>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<ApiError>,
    latest: Option<RequestTicket>,
}

impl EmployeeListState {
    fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest == Some(ticket)
    }

    /// Pure transition. Results for superseded tickets are dropped.
    pub fn apply(&self, action: ListAction) -> Self {
        match action {
            ListAction::Started(ticket) => {
                if self.latest.is_some_and(|latest| ticket < latest) {
                    return self.clone();
                }
                Self {
                    loading: true,
                    latest: Some(ticket),
                    ..self.clone()
                }
            }
            ListAction::Loaded(ticket, page) => {
                if !self.is_current(ticket) {
                    log::debug!("⏭️ Respuesta obsoleta descartada ({:?})", ticket);
                    return self.clone();
                }
                Self {
                    items: page.employees,
                    total: page.total,
                    loading: false,
                    error: None,
                    latest: self.latest,
                }
            }
            ListAction::Failed(ticket, error) => {
                if !self.is_current(ticket) {
                    return self.clone();
                }
                // Previous items stay visible next to the error
                Self {
                    loading: false,
                    error: Some(error),
                    ..self.clone()
                }
            }
        }
    }
}

/// Server stage: one filtered, paged request
pub async fn fetch_employee_page(
    client: &ApiClient,
    filters: &EmployeeFilters,
    window: &PageWindow,
) -> Result<EmployeePage, ApiError> {
    log::debug!("📋 Página {} (skip {}, limit {})", window.page, window.skip(), window.limit());
    employee_service::list_employees(client, filters, window).await
}

/// Local stage: case-insensitive search over the fetched page.
///
/// Matches id, name, department or any skill. A blank query keeps everything.
pub fn narrow(items: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|e| {
            e.employee_id.to_lowercase().contains(&needle)
                || e.name.to_lowercase().contains(&needle)
                || e.department.to_lowercase().contains(&needle)
                || e.skills.iter().any(|s| s.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// What the list screen renders
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeListView {
    pub shown: Vec<Employee>,
    pub shown_count: usize,
    pub total: u64,
    pub total_pages: u32,
}

impl EmployeeListView {
    pub fn compose(items: &[Employee], total: u64, window: &PageWindow, query: &str) -> Self {
        let shown = narrow(items, query);
        Self {
            shown_count: shown.len(),
            shown,
            total,
            total_pages: window.total_pages(total),
        }
    }
}
