pub mod auth_viewmodel;
pub mod employee_form_viewmodel;
pub mod employee_list_viewmodel;
pub mod session_viewmodel;

pub use auth_viewmodel::{validate_login, validate_signup};
pub use employee_form_viewmodel::{create_from_draft, split_skills, EmployeeDraft};
pub use employee_list_viewmodel::{
    fetch_employee_page, narrow, EmployeeListState, EmployeeListView, ListAction, ListQuery, PageWindow,
    QueryAction, RequestSequencer, RequestTicket,
};
pub use session_viewmodel::SessionViewModel;
