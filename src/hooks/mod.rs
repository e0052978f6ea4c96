pub mod session_context;
pub mod use_debounced;
pub mod use_employees;

pub use session_context::{use_session_context, SessionContext, SessionContextProvider};
pub use use_debounced::use_debounced;
pub use use_employees::{use_employees, UseEmployeesHandle};
