pub mod add_employee;
pub mod app;
pub mod dashboard;
pub mod department_salaries;
pub mod employee_card;
pub mod employee_details;
pub mod employee_filters;
pub mod employee_form;
pub mod employee_list;
pub mod feedback;
pub mod login_screen;
pub mod navbar;
pub mod pagination;
pub mod profile_screen;
pub mod register_screen;

pub use add_employee::AddEmployee;
pub use app::{App, Screen};
pub use dashboard::Dashboard;
pub use department_salaries::DepartmentSalaries;
pub use employee_card::EmployeeCard;
pub use employee_details::EmployeeDetails;
pub use employee_filters::EmployeeFiltersPanel;
pub use employee_form::EmployeeFormFields;
pub use employee_list::EmployeeList;
pub use login_screen::LoginScreen;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use profile_screen::ProfileScreen;
pub use register_screen::RegisterScreen;
