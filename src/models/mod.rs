pub mod auth;
pub mod employee;

pub use auth::{
    LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest, RegisterResponse, SessionUser,
    UserProfile,
};
pub use employee::{
    DepartmentSalary, Employee, EmployeeFilters, EmployeePage, EmployeeRows, EmployeeUpdate,
    MutationAck,
};
