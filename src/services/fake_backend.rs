// In-memory stand-in for the employee REST API, used by the scenario tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Value};
use url::{form_urlencoded, Url};

use crate::models::{DepartmentSalary, Employee, EmployeePage};
use crate::services::http_transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

#[derive(Default)]
struct BackendState {
    employees: Vec<Employee>,
    // username -> (email, password)
    users: HashMap<String, (String, String)>,
    // token -> username
    sessions: HashMap<String, String>,
    issued: u32,
    // storage ids handed out by create, unrelated to employee_id
    inserted: u64,
}

#[derive(Clone)]
pub struct FakeBackend {
    state: Rc<RefCell<BackendState>>,
}

fn reply(status: u16, body: Value) -> HttpResponse {
    HttpResponse::new(status, body.to_string())
}

fn detail(status: u16, message: &str) -> HttpResponse {
    reply(status, json!({ "detail": message }))
}

impl FakeBackend {
    /// Starts with a single `admin` / `admin123` account
    pub fn new() -> Self {
        let mut state = BackendState::default();
        state.users.insert(
            "admin".to_string(),
            ("admin@corp.io".to_string(), "admin123".to_string()),
        );
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Invalidates every issued token, as if they had all expired
    pub fn revoke_tokens(&self) {
        self.state.borrow_mut().sessions.clear();
    }

    fn current_user(&self, request: &HttpRequest) -> Option<String> {
        let token = request.header("Authorization")?.strip_prefix("Bearer ")?;
        self.state.borrow().sessions.get(token).cloned()
    }

    fn handle(&self, request: &HttpRequest) -> HttpResponse {
        let url = match Url::parse(&request.url) {
            Ok(url) => url,
            Err(_) => return detail(400, "bad url"),
        };
        let query: HashMap<String, String> = url.query_pairs().into_owned().collect();
        let segments: Vec<&str> = url.path_segments().map(|s| s.collect()).unwrap_or_default();
        let body = request.body.clone().unwrap_or_default();

        match (request.method, segments.as_slice()) {
            (HttpMethod::Post, ["auth", "login"]) => self.login(&body),
            (HttpMethod::Post, ["auth", "signup"]) => self.signup(&body),
            (HttpMethod::Get, ["employees"]) => self.list(&query),
            (HttpMethod::Get, ["employees", "employees", "all"]) => self.list_all(&query),
            (method, rest) => {
                let Some(user) = self.current_user(request) else {
                    return detail(401, "Could not validate credentials");
                };
                match (method, rest) {
                    (HttpMethod::Post, ["employees"]) => self.create(&body),
                    (HttpMethod::Get, ["employees", "avg-salary"]) => self.averages(),
                    (HttpMethod::Get, ["employees", id]) => self.get(id),
                    (HttpMethod::Put, ["employees", id]) => self.update(id, &body),
                    (HttpMethod::Delete, ["employees", id]) => self.delete(id),
                    (HttpMethod::Get, ["user", "profile"]) => self.profile(&user),
                    (HttpMethod::Put, ["user", "profile"]) => self.update_profile(&user, &body),
                    _ => detail(404, "Not Found"),
                }
            }
        }
    }

    fn login(&self, body: &str) -> HttpResponse {
        let form: HashMap<String, String> = form_urlencoded::parse(body.as_bytes()).into_owned().collect();
        let (Some(username), Some(password)) = (form.get("username"), form.get("password")) else {
            return detail(422, "field required");
        };

        let mut state = self.state.borrow_mut();
        let valid = state
            .users
            .get(username)
            .map(|(_, stored)| stored == password)
            .unwrap_or(false);
        if !valid {
            return detail(401, "Invalid credentials");
        }

        state.issued += 1;
        let token = format!("token-{}", state.issued);
        state.sessions.insert(token.clone(), username.clone());
        reply(200, json!({ "access_token": token, "token_type": "bearer" }))
    }

    fn signup(&self, body: &str) -> HttpResponse {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return detail(422, "invalid body");
        };
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        let (Some(username), Some(email), Some(password)) = (field("username"), field("email"), field("password")) else {
            return detail(422, "field required");
        };

        let mut state = self.state.borrow_mut();
        if state.users.contains_key(&username) {
            return detail(400, "Username already exists");
        }
        state.users.insert(username.clone(), (email, password));
        reply(201, json!({ "message": "User created successfully", "user_id": username }))
    }

    fn list(&self, query: &HashMap<String, String>) -> HttpResponse {
        let state = self.state.borrow();
        let contains = |haystack: &str, key: &str| {
            query
                .get(key)
                .map(|needle| haystack.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(true)
        };
        let matching: Vec<Employee> = state
            .employees
            .iter()
            .filter(|e| contains(&e.name, "name"))
            .filter(|e| contains(&e.department, "department"))
            .filter(|e| match query.get("skills") {
                Some(skill) => e.has_skill(skill),
                None => true,
            })
            .cloned()
            .collect();

        let total = matching.len() as u64;
        let employees = paginate(matching, query);
        reply(200, json!(EmployeePage { employees, total }))
    }

    fn list_all(&self, query: &HashMap<String, String>) -> HttpResponse {
        let employees = self.state.borrow().employees.clone();
        reply(200, json!(paginate(employees, query)))
    }

    fn create(&self, body: &str) -> HttpResponse {
        let employee: Employee = match serde_json::from_str(body) {
            Ok(employee) => employee,
            Err(e) => {
                return reply(
                    422,
                    json!({ "detail": [{ "loc": ["body"], "msg": e.to_string(), "type": "value_error" }] }),
                )
            }
        };

        let mut state = self.state.borrow_mut();
        if state.employees.iter().any(|e| e.employee_id == employee.employee_id) {
            return detail(400, "Employee ID already exists");
        }
        state.inserted += 1;
        let id = format!("{:024x}", 0x665f_1c2a_0000_u64 + state.inserted);
        state.employees.push(employee);
        reply(200, json!({ "message": "Employee created", "id": id }))
    }

    fn get(&self, id: &str) -> HttpResponse {
        match self.state.borrow().employees.iter().find(|e| e.employee_id == id) {
            Some(employee) => reply(200, json!(employee)),
            None => detail(404, "Employee not found"),
        }
    }

    fn update(&self, id: &str, body: &str) -> HttpResponse {
        let Ok(Value::Object(changes)) = serde_json::from_str::<Value>(body) else {
            return detail(422, "invalid body");
        };

        let mut state = self.state.borrow_mut();
        let Some(employee) = state.employees.iter_mut().find(|e| e.employee_id == id) else {
            return detail(404, "Employee not found");
        };

        let mut merged = json!(employee.clone());
        for (key, value) in changes {
            merged[key.as_str()] = value;
        }
        match serde_json::from_value::<Employee>(merged) {
            Ok(updated) => {
                *employee = updated;
                reply(200, json!({ "message": "Employee updated" }))
            }
            Err(e) => detail(422, &e.to_string()),
        }
    }

    fn delete(&self, id: &str) -> HttpResponse {
        let mut state = self.state.borrow_mut();
        let before = state.employees.len();
        state.employees.retain(|e| e.employee_id != id);
        if state.employees.len() == before {
            return detail(404, "Employee not found");
        }
        reply(200, json!({ "message": "Employee deleted" }))
    }

    fn averages(&self) -> HttpResponse {
        let state = self.state.borrow();
        let mut sums: Vec<(String, f64, u32)> = Vec::new();
        for employee in &state.employees {
            match sums.iter_mut().find(|(d, _, _)| d == &employee.department) {
                Some(entry) => {
                    entry.1 += employee.salary;
                    entry.2 += 1;
                }
                None => sums.push((employee.department.clone(), employee.salary, 1)),
            }
        }
        let rows: Vec<DepartmentSalary> = sums
            .into_iter()
            .map(|(department, sum, count)| DepartmentSalary {
                department,
                avg_salary: sum / f64::from(count),
            })
            .collect();
        reply(200, json!(rows))
    }

    fn profile(&self, username: &str) -> HttpResponse {
        let state = self.state.borrow();
        match state.users.get(username) {
            Some((email, _)) => reply(200, json!({ "id": username, "username": username, "email": email })),
            None => detail(404, "User not found"),
        }
    }

    fn update_profile(&self, username: &str, body: &str) -> HttpResponse {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return detail(422, "invalid body");
        };
        let mut state = self.state.borrow_mut();
        let Some(entry) = state.users.get_mut(username) else {
            return detail(404, "User not found");
        };
        if let Some(email) = value.get("email").and_then(Value::as_str) {
            entry.0 = email.to_string();
        }
        reply(200, json!({ "id": username, "username": username, "email": entry.0 }))
    }
}

fn paginate(items: Vec<Employee>, query: &HashMap<String, String>) -> Vec<Employee> {
    let skip = query.get("skip").and_then(|v| v.parse().ok()).unwrap_or(0);
    let limit = query.get("limit").and_then(|v| v.parse().ok()).unwrap_or(100);
    items.into_iter().skip(skip).take(limit).collect()
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Ok(self.handle(&request))
    }
}
