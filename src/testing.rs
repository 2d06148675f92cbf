//! Test Doubles
//!
//! In-memory todo API and a mount that records what it was asked to show.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};

use crate::api::{ApiRequest, ApiResponse, Method, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::{Credentials, NewTodo, TodoId, TodoItem, TodoPatch};
use crate::render::{Mount, Page};

pub const BASE_URL: &str = "http://api.test";

/// Fake todo server.
///
/// Users: `alice/secret` gets `tok-alice`, `bob/hunter2` gets `tok-bob`.
/// `/todos` requires a bearer token it issued or was told to accept.
pub struct FakeApi {
    users: HashMap<&'static str, (&'static str, &'static str)>,
    tokens: RefCell<HashSet<String>>,
    todos: RefCell<Vec<TodoItem>>,
    requests: RefCell<Vec<ApiRequest>>,
    held: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    failures: RefCell<HashMap<String, ApiError>>,
    next_id: Cell<u64>,
}

impl FakeApi {
    pub fn new() -> Rc<Self> {
        let mut users = HashMap::new();
        users.insert("alice", ("secret", "tok-alice"));
        users.insert("bob", ("hunter2", "tok-bob"));
        Rc::new(Self {
            users,
            tokens: RefCell::new(HashSet::new()),
            todos: RefCell::new(Vec::new()),
            requests: RefCell::new(Vec::new()),
            held: RefCell::new(HashMap::new()),
            failures: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        })
    }

    pub fn accept_token(&self, token: &str) {
        self.tokens.borrow_mut().insert(token.to_string());
    }

    pub fn seed(&self, todos: Vec<TodoItem>) {
        let max = todos
            .iter()
            .filter_map(|t| match t.id {
                TodoId::Number(n) => Some(n),
                TodoId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        self.next_id.set(max + 1);
        *self.todos.borrow_mut() = todos;
    }

    /// Keep the next `"METHOD /path"` request pending until `gate` fires
    pub fn hold(&self, route: &str, gate: oneshot::Receiver<()>) {
        self.held.borrow_mut().insert(route.to_string(), gate);
    }

    /// Make the next `"METHOD /path"` request fail without a response
    pub fn fail_with(&self, route: &str, error: ApiError) {
        self.failures.borrow_mut().insert(route.to_string(), error);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    fn route(request: &ApiRequest) -> (Method, String) {
        let path = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
        (request.method, path.to_string())
    }

    fn authorized(&self, request: &ApiRequest) -> bool {
        request
            .header("Authorization")
            .and_then(|value| value.strip_prefix("Bearer "))
            .map_or(false, |token| self.tokens.borrow().contains(token))
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let (method, path) = Self::route(request);

        if (method, path.as_str()) == (Method::Post, "/users/login") {
            return self.login(request.body.clone());
        }
        if !self.authorized(request) {
            return reply(401, json!({"message": "unauthorized"}));
        }

        let id = path
            .strip_prefix("/todos/")
            .map(|raw| match raw.parse::<u64>() {
                Ok(n) => TodoId::Number(n),
                Err(_) => TodoId::Text(raw.to_string()),
            });

        match (method, id) {
            (Method::Get, None) if path == "/todos" => {
                reply(200, serde_json::to_value(&*self.todos.borrow()).unwrap())
            }
            (Method::Post, None) if path == "/todos" => {
                let new: NewTodo = serde_json::from_value(request.body.clone().unwrap()).unwrap();
                let item = TodoItem {
                    id: TodoId::Number(self.next_id.get()),
                    body: new.body,
                    complete: new.complete,
                };
                self.next_id.set(self.next_id.get() + 1);
                self.todos.borrow_mut().push(item.clone());
                reply(201, serde_json::to_value(item).unwrap())
            }
            (Method::Patch, Some(id)) => {
                let patch: TodoPatch = serde_json::from_value(request.body.clone().unwrap()).unwrap();
                let mut todos = self.todos.borrow_mut();
                let updated = match todos.iter_mut().find(|t| t.id == id) {
                    Some(todo) => {
                        todo.complete = patch.complete;
                        reply(200, serde_json::to_value(todo.clone()).unwrap())
                    }
                    None => reply(404, Value::Null),
                };
                updated
            }
            (Method::Delete, Some(id)) => {
                let mut todos = self.todos.borrow_mut();
                let before = todos.len();
                todos.retain(|t| t.id != id);
                if todos.len() == before {
                    reply(404, Value::Null)
                } else {
                    reply(204, Value::Null)
                }
            }
            _ => reply(404, Value::Null),
        }
    }

    fn login(&self, body: Option<Value>) -> ApiResponse {
        let Some(credentials) = body.and_then(|b| serde_json::from_value::<Credentials>(b).ok()) else {
            return reply(400, Value::Null);
        };
        match self.users.get(credentials.username.as_str()) {
            Some((password, token)) if *password == credentials.password => {
                self.accept_token(token);
                reply(200, json!({ "token": token }))
            }
            _ => reply(401, json!({"message": "invalid credentials"})),
        }
    }
}

fn reply(status: u16, data: Value) -> ApiResponse {
    ApiResponse { status, data }
}

#[async_trait(?Send)]
impl Transport for FakeApi {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        let (method, path) = Self::route(&request);
        let key = format!("{} {}", method, path);

        let gate = self.held.borrow_mut().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        let failure = self.failures.borrow_mut().remove(&key);
        if let Some(error) = failure {
            return Err(error);
        }
        Ok(self.handle(&request))
    }
}

/// Mount that keeps every page it was given
#[derive(Default)]
pub struct RecordingMount {
    history: RefCell<Vec<Page>>,
}

impl RecordingMount {
    pub fn current(&self) -> Option<Page> {
        self.history.borrow().last().cloned()
    }

    pub fn history(&self) -> Vec<Page> {
        self.history.borrow().clone()
    }
}

impl Mount for RecordingMount {
    fn render(&self, page: Page) {
        self.history.borrow_mut().push(page);
    }
}
