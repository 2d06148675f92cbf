//! Frontend Models
//!
//! Data structures matching the remote todo API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Todo identifier as issued by the server.
///
/// The API does not promise a type, so both numeric and string ids are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{}", n),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId::Number(n)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

/// Todo item (matches `GET /todos` entries)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub body: String,
    #[serde(default)]
    pub complete: bool,
}

/// Body of `POST /todos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub body: String,
    pub complete: bool,
}

impl NewTodo {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            complete: false,
        }
    }
}

/// Body of `PATCH /todos/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TodoPatch {
    pub complete: bool,
}

/// Body of `POST /users/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
