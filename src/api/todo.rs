//! Todo Endpoints
//!
//! Typed wrappers over the `/todos` resource.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{NewTodo, TodoId, TodoItem, TodoPatch};

pub const TODOS_PATH: &str = "/todos";

/// Path of a single todo; string ids are percent-encoded
pub fn todo_path(id: &TodoId) -> String {
    match id {
        TodoId::Number(n) => format!("{}/{}", TODOS_PATH, n),
        TodoId::Text(s) => format!("{}/{}", TODOS_PATH, utf8_percent_encode(s, NON_ALPHANUMERIC)),
    }
}

impl ApiClient {
    /// Todos in server order
    pub async fn list_todos(&self) -> ApiResult<Vec<TodoItem>> {
        self.get(TODOS_PATH).await?.json()
    }

    pub async fn create_todo(&self, todo: &NewTodo) -> ApiResult<()> {
        self.post(TODOS_PATH, todo).await?;
        Ok(())
    }

    pub async fn set_todo_complete(&self, id: &TodoId, complete: bool) -> ApiResult<()> {
        self.patch(&todo_path(id), &TodoPatch { complete }).await?;
        Ok(())
    }

    pub async fn delete_todo(&self, id: &TodoId) -> ApiResult<()> {
        self.delete(&todo_path(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_path() {
        assert_eq!(todo_path(&TodoId::Number(1)), "/todos/1");
        assert_eq!(todo_path(&TodoId::from("a b/c")), "/todos/a%20b%2Fc");
    }
}
