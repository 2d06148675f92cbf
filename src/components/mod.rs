//! UI Components
//!
//! Leptos views for the login page, the list page and its rows.

mod login_page;
mod new_todo_form;
mod todo_list_page;
mod todo_row;

pub use login_page::LoginPage;
pub use new_todo_form::NewTodoForm;
pub use todo_list_page::TodoListPage;
pub use todo_row::TodoRow;
