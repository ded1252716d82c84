//! UI Components
//!
//! Leptos components for the todo card.

mod list_header;
mod new_todo_form;
mod todo_list_view;
mod todo_row;
mod footer;

pub use list_header::ListHeader;
pub use new_todo_form::NewTodoForm;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
pub use footer::{current_year, Footer};
