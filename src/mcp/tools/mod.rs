pub mod todos;

pub use todos::register_todo_tools;
