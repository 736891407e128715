use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub todo_id: i64,
    pub content: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update: absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub content: Option<String>,
    pub completed: Option<bool>,
}
