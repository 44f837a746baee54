//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_domain::todo::{NewTodo, Todo, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

#[derive(Default)]
struct MockState {
    todos:   Vec<Todo>,
    last_id: i64,
}

/// インメモリの TodoRepository
///
/// ID は PostgreSQL の `BIGSERIAL` と同様に 1 から採番し、削除しても再利用しない。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
    state:   Arc<Mutex<MockState>>,
    failing: bool,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全操作がストレージ障害で失敗するリポジトリ
    pub fn failing() -> Self {
        Self {
            state:   Arc::default(),
            failing: true,
        }
    }

    /// 保存済みの Todo を直接追加する
    pub fn add_todo(&self, todo: Todo) {
        let mut state = self.state.lock().unwrap();
        state.last_id = state.last_id.max(todo.id().as_i64());
        state.todos.push(todo);
    }

    /// 現在保存されている Todo のスナップショット
    pub fn todos(&self) -> Vec<Todo> {
        self.state.lock().unwrap().todos.clone()
    }

    fn check_available(&self) -> Result<(), InfraError> {
        if self.failing {
            return Err(InfraError::unexpected("ストレージに接続できません"));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        self.check_available()?;
        let mut todos = self.todos();
        todos.sort_by_key(Todo::id);
        Ok(todos)
    }

    async fn insert(&self, new_todo: &NewTodo) -> Result<TodoId, InfraError> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let id = TodoId::new(state.last_id);
        state.todos.push(Todo::from_new(id, new_todo.clone()));
        Ok(id)
    }

    async fn mark_completed(&self, id: TodoId) -> Result<bool, InfraError> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        let Some(index) = state.todos.iter().position(|t| t.id() == id) else {
            return Ok(false);
        };
        let todo = state.todos.remove(index).complete();
        state.todos.insert(index, todo);
        Ok(true)
    }

    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        let before = state.todos.len();
        state.todos.retain(|t| t.id() != id);
        Ok(state.todos.len() < before)
    }
}
