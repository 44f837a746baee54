//! Todo 管理ユースケース

use std::sync::Arc;

use todo_domain::{
    clock::Clock,
    todo::{NewTodo, Todo, TodoBody, TodoId},
};
use todo_infra::repository::TodoRepository;

use crate::error::TodoServiceError;

/// Todo 作成の入力
///
/// - `body`: 未指定は `None`（空文字と同様にバリデーションエラー）
pub struct CreateTodoInput {
    pub body:      Option<String>,
    pub completed: bool,
}

/// Todo 管理ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
    clock: Arc<dyn Clock>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            todo_repository,
            clock,
        }
    }

    /// Todo 一覧を取得する（id 昇順）
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoServiceError> {
        let todos = self.todo_repository.find_all().await?;
        Ok(todos)
    }

    /// Todo を作成する
    ///
    /// 1. TodoBody バリデーション（空文字・未指定は InvalidInput）
    /// 2. 現在時刻を作成日時として付与（保存時と同じマイクロ秒精度）
    /// 3. 挿入して採番された ID を取得
    pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, TodoServiceError> {
        let body = TodoBody::new(input.body.unwrap_or_default())?;
        let new_todo = NewTodo::new(body, input.completed, self.clock.now());

        let id = self.todo_repository.insert(&new_todo).await?;

        Ok(Todo::from_new(id, new_todo))
    }

    /// Todo を完了にする
    ///
    /// 完了済みでも成功する（冪等）。該当行がなければ NotFound。
    pub async fn complete_todo(&self, id: TodoId) -> Result<(), TodoServiceError> {
        if !self.todo_repository.mark_completed(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }

    /// Todo を削除する
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoServiceError> {
        if !self.todo_repository.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: TodoId) -> TodoServiceError {
    tracing::debug!(todo_id = %id, "Todo が見つかりません");
    TodoServiceError::NotFound("Todo not found".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use todo_domain::clock::FixedClock;
    use todo_infra::mock::MockTodoRepository;

    use super::*;

    fn test_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn sut_with(repo: MockTodoRepository) -> TodoUseCaseImpl {
        TodoUseCaseImpl::new(Arc::new(repo), Arc::new(FixedClock::new(test_now())))
    }

    fn input(body: &str) -> CreateTodoInput {
        CreateTodoInput {
            body:      Some(body.to_string()),
            completed: false,
        }
    }

    #[tokio::test]
    async fn test_create_todoで採番済みのtodoが返る() {
        let repo = MockTodoRepository::new();
        let sut = sut_with(repo.clone());

        let todo = sut.create_todo(input("buy milk")).await.unwrap();

        assert_eq!(todo.id(), TodoId::new(1));
        assert_eq!(todo.body().as_str(), "buy milk");
        assert!(!todo.completed());
        assert_eq!(todo.created_at(), test_now());
        assert_eq!(repo.todos().len(), 1);
    }

    #[tokio::test]
    async fn test_create_todoでcompleted指定が反映される() {
        let sut = sut_with(MockTodoRepository::new());

        let todo = sut
            .create_todo(CreateTodoInput {
                body:      Some("done already".to_string()),
                completed: true,
            })
            .await
            .unwrap();

        assert!(todo.completed());
    }

    #[rstest]
    #[case::空文字(Some(""))]
    #[case::未指定(None)]
    #[tokio::test]
    async fn test_本文が空ならinvalid_inputで保存されない(#[case] body: Option<&str>) {
        let repo = MockTodoRepository::new();
        let sut = sut_with(repo.clone());

        let result = sut
            .create_todo(CreateTodoInput {
                body:      body.map(str::to_string),
                completed: false,
            })
            .await;

        assert!(matches!(result, Err(TodoServiceError::InvalidInput(_))));
        assert!(repo.todos().is_empty());
    }

    #[tokio::test]
    async fn test_空白のみの本文はそのまま保存される() {
        let repo = MockTodoRepository::new();
        let sut = sut_with(repo.clone());

        let todo = sut.create_todo(input("   ")).await.unwrap();

        assert_eq!(todo.body().as_str(), "   ");
        assert_eq!(repo.todos().len(), 1);
    }

    #[tokio::test]
    async fn test_作成時の日時と一覧の日時が一致する() {
        // 保存先の TIMESTAMPTZ はマイクロ秒精度
        let now = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let sut = TodoUseCaseImpl::new(
            Arc::new(MockTodoRepository::new()),
            Arc::new(FixedClock::new(now)),
        );

        let created = sut.create_todo(input("buy milk")).await.unwrap();
        let listed = sut.list_todos().await.unwrap();

        assert_eq!(
            created.created_at(),
            DateTime::from_timestamp(1_700_000_000, 123_456_000).unwrap()
        );
        assert_eq!(listed[0].created_at(), created.created_at());
    }

    #[tokio::test]
    async fn test_作成したtodoが一覧に1件だけ現れる() {
        let sut = sut_with(MockTodoRepository::new());
        sut.create_todo(input("X")).await.unwrap();

        let todos = sut.list_todos().await.unwrap();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].body().as_str(), "X");
    }

    #[tokio::test]
    async fn test_complete_todoは冪等() {
        let sut = sut_with(MockTodoRepository::new());
        let todo = sut.create_todo(input("掃除")).await.unwrap();

        sut.complete_todo(todo.id()).await.unwrap();
        sut.complete_todo(todo.id()).await.unwrap();

        let todos = sut.list_todos().await.unwrap();
        assert!(todos[0].completed());
    }

    #[tokio::test]
    async fn test_存在しないidのcompleteはnot_found() {
        let sut = sut_with(MockTodoRepository::new());

        let result = sut.complete_todo(TodoId::new(42)).await;

        assert!(matches!(result, Err(TodoServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_削除後は一覧から消え2回目はnot_found() {
        let sut = sut_with(MockTodoRepository::new());
        let todo = sut.create_todo(input("消す")).await.unwrap();

        sut.delete_todo(todo.id()).await.unwrap();

        assert!(sut.list_todos().await.unwrap().is_empty());
        let second = sut.delete_todo(todo.id()).await;
        assert!(matches!(second, Err(TodoServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_ストレージ障害はstorageエラーになる() {
        let sut = sut_with(MockTodoRepository::failing());

        let result = sut.list_todos().await;

        assert!(matches!(result, Err(TodoServiceError::Storage(_))));
    }
}
