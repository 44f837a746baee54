//! # TodoRepository
//!
//! `todos` テーブルへの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **1 操作 1 ステートメント**: どのメソッドも単一の SQL のみを発行する。
//!   トランザクションは張らない
//! - **対象行の有無は戻り値で返す**: `mark_completed` / `delete` は
//!   該当行がなかった場合に `false` を返し、404 への変換はユースケース層が行う
//! - **一覧の順序**: `id` 昇順（= 作成順）で固定する

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use todo_domain::todo::{NewTodo, Todo, TodoBody, TodoId};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全件を `id` 昇順で取得する
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// Todo を挿入し、採番された ID を返す
    async fn insert(&self, new_todo: &NewTodo) -> Result<TodoId, InfraError>;

    /// 完了フラグを立てる
    ///
    /// 該当行が存在すれば `true`。既に完了済みの行も「該当あり」として扱う。
    async fn mark_completed(&self, id: TodoId) -> Result<bool, InfraError>;

    /// Todo を削除する
    ///
    /// 該当行が存在すれば `true`。
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError>;
}

/// `todos` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id:         i64,
    completed:  bool,
    body:       String,
    created_at: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    // 本文の空チェックはサービス境界のみ。保存済みの行は再検証しない
    fn from(row: TodoRow) -> Self {
        Todo::from_db(
            TodoId::new(row.id),
            TodoBody::from_stored(row.body),
            row.completed,
            row.created_at,
        )
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, completed, body, created_at
            FROM todos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, new_todo: &NewTodo) -> Result<TodoId, InfraError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO todos (completed, body, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(new_todo.completed())
        .bind(new_todo.body().as_str())
        .bind(new_todo.created_at())
        .fetch_one(&self.pool)
        .await?;

        Ok(TodoId::new(id))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn mark_completed(&self, id: TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE todos
            SET completed = TRUE
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
