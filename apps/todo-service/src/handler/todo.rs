//! # Todo ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/todos` - Todo 一覧
//! - `POST /api/todos` - Todo 作成
//! - `PATCH /api/todos/{id}` - Todo を完了にする
//! - `DELETE /api/todos/{id}` - Todo 削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todo_domain::todo::{Todo, TodoId};

use crate::{
    error::TodoServiceError,
    usecase::todo::{CreateTodoInput, TodoUseCaseImpl},
};

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
///
/// `completed` は省略・`null` のどちらも `false` として扱う。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub body:      Option<String>,
}

/// Todo DTO
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TodoDto {
    #[serde(rename = "_id")]
    pub id:         i64,
    pub completed:  bool,
    pub body:       String,
    pub created_at: String,
}

impl From<&Todo> for TodoDto {
    fn from(todo: &Todo) -> Self {
        Self {
            id:         todo.id().as_i64(),
            completed:  todo.completed(),
            body:       todo.body().as_str().to_string(),
            created_at: todo.created_at().to_rfc3339(),
        }
    }
}

/// 更新・削除の成功レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
}

// --- ハンドラ ---

/// GET /api/todos
///
/// 全 Todo を id 昇順で返す。
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, TodoServiceError> {
    let todos = state.usecase.list_todos().await?;

    let items: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// POST /api/todos
///
/// ## レスポンス
///
/// - `201 Created`: 作成された Todo
/// - `400 Bad Request`: 本文が空文字・未指定、または JSON が不正
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TodoServiceError> {
    let Json(req) = payload.map_err(|e| TodoServiceError::InvalidInput(e.body_text()))?;

    let input = CreateTodoInput {
        body:      req.body,
        completed: req.completed.unwrap_or(false),
    };

    let todo = state.usecase.create_todo(input).await?;
    tracing::debug!(todo_id = %todo.id(), "Todo を作成しました");

    Ok((StatusCode::CREATED, Json(TodoDto::from(&todo))))
}

/// PATCH /api/todos/{id}
///
/// Todo を完了にする。完了済みでも 200。
#[tracing::instrument(skip_all)]
pub async fn complete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TodoServiceError> {
    state.usecase.complete_todo(parse_id(&id)?).await?;

    Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
}

/// DELETE /api/todos/{id}
#[tracing::instrument(skip_all)]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TodoServiceError> {
    state.usecase.delete_todo(parse_id(&id)?).await?;

    Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
}

/// パスの ID を解釈する
///
/// 整数でない ID はどの行にも一致しないため NotFound とする。
fn parse_id(raw: &str) -> Result<TodoId, TodoServiceError> {
    TodoId::parse(raw).ok_or_else(|| {
        tracing::debug!(raw_id = raw, "整数でない Todo ID");
        TodoServiceError::NotFound("Todo not found".to_string())
    })
}
