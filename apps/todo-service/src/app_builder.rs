//! # Todo Service アプリケーション構築
//!
//! State の組み立てとルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::TodoServiceConfig,
    handler::{
        ReadinessState,
        TodoState,
        complete_todo,
        create_todo,
        delete_todo,
        health_check,
        list_todos,
        readiness_check,
    },
};

/// ルーターを構築する
///
/// 本番環境ではビルド済みクライアントを `/` 配下のフォールバックとして配信する。
pub fn build_app(
    config: &TodoServiceConfig,
    todo_state: Arc<TodoState>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    // Request ID + TraceLayer により、すべての HTTP リクエストに request_id が付与される
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", patch(complete_todo).delete(delete_todo))
        .with_state(todo_state);

    let router = if config.is_production() {
        tracing::info!(static_dir = %config.static_dir.display(), "静的ファイル配信を有効化します");
        router.fallback_service(ServeDir::new(&config.static_dir))
    } else {
        router
    };

    router
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
