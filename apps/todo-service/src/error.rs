//! # Todo Service エラー定義
//!
//! サービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス |
//! |--------|----------------|
//! | `InvalidInput` | 400 Bad Request |
//! | `NotFound` | 404 Not Found |
//! | `Storage` | 500 Internal Server Error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_domain::DomainError;
use todo_infra::InfraError;
use todo_shared::ErrorResponse;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// 入力不正（本文が空、JSON が壊れているなど）
    #[error("入力が不正です: {0}")]
    InvalidInput(String),

    /// 対象の Todo が存在しない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// ストレージ障害
    ///
    /// リトライせずそのまま 500 として返す。
    #[error("ストレージエラー: {0}")]
    Storage(#[from] InfraError),
}

impl From<DomainError> for TodoServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::InvalidInput(msg),
        }
    }
}

impl IntoResponse for TodoServiceError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            TodoServiceError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            TodoServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            TodoServiceError::Storage(e) => {
                // セキュリティ: 内部エラー詳細はログのみ
                tracing::error!(error = %e, span_trace = %e.span_trace(), "ストレージエラー");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal_error(),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(TodoServiceError::InvalidInput("x".to_string()), StatusCode::BAD_REQUEST)]
    #[case(TodoServiceError::NotFound("x".to_string()), StatusCode::NOT_FOUND)]
    #[case(
        TodoServiceError::Storage(InfraError::unexpected("x")),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn test_エラー種別ごとのステータスコード(
        #[case] error: TodoServiceError,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(error.into_response().status(), expected);
    }

    #[test]
    fn test_domain_errorのvalidationはinvalid_inputになる() {
        let err: TodoServiceError = DomainError::Validation("空です".to_string()).into();
        assert!(matches!(err, TodoServiceError::InvalidInput(msg) if msg == "空です"));
    }

    #[tokio::test]
    async fn test_ストレージエラーの詳細はレスポンスに含めない() {
        let response =
            TodoServiceError::Storage(InfraError::unexpected("password=secret")).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body, ErrorResponse::internal_error());
    }
}
