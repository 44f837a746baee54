//! # Todo インフラ層
//!
//! PostgreSQL との接続・通信を担当する。
//!
//! ## 責務
//!
//! - **データベース接続**: 接続プールの作成とスキーマの初期化
//! - **リポジトリ実装**: [`repository::TodoRepository`] の PostgreSQL 実装
//! - **テスト支援**: `test-utils` feature でインメモリ実装を公開
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todo_infra::{db, repository::PostgresTodoRepository};
//!
//! let pool = db::create_pool("postgres://localhost/todo").await?;
//! db::run_migrations(&pool).await?;
//! let repository = PostgresTodoRepository::new(pool);
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
