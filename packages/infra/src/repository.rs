//! # リポジトリ実装
//!
//! - **依存性逆転**: ユースケースはトレイトに依存し、PostgreSQL 実装を知らない
//! - **テスタビリティ**: トレイト経由でインメモリ実装に差し替え可能

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoRepository};
