//! # Todo ドメイン層
//!
//! Todo サービスのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//!    ↘        ↘
//!      shared
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`todo`] - Todo エンティティと値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todo_domain::todo::{NewTodo, TodoBody};
//!
//! let body = TodoBody::new("牛乳を買う")?;
//! let new_todo = NewTodo::new(body, false, chrono::Utc::now());
//! assert!(!new_todo.completed());
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod todo;

pub use error::DomainError;
