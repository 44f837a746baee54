//! # ユースケース層
//!
//! ハンドラから呼ばれるアプリケーションロジック。
//! リポジトリと時計は `Arc<dyn _>` で注入する。

pub mod todo;

pub use todo::{CreateTodoInput, TodoUseCaseImpl};
