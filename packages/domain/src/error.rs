//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//! API 層で `InvalidInput`（400 Bad Request）に変換される。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値がビジネスルールに違反している場合に使用する
    /// （例: Todo 本文が空）。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
