//! # Todo
//!
//! サービスが管理する唯一のエンティティ。
//!
//! ## ライフサイクル
//!
//! ```text
//! NewTodo ──(insert, id 採番)──▶ Todo ──(complete)──▶ Todo { completed: true }
//!                                  │
//!                                  └──(delete)──▶ 消滅
//! ```
//!
//! - `id` と `created_at` はサーバー側で決まり、以後変更されない
//! - 変更操作は「完了にする」のみ。未完了に戻す、本文を編集する手段はない
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todo_domain::todo::{NewTodo, Todo, TodoBody, TodoId};
//!
//! let now = chrono::Utc::now();
//! let new_todo = NewTodo::new(TodoBody::new("牛乳を買う")?, false, now);
//! let todo = Todo::from_new(TodoId::new(1), new_todo);
//!
//! let todo = todo.complete();
//! assert!(todo.completed());
//! assert_eq!(todo.created_at(), now);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

use crate::DomainError;

// =========================================================================
// TodoId
// =========================================================================

/// Todo の識別子
///
/// DB の `BIGSERIAL` で採番される正の整数。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, derive_more::Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// パスパラメータなどの文字列から ID を読み取る
    ///
    /// 整数として解釈できない場合は `None`。
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok().map(Self)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// TodoBody（本文）
// =========================================================================

/// Todo 本文（値オブジェクト）
///
/// # 不変条件
///
/// - 空文字列ではない
///
/// 値は入力されたまま保持する（空白のみの本文も受け付け、前後の空白も削らない）。
/// 空チェックはサービス境界でのみ行い、保存済みの行は [`TodoBody::from_stored`] で
/// 検証せずに復元する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoBody(String);

impl TodoBody {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "Todo body cannot be empty".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 保存済みの値から検証なしで復元する
    ///
    /// 空チェックは行わない。保存済みの行は空でも一覧に含める。
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =========================================================================
// NewTodo（未永続化の Todo）
// =========================================================================

/// 採番前の Todo
///
/// リポジトリの `insert` に渡し、採番された [`TodoId`] と合わせて
/// [`Todo::from_new`] で永続化済みエンティティにする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    body:       TodoBody,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl NewTodo {
    /// 作成日時は `TIMESTAMPTZ` と同じマイクロ秒精度に切り捨てる
    pub fn new(body: TodoBody, completed: bool, now: DateTime<Utc>) -> Self {
        Self {
            body,
            completed,
            created_at: now.trunc_subsecs(6),
        }
    }

    pub fn body(&self) -> &TodoBody {
        &self.body
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// =========================================================================
// Todo（エンティティ）
// =========================================================================

/// 永続化済みの Todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:         TodoId,
    body:       TodoBody,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    /// 採番された ID と作成データから Todo を組み立てる
    pub fn from_new(id: TodoId, new_todo: NewTodo) -> Self {
        Self {
            id,
            body: new_todo.body,
            completed: new_todo.completed,
            created_at: new_todo.created_at,
        }
    }

    /// データベースから Todo を復元する
    pub fn from_db(
        id: TodoId,
        body: TodoBody,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            body,
            completed,
            created_at,
        }
    }

    /// 完了状態にした Todo を返す
    ///
    /// 既に完了済みでも結果は同じ（冪等）。
    pub fn complete(self) -> Self {
        Self {
            completed: true,
            ..self
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn body(&self) -> &TodoBody {
        &self.body
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    // ===== TodoId =====

    #[rstest]
    #[case("1", Some(1))]
    #[case("42", Some(42))]
    #[case("-3", Some(-3))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("1.5", None)]
    #[case("99999999999999999999", None)]
    fn test_todo_id_parse(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(TodoId::parse(input).map(|id| id.as_i64()), expected);
    }

    #[test]
    fn test_todo_id_はjsonで数値として表現される() {
        let json = serde_json::to_value(TodoId::new(7)).unwrap();
        assert_eq!(json, serde_json::json!(7));
    }

    #[test]
    fn test_todo_id_display() {
        assert_eq!(TodoId::new(12).to_string(), "12");
    }

    // ===== TodoBody =====

    #[test]
    fn test_todo_body_空文字はエラー() {
        let result = TodoBody::new("");
        assert_eq!(
            result,
            Err(DomainError::Validation("Todo body cannot be empty".to_string()))
        );
    }

    #[rstest]
    #[case("buy milk")]
    #[case("牛乳を買う")]
    #[case("  前後に空白  ")]
    #[case(" ")]
    #[case("\t\n")]
    fn test_todo_body_入力値をそのまま保持する(#[case] input: &str) {
        let body = TodoBody::new(input).unwrap();
        assert_eq!(body.as_str(), input);
    }

    #[test]
    fn test_todo_body_from_stored_は空文字も復元できる() {
        assert_eq!(TodoBody::from_stored(String::new()).as_str(), "");
    }

    // ===== NewTodo =====

    #[test]
    fn test_new_todo_は作成日時をマイクロ秒精度に切り捨てる() {
        let now = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();

        let new_todo = NewTodo::new(TodoBody::new("buy milk").unwrap(), false, now);

        assert_eq!(
            new_todo.created_at(),
            DateTime::from_timestamp(1_700_000_000, 123_456_000).unwrap()
        );
    }

    // ===== Todo =====

    #[test]
    fn test_from_new_は作成データと採番idを引き継ぐ() {
        let new_todo = NewTodo::new(TodoBody::new("buy milk").unwrap(), false, fixed_now());

        let todo = Todo::from_new(TodoId::new(1), new_todo);

        assert_eq!(todo.id(), TodoId::new(1));
        assert_eq!(todo.body().as_str(), "buy milk");
        assert!(!todo.completed());
        assert_eq!(todo.created_at(), fixed_now());
    }

    #[test]
    fn test_complete_は完了フラグだけを立てる() {
        let todo = Todo::from_db(
            TodoId::new(5),
            TodoBody::new("掃除").unwrap(),
            false,
            fixed_now(),
        );

        let completed = todo.clone().complete();

        assert!(completed.completed());
        assert_eq!(completed.id(), todo.id());
        assert_eq!(completed.body(), todo.body());
        assert_eq!(completed.created_at(), todo.created_at());
    }

    #[test]
    fn test_complete_は冪等() {
        let todo = Todo::from_db(
            TodoId::new(5),
            TodoBody::new("掃除").unwrap(),
            true,
            fixed_now(),
        );

        assert_eq!(todo.clone().complete(), todo);
    }
}
