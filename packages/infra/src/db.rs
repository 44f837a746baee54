//! # PostgreSQL データベース接続管理
//!
//! 接続プールの作成、スキーマ初期化、疎通確認を行う。
//!
//! ## 共有ハンドル
//!
//! `PgPool` は内部で `Arc` を持つため `clone()` は安価で、複数タスクから
//! 同時に使っても安全。起動時に一度だけ作成し、リポジトリへ注入する。

use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::error::InfraError;

/// PostgreSQL 接続プールを作成する
///
/// # 設定値
///
/// - `max_connections(10)`: 最大接続数
/// - `acquire_timeout(5秒)`: 接続取得のタイムアウト。超過時はエラー
///
/// # 例
///
/// ```rust,ignore
/// use todo_infra::db;
///
/// let pool = db::create_pool("postgres://localhost/todo").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// スキーマを初期化する
///
/// `migrations/` 配下の SQL をバイナリに埋め込み、未適用のものだけを順に適用する。
/// `todos` テーブルは `CREATE TABLE IF NOT EXISTS` のため、既存 DB に対しても安全。
pub async fn run_migrations(pool: &PgPool) -> Result<(), InfraError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// `SELECT 1` で DB への疎通を確認する
#[tracing::instrument(skip_all, level = "debug")]
pub async fn ping(pool: &PgPool) -> Result<(), InfraError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
