//! # Todo Service ライブラリ
//!
//! ハンドラ・ユースケース・ルーター構築を公開する。
//! バイナリ（`main.rs`）と統合テストの両方から利用する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: 依存の組み立てとルーター定義
//! - `config`: 環境変数からの設定読み込み
//! - `error`: サービスエラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: ユースケース

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
