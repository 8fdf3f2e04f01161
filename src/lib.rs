//! # Devlog
//!
//! 作業時間のログを Google Sheets に1行ずつ追記するツール。
//! 直前の行のタイムスタンプから経過時間（分）を推定する。
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: ログ行のエンティティと、行を決定する純粋なロジック（外部依存なし）
//! - **Application層**: 1回の追記のビジネスフロー（ユースケース）
//! - **Adapter層**: 外部システムとの統合（Google Sheets, 設定ファイル, システム時計）
//! - **Driver層**: CLI、依存性注入
//!
//! 同時に実行された呼び出しは調停されない。同じ最後の行を読んだ2つのプロセスが
//! 両方とも追記しうる（1人が1回ずつ呼び出す前提）。

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
