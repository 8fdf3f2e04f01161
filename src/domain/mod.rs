//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - スプレッドシートやAPIについて何も知らない
//! - 時計（Clock）は注入される
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（LogRow, SessionInputなど）
//! - **repositories**: Repository / Clock trait（インターフェース定義のみ）
//! - **services**: Domain Service（経過時間の計算、行の解決）
//! - **errors**: ドメインエラー

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
