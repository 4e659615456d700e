//! ドメインモデル
//!
//! 判定（値オブジェクト）と、境界を越える要求構造体を定義

mod action;          // 信頼アクションGUID
mod outcome;         // 判定と検証結果
mod request;         // 所有権付きの検証要求
pub mod status_codes; // WinVerifyTrust の戻りコード
pub mod wintrust;    // WINTRUST_* のC互換レイアウト

pub use action::*;
pub use outcome::*;
pub use request::*;
