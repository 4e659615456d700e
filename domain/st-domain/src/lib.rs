//! SigTrust ドメイン層
//!
//! 署名の信頼判定の中核。WinVerifyTrust に渡す要求構造体の定義と組み立て、
//! 戻りコードから判定への変換を持つ。ヘキサゴナルアーキテクチャの最内層。

pub mod error;   // ドメインエラー定義
pub mod model;   // 判定・要求構造体・ステータスコード
pub mod path;    // エンジン向けパス変換
pub mod port;    // ポート（driven）
pub mod service; // ドメインサービス（翻訳／要求組み立て）

pub use error::TrustError; // エラー型を再エクスポート
