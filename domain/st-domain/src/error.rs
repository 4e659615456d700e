//! ドメインエラー型

use std::path::PathBuf;
use thiserror::Error;

/// 信頼検証の失敗
///
/// エンジンが返したステータスコードはここに含めない（未知コードも判定として扱う）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrustError {
    /// 対象ファイルが存在しない、または読み取れない（エンジン呼び出し前に検出）
    #[error("Can't find {}", path.display())]
    FileNotFound { path: PathBuf },

    /// 空のパス、またはエンジンが要求する形式に変換できないパス
    #[error("Invalid path {}: {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// 検証エンジンをロード／呼び出しできない（判定なし）
    #[error("Trust engine unavailable: {0}")]
    EngineUnavailable(String),
}

impl TrustError {
    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
