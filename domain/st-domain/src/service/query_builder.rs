//! 検証要求の組み立て
//!
//! 固定ポリシー: UIなし、失効確認なし、ファイルサブジェクト、VERIFY アクション。
//! 成功すれば完全な要求、失敗すれば何も返さない（途中状態は外に出ない）。

use std::path::Path;

use crate::error::TrustError;
use crate::model::TrustRequest;
use crate::path::{absolute_path, encode_wide_nul};

/// ファイルの埋め込み署名を検証する要求を組み立てる
pub fn build(file_path: &Path) -> Result<TrustRequest, TrustError> {
    let absolute = absolute_path(file_path)?;
    let wide = encode_wide_nul(&absolute)?;
    Ok(TrustRequest::for_file(absolute, wide))
}
