//! 信頼検証エンジンポート

use crate::error::TrustError;
use crate::model::{TrustAction, TrustRequest};

/// 外部の信頼検証エンジン（WinVerifyTrust 相当）
///
/// 呼び出しはブロッキングでタイムアウトなし。
/// 戻りコードはそのまま返し、解釈は status_translator に任せる。
pub trait TrustEngine: Send + Sync {
    /// 検証を1回実行してエンジンの生コードを返す。
    /// エンジン自体が使えない場合のみ `EngineUnavailable`。
    fn invoke(&self, action: &TrustAction, request: &mut TrustRequest) -> Result<i32, TrustError>;
}
