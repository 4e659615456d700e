use std::fmt;

use serde::Serialize;

/// 署名の信頼判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustOutcome {
    Trusted,
    SystemError,
    NotTrusted,
    ExplicitlyDistrusted,
    NoValidSignature,
    DisabledByPolicy,
    /// 表にないコード（判定の一種でありエラーではない）
    Unknown(i32),
}

impl TrustOutcome {
    pub fn is_trusted(&self) -> bool {
        matches!(self, Self::Trusted)
    }

    /// 出力用の固定ラベル
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trusted => "trusted",
            Self::SystemError => "system_error",
            Self::NotTrusted => "not_trusted",
            Self::ExplicitlyDistrusted => "explicitly_distrusted",
            Self::NoValidSignature => "no_valid_signature",
            Self::DisabledByPolicy => "disabled_by_policy",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// 1回の検証結果。status_translator だけが生成する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TrustResult {
    raw_code: i32,
    outcome: TrustOutcome,
    message: String,
}

impl TrustResult {
    pub(crate) fn new(raw_code: i32, outcome: TrustOutcome, message: String) -> Self {
        Self {
            raw_code,
            outcome,
            message,
        }
    }

    pub fn raw_code(&self) -> i32 {
        self.raw_code
    }

    pub fn outcome(&self) -> TrustOutcome {
        self.outcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HRESULT 表記（例: 0x800B0100）
    pub fn hex_code(&self) -> String {
        format!("0x{:08X}", self.raw_code as u32)
    }
}

impl fmt::Display for TrustResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.raw_code, self.message)
    }
}
