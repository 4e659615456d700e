//! ステータス翻訳サービス（純粋関数）

use crate::model::status_codes::{
    CRYPT_E_SECURITY_SETTINGS, ERROR_SUCCESS, TRUST_E_EXPLICIT_DISTRUST, TRUST_E_NOSIGNATURE,
    TRUST_E_SUBJECT_NOT_TRUSTED, TRUST_E_SYSTEM_ERROR,
};
use crate::model::{TrustOutcome, TrustResult};

pub const MSG_TRUSTED: &str = "The signature is present and trusted.";
pub const MSG_SYSTEM_ERROR: &str = "A system-level error occurred while verifying trust.";
pub const MSG_NOT_TRUSTED: &str = "The signature is present, but is not trusted.";
pub const MSG_EXPLICIT_DISTRUST: &str = "A signature was present, but is explicitly disallowed.";
pub const MSG_NO_SIGNATURE: &str =
    "The file was not signed, or had a signature that was not valid.";
pub const MSG_SECURITY_SETTINGS: &str = "The hash representing the subject or publisher isn't explicitly trusted by the admin and admin policy disables user trust.";

/// WinVerifyTrust の戻りコードを判定に変換する。
/// 全入力に対して結果を返す（未知コードは `Unknown`）。
pub fn translate(raw_code: i32) -> TrustResult {
    let (outcome, message) = match raw_code {
        ERROR_SUCCESS => (TrustOutcome::Trusted, MSG_TRUSTED.to_string()),
        TRUST_E_SYSTEM_ERROR => (TrustOutcome::SystemError, MSG_SYSTEM_ERROR.to_string()),
        TRUST_E_SUBJECT_NOT_TRUSTED => (TrustOutcome::NotTrusted, MSG_NOT_TRUSTED.to_string()),
        TRUST_E_EXPLICIT_DISTRUST => (
            TrustOutcome::ExplicitlyDistrusted,
            MSG_EXPLICIT_DISTRUST.to_string(),
        ),
        // TRUST_E_SUBJECT_FORM_UNKNOWN / TRUST_E_PROVIDER_UNKNOWN の区別は GetLastError 側
        TRUST_E_NOSIGNATURE => (TrustOutcome::NoValidSignature, MSG_NO_SIGNATURE.to_string()),
        CRYPT_E_SECURITY_SETTINGS => (
            TrustOutcome::DisabledByPolicy,
            MSG_SECURITY_SETTINGS.to_string(),
        ),
        code => (TrustOutcome::Unknown(code), format!("Unknown - {}", code)),
    };
    TrustResult::new(raw_code, outcome, message)
}
