//! WinVerifyTrust の戻りコード（HRESULT を LONG として受け取る）
//! 参照: certificate-and-trust-return-values

/// 検証成功
pub const ERROR_SUCCESS: i32 = 0;
/// 検証中のシステムレベルエラー
pub const TRUST_E_SYSTEM_ERROR: i32 = 0x8009_6001_u32 as i32;
/// 署名はあるが信頼されていない
pub const TRUST_E_SUBJECT_NOT_TRUSTED: i32 = 0x800B_0004_u32 as i32;
/// 署名はあるが明示的に拒否されている
pub const TRUST_E_EXPLICIT_DISTRUST: i32 = 0x800B_0111_u32 as i32;
/// 署名なし、または署名が無効
pub const TRUST_E_NOSIGNATURE: i32 = 0x800B_0100_u32 as i32;
/// 管理ポリシーによりユーザー信頼が無効
pub const CRYPT_E_SECURITY_SETTINGS: i32 = 0x8009_2026_u32 as i32;
