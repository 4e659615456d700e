//! sigtrust の終了コード定義

/// 全ファイルが信頼済み
pub const TRUSTED: u8 = 0;
/// 信頼されない判定を含む（未知コード含む）
pub const NOT_TRUSTED: u8 = 1;
/// 引数・設定の誤り
pub const USAGE: u8 = 2;
/// ファイルなし／パス不正
pub const FILE_ERROR: u8 = 3;
/// 検証エンジン利用不可（判定なし）
pub const ENGINE_UNAVAILABLE: u8 = 4;
