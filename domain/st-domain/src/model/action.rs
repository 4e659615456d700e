use std::fmt;

use super::wintrust::Guid;

/// エンジンに適用させる信頼ポリシーの識別子（16バイトGUID）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrustAction(Guid);

/// WINTRUST_ACTION_GENERIC_VERIFY_V2（Authenticode ポリシープロバイダー）
/// {00AAC56B-CD44-11D0-8CC2-00C04FC295EE}
pub static GENERIC_VERIFY_V2: TrustAction = TrustAction(Guid {
    data1: 0x00AA_C56B,
    data2: 0xCD44,
    data3: 0x11D0,
    data4: [0x8C, 0xC2, 0x00, 0xC0, 0x4F, 0xC2, 0x95, 0xEE],
});

impl TrustAction {
    pub const fn guid(&self) -> &Guid {
        &self.0
    }
}

impl fmt::Display for TrustAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.0;
        let d4 = g.data4;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            g.data1, g.data2, g.data3, d4[0], d4[1], d4[2], d4[3], d4[4], d4[5], d4[6], d4[7]
        )
    }
}
