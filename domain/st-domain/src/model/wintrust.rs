//! wintrust.h の構造体をC互換レイアウトで定義
//!
//! フィールド順と幅はプラットフォームの定義どおり。並べ替え・追加は禁止。
//! 使わないポインタは必ず null で埋める（ゴミ値は境界での未定義動作）。

use std::ffi::c_void;
use std::fmt;
use std::ptr;

/// UI を表示しない
pub const WTD_UI_NONE: u32 = 2;
/// 失効確認なし
pub const WTD_REVOKE_NONE: u32 = 0;
/// サブジェクト: ファイル
pub const WTD_CHOICE_FILE: u32 = 1;
/// 検証を実行
pub const WTD_STATEACTION_VERIFY: u32 = 0x0000_0001;
/// 検証で確保された状態を解放
pub const WTD_STATEACTION_CLOSE: u32 = 0x0000_0002;

/// guiddef.h の GUID
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// WINTRUST_FILE_INFO
#[repr(C)]
#[derive(Debug)]
pub struct WintrustFileInfo {
    pub cb_struct: u32,
    /// NUL終端 UTF-16 の絶対パス
    pub pcwsz_file_path: *const u16,
    pub h_file: *mut c_void,
    pub pg_known_subject: *mut Guid,
}

impl WintrustFileInfo {
    pub const SIZE: u32 = std::mem::size_of::<Self>() as u32;

    /// パス以外は null。cbStruct は確定済み。
    pub fn for_path(wide_path: *const u16) -> Self {
        Self {
            cb_struct: Self::SIZE,
            pcwsz_file_path: wide_path,
            h_file: ptr::null_mut(),
            pg_known_subject: ptr::null_mut(),
        }
    }
}

/// WINTRUST_DATA の無名共用体。
/// ファイル以外（catalog/blob/sgnr/cert/detached sig）は扱わないため1メンバーのみ。
/// どのメンバーもポインタ1個なので、サイズ・アラインは元の共用体と同じ。
#[repr(C)]
#[derive(Clone, Copy)]
pub union WintrustDataSubject {
    pub p_file: *mut WintrustFileInfo,
}

/// WINTRUST_DATA
#[repr(C)]
pub struct WintrustData {
    pub cb_struct: u32,
    pub p_policy_callback_data: *mut c_void,
    pub p_sip_client_data: *mut c_void,
    pub dw_ui_choice: u32,
    pub fdw_revocation_checks: u32,
    pub dw_union_choice: u32,
    pub subject: WintrustDataSubject,
    pub dw_state_action: u32,
    /// エンジンが書き込む状態ハンドル
    pub h_wvt_state_data: *mut c_void,
    pub pwsz_url_reference: *mut u16,
    pub dw_prov_flags: u32,
    pub dw_ui_context: u32,
    pub p_signature_settings: *mut c_void,
}

impl WintrustData {
    pub const SIZE: u32 = std::mem::size_of::<Self>() as u32;

    /// 共用体の file メンバー（dwUnionChoice が FILE のときのみ有効）
    pub fn file_ptr(&self) -> *mut WintrustFileInfo {
        // 全メンバーが同じポインタ型なので読み出しは常に定義済み
        unsafe { self.subject.p_file }
    }
}

impl fmt::Debug for WintrustData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WintrustData")
            .field("cb_struct", &self.cb_struct)
            .field("p_policy_callback_data", &self.p_policy_callback_data)
            .field("p_sip_client_data", &self.p_sip_client_data)
            .field("dw_ui_choice", &self.dw_ui_choice)
            .field("fdw_revocation_checks", &self.fdw_revocation_checks)
            .field("dw_union_choice", &self.dw_union_choice)
            .field("p_file", &self.file_ptr())
            .field("dw_state_action", &self.dw_state_action)
            .field("h_wvt_state_data", &self.h_wvt_state_data)
            .field("pwsz_url_reference", &self.pwsz_url_reference)
            .field("dw_prov_flags", &self.dw_prov_flags)
            .field("dw_ui_context", &self.dw_ui_context)
            .field("p_signature_settings", &self.p_signature_settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_layout_64bit() {
        assert_eq!(size_of::<WintrustFileInfo>(), 32);
        assert_eq!(offset_of!(WintrustFileInfo, pcwsz_file_path), 8);
        assert_eq!(offset_of!(WintrustFileInfo, h_file), 16);
        assert_eq!(offset_of!(WintrustFileInfo, pg_known_subject), 24);

        assert_eq!(size_of::<WintrustData>(), 88);
        assert_eq!(offset_of!(WintrustData, p_policy_callback_data), 8);
        assert_eq!(offset_of!(WintrustData, p_sip_client_data), 16);
        assert_eq!(offset_of!(WintrustData, dw_ui_choice), 24);
        assert_eq!(offset_of!(WintrustData, fdw_revocation_checks), 28);
        assert_eq!(offset_of!(WintrustData, dw_union_choice), 32);
        assert_eq!(offset_of!(WintrustData, subject), 40);
        assert_eq!(offset_of!(WintrustData, dw_state_action), 48);
        assert_eq!(offset_of!(WintrustData, h_wvt_state_data), 56);
        assert_eq!(offset_of!(WintrustData, pwsz_url_reference), 64);
        assert_eq!(offset_of!(WintrustData, dw_prov_flags), 72);
        assert_eq!(offset_of!(WintrustData, dw_ui_context), 76);
        assert_eq!(offset_of!(WintrustData, p_signature_settings), 80);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_layout_32bit() {
        assert_eq!(size_of::<WintrustFileInfo>(), 16);
        assert_eq!(size_of::<WintrustData>(), 52);
        assert_eq!(offset_of!(WintrustData, subject), 24);
        assert_eq!(offset_of!(WintrustData, p_signature_settings), 48);
    }

    #[test]
    fn test_size_constants_match_layout() {
        assert_eq!(WintrustFileInfo::SIZE as usize, size_of::<WintrustFileInfo>());
        assert_eq!(WintrustData::SIZE as usize, size_of::<WintrustData>());
        assert_eq!(
            size_of::<WintrustDataSubject>(),
            size_of::<*mut WintrustFileInfo>()
        );
    }

    #[test]
    fn test_file_info_for_path_nulls_the_rest() {
        let wide = [0x43u16, 0];
        let info = WintrustFileInfo::for_path(wide.as_ptr());
        assert_eq!(info.cb_struct, WintrustFileInfo::SIZE);
        assert_eq!(info.pcwsz_file_path, wide.as_ptr());
        assert!(info.h_file.is_null());
        assert!(info.pg_known_subject.is_null());
    }

    #[cfg(windows)]
    #[test]
    fn test_matches_platform_layout() {
        use windows::Win32::Security::WinTrust::{WINTRUST_DATA, WINTRUST_FILE_INFO};
        assert_eq!(size_of::<WINTRUST_DATA>(), size_of::<WintrustData>());
        assert_eq!(size_of::<WINTRUST_FILE_INFO>(), size_of::<WintrustFileInfo>());
        assert_eq!(
            offset_of!(WINTRUST_DATA, Anonymous),
            offset_of!(WintrustData, subject)
        );
        assert_eq!(
            offset_of!(WINTRUST_DATA, pSignatureSettings),
            offset_of!(WintrustData, p_signature_settings)
        );
        assert_eq!(
            offset_of!(WINTRUST_FILE_INFO, pgKnownSubject),
            offset_of!(WintrustFileInfo, pg_known_subject)
        );
    }
}
