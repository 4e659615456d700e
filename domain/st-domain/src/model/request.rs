use std::ffi::c_void;
use std::path::{Path, PathBuf};
use std::ptr;

use super::wintrust::{
    WTD_CHOICE_FILE, WTD_REVOKE_NONE, WTD_STATEACTION_CLOSE, WTD_STATEACTION_VERIFY, WTD_UI_NONE,
    WintrustData, WintrustDataSubject, WintrustFileInfo,
};

/// 検証対象（共用体の有効メンバーと判別子を一体で持つ）
#[derive(Debug)]
pub enum TrustSubject {
    File(Box<WintrustFileInfo>),
}

impl TrustSubject {
    /// dwUnionChoice に入れる値
    pub fn union_choice(&self) -> u32 {
        match self {
            Self::File(_) => WTD_CHOICE_FILE,
        }
    }

    fn as_union(&mut self) -> WintrustDataSubject {
        match self {
            Self::File(info) => WintrustDataSubject {
                p_file: &mut **info as *mut WintrustFileInfo,
            },
        }
    }
}

/// WinVerifyTrust に渡す要求一式。
///
/// WINTRUST_DATA と、それが指す WINTRUST_FILE_INFO・UTF-16 パスを所有する。
/// 指し先はヒープ上にあるため、この値をムーブしてもポインタは有効なまま。
/// 生ポインタを含むので Send/Sync ではない（検証ごとに組み立てる）。
/// 生成は `service::query_builder::build` のみ。
#[derive(Debug)]
pub struct TrustRequest {
    data: WintrustData,
    subject: TrustSubject,
    wide_path: Vec<u16>,
    path: PathBuf,
}

impl TrustRequest {
    /// 組み立て順: ファイル情報（cbStruct確定）→ 本体 → 本体の cbStruct
    pub(crate) fn for_file(path: PathBuf, wide_path: Vec<u16>) -> Self {
        let file_info = Box::new(WintrustFileInfo::for_path(wide_path.as_ptr()));
        let mut subject = TrustSubject::File(file_info);

        let mut data = WintrustData {
            cb_struct: 0,
            // 既定のコード署名 EKU を使う
            p_policy_callback_data: ptr::null_mut(),
            p_sip_client_data: ptr::null_mut(),
            dw_ui_choice: WTD_UI_NONE,
            fdw_revocation_checks: WTD_REVOKE_NONE,
            dw_union_choice: subject.union_choice(),
            subject: subject.as_union(),
            dw_state_action: WTD_STATEACTION_VERIFY,
            h_wvt_state_data: ptr::null_mut(),
            pwsz_url_reference: ptr::null_mut(),
            dw_prov_flags: 0,
            // UIなしのため未使用
            dw_ui_context: 0,
            p_signature_settings: ptr::null_mut(),
        };
        data.cb_struct = WintrustData::SIZE;

        Self {
            data,
            subject,
            wide_path,
            path,
        }
    }

    /// エンジンに渡した絶対パス
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &WintrustData {
        &self.data
    }

    pub fn subject(&self) -> &TrustSubject {
        &self.subject
    }

    pub fn struct_size(&self) -> u32 {
        self.data.cb_struct
    }

    pub fn file_info(&self) -> &WintrustFileInfo {
        match &self.subject {
            TrustSubject::File(info) => info,
        }
    }

    /// NUL終端込みの UTF-16 パス
    pub fn wide_path(&self) -> &[u16] {
        &self.wide_path
    }

    /// 境界呼び出し用。借用中は要求をムーブ・解放できない。
    pub fn as_mut_ptr(&mut self) -> *mut c_void {
        &mut self.data as *mut WintrustData as *mut c_void
    }

    /// エンジンが検証時に確保した状態ハンドル
    pub fn state_data(&self) -> *mut c_void {
        self.data.h_wvt_state_data
    }

    /// 検証後の解放呼び出し用に dwStateAction を CLOSE へ切り替える
    pub fn set_close_action(&mut self) {
        self.data.dw_state_action = WTD_STATEACTION_CLOSE;
    }
}
