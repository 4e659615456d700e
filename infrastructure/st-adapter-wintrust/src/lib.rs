//! 信頼検証エンジンアダプター
//! Windows: wintrust.dll を実行時にロードし WinVerifyTrust を呼ぶ
//! 非Windows: エンジン利用不可として扱う

use std::sync::OnceLock;

use st_domain::error::TrustError;
use st_domain::model::{TrustAction, TrustRequest};
use st_domain::port::driven::TrustEngine;

/// WinVerifyTrust を呼ぶエンジン。ライブラリは最初の呼び出しでロードする。
#[derive(Debug, Default)]
pub struct WinTrustEngine {
    library: OnceLock<Result<Library, String>>,
}

impl WinTrustEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn library(&self) -> Result<&Library, TrustError> {
        self.library
            .get_or_init(|| {
                let loaded = Library::load();
                if let Err(reason) = &loaded {
                    tracing::warn!(%reason, "failed to load trust engine");
                }
                loaded
            })
            .as_ref()
            .map_err(|reason| TrustError::EngineUnavailable(reason.clone()))
    }
}

impl TrustEngine for WinTrustEngine {
    fn invoke(&self, action: &TrustAction, request: &mut TrustRequest) -> Result<i32, TrustError> {
        let library = self.library()?;
        tracing::debug!(path = %request.path().display(), %action, "invoking WinVerifyTrust");
        let code = library.verify(action, request);
        tracing::debug!(path = %request.path().display(), raw_code = code, "WinVerifyTrust returned");
        Ok(code)
    }
}

#[cfg(windows)]
use win::Library;

#[cfg(windows)]
mod win {
    use std::ffi::c_void;

    use st_domain::model::wintrust::Guid;
    use st_domain::model::{TrustAction, TrustRequest};
    use windows::Win32::Foundation::{FreeLibrary, HMODULE};
    use windows::Win32::System::LibraryLoader::{
        GetProcAddress, LoadLibraryExW, LOAD_LIBRARY_SEARCH_SYSTEM32,
    };
    use windows::core::{s, w};

    /// LONG WinVerifyTrust(HWND, GUID*, LPVOID)
    type WinVerifyTrustFn =
        unsafe extern "system" fn(hwnd: *mut c_void, action: *mut Guid, data: *mut c_void) -> i32;

    /// INVALID_HANDLE_VALUE: 対話ユーザーなし
    const NO_INTERACTIVE_USER: isize = -1;

    #[derive(Debug)]
    pub(super) struct Library {
        module: HMODULE,
        verify_trust: WinVerifyTrustFn,
    }

    // モジュールハンドルはプロセス共有、WinVerifyTrust はスレッドセーフ
    unsafe impl Send for Library {}
    unsafe impl Sync for Library {}

    impl Library {
        pub(super) fn load() -> Result<Self, String> {
            // System32 からのみロード（DLL 探索順の乗っ取り対策）
            let module = unsafe { LoadLibraryExW(w!("wintrust.dll"), None, LOAD_LIBRARY_SEARCH_SYSTEM32) }
                .map_err(|e| format!("LoadLibraryExW(wintrust.dll) failed: {e}"))?;
            let proc = unsafe { GetProcAddress(module, s!("WinVerifyTrust")) };
            let Some(proc) = proc else {
                unsafe {
                    let _ = FreeLibrary(module);
                }
                return Err("WinVerifyTrust not exported by wintrust.dll".into());
            };
            let verify_trust: WinVerifyTrustFn = unsafe { std::mem::transmute(proc) };
            Ok(Self {
                module,
                verify_trust,
            })
        }

        pub(super) fn verify(&self, action: &TrustAction, request: &mut TrustRequest) -> i32 {
            // API は非 const ポインタを取るため定数のコピーを渡す
            let mut action_guid = *action.guid();
            let hwnd = NO_INTERACTIVE_USER as *mut c_void;

            // 検証
            let status = unsafe { (self.verify_trust)(hwnd, &mut action_guid, request.as_mut_ptr()) };

            // 後始末: VERIFY で確保された hWVTStateData を解放
            if !request.state_data().is_null() {
                request.set_close_action();
                let close = unsafe { (self.verify_trust)(hwnd, &mut action_guid, request.as_mut_ptr()) };
                if close != 0 {
                    tracing::debug!(code = close, "WinVerifyTrust close returned non-zero");
                }
            }

            status
        }
    }

    impl Drop for Library {
        fn drop(&mut self) {
            unsafe {
                let _ = FreeLibrary(self.module);
            }
        }
    }
}

#[cfg(not(windows))]
use unsupported::Library;

#[cfg(not(windows))]
mod unsupported {
    use st_domain::model::{TrustAction, TrustRequest};

    #[derive(Debug)]
    pub(super) enum Library {}

    impl Library {
        pub(super) fn load() -> Result<Self, String> {
            Err("WinVerifyTrust is not available on this platform".into())
        }

        pub(super) fn verify(&self, _action: &TrustAction, _request: &mut TrustRequest) -> i32 {
            match *self {}
        }
    }
}
