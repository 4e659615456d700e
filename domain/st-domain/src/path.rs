//! エンジン向けパス変換（stdのみ）
//!
//! エンジンは NUL終端 UTF-16 の絶対パス（LPCWSTR）を要求する。

use std::path::{Path, PathBuf};

use crate::error::TrustError;

/// 絶対パス化する。シンボリックリンク解決やI/Oは行わない。
pub fn absolute_path(path: &Path) -> Result<PathBuf, TrustError> {
    if path.as_os_str().is_empty() {
        return Err(TrustError::invalid_path(path, "path is empty"));
    }
    std::path::absolute(path).map_err(|e| TrustError::invalid_path(path, e.to_string()))
}

/// NUL終端 UTF-16 に変換する。途中に NUL を含むパスは表現できない。
pub fn encode_wide_nul(path: &Path) -> Result<Vec<u16>, TrustError> {
    let mut wide = encode_wide(path)?;
    if wide.contains(&0) {
        return Err(TrustError::invalid_path(path, "path contains a NUL character"));
    }
    wide.push(0);
    Ok(wide)
}

#[cfg(windows)]
fn encode_wide(path: &Path) -> Result<Vec<u16>, TrustError> {
    use std::os::windows::ffi::OsStrExt;
    Ok(path.as_os_str().encode_wide().collect())
}

#[cfg(not(windows))]
fn encode_wide(path: &Path) -> Result<Vec<u16>, TrustError> {
    path.to_str()
        .map(|s| s.encode_utf16().collect())
        .ok_or_else(|| TrustError::invalid_path(path, "path is not valid Unicode"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_rejected() {
        let err = absolute_path(Path::new("")).unwrap_err();
        assert!(matches!(err, TrustError::InvalidPath { .. }));
    }

    #[test]
    fn test_relative_path_becomes_absolute() {
        let abs = absolute_path(Path::new("some_file.dll")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("some_file.dll"));
    }

    #[test]
    fn test_encode_wide_is_nul_terminated() {
        let wide = encode_wide_nul(Path::new("ab")).unwrap();
        assert_eq!(wide, vec![u16::from(b'a'), u16::from(b'b'), 0]);
    }

    #[test]
    fn test_encode_wide_rejects_interior_nul() {
        let err = encode_wide_nul(Path::new("a\0b")).unwrap_err();
        assert!(matches!(err, TrustError::InvalidPath { .. }));
    }

    #[test]
    fn test_encode_wide_non_ascii() {
        let wide = encode_wide_nul(Path::new("署名.exe")).unwrap();
        assert_eq!(String::from_utf16(&wide[..wide.len() - 1]).unwrap(), "署名.exe");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        let path = Path::new(OsStr::from_bytes(b"bad\xFFname"));
        let err = encode_wide_nul(path).unwrap_err();
        assert!(matches!(err, TrustError::InvalidPath { .. }));
    }
}
