//! 判定結果の表示

use std::path::Path;

use serde::Serialize;
use st_domain::error::TrustError;
use st_domain::model::TrustResult;

use crate::exit_codes;

/// 1ファイル分の JSON 出力
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'static str>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl FileReport {
    pub fn new(path: &Path, result: &Result<TrustResult, TrustError>) -> Self {
        let path = path.display().to_string();
        match result {
            Ok(r) => Self {
                path,
                raw_code: Some(r.raw_code()),
                hex_code: Some(r.hex_code()),
                outcome: Some(r.outcome().as_str()),
                message: r.message().to_string(),
                error: None,
            },
            Err(e) => Self {
                path,
                raw_code: None,
                hex_code: None,
                outcome: None,
                message: e.to_string(),
                error: Some(error_kind(e)),
            },
        }
    }
}

pub fn error_kind(err: &TrustError) -> &'static str {
    match err {
        TrustError::FileNotFound { .. } => "file_not_found",
        TrustError::InvalidPath { .. } => "invalid_path",
        TrustError::EngineUnavailable(_) => "engine_unavailable",
    }
}

/// テキスト1行。複数ファイル時はパスを前置する。
pub fn text_line(path: &Path, result: &TrustResult, with_path: bool) -> String {
    if with_path {
        format!("{}: {}", path.display(), result)
    } else {
        result.to_string()
    }
}

/// 失敗の表示行。複数ファイル時はどの入力の失敗かをパスで示す。
pub fn error_line(path: &Path, err: &TrustError, with_path: bool) -> String {
    if with_path {
        format!("{}: {}", path.display(), err)
    } else {
        err.to_string()
    }
}

pub fn exit_code(result: &Result<TrustResult, TrustError>) -> u8 {
    match result {
        Ok(r) if r.outcome().is_trusted() => exit_codes::TRUSTED,
        Ok(_) => exit_codes::NOT_TRUSTED,
        Err(TrustError::FileNotFound { .. } | TrustError::InvalidPath { .. }) => {
            exit_codes::FILE_ERROR
        }
        Err(TrustError::EngineUnavailable(_)) => exit_codes::ENGINE_UNAVAILABLE,
    }
}

/// 最も重い終了コード
pub fn overall_exit_code<'a, I>(results: I) -> u8
where
    I: IntoIterator<Item = &'a Result<TrustResult, TrustError>>,
{
    results
        .into_iter()
        .map(exit_code)
        .max()
        .unwrap_or(exit_codes::TRUSTED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use st_domain::model::status_codes::{ERROR_SUCCESS, TRUST_E_NOSIGNATURE};
    use st_domain::service::status_translator::translate;
    use std::path::PathBuf;

    #[test]
    fn test_text_line() {
        let r = translate(TRUST_E_NOSIGNATURE);
        assert_eq!(
            text_line(Path::new("a.dll"), &r, false),
            "-2146762496 - The file was not signed, or had a signature that was not valid."
        );
        assert!(text_line(Path::new("a.dll"), &r, true).starts_with("a.dll: -2146762496 - "));
    }

    #[test]
    fn test_error_line_names_the_input() {
        let err = TrustError::EngineUnavailable("wintrust.dll missing".into());
        assert_eq!(
            error_line(Path::new("b.exe"), &err, true),
            "b.exe: Trust engine unavailable: wintrust.dll missing"
        );
        assert_eq!(
            error_line(Path::new("b.exe"), &err, false),
            "Trust engine unavailable: wintrust.dll missing"
        );
    }

    #[test]
    fn test_report_for_verdict() {
        let report = FileReport::new(Path::new("a.dll"), &Ok(translate(TRUST_E_NOSIGNATURE)));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["raw_code"], -2146762496_i64);
        assert_eq!(json["hex_code"], "0x800B0100");
        assert_eq!(json["outcome"], "no_valid_signature");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_report_for_error() {
        let err = TrustError::FileNotFound {
            path: PathBuf::from("missing.dll"),
        };
        let report = FileReport::new(Path::new("missing.dll"), &Err(err));
        assert_eq!(report.error, Some("file_not_found"));
        assert_eq!(report.message, "Can't find missing.dll");
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("raw_code").is_none());
    }

    #[test]
    fn test_overall_exit_code() {
        let trusted = Ok(translate(ERROR_SUCCESS));
        let unsigned = Ok(translate(TRUST_E_NOSIGNATURE));
        let missing = Err(TrustError::FileNotFound {
            path: PathBuf::from("x"),
        });
        let engine = Err(TrustError::EngineUnavailable("gone".into()));

        assert_eq!(overall_exit_code([&trusted]), exit_codes::TRUSTED);
        assert_eq!(overall_exit_code([&trusted, &unsigned]), exit_codes::NOT_TRUSTED);
        assert_eq!(overall_exit_code([&unsigned, &missing]), exit_codes::FILE_ERROR);
        assert_eq!(
            overall_exit_code([&missing, &engine, &trusted]),
            exit_codes::ENGINE_UNAVAILABLE
        );
        assert_eq!(overall_exit_code(std::iter::empty::<&Result<TrustResult, TrustError>>()), exit_codes::TRUSTED);
    }

    #[test]
    fn test_unknown_code_is_not_trusted() {
        assert_eq!(exit_code(&Ok(translate(42))), exit_codes::NOT_TRUSTED);
    }
}
