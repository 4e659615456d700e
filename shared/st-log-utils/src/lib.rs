//! ログユーティリティ
//!
//! tracing サブスクライバーの初期化と、ログファイル出力先の決定。
//! 標準出力は判定結果専用のため、ログは stderr かファイルにのみ出す。

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// ログレベルを上書きする環境変数
pub const LOG_ENV_VAR: &str = "SIGTRUST_LOG";

/// ログの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// ログファイルの出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFile {
    /// 既定の出力先のうち書き込める最初の場所
    Default,
    /// 指定されたファイルのみ（開けなければエラー）
    Path(PathBuf),
}

/// サブスクライバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// EnvFilter 形式（例: "info", "st_app=debug"）
    pub level: String,
    pub format: LogFormat,
    /// 指定時はファイルへ追記（stderr には出さない）
    pub file: Option<LogFile>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Text,
            file: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("no writable log file location: {0}")]
    NoWritableFile(String),
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// 環境変数があればそれを優先し、なければ指定レベルでフィルタを作る
pub fn build_filter(level: &str) -> EnvFilter {
    match std::env::var(LOG_ENV_VAR) {
        Ok(directive) if !directive.trim().is_empty() => EnvFilter::new(directive),
        _ => EnvFilter::new(level),
    }
}

/// グローバルサブスクライバーを初期化する
pub fn init_tracing(settings: &LogSettings) -> Result<(), LogInitError> {
    let filter = build_filter(&settings.level);

    let (writer, ansi) = match &settings.file {
        Some(target) => {
            let file = open_log_file(target)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let result = match settings.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_names(true)
            .with_writer(writer)
            .try_init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(ansi)
            .with_writer(writer)
            .try_init(),
    };
    result.map_err(|e| LogInitError::AlreadyInitialized(e.to_string()))
}

/// 出力先のファイルを開く。明示指定のパスは代替先へ切り替えない。
pub fn open_log_file(target: &LogFile) -> Result<File, LogInitError> {
    match target {
        LogFile::Default => open_first_writable(&default_log_paths()),
        LogFile::Path(path) => open_append(path)
            .map_err(|e| LogInitError::NoWritableFile(format!("{}: {}", path.display(), e))),
    }
}

/// ログファイルの既定出力先（優先順）
pub fn default_log_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if cfg!(windows) {
        let base = std::env::var_os("ProgramData")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData"));
        paths.push(base.join("SigTrust").join("logs").join("sigtrust.log"));
    }
    paths.push(std::env::temp_dir().join("sigtrust").join("sigtrust.log"));
    paths
}

/// 指定された出力先のうち、追記で開ける最初のファイルを返す
pub fn open_first_writable(paths: &[PathBuf]) -> Result<File, LogInitError> {
    let mut errors = Vec::new();
    for path in paths {
        match open_append(path) {
            Ok(file) => return Ok(file),
            Err(e) => errors.push(format!("{}: {}", path.display(), e)),
        }
    }
    Err(LogInitError::NoWritableFile(errors.join("; ")))
}

fn open_append(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
