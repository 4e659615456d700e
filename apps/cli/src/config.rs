//! 設定の解決（CLI 引数 > 設定ファイル > 既定値）

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;
use st_log_utils::{LogFile, LogFormat, LogSettings};

/// 判定結果の出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// ログの出力形式（CLI/設定ファイル用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// JSON 設定ファイル。未知のキーはエラー。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormatArg>,
    pub log_file: Option<PathBuf>,
}

/// CLI から渡される上書き値
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<LogFormatArg>,
    pub log_file: Option<LogFile>,
}

/// 実行時設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    /// None はタイムアウトなし（エンジンに任せる）
    pub timeout: Option<Duration>,
    pub log: LogSettings,
}

pub fn load_file(path: &Path) -> anyhow::Result<FileConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<FileConfig> {
    Ok(serde_json::from_str(text)?)
}

pub fn resolve(cli: Overrides, file: FileConfig) -> Settings {
    let defaults = LogSettings::default();
    let timeout_ms = cli.timeout_ms.or(file.timeout_ms).filter(|ms| *ms > 0);
    Settings {
        format: cli.format.or(file.format).unwrap_or_default(),
        timeout: timeout_ms.map(Duration::from_millis),
        log: LogSettings {
            level: cli.log_level.or(file.log_level).unwrap_or(defaults.level),
            format: cli
                .log_format
                .or(file.log_format)
                .map(LogFormat::from)
                .unwrap_or(defaults.format),
            file: cli.log_file.or(file.log_file.map(LogFile::Path)),
        },
    }
}
