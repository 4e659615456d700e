//! sigtrust: ファイルの埋め込み Authenticode 署名が信頼できるかを
//! WinVerifyTrust で確認し、判定と説明を表示する CLI。

mod config;
mod exit_codes;
mod report;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use st_adapter_wintrust::WinTrustEngine;
use st_app::TrustVerifier;
use st_log_utils::LogFile;

use config::{FileConfig, LogFormatArg, OutputFormat, Overrides};
use report::FileReport;

#[derive(Debug, Parser)]
#[command(
    name = "sigtrust",
    version,
    about = "Check whether files carry a trusted embedded Authenticode signature"
)]
struct Cli {
    /// Files to verify
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// JSON config file
    #[arg(long, env = "SIGTRUST_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format for verdicts
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Give up on a file after this many milliseconds (0 = wait for the engine)
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Log filter directive (e.g. "info", "st_app=debug"); SIGTRUST_LOG wins
    #[arg(long)]
    log_level: Option<String>,

    /// Log line format
    #[arg(long, value_enum)]
    log_format: Option<LogFormatArg>,

    /// Append logs to FILE instead of stderr (without FILE: the default log location)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format,
            timeout_ms: self.timeout_ms,
            log_level: self.log_level.clone(),
            log_format: self.log_format,
            log_file: self.log_file.clone().map(|path| match path {
                Some(path) => LogFile::Path(path),
                None => LogFile::Default,
            }),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("sigtrust: {e:#}");
            ExitCode::from(exit_codes::USAGE)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let file_config = match &cli.config {
        Some(path) => config::load_file(path)?,
        None => FileConfig::default(),
    };
    let settings = config::resolve(cli.overrides(), file_config);
    st_log_utils::init_tracing(&settings.log).context("failed to initialize logging")?;
    tracing::debug!(?settings, "sigtrust starting");

    let verifier = TrustVerifier::new(WinTrustEngine::new());
    let results = verifier.verify_many(&cli.paths, settings.timeout);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match settings.format {
        OutputFormat::Text => {
            let with_path = results.len() > 1;
            for (path, result) in &results {
                match result {
                    Ok(r) => writeln!(out, "{}", report::text_line(path, r, with_path))?,
                    Err(e) => eprintln!("{}", report::error_line(path, e, with_path)),
                }
            }
        }
        OutputFormat::Json => {
            let reports: Vec<FileReport> = results
                .iter()
                .map(|(path, result)| FileReport::new(path, result))
                .collect();
            serde_json::to_writer_pretty(&mut out, &reports)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(report::overall_exit_code(results.iter().map(|(_, r)| r)))
}
