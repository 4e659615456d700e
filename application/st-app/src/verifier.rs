//! 信頼検証ユースケース
//!
//! 前提条件確認 → 要求組み立て → エンジン呼び出し → コード翻訳。
//! 判定は一時的な状態ではないため、再試行はしない。

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use st_domain::error::TrustError;
use st_domain::model::{TrustResult, GENERIC_VERIFY_V2};
use st_domain::port::driven::TrustEngine;
use st_domain::service::{query_builder, status_translator};

/// ファイル署名の検証サービス
#[derive(Debug)]
pub struct TrustVerifier<E> {
    engine: Arc<E>,
}

impl<E> Clone for TrustVerifier<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<E: TrustEngine> TrustVerifier<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    pub fn with_shared(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// ファイルの埋め込み署名を検証する。
    ///
    /// エンジンが返したコードは未知のものも含めて `Ok(TrustResult)` になる。
    /// `Err` はファイルなし／パス不正／エンジン利用不可のいずれか。
    pub fn verify(&self, path: &Path) -> Result<TrustResult, TrustError> {
        ensure_readable_file(path)?;

        let mut request = query_builder::build(path)?;
        let raw_code = self.engine.invoke(&GENERIC_VERIFY_V2, &mut request)?;
        // エンジン呼び出し後は要求を使わない
        drop(request);

        let result = status_translator::translate(raw_code);
        tracing::info!(
            path = %path.display(),
            raw_code,
            outcome = result.outcome().as_str(),
            "trust verdict"
        );
        Ok(result)
    }
}

impl<E: TrustEngine + 'static> TrustVerifier<E> {
    /// 別スレッドで検証し、時間内に終わらなければ `EngineUnavailable`。
    /// エンジンは中断できないため、ワーカースレッドはそのまま完了まで走る。
    pub fn verify_with_timeout(
        &self,
        path: &Path,
        timeout: Duration,
    ) -> Result<TrustResult, TrustError> {
        let (tx, rx) = mpsc::channel();
        let worker = self.clone();
        let owned = path.to_path_buf();
        thread::Builder::new()
            .name("st-verify".into())
            .spawn(move || {
                let _ = tx.send(worker.verify(&owned));
            })
            .map_err(|e| TrustError::EngineUnavailable(format!("failed to spawn worker: {e}")))?;

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                tracing::warn!(path = %path.display(), ?timeout, "trust verification timed out");
                Err(TrustError::EngineUnavailable(format!(
                    "verification timed out after {} ms",
                    timeout.as_millis()
                )))
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(TrustError::EngineUnavailable(
                "verification worker terminated".into(),
            )),
        }
    }

    /// 各パスを独立に検証し、入力順に結果を返す。
    /// `timeout` があれば1ファイルごとに `verify_with_timeout` を使う。
    pub fn verify_many<P: AsRef<Path>>(
        &self,
        paths: &[P],
        timeout: Option<Duration>,
    ) -> Vec<(PathBuf, Result<TrustResult, TrustError>)> {
        paths
            .iter()
            .map(|p| {
                let p = p.as_ref();
                let result = match timeout {
                    Some(limit) => self.verify_with_timeout(p, limit),
                    None => self.verify(p),
                };
                (p.to_path_buf(), result)
            })
            .collect()
    }
}

/// 存在し、読み取り可能な通常ファイルか
fn ensure_readable_file(path: &Path) -> Result<(), TrustError> {
    let not_found = || TrustError::FileNotFound {
        path: path.to_path_buf(),
    };
    let meta = std::fs::metadata(path).map_err(|_| not_found())?;
    if !meta.is_file() {
        return Err(not_found());
    }
    File::open(path).map_err(|_| not_found())?;
    Ok(())
}
