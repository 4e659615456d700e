//! st-app: アプリケーション層のファサード。
//! ドメインサービスとエンジンポートを組み合わせて、ファイル署名の信頼検証
//! ユースケースを実装する。

pub mod verifier;

pub use verifier::TrustVerifier;
