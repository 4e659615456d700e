//! 駆動ポート（出力インターフェース）。
//!
//! ドメインが外部に求める機能を定義する。
//! インフラ層のアダプタが実装する。

mod trust_engine;

pub use trust_engine::*;
