//! ドメインサービス（純粋関数）

pub mod query_builder;     // 検証要求の組み立て
pub mod status_translator; // 戻りコード → 判定
