// 設定管理機能
// 並列度、列挙順序、失敗時の振る舞い

pub mod implementations;

// 公開API
pub use implementations::{DefaultProcessingConfig, DEFAULT_PARALLELISM};
