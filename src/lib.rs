// ディレクトリ並列処理ライブラリ
// ファイル名への連番付与とマークアップタグ除去をワーカープールで実行する

pub mod cli;
pub mod core;
pub mod engine;
pub mod services;
pub mod storage;

pub use crate::core::{
    FailurePolicy, FileTask, ListingOrder, ProcessingError, ProcessingResult, ProcessingSummary,
};
pub use engine::{process, ProcessingEngine};
pub use services::DefaultProcessingConfig;
pub use storage::{local::LocalFileStore, FileStore};
