// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod persistence;
pub mod processing;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{DefaultProcessingConfig, DEFAULT_PARALLELISM};
pub use monitoring::{announce_process, init_logging, ConsoleProgressReporter, NoOpProgressReporter};
pub use persistence::{
    spawn_result_collector, JsonReportPersistence, MemoryRunPersistence,
};
pub use processing::process_single_file;
