// 実行結果の永続化機能
// ファイル単位の記録、サマリー保存、結果収集

pub mod collector;
pub mod implementations;

// 公開API
pub use collector::{spawn_result_collector, CollectedResults};
pub use implementations::{JsonReportPersistence, MemoryRunPersistence, RunReport};
