// 進捗監視機能
// 処理進捗の報告、エラー通知、完了通知、ログ初期化

pub mod implementations;
pub mod logging;

// 公開API
pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
pub use logging::{announce_process, init_logging};
