// ディレクトリ処理のトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::{FailurePolicy, FileRecord, ListingOrder, ProcessingSummary, RunInfo};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use std::path::Path;

/// 処理設定を抽象化するトレイト
#[automock]
pub trait ProcessingConfig: Send + Sync {
    /// ワーカー数（並列度）を取得
    fn parallelism(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// ディレクトリ列挙の順序
    fn listing_order(&self) -> ListingOrder;

    /// タスク失敗時の振る舞い
    fn failure_policy(&self) -> FailurePolicy;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

impl ProcessingConfig for Box<dyn ProcessingConfig> {
    fn parallelism(&self) -> usize {
        self.as_ref().parallelism()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }

    fn listing_order(&self) -> ListingOrder {
        self.as_ref().listing_order()
    }

    fn failure_policy(&self) -> FailurePolicy {
        self.as_ref().failure_policy()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_files: usize);

    /// 進捗更新の報告
    async fn report_progress(&self, completed: usize, total: usize);

    /// エラー発生時の報告
    async fn report_error(&self, file_path: &Path, error: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, total_processed: usize, total_errors: usize);
}

#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_files: usize) {
        self.as_ref().report_started(total_files).await
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        self.as_ref().report_progress(completed, total).await
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        self.as_ref().report_error(file_path, error).await
    }

    async fn report_completed(&self, total_processed: usize, total_errors: usize) {
        self.as_ref()
            .report_completed(total_processed, total_errors)
            .await
    }
}

/// 処理結果の永続化抽象化トレイト
#[automock]
#[async_trait]
pub trait RunPersistence: Send + Sync {
    /// 実行情報（対象ディレクトリや設定）の設定
    async fn set_run_info(&self, info: &RunInfo) -> Result<()>;

    /// 成功したファイルの記録
    async fn store_record(&self, record: &FileRecord) -> Result<()>;

    /// 実行全体のサマリーを記録して完了
    async fn finalize(&self, summary: &ProcessingSummary) -> Result<()>;
}

#[async_trait]
impl RunPersistence for Box<dyn RunPersistence> {
    async fn set_run_info(&self, info: &RunInfo) -> Result<()> {
        self.as_ref().set_run_info(info).await
    }

    async fn store_record(&self, record: &FileRecord) -> Result<()> {
        self.as_ref().store_record(record).await
    }

    async fn finalize(&self, summary: &ProcessingSummary) -> Result<()> {
        self.as_ref().finalize(summary).await
    }
}
