// Pipeline - Producer-Consumer パイプライン
// メインパイプライン機能とオーケストレーション

use super::{consumer::spawn_consumers, producer::spawn_producer};
use crate::{
    core::{
        FailurePolicy, FileTask, ProcessingConfig, ProcessingError, ProcessingResult,
        ProcessingSummary, ProgressReporter, RunPersistence,
    },
    services::persistence::spawn_result_collector,
    storage::FileStore,
};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};
use std::time::Instant;
use tokio::sync::mpsc;

/// 責任が明確に分離されたパイプライン
pub struct ProcessingPipeline<S: ?Sized> {
    store: Arc<S>,
}

impl<S> ProcessingPipeline<S>
where
    S: FileStore + ?Sized + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// タスクリストを処理
    ///
    /// 1件でも失敗した場合は永続化を完了させてからエラーを返す。
    pub async fn execute<C, R, P>(
        &self,
        tasks: Vec<FileTask>,
        config: &C,
        reporter: Arc<R>,
        persistence: Arc<P>,
    ) -> ProcessingResult<ProcessingSummary>
    where
        C: ProcessingConfig + ?Sized,
        R: ProgressReporter + ?Sized + 'static,
        P: RunPersistence + ?Sized + 'static,
    {
        let start_time = Instant::now();
        let worker_count = config.parallelism();
        if worker_count == 0 {
            return Err(ProcessingError::configuration(
                "並列数は1以上である必要があります",
            ));
        }

        // Producer-Consumerチャンネル構築
        let buffer_size = config.channel_buffer_size().max(1);
        let (work_tx, work_rx) = mpsc::channel::<FileTask>(buffer_size);
        let (result_tx, result_rx) = mpsc::channel(buffer_size);

        let abort = Arc::new(AtomicBool::new(false));
        let skipped = Arc::new(AtomicUsize::new(0));

        let total_files = tasks.len();
        let failure_policy = config.failure_policy();
        reporter.report_started(total_files).await;
        tracing::info!(total_files, worker_count, ?failure_policy, "pipeline started");

        // Producer起動
        let producer_handle = spawn_producer(tasks, work_tx, Arc::clone(&abort));

        // Consumer Pool起動
        let consumer_handles = spawn_consumers(
            Arc::clone(&self.store),
            work_rx,
            result_tx.clone(),
            worker_count,
            Arc::clone(&abort),
            Arc::clone(&skipped),
        );

        // Result Collector起動
        let collector_handle = spawn_result_collector(
            result_rx,
            total_files,
            Arc::clone(&reporter),
            Arc::clone(&persistence),
            failure_policy,
            Arc::clone(&abort),
        );

        // Producer完了を待機
        let sent = producer_handle.await?;

        // Consumer完了を待機
        for handle in consumer_handles {
            handle.await?;
        }

        // result_txを閉じてCollectorに完了を通知
        drop(result_tx);

        // Collector完了を待機
        let collected = collector_handle.await??;

        // 未送信タスクと破棄されたタスクの合計
        let skipped_files = (total_files - sent) + skipped.load(Ordering::SeqCst);

        reporter
            .report_completed(collected.processed, collected.errors)
            .await;

        let total_time_ms = start_time.elapsed().as_millis() as u64;
        let average_time_per_file_ms = if total_files > 0 {
            total_time_ms as f64 / total_files as f64
        } else {
            0.0
        };

        let summary = ProcessingSummary {
            total_files,
            processed_files: collected.processed,
            error_count: collected.errors,
            skipped_files,
            failures: collected.failures.clone(),
            total_processing_time_ms: total_time_ms,
            average_time_per_file_ms,
        };

        // 永続化完了
        persistence
            .finalize(&summary)
            .await
            .map_err(ProcessingError::persistence)?;

        tracing::info!(
            processed = summary.processed_files,
            errors = summary.error_count,
            skipped = summary.skipped_files,
            elapsed_ms = total_time_ms,
            "pipeline finished"
        );

        if collected.errors == 0 {
            return Ok(summary);
        }

        match (failure_policy, collected.first_error) {
            (FailurePolicy::FailFast, Some(error)) => Err(error),
            _ => Err(ProcessingError::batch_failed(total_files, collected.failures)),
        }
    }
}
