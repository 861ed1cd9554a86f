// Collector - 結果収集と永続化機能

use crate::core::{
    FailurePolicy, FileFailure, ProcessingError, ProcessingOutcome, ProcessingResult,
    ProgressReporter, RunPersistence,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// 収集結果
#[derive(Debug, Default)]
pub struct CollectedResults {
    pub processed: usize,
    pub errors: usize,
    pub failures: Vec<FileFailure>,
    /// 最初に受信したエラー（FailFast時に呼び出し元へ返す）
    pub first_error: Option<ProcessingError>,
}

/// Collector: 結果収集と永続化
///
/// FailFastの場合、最初のエラーで`abort`を立てる。
/// 中断後も送信済みの結果は最後まで受信する。
pub fn spawn_result_collector<R, P>(
    mut result_rx: mpsc::Receiver<ProcessingOutcome>,
    total_files: usize,
    reporter: Arc<R>,
    persistence: Arc<P>,
    failure_policy: FailurePolicy,
    abort: Arc<AtomicBool>,
) -> tokio::task::JoinHandle<ProcessingResult<CollectedResults>>
where
    R: ProgressReporter + ?Sized + 'static,
    P: RunPersistence + ?Sized + 'static,
{
    tokio::spawn(async move {
        let mut collected = CollectedResults::default();

        while let Some(outcome) = result_rx.recv().await {
            match outcome {
                ProcessingOutcome::Success(record) => {
                    persistence
                        .store_record(&record)
                        .await
                        .map_err(ProcessingError::persistence)?;
                    collected.processed += 1;
                }
                ProcessingOutcome::Error { file_path, error } => {
                    // 報告より先に中断を立て、報告中に新しいタスクが始まらないようにする
                    if failure_policy == FailurePolicy::FailFast {
                        abort.store(true, Ordering::SeqCst);
                    }

                    let message = error.to_string();
                    reporter.report_error(&file_path, &message).await;

                    collected.errors += 1;
                    collected.failures.push(FileFailure {
                        file_path,
                        error: message,
                    });

                    if collected.first_error.is_none() {
                        collected.first_error = Some(error);
                    }
                }
            }

            // 進捗報告
            reporter
                .report_progress(collected.processed + collected.errors, total_files)
                .await;
        }

        Ok(collected)
    })
}
