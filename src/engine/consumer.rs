// Consumer - 並列ワーカー機能

use crate::{
    core::{FileTask, ProcessingOutcome},
    services::processing::process_single_file,
    storage::FileStore,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// 単一Consumerワーカー
///
/// `abort`が立った後に受信したタスクは処理せず`skipped`に数える。
pub fn spawn_single_consumer<S>(
    worker_id: usize,
    store: Arc<S>,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<FileTask>>>,
    result_tx: mpsc::Sender<ProcessingOutcome>,
    abort: Arc<AtomicBool>,
    skipped: Arc<AtomicUsize>,
) -> tokio::task::JoinHandle<()>
where
    S: FileStore + ?Sized + 'static,
{
    tokio::spawn(async move {
        loop {
            // 次の作業を取得
            let task = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(task) => task,
                    None => break, // チャンネル終了
                }
            };

            if abort.load(Ordering::SeqCst) {
                skipped.fetch_add(1, Ordering::SeqCst);
                continue;
            }

            let result = process_single_file(store.as_ref(), &task, worker_id).await;

            // 結果送信
            if (result_tx.send(result).await).is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }
        }
    })
}

/// Consumers: 固定サイズのワーカープール
pub fn spawn_consumers<S>(
    store: Arc<S>,
    work_rx: mpsc::Receiver<FileTask>,
    result_tx: mpsc::Sender<ProcessingOutcome>,
    worker_count: usize,
    abort: Arc<AtomicBool>,
    skipped: Arc<AtomicUsize>,
) -> Vec<tokio::task::JoinHandle<()>>
where
    S: FileStore + ?Sized + 'static,
{
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));

    (0..worker_count)
        .map(|worker_id| {
            spawn_single_consumer(
                worker_id,
                Arc::clone(&store),
                Arc::clone(&work_rx),
                result_tx.clone(),
                Arc::clone(&abort),
                Arc::clone(&skipped),
            )
        })
        .collect()
}
