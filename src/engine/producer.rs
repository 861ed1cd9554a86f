// Producer - タスク配信機能

use crate::core::FileTask;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Producer: タスクを配信し、送信できた件数を返す
///
/// `abort`が立った時点で配信を止める。
pub fn spawn_producer(
    tasks: Vec<FileTask>,
    work_tx: mpsc::Sender<FileTask>,
    abort: Arc<AtomicBool>,
) -> tokio::task::JoinHandle<usize> {
    tokio::spawn(async move {
        let mut sent = 0;
        for task in tasks {
            if abort.load(Ordering::SeqCst) {
                break;
            }
            if (work_tx.send(task).await).is_err() {
                // チャンネルが閉じられた場合は正常終了
                break;
            }
            sent += 1;
        }
        // work_txをドロップしてチャンネル終了シグナル
        sent
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    fn tasks(count: usize) -> Vec<FileTask> {
        (0..count)
            .map(|i| FileTask::new(format!("/data/f{i}.txt"), i))
            .collect()
    }

    #[tokio::test]
    async fn test_producer_sends_all_tasks_in_order() {
        let (work_tx, mut work_rx) = mpsc::channel::<FileTask>(10);

        let producer_handle =
            spawn_producer(tasks(3), work_tx, Arc::new(AtomicBool::new(false)));

        let mut received = Vec::new();
        while let Ok(Some(task)) = timeout(Duration::from_millis(100), work_rx.recv()).await {
            received.push(task);
        }

        assert_eq!(producer_handle.await.unwrap(), 3);
        assert_eq!(received, tasks(3));
    }

    #[tokio::test]
    async fn test_producer_empty_tasks() {
        let (work_tx, mut work_rx) = mpsc::channel::<FileTask>(10);

        let producer_handle = spawn_producer(vec![], work_tx, Arc::new(AtomicBool::new(false)));

        // チャンネルが即座に閉じることを確認
        let received = timeout(Duration::from_millis(100), work_rx.recv()).await;
        assert!(received.is_err() || received.unwrap().is_none());

        assert_eq!(producer_handle.await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_producer_channel_closed_early() {
        let (work_tx, work_rx) = mpsc::channel::<FileTask>(1);
        drop(work_rx);

        let producer_handle = spawn_producer(tasks(2), work_tx, Arc::new(AtomicBool::new(false)));

        assert_eq!(producer_handle.await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_producer_stops_when_aborted() {
        let (work_tx, mut work_rx) = mpsc::channel::<FileTask>(10);
        let abort = Arc::new(AtomicBool::new(true));

        let producer_handle = spawn_producer(tasks(5), work_tx, abort);

        assert_eq!(producer_handle.await.unwrap(), 0);
        assert!(work_rx.recv().await.is_none());
    }
}
