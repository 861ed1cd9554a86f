// Worker - 単一ファイル処理機能

use super::file_name::sequenced_path;
use super::markup::strip_markup;
use crate::core::{FileRecord, FileTask, FsOperation, ProcessingError, ProcessingOutcome};
use crate::storage::FileStore;
use std::time::Instant;

/// 単一ファイルの処理
///
/// リネーム、読み込み、タグ除去、書き戻しの順に実行する。
/// 途中で失敗した場合もロールバックはしない。
pub async fn process_single_file<S>(store: &S, task: &FileTask, worker_id: usize) -> ProcessingOutcome
where
    S: FileStore + ?Sized,
{
    let start_time = Instant::now();

    let result = async {
        let renamed_path = sequenced_path(&task.path, task.sequence_number())?;

        store
            .rename(&task.path, &renamed_path)
            .await
            .map_err(|e| ProcessingError::filesystem(FsOperation::Rename, &task.path, e))?;

        let bytes = store
            .read(&renamed_path)
            .await
            .map_err(|e| ProcessingError::filesystem(FsOperation::Read, &renamed_path, e))?;
        let bytes_read = bytes.len() as u64;

        let content =
            String::from_utf8(bytes).map_err(|e| ProcessingError::decoding(&renamed_path, e))?;

        let stripped = strip_markup(&content);
        store
            .write(&renamed_path, stripped.text.as_bytes())
            .await
            .map_err(|e| ProcessingError::filesystem(FsOperation::Write, &renamed_path, e))?;

        Ok::<_, ProcessingError>(FileRecord {
            original_path: task.path.clone(),
            renamed_path,
            sequence_number: task.sequence_number(),
            bytes_read,
            bytes_written: stripped.text.len() as u64,
            tags_removed: stripped.tags_removed,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        })
    }
    .await;

    match result {
        Ok(record) => {
            tracing::debug!(
                worker_id,
                from = %record.original_path.display(),
                to = %record.renamed_path.display(),
                tags_removed = record.tags_removed,
                "file processed"
            );
            ProcessingOutcome::Success(record)
        }
        Err(error) => {
            tracing::warn!(worker_id, file = %task.path.display(), %error, "file failed");
            ProcessingOutcome::Error {
                file_path: task.path.clone(),
                error,
            }
        }
    }
}
