// ProcessingEngine - 依存性注入による並列処理エンジン
// 全ての依存関係がコンストラクタで注入される

use super::pipeline::ProcessingPipeline;
use crate::{
    core::{
        FileTask, ListingOrder, ProcessingConfig, ProcessingError, ProcessingResult,
        ProcessingSummary, ProgressReporter, RunInfo, RunPersistence,
    },
    storage::FileStore,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 依存性注入による並列処理エンジン
///
/// 並列処理で共有される依存関係はArcで管理する。
pub struct ProcessingEngine<S, C, R, P> {
    store: Arc<S>,
    config: Arc<C>,
    reporter: Arc<R>,
    persistence: Arc<P>,
}

impl<S, C, R, P> ProcessingEngine<S, C, R, P>
where
    S: FileStore + 'static,
    C: ProcessingConfig,
    R: ProgressReporter + 'static,
    P: RunPersistence + 'static,
{
    /// 新しい処理エンジンを作成
    pub fn new(store: S, config: C, reporter: R, persistence: P) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            reporter: Arc::new(reporter),
            persistence: Arc::new(persistence),
        }
    }

    /// 指定されたディレクトリを並列処理
    ///
    /// 列挙したエントリに0始まりの位置を割り当て、全タスクの完了を待って返す。
    pub async fn process_directory(&self, directory: &Path) -> ProcessingResult<ProcessingSummary> {
        // 設定検証（ファイルに触れる前に行う）
        if self.config.parallelism() == 0 {
            return Err(ProcessingError::configuration(
                "並列数は1以上である必要があります",
            ));
        }

        let entries = self.discover_entries(directory).await?;
        let tasks = entries
            .into_iter()
            .enumerate()
            .map(|(index, path)| FileTask::new(path, index))
            .collect::<Vec<_>>();

        let run_info = RunInfo {
            timestamp: chrono::Utc::now().to_rfc3339(),
            directory: directory.to_path_buf(),
            total_files: tasks.len(),
            parallelism: self.config.parallelism(),
            listing_order: self.config.listing_order(),
            failure_policy: self.config.failure_policy(),
        };
        self.persistence
            .set_run_info(&run_info)
            .await
            .map_err(ProcessingError::persistence)?;

        self.process_tasks(tasks).await
    }

    /// 作成済みのタスクリストを並列処理
    ///
    /// 列挙を済ませた場合に使用する細かい制御用API
    pub async fn process_tasks(&self, tasks: Vec<FileTask>) -> ProcessingResult<ProcessingSummary> {
        let pipeline = ProcessingPipeline::new(Arc::clone(&self.store));

        pipeline
            .execute(
                tasks,
                self.config.as_ref(),
                Arc::clone(&self.reporter),
                Arc::clone(&self.persistence),
            )
            .await
    }

    /// ディレクトリのエントリを列挙
    ///
    /// ディレクトリもフィルタせずそのままタスクになる。
    async fn discover_entries(&self, directory: &Path) -> ProcessingResult<Vec<PathBuf>> {
        let mut entries = self
            .store
            .list_entries(directory)
            .await
            .map_err(|e| ProcessingError::file_discovery(directory.display().to_string(), e))?;

        if self.config.listing_order() == ListingOrder::Alphabetical {
            entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }

        tracing::debug!(
            directory = %directory.display(),
            entries = entries.len(),
            "directory listed"
        );
        Ok(entries)
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// 永続化への参照を取得
    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FailurePolicy;
    use crate::services::{DefaultProcessingConfig, MemoryRunPersistence, NoOpProgressReporter};
    use crate::storage::{local::LocalFileStore, MockFileStore};
    use std::fs;
    use tempfile::TempDir;

    fn local_engine(
        config: DefaultProcessingConfig,
    ) -> ProcessingEngine<LocalFileStore, DefaultProcessingConfig, NoOpProgressReporter, MemoryRunPersistence>
    {
        ProcessingEngine::new(
            LocalFileStore::new(),
            config,
            NoOpProgressReporter::new(),
            MemoryRunPersistence::new(),
        )
    }

    #[tokio::test]
    async fn test_engine_creation() {
        let engine = local_engine(DefaultProcessingConfig::default());

        assert_eq!(engine.config().parallelism(), 4);
        assert!(!engine.persistence().is_finalized());
    }

    #[tokio::test]
    async fn test_process_directory_renames_and_strips() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("report.txt"), "<b>Q3</b> results").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "<i>todo</i>").unwrap();

        let engine = local_engine(DefaultProcessingConfig::new(2));
        let summary = engine.process_directory(temp_dir.path()).await.unwrap();

        assert_eq!(summary.total_files, 2);
        assert_eq!(summary.processed_files, 2);

        let mut names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        // 連番の割り当ては列挙順に依存する
        assert!(
            names == ["notes-1.txt", "report-2.txt"] || names == ["notes-2.txt", "report-1.txt"],
            "unexpected names: {names:?}"
        );

        for name in names {
            let content = fs::read_to_string(temp_dir.path().join(&name)).unwrap();
            if name.starts_with("report") {
                assert_eq!(content, "Q3 results");
            } else {
                assert_eq!(content, "todo");
            }
        }

        let run_info = engine.persistence().run_info().unwrap();
        assert_eq!(run_info.total_files, 2);
        assert_eq!(run_info.parallelism, 2);
        assert_eq!(run_info.directory, temp_dir.path());
    }

    #[tokio::test]
    async fn test_process_directory_alphabetical_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
        fs::write(temp_dir.path().join("a.txt"), "a").unwrap();

        let engine = local_engine(
            DefaultProcessingConfig::new(1).with_listing_order(ListingOrder::Alphabetical),
        );
        engine.process_directory(temp_dir.path()).await.unwrap();

        assert_eq!(fs::read_to_string(temp_dir.path().join("a-1.txt")).unwrap(), "a");
        assert_eq!(fs::read_to_string(temp_dir.path().join("b-2.txt")).unwrap(), "b");
    }

    #[tokio::test]
    async fn test_process_directory_zero_parallelism_touches_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("keep.txt");
        fs::write(&file, "<p>x</p>").unwrap();

        let engine = local_engine(DefaultProcessingConfig::new(0));
        let result = engine.process_directory(temp_dir.path()).await;

        assert!(matches!(
            result,
            Err(ProcessingError::ConfigurationError { .. })
        ));
        assert_eq!(fs::read_to_string(&file).unwrap(), "<p>x</p>");
        assert!(engine.persistence().run_info().is_none());
    }

    #[tokio::test]
    async fn test_process_directory_missing_directory() {
        let engine = local_engine(DefaultProcessingConfig::default());

        let result = engine
            .process_directory(Path::new("/nonexistent/dir_processor"))
            .await;

        match result {
            Err(ProcessingError::FileDiscoveryError { path, .. }) => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("Expected FileDiscoveryError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_process_directory_with_mock_store() {
        let mut store = MockFileStore::new();
        store
            .expect_list_entries()
            .returning(|_| Ok(vec![PathBuf::from("/data/page.html")]));
        store
            .expect_rename()
            .withf(|from, to| from == Path::new("/data/page.html") && to == Path::new("/data/page-1.html"))
            .times(1)
            .returning(|_, _| Ok(()));
        store
            .expect_read()
            .returning(|_| Ok(b"<html>hi</html>".to_vec()));
        store
            .expect_write()
            .withf(|path, contents| path == Path::new("/data/page-1.html") && contents == b"hi")
            .times(1)
            .returning(|_, _| Ok(()));

        let engine = ProcessingEngine::new(
            store,
            DefaultProcessingConfig::new(1),
            NoOpProgressReporter::new(),
            MemoryRunPersistence::new(),
        );

        let summary = engine.process_directory(Path::new("/data")).await.unwrap();

        assert_eq!(summary.processed_files, 1);
        let records = engine.persistence().get_records();
        assert_eq!(records[0].renamed_path, PathBuf::from("/data/page-1.html"));
        assert_eq!(records[0].tags_removed, 2);
    }

    #[tokio::test]
    async fn test_process_directory_keep_going_with_readme() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README"), "read me").unwrap();
        fs::write(temp_dir.path().join("index.html"), "<p>ok</p>").unwrap();

        let engine = local_engine(
            DefaultProcessingConfig::new(2)
                .with_listing_order(ListingOrder::Alphabetical)
                .with_failure_policy(FailurePolicy::CollectAll),
        );
        let result = engine.process_directory(temp_dir.path()).await;

        assert!(matches!(
            result,
            Err(ProcessingError::BatchFailed { failed: 1, total: 2, .. })
        ));
        // README (1番目) は失敗し、index.html は2番目として処理される
        assert!(temp_dir.path().join("README").exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("index-2.html")).unwrap(),
            "ok"
        );
    }
}
