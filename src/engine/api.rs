// 高レベル公開API
// ProcessingEngineを簡単に使用できるようにするための便利な関数

use super::ProcessingEngine;
use crate::{
    core::{ProcessingConfig, ProcessingResult, ProcessingSummary, ProgressReporter, RunPersistence},
    services::{
        ConsoleProgressReporter, DefaultProcessingConfig, MemoryRunPersistence,
        NoOpProgressReporter,
    },
    storage::{local::LocalFileStore, FileStore},
};
use std::path::Path;

/// ディレクトリを指定の並列数で処理する
///
/// ローカルファイルシステムと静音エンジンを使う最小構成のAPI。
pub async fn process(directory: &Path, parallelism: usize) -> ProcessingResult<ProcessingSummary> {
    let engine = ProcessingEngine::new(
        LocalFileStore::new(),
        DefaultProcessingConfig::new(parallelism),
        NoOpProgressReporter::new(),
        MemoryRunPersistence::new(),
    );
    engine.process_directory(directory).await
}

/// 設定済みProcessingEngineでディレクトリを処理
pub async fn process_directory_with_engine<S, C, R, P>(
    directory: &Path,
    engine: &ProcessingEngine<S, C, R, P>,
) -> ProcessingResult<ProcessingSummary>
where
    S: FileStore + 'static,
    C: ProcessingConfig,
    R: ProgressReporter + 'static,
    P: RunPersistence + 'static,
{
    engine.process_directory(directory).await
}

/// ProcessingEngine作成のヘルパー関数
///
/// デフォルト設定での簡単なエンジン作成
pub fn create_default_processing_engine<S>(
    store: S,
) -> ProcessingEngine<S, DefaultProcessingConfig, ConsoleProgressReporter, MemoryRunPersistence>
where
    S: FileStore + 'static,
{
    ProcessingEngine::new(
        store,
        DefaultProcessingConfig::default(),
        ConsoleProgressReporter::new(),
        MemoryRunPersistence::new(),
    )
}

/// ProcessingEngine作成のヘルパー関数（静音版）
///
/// テストやバックグラウンド処理用の静音エンジン作成
pub fn create_quiet_processing_engine<S>(
    store: S,
) -> ProcessingEngine<S, DefaultProcessingConfig, NoOpProgressReporter, MemoryRunPersistence>
where
    S: FileStore + 'static,
{
    ProcessingEngine::new(
        store,
        DefaultProcessingConfig::default().with_progress_reporting(false),
        NoOpProgressReporter::new(),
        MemoryRunPersistence::new(),
    )
}
