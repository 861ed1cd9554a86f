// 処理に関連するデータ型定義

use super::error::{FileFailure, ProcessingError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ワーカーに渡す単一タスク（ファイルパスと列挙順のインデックス）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub path: PathBuf,
    pub index: usize,
}

impl FileTask {
    pub fn new(path: impl Into<PathBuf>, index: usize) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }

    /// ファイル名に付与する1始まりの連番
    pub fn sequence_number(&self) -> usize {
        self.index + 1
    }
}

/// ディレクトリ列挙の順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingOrder {
    /// ファイルシステムが返した順序のまま
    #[default]
    Listing,
    /// ファイル名のアルファベット順
    Alphabetical,
}

/// タスク失敗時の振る舞い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// 最初のエラーでバッチ全体を中断
    #[default]
    FailFast,
    /// 全タスクを実行し、エラーを集約
    CollectAll,
}

/// 実行情報（レポートの先頭に記録）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunInfo {
    pub timestamp: String,
    pub directory: PathBuf,
    pub total_files: usize,
    pub parallelism: usize,
    pub listing_order: ListingOrder,
    pub failure_policy: FailurePolicy,
}

/// 成功したファイルの処理記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub original_path: PathBuf,
    pub renamed_path: PathBuf,
    pub sequence_number: usize,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub tags_removed: usize,
    pub elapsed_ms: u64,
}

/// 個別処理の結果
#[derive(Debug)]
pub enum ProcessingOutcome {
    Success(FileRecord),
    Error {
        file_path: PathBuf,
        error: ProcessingError,
    },
}

impl ProcessingOutcome {
    pub fn file_path(&self) -> &PathBuf {
        match self {
            Self::Success(record) => &record.original_path,
            Self::Error { file_path, .. } => file_path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// 処理全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingSummary {
    pub total_files: usize,
    pub processed_files: usize,
    pub error_count: usize,
    /// 中断により未実行となったタスク数
    pub skipped_files: usize,
    pub failures: Vec<FileFailure>,
    pub total_processing_time_ms: u64,
    pub average_time_per_file_ms: f64,
}

impl ProcessingSummary {
    pub fn empty() -> Self {
        Self {
            total_files: 0,
            processed_files: 0,
            error_count: 0,
            skipped_files: 0,
            failures: Vec::new(),
            total_processing_time_ms: 0,
            average_time_per_file_ms: 0.0,
        }
    }
}
