// ディレクトリ処理のカスタムエラー型定義

use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

/// ファイルシステム操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    Rename,
    Read,
    Write,
}

impl FsOperation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rename => "rename",
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl std::fmt::Display for FsOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 失敗したファイルとエラーメッセージの組
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileFailure {
    pub file_path: PathBuf,
    pub error: String,
}

/// ディレクトリ処理固有のエラー型
#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("ファイル名エラー: {file_name} - 拡張子の区切り文字がありません")]
    InvalidFileNameError { file_name: String },

    #[error("ファイルシステムエラー: {operation} {path} - {source}")]
    FilesystemError {
        operation: FsOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("デコードエラー: {path} - {source}")]
    DecodingError {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("ファイル発見エラー: {path} - {source}")]
    FileDiscoveryError {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("永続化エラー: {source}")]
    PersistenceError {
        #[source]
        source: anyhow::Error,
    },

    #[error("バッチ処理エラー: {failed}/{total} 件のファイルが失敗しました")]
    BatchFailed {
        failed: usize,
        total: usize,
        failures: Vec<FileFailure>,
    },
}

impl ProcessingError {
    /// ファイル名エラーの作成
    pub fn invalid_file_name(file_name: impl Into<String>) -> Self {
        Self::InvalidFileNameError {
            file_name: file_name.into(),
        }
    }

    /// ファイルシステムエラーの作成
    pub fn filesystem(operation: FsOperation, path: &Path, source: std::io::Error) -> Self {
        Self::FilesystemError {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    /// デコードエラーの作成
    pub fn decoding(path: &Path, source: FromUtf8Error) -> Self {
        Self::DecodingError {
            path: path.to_path_buf(),
            source,
        }
    }

    /// ファイル発見エラーの作成
    pub fn file_discovery(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::FileDiscoveryError {
            path: path.into(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// 永続化エラーの作成
    pub fn persistence(source: anyhow::Error) -> Self {
        Self::PersistenceError { source }
    }

    /// 集約エラーの作成
    pub fn batch_failed(total: usize, failures: Vec<FileFailure>) -> Self {
        Self::BatchFailed {
            failed: failures.len(),
            total,
            failures,
        }
    }
}

/// ディレクトリ処理の結果型
pub type ProcessingResult<T> = std::result::Result<T, ProcessingError>;

impl From<tokio::task::JoinError> for ProcessingError {
    fn from(error: tokio::task::JoinError) -> Self {
        ProcessingError::TaskError { source: error }
    }
}
