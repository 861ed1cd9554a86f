// 実行結果永続化の具象実装

use crate::core::{FileRecord, ProcessingSummary, RunInfo, RunPersistence};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;

/// メモリ内保存の永続化実装（テスト用およびレポート不要時）
#[derive(Debug, Clone, Default)]
pub struct MemoryRunPersistence {
    run_info: Arc<Mutex<Option<RunInfo>>>,
    records: Arc<Mutex<Vec<FileRecord>>>,
    summary: Arc<Mutex<Option<ProcessingSummary>>>,
}

impl MemoryRunPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存された記録を取得
    pub fn get_records(&self) -> Vec<FileRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// 設定された実行情報を取得
    pub fn run_info(&self) -> Option<RunInfo> {
        self.run_info.lock().ok().and_then(|info| info.clone())
    }

    /// 完了時に記録されたサマリーを取得
    pub fn summary(&self) -> Option<ProcessingSummary> {
        self.summary.lock().ok().and_then(|summary| summary.clone())
    }

    pub fn is_finalized(&self) -> bool {
        self.summary().is_some()
    }

    pub fn contains_file(&self, original_path: &Path) -> bool {
        self.get_records()
            .iter()
            .any(|record| record.original_path == original_path)
    }

    pub fn stored_count(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }
}

fn poisoned<T>(error: std::sync::PoisonError<T>) -> anyhow::Error {
    anyhow::anyhow!("ロック取得エラー: {error}")
}

#[async_trait]
impl RunPersistence for MemoryRunPersistence {
    async fn set_run_info(&self, info: &RunInfo) -> Result<()> {
        *self.run_info.lock().map_err(poisoned)? = Some(info.clone());
        Ok(())
    }

    async fn store_record(&self, record: &FileRecord) -> Result<()> {
        self.records.lock().map_err(poisoned)?.push(record.clone());
        Ok(())
    }

    async fn finalize(&self, summary: &ProcessingSummary) -> Result<()> {
        *self.summary.lock().map_err(poisoned)? = Some(summary.clone());
        Ok(())
    }
}

/// JSONレポートの出力フォーマット
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_info: Option<RunInfo>,
    pub summary: ProcessingSummary,
    pub files: Vec<FileRecord>,
}

/// JSONレポートファイルへの永続化実装
///
/// 記録はメモリに蓄積し、`finalize`で一度に書き出す。
pub struct JsonReportPersistence {
    file_path: PathBuf,
    run_info: AsyncMutex<Option<RunInfo>>,
    records: AsyncMutex<Vec<FileRecord>>,
}

impl JsonReportPersistence {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            run_info: AsyncMutex::new(None),
            records: AsyncMutex::new(Vec::new()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl RunPersistence for JsonReportPersistence {
    async fn set_run_info(&self, info: &RunInfo) -> Result<()> {
        *self.run_info.lock().await = Some(info.clone());
        Ok(())
    }

    async fn store_record(&self, record: &FileRecord) -> Result<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn finalize(&self, summary: &ProcessingSummary) -> Result<()> {
        let mut files = std::mem::take(&mut *self.records.lock().await);
        files.sort_by_key(|record| record.sequence_number);

        let report = RunReport {
            run_info: self.run_info.lock().await.clone(),
            summary: summary.clone(),
            files,
        };

        // 親ディレクトリが存在しない場合は作成
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("ディレクトリ作成エラー: {}", parent.display()))?;
            }
        }

        let json = serde_json::to_vec_pretty(&report).context("JSONシリアライズエラー")?;
        tokio::fs::write(&self.file_path, json)
            .await
            .with_context(|| format!("レポート書き込みエラー: {}", self.file_path.display()))?;

        Ok(())
    }
}
