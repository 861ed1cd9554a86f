// 進捗監視の具象実装

use crate::core::ProgressReporter;
use async_trait::async_trait;
use std::path::Path;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

fn started_message(total_files: usize) -> String {
    format!("🚀 Renaming and stripping tags in {total_files} files...")
}

fn progress_message(completed: usize, total: usize) -> String {
    let percentage = (completed as f64 / total as f64) * 100.0;
    format!("📊 Files done: {completed}/{total} ({percentage:.1}%)")
}

fn error_message(file_path: &Path, error: &str) -> String {
    format!("❌ Failed to rename/strip {}: {error}", file_path.display())
}

fn completed_message(total_processed: usize, total_errors: usize) -> String {
    format!("✅ Done! Renamed and stripped: {total_processed}, Failed: {total_errors}")
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_files: usize) {
        if !self.quiet {
            println!("{}", started_message(total_files));
        }
    }

    async fn report_progress(&self, completed: usize, total: usize) {
        if !self.quiet && total > 0 && (completed % 100 == 0 || completed == total) {
            println!("{}", progress_message(completed, total));
        }
    }

    async fn report_error(&self, file_path: &Path, error: &str) {
        if !self.quiet {
            eprintln!("{}", error_message(file_path, error));
        }
    }

    async fn report_completed(&self, total_processed: usize, total_errors: usize) {
        if !self.quiet {
            println!("{}", completed_message(total_processed, total_errors));
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_files: usize) {}

    async fn report_progress(&self, _completed: usize, _total: usize) {}

    async fn report_error(&self, _file_path: &Path, _error: &str) {}

    async fn report_completed(&self, _total_processed: usize, _total_errors: usize) {}
}
