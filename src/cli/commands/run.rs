use crate::cli::Cli;
use crate::core::{FailurePolicy, ListingOrder, ProcessingConfig, ProcessingSummary, RunPersistence};
use crate::engine::ProcessingEngine;
use crate::services::{
    ConsoleProgressReporter, DefaultProcessingConfig, JsonReportPersistence, MemoryRunPersistence,
};
use crate::storage::local::LocalFileStore;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration struct for the run command
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub directory: PathBuf,
    pub parallelism: usize,
    pub listing_order: ListingOrder,
    pub failure_policy: FailurePolicy,
    pub report: Option<PathBuf>,
    pub quiet: bool,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            directory: cli.dir.clone(),
            parallelism: cli.parallel,
            listing_order: if cli.sort {
                ListingOrder::Alphabetical
            } else {
                ListingOrder::Listing
            },
            failure_policy: if cli.keep_going {
                FailurePolicy::CollectAll
            } else {
                FailurePolicy::FailFast
            },
            report: cli.report.clone(),
            quiet: cli.quiet,
        }
    }
}

impl RunConfig {
    fn processing_config(&self) -> DefaultProcessingConfig {
        DefaultProcessingConfig::new(self.parallelism)
            .with_listing_order(self.listing_order)
            .with_failure_policy(self.failure_policy)
            .with_progress_reporting(!self.quiet)
    }
}

/// Execute the run command
pub async fn execute_run(config: RunConfig) -> Result<ProcessingSummary> {
    let processing_config = config.processing_config();
    let reporter = if processing_config.enable_progress_reporting() {
        ConsoleProgressReporter::new()
    } else {
        ConsoleProgressReporter::quiet()
    };
    let persistence: Box<dyn RunPersistence> = match &config.report {
        Some(path) => Box::new(JsonReportPersistence::new(path)),
        None => Box::new(MemoryRunPersistence::new()),
    };

    if !config.quiet {
        println!("📂 対象ディレクトリ: {}", config.directory.display());
        println!("⚙️  設定:");
        println!("   - 並列数: {}", processing_config.parallelism());
        println!("   - 列挙順序: {:?}", processing_config.listing_order());
        println!("   - 失敗時: {:?}", processing_config.failure_policy());
        if let Some(report) = &config.report {
            println!("   - レポート: {}", report.display());
        }
    }

    let engine = ProcessingEngine::new(
        LocalFileStore::new(),
        processing_config,
        reporter,
        persistence,
    );

    let summary = engine
        .process_directory(&config.directory)
        .await
        .with_context(|| {
            format!(
                "Failed to process directory: {}",
                config.directory.display()
            )
        })?;

    if !config.quiet {
        println!("\n✅ 処理完了!");
        println!("📊 処理結果:");
        println!("   - 対象ファイル数: {}", summary.total_files);
        println!("   - 成功処理数: {}", summary.processed_files);
        println!("   - 総処理時間: {}ms", summary.total_processing_time_ms);
        println!(
            "   - 平均処理時間: {:.2}ms/ファイル",
            summary.average_time_per_file_ms
        );
        if let Some(report) = &config.report {
            println!("📄 結果は {} に保存されました", report.display());
        }
    }

    Ok(summary)
}
