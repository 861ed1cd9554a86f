// ログ初期化
// プロセス起動時に一度だけ呼び出す

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// 詳細度フラグからログレベルを決定
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG`が設定されていればそれを優先する
pub fn build_env_filter(verbose: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dir_processor={}", level_for(verbose, quiet))))
}

/// tracingサブスクライバーをstderrに設定
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("ロガー初期化エラー: {e}"))
}

/// 起動時にプロセス識別情報を出力
pub fn announce_process(program: &str) {
    tracing::info!(
        program,
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id(),
        "process started"
    );
}
