use clap::Parser;
use dir_processor::cli::{execute_run, Cli, RunConfig};
use dir_processor::services::{announce_process, init_logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("⚠️  {error}");
    }
    announce_process(env!("CARGO_PKG_NAME"));

    if let Err(error) = execute_run(RunConfig::from(&cli)).await {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}
