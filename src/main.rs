//! news-collector — binary entrypoint.
//! Meant to be run by a scheduler; every invocation performs one command and exits.

use std::path::PathBuf;

use clap::Parser;
use news_collector::config::paths::{ENV_AGENT_DIR, ENV_NOTES_DIR, ENV_SOURCES_PATH};
use news_collector::ingest::providers::twitter;
use news_collector::{logging, pipeline, AppPaths, Pipeline};

#[derive(Debug, Parser)]
#[command(name = "news-collector", about = "Collect social posts and RSS headlines into a daily note")]
struct Cli {
    /// collect | status | reset
    #[arg(default_value = "collect")]
    command: String,

    /// Directory holding config/ and logs/
    #[arg(long, env = ENV_AGENT_DIR, default_value = ".")]
    agent_dir: PathBuf,

    /// Sources file (default: <agent-dir>/config/sources.json)
    #[arg(long, env = ENV_SOURCES_PATH)]
    sources: Option<PathBuf>,

    /// Root folder for daily notes (default: <agent-dir>/notes)
    #[arg(long, env = ENV_NOTES_DIR)]
    notes_dir: Option<PathBuf>,
}

impl Cli {
    fn paths(&self) -> AppPaths {
        let mut paths = AppPaths::under(&self.agent_dir);
        if let Some(p) = &self.sources {
            paths = paths.with_sources_file(p);
        }
        if let Some(p) = &self.notes_dir {
            paths = paths.with_notes_dir(p);
        }
        paths
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads env-backed flags; no-op when absent.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let paths = cli.paths();
    let _guard = logging::init_logging(&paths.log_file)?;

    let result = run(&cli.command, paths).await;
    if let Err(e) = &result {
        logging::report_fatal(e);
    }
    result
}

async fn run(command: &str, paths: AppPaths) -> anyhow::Result<()> {
    match command {
        "collect" => {
            let pipeline = Pipeline::new(paths, twitter::capability_from_env())?;
            let summary = pipeline.collect().await?;
            tracing::info!(
                collected = summary.collected,
                new = summary.accepted,
                note = ?summary.note_path,
                "run summary"
            );
        }
        "status" => {
            let report = pipeline::status(&paths)?;
            println!("{report}");
        }
        "reset" => {
            pipeline::reset(&paths)?;
            println!("Seen URLs cleared");
        }
        other => println!("Unknown command: {other}"),
    }
    Ok(())
}
