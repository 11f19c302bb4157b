use std::time::Duration;

use clap::Parser;
use nutriguard_core::domain::common::{AnalysisConfig, NutriguardConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutriguard-api", about = "Clinical food analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Path prefix every route is mounted under, e.g. "/api".
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AnalysisArgs {
    /// Simulated model inference latency in milliseconds.
    #[arg(long, env = "ANALYSIS_LATENCY_MS", default_value_t = 1000)]
    pub latency_ms: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Emit logs as JSON lines instead of human-readable output.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub json: bool,

    /// Default tracing filter, overridden by RUST_LOG.
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub filter: String,
}

impl From<Args> for NutriguardConfig {
    fn from(args: Args) -> Self {
        Self {
            analysis: AnalysisConfig {
                latency: Duration::from_millis(args.analysis.latency_ms),
            },
        }
    }
}
