use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use depvet_core::review::{DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Parser)]
#[command(
    name = "depvet",
    version,
    about = "Supply-chain risk triage for one installed dependency package"
)]
pub struct Args {
    /// Name of the installed package to triage
    pub package: String,

    /// Directory containing installed packages
    #[arg(long, default_value = "node_modules")]
    pub modules_dir: PathBuf,

    /// Model name for the review call
    #[arg(long, env = "SLM_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the inference service
    #[arg(long, env = "OLLAMA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
