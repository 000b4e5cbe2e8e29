//! CLI for impcurl.

mod commands;
mod options;
mod retry;

use anyhow::Result;
use clap::{Parser, Subcommand};
use impcurl_core::config;
use std::path::PathBuf;

use commands::{run_args, run_explain, run_get, run_presets};
pub use options::RequestOpts;

/// Top-level CLI for impcurl.
#[derive(Debug, Parser)]
#[command(name = "impcurl")]
#[command(about = "impcurl: browser-impersonating HTTP requests via curl-impersonate", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/impcurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a URL and print the response body.
    Get {
        /// HTTP/HTTPS URL to fetch.
        url: String,

        #[command(flatten)]
        opts: RequestOpts,

        /// Print the headers of every response in the chain before the body.
        #[arg(short = 'i', long)]
        include: bool,

        /// Print status and header chain as JSON instead of the body.
        #[arg(long, conflicts_with = "include")]
        json: bool,

        /// Retry timeouts, connection failures, 429 and 5xx up to N extra times.
        #[arg(long, value_name = "N")]
        retries: Option<u32>,

        /// Write the body to FILE instead of stdout.
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the curl arguments a request would use, without running it.
    Args {
        /// HTTP/HTTPS URL.
        url: String,

        #[command(flatten)]
        opts: RequestOpts,
    },

    /// List available browser presets.
    Presets,

    /// Describe a curl exit code.
    Explain {
        /// curl exit code.
        code: i32,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Get {
                url,
                opts,
                include,
                json,
                retries,
                output,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_get(&cfg, &url, &opts, include, json, retries, output.as_deref())?;
            }
            CliCommand::Args { url, opts } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_args(&cfg, &url, &opts)?;
            }
            CliCommand::Presets => run_presets(),
            CliCommand::Explain { code } => run_explain(code),
        }

        Ok(())
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<config::ImpcurlConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
