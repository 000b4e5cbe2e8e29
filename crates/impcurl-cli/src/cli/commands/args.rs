//! `impcurl args <url>` – print the curl command line without running it.

use anyhow::Result;
use impcurl_core::config::ImpcurlConfig;

use crate::cli::RequestOpts;

pub fn run_args(cfg: &ImpcurlConfig, url: &str, opts: &RequestOpts) -> Result<()> {
    let client = opts.build_client(cfg)?;
    println!("{}", client.binary_path().display());
    for arg in client.build_args(url) {
        println!("  {}", arg);
    }
    Ok(())
}
