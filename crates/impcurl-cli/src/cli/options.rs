//! Request options shared by `get` and `args`.

use anyhow::{bail, Result};
use clap::Args;
use impcurl_core::config::{self, ImpcurlConfig};
use impcurl_core::{Client, FlagValue};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Args)]
pub struct RequestOpts {
    /// Browser preset name, or "random". Overrides the config file.
    #[arg(short = 'p', long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Extra request header, e.g. -H 'Accept: application/json'. Repeatable.
    #[arg(short = 'H', long = "header", value_name = "HEADER", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Extra curl flag as NAME or NAME=VALUE (without leading dashes). Repeatable.
    #[arg(short = 'f', long = "flag", value_name = "FLAG", value_parser = parse_flag)]
    pub flags: Vec<(String, FlagValue)>,

    /// curl-impersonate binary. Overrides the config file.
    #[arg(long, value_name = "PATH")]
    pub binary: Option<PathBuf>,
}

/// Parse `Name: Value`.
pub fn parse_header(raw: &str) -> Result<(String, String)> {
    let Some((name, value)) = raw.split_once(':') else {
        bail!("header must look like 'Name: Value'");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("header name is empty");
    }
    let value = value.trim();
    if value.contains('\'') {
        bail!("header value must not contain a single quote");
    }
    Ok((name.to_string(), value.to_string()))
}

/// Parse `name` (bare switch) or `name=value`; a leading `--` is tolerated.
pub fn parse_flag(raw: &str) -> Result<(String, FlagValue)> {
    let raw = raw.trim().trim_start_matches("--");
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, FlagValue::from(value)),
        None => (raw, FlagValue::Bool(true)),
    };
    if name.is_empty() {
        bail!("flag name is empty");
    }
    Ok((name.to_string(), value))
}

impl RequestOpts {
    /// Client from the config file with these options layered on top.
    pub fn build_client(&self, cfg: &ImpcurlConfig) -> Result<Client> {
        let mut client = Client::new();
        cfg.apply(&mut client)?;
        if let Some(binary) = &self.binary {
            client.set_binary(binary);
        }
        if let Some(name) = &self.preset {
            client.set_preset(config::resolve_preset(name)?);
        }
        for (k, v) in &self.headers {
            client.set_header(k.as_str(), v.as_str());
        }
        for (name, value) in &self.flags {
            client.set_flag(name.as_str(), value.clone());
        }
        Ok(client)
    }
}
