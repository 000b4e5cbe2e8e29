//! `impcurl get <url>` – perform a request and print the result.

use anyhow::{Context, Result};
use impcurl_core::config::ImpcurlConfig;
use impcurl_core::Exchange;
use impcurl_core::http::HeaderMap;
use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;

use crate::cli::retry::{with_retries, FIRST_DELAY};
use crate::cli::RequestOpts;

fn headers_json(headers: &HeaderMap) -> Value {
    let mut map = serde_json::Map::new();
    for name in headers.keys() {
        let values: Vec<Value> = headers
            .get_all(name)
            .iter()
            .map(|v| Value::String(String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect();
        map.insert(name.as_str().to_string(), Value::Array(values));
    }
    Value::Object(map)
}

fn exchange_json(ex: &Exchange) -> Value {
    json!({
        "status": ex.status(),
        "chain": ex.chain.iter().map(headers_json).collect::<Vec<_>>(),
        "body_len": ex.body().len(),
    })
}

fn print_chain(out: &mut impl Write, ex: &Exchange) -> Result<()> {
    for (i, headers) in ex.chain.iter().enumerate() {
        writeln!(out, "# response {}", i + 1)?;
        for (name, value) in headers {
            writeln!(out, "{}: {}", name, String::from_utf8_lossy(value.as_bytes()))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn run_get(
    cfg: &ImpcurlConfig,
    url: &str,
    opts: &RequestOpts,
    include: bool,
    json: bool,
    retries: Option<u32>,
    output: Option<&Path>,
) -> Result<()> {
    let mut client = opts.build_client(cfg)?;

    let retries = retries.unwrap_or(0);

    tracing::info!(url, retries, "get");
    let ex = with_retries(retries, FIRST_DELAY, || client.request(url))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&exchange_json(&ex))?)?;
        return Ok(());
    }
    if include {
        print_chain(&mut out, &ex)?;
    }
    match output {
        Some(path) => {
            std::fs::write(path, ex.body())
                .with_context(|| format!("writing body to {}", path.display()))?;
            tracing::info!(bytes = ex.body().len(), path = %path.display(), "body written");
        }
        None => out.write_all(ex.body())?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use impcurl_core::http::HeaderValue;

    #[test]
    fn headers_json_groups_repeated_values() {
        let mut h = HeaderMap::new();
        h.append("set-cookie", HeaderValue::from_static("a=1"));
        h.append("set-cookie", HeaderValue::from_static("b=2"));
        h.append("server", HeaderValue::from_static("nginx"));
        let v = headers_json(&h);
        assert_eq!(v["set-cookie"], json!(["a=1", "b=2"]));
        assert_eq!(v["server"], json!(["nginx"]));
    }
}
