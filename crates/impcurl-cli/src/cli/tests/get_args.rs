//! Tests for get and args.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use impcurl_core::FlagValue;
use std::path::Path;

#[test]
fn cli_parse_get_defaults() {
    match parse(&["impcurl", "get", "https://example.com/"]) {
        CliCommand::Get {
            url,
            opts,
            include,
            json,
            retries,
            output,
        } => {
            assert_eq!(url, "https://example.com/");
            assert!(opts.preset.is_none());
            assert!(opts.headers.is_empty());
            assert!(opts.flags.is_empty());
            assert!(opts.binary.is_none());
            assert!(!include);
            assert!(!json);
            assert!(retries.is_none());
            assert!(output.is_none());
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_all_options() {
    match parse(&[
        "impcurl",
        "get",
        "https://example.com/",
        "-p",
        "chrome116",
        "-H",
        "Accept: application/json",
        "--header",
        "X-Trace: 1",
        "-f",
        "compressed",
        "--flag",
        "max-time=5",
        "--binary",
        "/opt/curl_chrome116",
        "-i",
        "--retries",
        "2",
        "-o",
        "out.html",
    ]) {
        CliCommand::Get {
            opts,
            include,
            retries,
            output,
            ..
        } => {
            assert_eq!(opts.preset.as_deref(), Some("chrome116"));
            assert_eq!(
                opts.headers,
                vec![
                    ("Accept".to_string(), "application/json".to_string()),
                    ("X-Trace".to_string(), "1".to_string()),
                ]
            );
            assert_eq!(
                opts.flags,
                vec![
                    ("compressed".to_string(), FlagValue::Bool(true)),
                    ("max-time".to_string(), FlagValue::Str("5".to_string())),
                ]
            );
            assert_eq!(opts.binary.as_deref(), Some(Path::new("/opt/curl_chrome116")));
            assert!(include);
            assert_eq!(retries, Some(2));
            assert_eq!(output.as_deref(), Some(Path::new("out.html")));
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_json_conflicts_with_include() {
    assert!(Cli::try_parse_from(["impcurl", "get", "u", "--json", "-i"]).is_err());
}

#[test]
fn cli_parse_get_rejects_bad_header() {
    assert!(Cli::try_parse_from(["impcurl", "get", "u", "-H", "no-colon"]).is_err());
}

#[test]
fn cli_parse_get_global_config() {
    let cli = Cli::try_parse_from(["impcurl", "get", "u", "--config", "/tmp/impcurl.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/impcurl.toml")));
}

#[test]
fn cli_parse_args() {
    match parse(&["impcurl", "args", "https://example.com/", "--preset", "random"]) {
        CliCommand::Args { url, opts } => {
            assert_eq!(url, "https://example.com/");
            assert_eq!(opts.preset.as_deref(), Some("random"));
        }
        _ => panic!("expected Args"),
    }
}
