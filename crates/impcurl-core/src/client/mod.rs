//! Request orchestration: compose preset and user parameters into curl
//! arguments, run the binary, and turn its output into a response.
//!
//! A `Client` is reusable across requests but holds mutable state (its
//! parameter stores and the resolved binary path), so concurrent requests
//! need one client each or external locking.

mod resolve;
mod response;
mod run;

pub use response::{Exchange, Response};

use std::path::{Path, PathBuf};

use crate::error::RequestError;
use crate::params::{FlagValue, Flags, Headers};
use crate::preset::Preset;

const DEFAULT_BINARY: &str = "curl";

/// curl-impersonate driver.
#[derive(Debug, Clone)]
pub struct Client {
    headers: Headers,
    flags: Flags,
    preset: Preset,
    binary: PathBuf,
    validated: bool,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Client with the plain `curl` binary, no preset, and the flags needed
    /// to parse output (`--include`, `--silent`).
    pub fn new() -> Self {
        Self {
            headers: Headers::new(),
            flags: Flags::new().with("include", true).with("silent", true),
            preset: Preset::default(),
            binary: PathBuf::from(DEFAULT_BINARY),
            validated: false,
        }
    }

    pub fn binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.set_binary(binary);
        self
    }

    pub fn preset(mut self, preset: Preset) -> Self {
        self.set_preset(preset);
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(key, value);
        self
    }

    pub fn flag(mut self, name: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.set_flag(name, value);
        self
    }

    /// Change the binary; the next request resolves it again.
    pub fn set_binary(&mut self, binary: impl Into<PathBuf>) {
        self.binary = binary.into();
        self.validated = false;
    }

    pub fn set_preset(&mut self, preset: Preset) {
        self.preset = preset;
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.set(key, value);
    }

    pub fn set_flag(&mut self, name: impl Into<String>, value: impl Into<FlagValue>) {
        self.flags.set(name, value);
    }

    /// Currently configured (or, once validated, resolved) binary path.
    pub fn binary_path(&self) -> &Path {
        &self.binary
    }

    pub fn is_validated(&self) -> bool {
        self.validated
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn current_preset(&self) -> &Preset {
        &self.preset
    }

    /// Resolve the binary to an absolute path (file on disk, else `PATH`).
    pub fn validate(&mut self) -> Result<&Path, RequestError> {
        self.validated = false;
        let resolved =
            resolve::resolve_binary(&self.binary).ok_or_else(|| RequestError::BinaryNotFound {
                binary: self.binary.display().to_string(),
            })?;
        tracing::debug!(binary = %resolved.display(), "resolved curl binary");
        self.binary = resolved;
        self.validated = true;
        Ok(&self.binary)
    }

    /// Arguments for a request to `url`, in the order curl receives them:
    /// preset headers (fixed order), user headers (shuffled), preset flags,
    /// user flags, URL. Duplicate flags are passed through for curl to
    /// resolve.
    pub fn build_args(&self, url: &str) -> Vec<String> {
        let mut args = self.preset.headers.generate(false);
        args.extend(self.headers.generate(true));
        args.extend(self.preset.flags.generate());
        args.extend(self.flags.generate());
        args.push(url.to_string());
        args
    }

    /// Perform a request and parse the result.
    ///
    /// Status codes >= 400 are returned as `RequestError::Http`.
    pub fn request(&mut self, url: &str) -> Result<Exchange, RequestError> {
        if !self.validated {
            self.validate()?;
        }
        let args = self.build_args(url);
        tracing::debug!(url, args = args.len(), binary = %self.binary.display(), "running curl");
        let stdout = run::run_tool(&self.binary, &args)?;
        let exchange = response::assemble(&stdout)?;
        tracing::debug!(
            url,
            status = exchange.response.status,
            hops = exchange.chain.len(),
            body_len = exchange.response.body.len(),
            "request completed"
        );
        Ok(exchange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PresetName;

    #[test]
    fn new_client_has_parse_flags() {
        let c = Client::new();
        assert_eq!(c.flags().get("include"), Some(&FlagValue::Bool(true)));
        assert_eq!(c.flags().get("silent"), Some(&FlagValue::Bool(true)));
        assert_eq!(c.binary_path(), Path::new("curl"));
        assert!(!c.is_validated());
    }

    #[test]
    fn build_args_orders_sections() {
        let preset = Preset::new(
            Headers::new().with("User-Agent", "UA").with("Accept", "*/*"),
            Flags::new().with("http2", true),
        );
        let c = Client {
            headers: Headers::new().with("X-One", "1"),
            flags: Flags::new().with("max-time", 5),
            preset,
            binary: PathBuf::from("curl"),
            validated: false,
        };
        let args = c.build_args("https://example.com/");
        assert_eq!(
            args,
            vec![
                "-H",
                "'User-Agent: UA'",
                "-H",
                "'Accept: */*'",
                "-H",
                "'X-One: 1'",
                "--http2",
                "--max-time",
                "5",
                "https://example.com/",
            ]
        );
    }

    #[test]
    fn duplicate_flags_are_passed_through() {
        let c = Client::new()
            .preset(Preset::new(Headers::new(), Flags::new().with("compressed", true)))
            .flag("compressed", true);
        let args = c.build_args("u");
        assert_eq!(args.iter().filter(|a| *a == "--compressed").count(), 2);
        assert_eq!(args.last().map(String::as_str), Some("u"));
    }

    #[test]
    fn preset_headers_keep_order_in_args() {
        let c = Client::new().preset(PresetName::Chrome116.build());
        let args = c.build_args("https://example.com/");
        let preset_keys: Vec<String> = PresetName::Chrome116
            .build()
            .headers
            .iter()
            .map(|(k, _)| format!("'{}:", k))
            .collect();
        let emitted: Vec<&String> = args.iter().filter(|a| a.starts_with('\'')).collect();
        assert_eq!(emitted.len(), preset_keys.len());
        for (arg, key) in emitted.iter().zip(&preset_keys) {
            assert!(arg.starts_with(key.as_str()), "{arg} vs {key}");
        }
    }

    #[test]
    fn set_binary_invalidates() {
        let mut c = Client::new();
        c.validated = true;
        c.set_binary("/opt/curl-impersonate/curl_chrome116");
        assert!(!c.is_validated());
    }

    #[test]
    fn validate_fails_for_unknown_binary() {
        let mut c = Client::new().binary("impcurl-no-such-binary-7f3a");
        let err = c.validate().unwrap_err();
        assert!(matches!(err, RequestError::BinaryNotFound { .. }));
        assert!(!c.is_validated());
    }

    #[test]
    fn request_with_unknown_binary_fails_before_running() {
        let mut c = Client::new().binary("impcurl-no-such-binary-7f3a");
        let err = c.request("https://example.com/").unwrap_err();
        assert!(matches!(err, RequestError::BinaryNotFound { .. }), "{err:?}");
    }
}
