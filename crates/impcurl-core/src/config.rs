use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::Client;
use crate::preset::{Preset, PresetName};

/// Global configuration loaded from `~/.config/impcurl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpcurlConfig {
    /// curl-impersonate binary: a path, or a name looked up on `PATH`.
    pub binary: String,
    /// Preset name (see `impcurl presets`) or "random". None = no preset.
    #[serde(default)]
    pub preset: Option<String>,
    /// Extra headers sent with every request (emitted in shuffled order).
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Passed to curl as `--max-time`.
    #[serde(default)]
    pub max_time_secs: Option<f64>,
    /// Passed to curl as `--location`.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

fn default_follow_redirects() -> bool {
    true
}

impl Default for ImpcurlConfig {
    fn default() -> Self {
        Self {
            binary: "curl-impersonate".to_string(),
            preset: None,
            headers: BTreeMap::new(),
            max_time_secs: None,
            follow_redirects: true,
        }
    }
}

/// Resolve a preset setting: a known name, or "random".
pub fn resolve_preset(name: &str) -> Result<Preset> {
    if name.trim().eq_ignore_ascii_case("random") {
        return Ok(Preset::random());
    }
    let name: PresetName = name.parse()?;
    Ok(name.build())
}

impl ImpcurlConfig {
    /// Apply binary, preset, headers and flags from this config to `client`.
    pub fn apply(&self, client: &mut Client) -> Result<()> {
        client.set_binary(&self.binary);
        if let Some(name) = &self.preset {
            client.set_preset(resolve_preset(name).context("invalid preset in config")?);
        }
        for (k, v) in &self.headers {
            client.set_header(k.as_str(), v.as_str());
        }
        if let Some(secs) = self.max_time_secs {
            client.set_flag("max-time", secs);
        }
        if self.follow_redirects {
            client.set_flag("location", true);
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("impcurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImpcurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImpcurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<ImpcurlConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: ImpcurlConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FlagValue;

    #[test]
    fn default_config_values() {
        let cfg = ImpcurlConfig::default();
        assert_eq!(cfg.binary, "curl-impersonate");
        assert!(cfg.preset.is_none());
        assert!(cfg.follow_redirects);
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = ImpcurlConfig::default();
        cfg.headers.insert("Accept".to_string(), "application/json".to_string());
        cfg.max_time_secs = Some(12.5);
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ImpcurlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.binary, cfg.binary);
        assert_eq!(parsed.headers, cfg.headers);
        assert_eq!(parsed.max_time_secs, Some(12.5));
    }

    #[test]
    fn config_toml_minimal_uses_defaults() {
        let cfg: ImpcurlConfig = toml::from_str(r#"binary = "/usr/local/bin/curl_chrome116""#).unwrap();
        assert_eq!(cfg.binary, "/usr/local/bin/curl_chrome116");
        assert!(cfg.follow_redirects);
        assert!(cfg.headers.is_empty());
    }

    #[test]
    fn config_toml_full() {
        let toml = r#"
            binary = "curl_safari15_5"
            preset = "safari15.5"
            max_time_secs = 30
            follow_redirects = false

            [headers]
            "Cache-Control" = "no-cache"
        "#;
        let cfg: ImpcurlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.preset.as_deref(), Some("safari15.5"));
        assert_eq!(cfg.max_time_secs, Some(30.0));
        assert!(!cfg.follow_redirects);
        assert_eq!(cfg.headers.get("Cache-Control").map(String::as_str), Some("no-cache"));
    }

    #[test]
    fn apply_sets_client_parameters() {
        let cfg: ImpcurlConfig = toml::from_str(
            r#"
            binary = "curl_chrome116"
            preset = "chrome116"
            max_time_secs = 2

            [headers]
            "X-Test" = "1"
            "#,
        )
        .unwrap();
        let mut client = Client::new();
        cfg.apply(&mut client).unwrap();
        assert_eq!(client.binary_path(), Path::new("curl_chrome116"));
        assert_eq!(client.headers().get("X-Test"), Some("1"));
        assert_eq!(client.flags().get("max-time"), Some(&FlagValue::Float(2.0)));
        assert_eq!(client.flags().get("location"), Some(&FlagValue::Bool(true)));
        assert_eq!(*client.current_preset(), PresetName::Chrome116.build());
    }

    #[test]
    fn apply_rejects_unknown_preset() {
        let cfg = ImpcurlConfig {
            preset: Some("lynx".to_string()),
            ..ImpcurlConfig::default()
        };
        assert!(cfg.apply(&mut Client::new()).is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "binary = \"curl\"\npreset = \"random\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.binary, "curl");
        assert!(resolve_preset(cfg.preset.as_deref().unwrap()).is_ok());
    }
}
