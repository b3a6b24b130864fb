use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGE_URL: &str =
    "https://www.sfc.hk/en/Rules-and-standards/Codes-and-guidelines/Codes";

/// Browser-like request headers sent with the page GET. The site rejects
/// bare client requests, so these mimic a desktop Chrome navigation.
pub fn default_headers() -> BTreeMap<String, String> {
    [
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
        ),
        (
            "Accept-Language",
            "en-TH,en;q=0.9,th-TH;q=0.8,th;q=0.7,en-GB;q=0.6,en-US;q=0.5",
        ),
        ("Cache-Control", "max-age=0"),
        ("Connection", "keep-alive"),
        ("Sec-Fetch-Dest", "document"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-Site", "none"),
        ("Sec-Fetch-User", "?1"),
        ("Upgrade-Insecure-Requests", "1"),
        (
            "User-Agent",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36",
        ),
        (
            "sec-ch-ua",
            "\"Google Chrome\";v=\"125\", \"Chromium\";v=\"125\", \"Not.A/Brand\";v=\"24\"",
        ),
        ("sec-ch-ua-mobile", "?0"),
        ("sec-ch-ua-platform", "\"macOS\""),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_page_url() -> String {
    DEFAULT_PAGE_URL.to_string()
}

/// Global configuration loaded from `~/.config/sfc/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SfcConfig {
    /// Page holding the codes table.
    #[serde(default = "default_page_url")]
    pub page_url: String,
    /// Request headers sent with the GET. Missing table = browser defaults.
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,
}

impl Default for SfcConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            headers: default_headers(),
        }
    }
}

impl SfcConfig {
    /// Reject a page URL that is not absolute http(s), and header names curl would mangle.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.page_url)
            .with_context(|| format!("invalid page_url `{}`", self.page_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!(
                "page_url must be http or https, got `{}`",
                parsed.scheme()
            );
        }
        for name in self.headers.keys() {
            let name = name.trim();
            if name.is_empty() || name.contains(':') {
                anyhow::bail!("invalid header name `{}`", name);
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sfc")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SfcConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SfcConfig::default();
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

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SfcConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: SfcConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
