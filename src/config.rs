use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use url::Url;

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "site.yaml";

/// Server configuration.
///
/// Every field has a default, so an empty document (or no file at all)
/// yields the fixed loopback setup the site is normally served from.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Address the listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Directory holding `html/`, `css/`, `imgs/` and `videos/`.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Base of same-origin redirect URLs.
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:5012".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_origin() -> String {
    "http://localhost:5012".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            root: default_root(),
            origin: default_origin(),
        }
    }
}

impl Config {
    /// Loads `site.yaml` from the working directory, or the defaults if
    /// there is no such file.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(text)?;
        cfg.origin_url()?;
        Ok(cfg)
    }

    /// The configured origin as an absolute URL.
    pub fn origin_url(&self) -> anyhow::Result<Url> {
        let url = Url::parse(&self.origin)
            .with_context(|| format!("invalid origin {:?}", self.origin))?;
        if url.cannot_be_a_base() {
            anyhow::bail!("origin {:?} cannot be used as a base URL", self.origin);
        }
        Ok(url)
    }
}
