use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use serde::Deserialize;

pub const DEFAULT_SITE_DIR: &str = "site";

pub const DEFAULT_PAGES: [&str; 7] = [
    "site/index.html",
    "site/getting-started/installation/index.html",
    "site/getting-started/quickstart/index.html",
    "site/user-guide/core-functions/fzr/index.html",
    "site/plugins/index.html",
    "site/examples/perfectgas/index.html",
    "site/examples/colab/index.html",
];

/// The pages a finished build must contain, and the root that gets counted.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    pub site_dir: PathBuf,
    pub pages: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            pages: DEFAULT_PAGES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Manifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;

        Self::parse(&text).with_context(|| format!("invalid manifest {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
