use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_SOURCE_URL: &str = "https://www.rttnews.com/corpinfo/fdacalendar.aspx";
pub const DEFAULT_OUTPUT_PATH: &str = "public/fda-data.json";
pub const DEFAULT_USER_AGENT: &str = concat!("pdufa_scraper/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub source_url: String,
    pub output_path: PathBuf,
    pub user_agent: String,
}

impl Settings {
    /// Defaults overridden by `PDUFA_SOURCE_URL`, `PDUFA_OUTPUT_PATH`, `PDUFA_USER_AGENT`.
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix("PDUFA"))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("source_url", DEFAULT_SOURCE_URL)?
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
