//! BotConfig: BaseConfig + DirectoryConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, DirectoryConfig};

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub directory: DirectoryConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let directory = DirectoryConfig::from_env()?;
        Ok(Self { base, directory })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.directory.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn directory(&self) -> &DirectoryConfig {
        &self.directory
    }

    pub fn bot_token(&self) -> Option<&str> {
        self.base.bot_token.as_deref()
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
}
