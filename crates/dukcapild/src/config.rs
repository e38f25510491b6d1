//! Configuration management for dukcapild.
//!
//! Loads settings from `$DUKCAPIL_CONFIG` or /etc/dukcapil/config.toml.
//! A path named in the environment must load; the default path falls back
//! to defaults. The bot token is never read from the file, only from the
//! environment variable named in `[bot].token_env`.

use anyhow::{bail, Context, Result};
use dukcapil_shared::MAX_MESSAGE_CHARS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/dukcapil/config.toml";

/// Environment variable that overrides the config file path
pub const CONFIG_ENV: &str = "DUKCAPIL_CONFIG";

/// Telegram connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Environment variable holding the bot token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Bot API base URL (without the /bot<token> suffix)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Long-poll timeout for getUpdates
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,

    /// HTTP timeout for every Bot API call; must exceed the poll timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Skip updates queued while the bot was down
    #[serde(default = "default_drop_pending")]
    pub drop_pending_updates: bool,

    /// Publish the command list with setMyCommands on start
    #[serde(default = "default_register_commands")]
    pub register_commands: bool,
}

fn default_token_env() -> String {
    "BOT_TOKEN".to_string()
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_poll_timeout() -> u64 {
    30
}

fn default_request_timeout() -> u64 {
    45
}

fn default_drop_pending() -> bool {
    true
}

fn default_register_commands() -> bool {
    true
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token_env: default_token_env(),
            api_base: default_api_base(),
            poll_timeout_secs: default_poll_timeout(),
            request_timeout_secs: default_request_timeout(),
            drop_pending_updates: default_drop_pending(),
            register_commands: default_register_commands(),
        }
    }
}

impl BotConfig {
    /// Read the bot token from the configured environment variable
    pub fn token(&self) -> Result<String> {
        let token = std::env::var(&self.token_env)
            .with_context(|| format!("{} is not set", self.token_env))?;
        let token = token.trim().to_string();
        if token.is_empty() {
            bail!("{} is empty", self.token_env);
        }
        Ok(token)
    }
}

/// Message formatting settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Maximum characters per outgoing message
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
}

fn default_max_message_chars() -> usize {
    MAX_MESSAGE_CHARS
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            max_message_chars: default_max_message_chars(),
        }
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

impl Config {
    /// Load config from `$DUKCAPIL_CONFIG` or the default path
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::load_with(explicit.as_deref(), Path::new(CONFIG_PATH))
    }

    /// An explicit path that fails to load is an error; `default_path`
    /// falls back to defaults with a warning.
    pub fn load_with(explicit: Option<&Path>, default_path: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path)
                .with_context(|| format!("{} names an unusable config", CONFIG_ENV));
        }
        match Self::load_from_path(default_path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(
                    "Config not loaded from {}, using defaults: {:#}",
                    default_path.display(),
                    e
                );
                Ok(Config::default())
            }
        }
    }

    /// Load config from specific path
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        let limit = self.format.max_message_chars;
        if limit < 1 || limit > MAX_MESSAGE_CHARS {
            bail!(
                "format.max_message_chars must be between 1 and {}, got {}",
                MAX_MESSAGE_CHARS,
                limit
            );
        }
        if self.bot.request_timeout_secs <= self.bot.poll_timeout_secs {
            bail!(
                "bot.request_timeout_secs ({}) must exceed bot.poll_timeout_secs ({})",
                self.bot.request_timeout_secs,
                self.bot.poll_timeout_secs
            );
        }
        if self.bot.token_env.trim().is_empty() {
            bail!("bot.token_env must name an environment variable");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bot.token_env, "BOT_TOKEN");
        assert_eq!(config.bot.poll_timeout_secs, 30);
        assert!(config.bot.drop_pending_updates);
        assert_eq!(config.format.max_message_chars, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[bot]
poll_timeout_secs = 10
drop_pending_updates = false

[format]
max_message_chars = 1000
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bot.poll_timeout_secs, 10);
        assert!(!config.bot.drop_pending_updates);
        assert_eq!(config.format.max_message_chars, 1000);
        // Defaults for missing fields
        assert_eq!(config.bot.api_base, "https://api.telegram.org");
        assert!(config.bot.register_commands);
    }

    #[test]
    fn test_empty_file_is_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.bot.request_timeout_secs, 45);
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = Config::default();
        config.format.max_message_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_limit_above_transport() {
        let mut config = Config::default();
        config.format.max_message_chars = 5000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_request_timeout() {
        let mut config = Config::default();
        config.bot.request_timeout_secs = config.bot.poll_timeout_secs;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_token_from_env() {
        let mut config = Config::default();
        config.bot.token_env = "DUKCAPILD_TEST_TOKEN_SET".to_string();
        std::env::set_var("DUKCAPILD_TEST_TOKEN_SET", " 123:abc \n");
        assert_eq!(config.bot.token().unwrap(), "123:abc");
    }

    #[test]
    fn test_token_missing_or_blank() {
        let mut config = Config::default();
        config.bot.token_env = "DUKCAPILD_TEST_TOKEN_UNSET".to_string();
        assert!(config.bot.token().is_err());

        config.bot.token_env = "DUKCAPILD_TEST_TOKEN_BLANK".to_string();
        std::env::set_var("DUKCAPILD_TEST_TOKEN_BLANK", "   ");
        assert!(config.bot.token().is_err());
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format]\nmax_message_chars = 2048").unwrap();
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.format.max_message_chars, 2048);
    }

    #[test]
    fn test_load_from_path_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format\nmax_message_chars = ").unwrap();
        assert!(Config::load_from_path(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load_from_path("/nonexistent/dukcapil.toml").is_err());
    }

    #[test]
    fn test_explicit_missing_path_is_fatal() {
        let missing = Path::new("/nonexistent/dukcapil.toml");
        let err = Config::load_with(Some(missing), Path::new(CONFIG_PATH)).unwrap_err();
        assert!(format!("{:#}", err).contains(CONFIG_ENV));
    }

    #[test]
    fn test_explicit_invalid_toml_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bot\npoll_timeout_secs = ").unwrap();
        assert!(Config::load_with(Some(file.path()), Path::new(CONFIG_PATH)).is_err());
    }

    #[test]
    fn test_explicit_path_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[bot]\nregister_commands = false").unwrap();
        let config = Config::load_with(Some(file.path()), Path::new(CONFIG_PATH)).unwrap();
        assert!(!config.bot.register_commands);
    }

    #[test]
    fn test_default_path_falls_back() {
        let config = Config::load_with(None, Path::new("/nonexistent/dukcapil.toml")).unwrap();
        assert_eq!(config.format.max_message_chars, 4096);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format\nmax_message_chars = ").unwrap();
        let config = Config::load_with(None, file.path()).unwrap();
        assert_eq!(config.bot.poll_timeout_secs, 30);
    }
}
