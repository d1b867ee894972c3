use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};

use crate::Result;

static CONFIG_FILE_NAME: &str = ".chefcli.yaml";
static DATA_DIR_NAME: &str = ".chefcli";
static COOKIES_FILE_NAME: &str = "cookies.json";

static DEFAULT_BASE_URL: &str = "https://www.codechef.com";
static USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/62.0.3202.62 Safari/537.36";

/// Runtime configuration, optionally overridden by `~/.chefcli.yaml`.
#[derive(Serialize, Deserialize, Getters, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
#[get = "pub"]
pub struct Config {
    base_url: String,
    session: SessionConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME));
        match config_path {
            Some(path) if path.is_file() => {
                let file = File::open(&path)
                    .with_context(|| format!("Could not open config file : {}", path.display()))?;
                serde_yaml::from_reader(file).context("Could not parse config file")
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
impl Config {
    pub fn test_with_cookies_path(cookies_path: PathBuf) -> Self {
        let mut conf = Self::default();
        conf.session.cookies_path = cookies_path;
        conf
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            session: SessionConfig::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Getters, CopyGetters, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    #[serde(with = "humantime_serde")]
    #[get_copy = "pub"]
    timeout: Duration,
    #[serde(skip, default = "SessionConfig::default_cookies_path")]
    #[get = "pub"]
    cookies_path: PathBuf,
    #[get = "pub"]
    user_agent: String,
}

impl SessionConfig {
    fn default_cookies_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
            .join(COOKIES_FILE_NAME)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            cookies_path: Self::default_cookies_path(),
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url() {
        let conf = Config::default();
        assert_eq!(conf.base_url(), "https://www.codechef.com");
    }

    #[test]
    fn parse_config_with_humantime_timeout() -> anyhow::Result<()> {
        let conf: Config = serde_yaml::from_str(
            "base_url: https://staging.codechef.com\nsession:\n  timeout: 15s\n",
        )?;
        assert_eq!(conf.base_url(), "https://staging.codechef.com");
        assert_eq!(conf.session().timeout(), Duration::from_secs(15));
        Ok(())
    }

    #[test]
    fn cookies_path_ends_with_fixed_name() {
        let conf = Config::default();
        assert!(conf
            .session()
            .cookies_path()
            .ends_with(".chefcli/cookies.json"));
    }
}
