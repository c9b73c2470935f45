#[derive(Debug, serde::Deserialize)]
pub struct Config {
    pub display: DisplayConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, serde::Deserialize)]
pub struct DisplayConfig {
    /// Address of the DDP receiver
    pub host: std::net::IpAddr,

    #[serde(default = "default_ddp_port")]
    pub port: u16,

    /// Local port to send from
    pub udp_port: u16,

    /// Percent, values above 100 are clamped
    #[serde(default = "default_brightness")]
    pub brightness: u8,
}

fn default_ddp_port() -> u16 {
    4048
}

fn default_brightness() -> u8 {
    25
}

#[derive(Debug, serde::Deserialize)]
pub struct RenderConfig {
    /// Pause after each presented frame
    #[serde(with = "humantime_serde", default = "default_interval")]
    pub interval: std::time::Duration,
}

fn default_interval() -> std::time::Duration {
    std::time::Duration::from_millis(250)
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
        }
    }
}

impl Config {
    pub async fn load(path: &camino::Utf8Path) -> Result<Self, ConfigError> {
        let config_str =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::ReadingFile {
                    path: path.to_path_buf(),
                    source,
                })?;

        Self::parse(&config_str)
    }

    fn parse(config_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(config_str).map_err(ConfigError::ParsingConfig)?;

        if config.render.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file from path '{}'", .path)]
    ReadingFile {
        path: camino::Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    ParsingConfig(#[from] toml::de::Error),

    #[error("Render interval must not be zero")]
    ZeroInterval,
}
