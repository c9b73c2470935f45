#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Setting up error reporting failed")]
    InstallingColorEyre(#[source] color_eyre::Report),

    #[error("Setting up logging failed")]
    SettingUpLogging(#[source] tracing::subscriber::SetGlobalDefaultError),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error("Error getting local time")]
    TimeOffset(#[source] time::error::IndeterminateOffset),

    #[error("DDP error")]
    Ddp(#[from] ddp_rs::error::DDPError),

    #[error("Failed to bind UDP socket")]
    UDPBind(#[source] std::io::Error),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}
