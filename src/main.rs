mod blocks;
mod cli;
mod color;
mod compositor;
mod config;
mod diamond;
mod error;
mod frame;
mod logging;
mod preview;
mod render;
mod sink;
mod systemd;
mod time_sample;
mod worm;
mod writer;

use crate::time_sample::TimeSource;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::eyre::Result<()> {
    setup_panic();
    color_eyre::install().map_err(crate::error::Error::InstallingColorEyre)?;
    let cli = <crate::cli::Cli as clap::Parser>::parse();
    crate::logging::setup(cli.verbosity)?;

    match cli.command {
        cli::Command::Run { config } => {
            let cfg = crate::config::Config::load(&config).await?;
            run(cfg).await?;
        }
        cli::Command::VerifyConfig { config } => {
            let cfg = crate::config::Config::load(&config).await?;
            tracing::info!(?cfg, "Configuration verified");
        }
        cli::Command::Preview { at } => {
            preview(at)?;
        }
    }

    Ok(())
}

fn setup_panic() {
    human_panic::setup_panic!(human_panic::Metadata::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
    .authors("Matthias Beyer <mail@beyermatthias.de>"));
}

async fn run(config: crate::config::Config) -> Result<(), crate::error::Error> {
    let process_state = crate::systemd::ProcessState::new(tracing::info_span!("service"));
    process_state.set_starting();

    let ddp_connection = ddp_rs::connection::DDPConnection::try_new(
        format!("{}:{}", config.display.host, config.display.port),
        ddp_rs::protocol::PixelConfig::default(), // Default is RGB, 8 bits per channel
        ddp_rs::protocol::ID::Default,
        std::net::UdpSocket::bind(format!("0.0.0.0:{}", config.display.udp_port))
            .map_err(crate::error::Error::UDPBind)?,
    )?;
    tracing::info!(host = %config.display.host, port = config.display.port, "Connected to display");

    let sink = crate::sink::DdpSink::new(
        crate::writer::Writer::new(ddp_connection),
        config.display.brightness,
    );

    let cancellation_token = tokio_util::sync::CancellationToken::new();
    tokio::task::spawn({
        let cancellation_token = cancellation_token.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Ctrl-C received, shutting down"),
                Err(error) => tracing::error!(?error, "Failed to listen for Ctrl-C, shutting down"),
            }
            cancellation_token.cancel();
        }
    });

    let task = crate::render::RenderTask::new(
        config.render.interval,
        cancellation_token,
        sink,
        crate::time_sample::LocalClock,
        process_state.clone(),
    );

    process_state.set_running();
    let result = task.run().await;

    match &result {
        Ok(()) => process_state.set_finished(),
        Err(error) => {
            tracing::error!(?error, "Render loop failed");
            process_state.set_failed();
        }
    }

    result
}

fn preview(at: Option<time::Time>) -> Result<(), crate::error::Error> {
    let sample = match at {
        Some(at) => crate::time_sample::FixedClock(at.into()).now()?,
        None => crate::time_sample::LocalClock.now()?,
    };
    tracing::debug!(?sample, "Rendering preview");

    let mut frame = crate::frame::Frame::default();
    crate::compositor::Compositor::new()
        .compose(sample, &mut frame)
        .unwrap_or_else(|never| match never {});

    crate::preview::write_frame(&frame, &mut std::io::stdout().lock())?;
    Ok(())
}
