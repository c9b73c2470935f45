use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;

/// Installs the global subscriber. `RUST_LOG` applies first, `-v`/`-q` override it.
pub fn setup<Level>(
    verbosity: clap_verbosity_flag::Verbosity<Level>,
) -> Result<(), crate::error::Error>
where
    Level: clap_verbosity_flag::LogLevel,
{
    let env_filter = verbosity
        .is_present()
        .then(|| verbosity.tracing_level_filter())
        .map(tracing_subscriber::filter::Directive::from)
        .into_iter()
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive);

    let subscriber = tracing_subscriber::registry::Registry::default().with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(env_filter),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(crate::error::Error::SettingUpLogging)
}
