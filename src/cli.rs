use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Render the clock to the configured display until interrupted
    Run {
        /// Path of the configuration file
        #[clap(long, short)]
        config: camino::Utf8PathBuf,
    },

    /// Load the configuration file and report whether it is valid
    VerifyConfig {
        /// Path of the configuration file
        #[clap(long, short)]
        config: camino::Utf8PathBuf,
    },

    /// Print a single frame as text
    Preview {
        /// Time to render (HH:MM:SS or HH:MM:SS.mmm), defaults to now
        #[clap(long, value_parser = parse_time)]
        at: Option<time::Time>,
    },
}

fn parse_time(s: &str) -> Result<time::Time, time::error::Parse> {
    let with_millis = time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:3]");
    let without = time::macros::format_description!("[hour]:[minute]:[second]");

    time::Time::parse(s, &with_millis).or_else(|_| time::Time::parse(s, &without))
}
