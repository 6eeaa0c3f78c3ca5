use clap::Parser;
use deb_depgraph::config::CONFIG_FILENAME;
use std::path::PathBuf;

/// Explore direct, transitive and reverse dependencies in a Debian package index
#[derive(Parser, Debug)]
#[command(name = "deb-depgraph")]
#[command(version)]
#[command(
    about = "Explore direct, transitive and reverse dependencies in a Debian package index",
    long_about = None
)]
pub struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, value_name = "PATH", default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Print the loaded configuration before resolving
    #[arg(long)]
    pub show_config: bool,

    /// Only print warnings and errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
