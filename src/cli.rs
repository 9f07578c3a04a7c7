use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Browse real-estate listings: search, filter, map, favorites and contact."
)]
pub struct Cli {
    /// JSON catalog of listings; the built-in featured listings are used otherwise.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file (TOML). Defaults to ./housing-browser.toml when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read commands from this file instead of stdin.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Log level or filter directive (e.g. debug, housing_browser=trace).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,
}
