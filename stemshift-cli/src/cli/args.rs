use clap::Parser;
use std::path::PathBuf;

/// Move leading characters of every filename in the current directory to the end
#[derive(Parser, Debug)]
#[command(name = "stemshift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from <PATH> instead of the user config directory
    #[arg(long, value_name = "PATH", env = "STEMSHIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity. Can be repeated up to 3 times.
    /// -v: info
    /// -vv: debug
    /// -vvv: trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, verbatim_doc_comment)]
    pub verbose: u8,
}
