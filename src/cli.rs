//! Command-Line Interface

use clap::Parser;
use std::path::PathBuf;

/// Folio - an interactive single-page portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Page content file (JSON), overrides the config
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Fixed viewport width in pixels instead of deriving it from the terminal
    #[arg(long)]
    pub width_px: Option<f64>,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["folio", "-v", "--config", "f.json", "--width-px", "900"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("f.json")));
        assert_eq!(cli.width_px, Some(900.0));
        assert!(cli.content.is_none());
    }
}
