//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "shortform",
    version,
    about = "Terminal front-end for a link-shortening service"
)]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the link-shortening service (overrides config and env)
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_flag() {
        let args = CliArgs::parse_from(["shortform", "-c", "custom.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));

        let args = CliArgs::parse_from(["shortform", "--config=custom.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_parse_api_base() {
        let args = CliArgs::parse_from(["shortform", "--api-base", "http://localhost:9000"]);
        assert_eq!(args.api_base.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_no_args() {
        let args = CliArgs::parse_from(["shortform"]);
        assert_eq!(args.config, None);
        assert_eq!(args.api_base, None);
    }
}
