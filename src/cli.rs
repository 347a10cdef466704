// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "brdf-zoo")]
#[command(about = "Free-fly camera for the BRDF Zoo demos", long_about = None)]
pub struct Cli {
    /// Demo scene to show (1 or 2)
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=2))]
    pub demo: u32,

    /// JSON file overriding camera speed, sensitivity, zoom, start pose and bounds
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo_one_at_800x600() {
        let cli = Cli::try_parse_from(["brdf-zoo"]).unwrap();
        assert_eq!(cli.demo, 1);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert!(cli.config.is_none());
    }

    #[test]
    fn accepts_demo_two_and_config() {
        let cli = Cli::try_parse_from(["brdf-zoo", "2", "--config", "cam.json"]).unwrap();
        assert_eq!(cli.demo, 2);
        assert_eq!(cli.config, Some(PathBuf::from("cam.json")));
    }

    #[test]
    fn rejects_unknown_demo_and_extra_args() {
        assert!(Cli::try_parse_from(["brdf-zoo", "3"]).is_err());
        assert!(Cli::try_parse_from(["brdf-zoo", "x"]).is_err());
        assert!(Cli::try_parse_from(["brdf-zoo", "1", "2"]).is_err());
    }
}
