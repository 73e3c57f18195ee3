use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Accept level names case-insensitively, plus `off`.
fn parse_log_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level '{}', expected off, error, warn, info, debug or trace", value))
}

/// Command line arguments.
///
/// Everything left unset falls back to the scene file, or to the built-in
/// Cornell box when no scene file is given.
#[derive(Debug, Parser)]
#[command(name = "boxlight")]
#[command(about = "Render a Cornell box style scene with soft shadows")]
pub struct Args {
    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Field of view in degrees
    #[arg(long)]
    pub fov: Option<f64>,

    /// Reconstruct soft shadows instead of hard ones
    #[arg(long)]
    pub soft_shadows: bool,

    /// Enable the specular highlight with this Blinn-Phong exponent
    #[arg(long, value_name = "EXP")]
    pub specular: Option<f64>,

    /// JSON scene file
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, default_value = "info", value_parser = parse_log_level)]
    pub log_level: LevelFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["boxlight"]).unwrap();
        assert!(args.width.is_none());
        assert!(!args.soft_shadows);
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert_eq!(args.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "boxlight",
            "--width",
            "320",
            "--height",
            "240",
            "--soft-shadows",
            "--specular",
            "32",
            "--scene",
            "box.json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.width, Some(320));
        assert_eq!(args.height, Some(240));
        assert!(args.soft_shadows);
        assert_eq!(args.specular, Some(32.0));
        assert_eq!(args.scene, Some(PathBuf::from("box.json")));
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_log_level_names() {
        assert_eq!(parse_log_level("TRACE"), Ok(LevelFilter::Trace));
        assert_eq!(parse_log_level("off"), Ok(LevelFilter::Off));
        assert!(parse_log_level("loud").is_err());
        assert!(Args::try_parse_from(["boxlight", "--log-level", "loud"]).is_err());
    }
}
