//! Command-line configuration for the replay demo.

use std::path::PathBuf;

use clap::Parser;

/// Default window width.
const DEFAULT_WIDTH: f64 = 600.0;
/// Default window height.
const DEFAULT_HEIGHT: f64 = 800.0;

/// Replays a recorded pointer script against the effect layout and prints
/// the resulting frame as JSON.
#[derive(Parser, Debug, Clone)]
#[command(name = "tabchart-demo", version, about)]
pub struct DemoConfig {
    /// JSON array of pointer events. Without it a single idle frame is drawn.
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Curve snapshot (JSON) loaded into every tab before the replay.
    #[arg(short, long)]
    pub preset: Option<PathBuf>,

    /// Window width in pixels.
    #[arg(long, env = "TABCHART_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Window height in pixels.
    #[arg(long, env = "TABCHART_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Where to write the frame. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            script: None,
            preset: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags() {
        let config = DemoConfig::try_parse_from([
            "tabchart-demo",
            "--script",
            "drag.json",
            "--width",
            "400",
            "--preset",
            "bright.json",
        ])
        .expect("parse");
        assert_eq!(config.script, Some(PathBuf::from("drag.json")));
        assert_eq!(config.width, 400.0);
        assert_eq!(config.preset, Some(PathBuf::from("bright.json")));
        assert!(config.output.is_none());
    }
}
