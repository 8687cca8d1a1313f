use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use imgtint::{parse_hex_color, BatchProcessor, TintConfig, TintResult, WorkerPool};

/// Apply a flat color tint to every image in a directory.
///
/// Eligible files (jpg, jpeg, png, bmp, gif, case-insensitive) are blended
/// with the tint color and written to the output directory as
/// `name_<suffix>.ext`. A failure on one file never aborts the batch.
#[derive(Parser)]
#[command(name = "imgtint", version)]
struct Args {
    /// Directory to read images from [default: sourses]
    #[arg(short = 'i', long, value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Directory to write tinted copies to [default: output_red_tint]
    #[arg(short = 'o', long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Tint color as RRGGBB hex [default: ff0000]
    #[arg(short = 'c', long, value_name = "RRGGBB")]
    color: Option<String>,

    /// Blend strength: 0 keeps the original, 1 is the solid color [default: 0.3]
    #[arg(short = 's', long, value_name = "FACTOR")]
    strength: Option<f32>,

    /// Suffix inserted before the extension of output file names [default: redtint]
    #[arg(long, value_name = "SUFFIX")]
    suffix: Option<String>,

    /// Number of files processed concurrently; 1 is sequential [default: 4]
    #[arg(short = 'w', long, value_name = "NUM")]
    workers: Option<usize>,

    /// JSON config file; command-line flags take precedence over its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> TintResult<TintConfig> {
        let mut config = match &self.config {
            Some(path) => TintConfig::from_file(path)?,
            None => TintConfig::default(),
        };

        if let Some(dir) = self.input_dir {
            config.input_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(color) = self.color {
            config.settings.color = parse_hex_color(&color)?;
        }
        if let Some(strength) = self.strength {
            config.settings.strength = strength;
        }
        if let Some(suffix) = self.suffix {
            config.settings.suffix = suffix;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }

        config.normalize();
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)
        .with_line_number(false)
        .with_target(false)
        .with_ansi(true)
        .compact();
    subscriber.init();

    let args = Args::parse();
    let config = args.into_config()?;

    info!(
        "tinting {} -> {} (color #{:02x}{:02x}{:02x}, strength {}, {} workers)",
        config.input_dir.display(),
        config.output_dir.display(),
        config.settings.color[0],
        config.settings.color[1],
        config.settings.color[2],
        config.settings.strength,
        config.workers
    );

    let processor = BatchProcessor::new(WorkerPool::new(Some(config.workers)));
    let summary = processor
        .run(&config, |progress| {
            debug!(
                "progress: {}/{} files",
                progress.processed_files, progress.total_files
            );
        })
        .await?;

    info!(
        "finished: {} tinted, {} failed",
        summary.succeeded,
        summary.failed.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "imgtint",
            "--input-dir",
            "photos",
            "--color",
            "00ff00",
            "--strength",
            "0.8",
            "--suffix",
            "greentint",
        ]);
        let config = args.into_config().unwrap();

        assert_eq!(config.input_dir, PathBuf::from("photos"));
        assert_eq!(config.output_dir, PathBuf::from("output_red_tint"));
        assert_eq!(config.settings.color, [0, 255, 0]);
        assert_eq!(config.settings.strength, 0.8);
        assert_eq!(config.settings.suffix, "greentint");
    }

    #[test]
    fn strength_flag_is_clamped() {
        let args = Args::parse_from(["imgtint", "--strength", "3.5"]);
        let config = args.into_config().unwrap();
        assert_eq!(config.settings.strength, 1.0);
    }
}
