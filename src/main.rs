use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edgehue::models::AppConfig;
use edgehue::services::EdgeFilterJob;

#[derive(Parser)]
#[command(name = "edgehue")]
#[command(about = "Color the edges of an ASCII PPM (P3) image by gradient direction")]
#[command(version)]
struct Cli {
    /// Source image (ASCII PPM, P3)
    input: PathBuf,

    /// Destination for the colorized edge image
    output: PathBuf,

    /// YAML configuration file
    #[arg(short, long, env = "EDGEHUE_CONFIG")]
    config: Option<PathBuf>,

    /// Replace the output even if the configuration forbids it
    #[arg(short, long)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edgehue=info,edge_color=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load(cli.config.as_deref());
    let job = EdgeFilterJob::new(&cli.input, &cli.output, config.output).force_overwrite(cli.force);

    let report = match job.run() {
        Ok(report) => report,
        Err(e) => {
            if e.is_bad_input() {
                tracing::error!(input = %cli.input.display(), "Rejected malformed input: {e}");
            } else {
                tracing::error!(
                    input = %cli.input.display(),
                    output = %cli.output.display(),
                    "{e}"
                );
            }
            return Err(anyhow::Error::new(e)
                .context(format!("Failed to colorize {}", cli.input.display())));
        }
    };

    println!(
        "Wrote {} ({} bytes)",
        report.output.display(),
        report.bytes_written
    );

    Ok(())
}
