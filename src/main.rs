use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use drapekit::{init_logging, load_config, replay_session, Session, BUILD_DATE, VERSION};

/// Replays a recorded pointer session and prints the layout and prompt.
#[derive(Parser, Debug)]
#[command(
    name = "drapekit",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about = "Replay a garment placement session and export the generation request"
)]
struct Cli {
    /// Recorded session (JSON)
    session: PathBuf,

    /// Configuration file (.toml or .json); defaults to the platform config
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), None)?;
    init_logging(&config.logging)?;
    tracing::debug!("drapekit {} built {}", VERSION, BUILD_DATE);

    let session = Session::load(&cli.session)?;
    let request = replay_session(&session, &config)
        .with_context(|| format!("Failed to export session {}", cli.session.display()))?;

    println!("{}", request.layout_json);
    println!();
    println!("{}", request.prompt);
    Ok(())
}
