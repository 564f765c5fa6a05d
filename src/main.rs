use anyhow::Result;
use boltzmann_highlights::cli::{config_overrides, Cli, Commands};
use boltzmann_highlights::commands::{
    handle_highlight, handle_summary, init_config, HighlightCommand, SummaryCommand,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Highlight {
            target,
            root,
            attenuation,
            no_attenuation,
            threshold,
            alpha,
            min_complexity_per_loc,
            format,
            output,
        } => handle_highlight(HighlightCommand {
            target,
            root,
            overrides: config_overrides(
                attenuation,
                no_attenuation,
                threshold,
                alpha,
                min_complexity_per_loc,
            ),
            format: format.into(),
            output,
        }),
        Commands::Summary { target, root } => handle_summary(SummaryCommand { target, root }),
        Commands::Init { dir, force } => init_config(&dir, force),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
