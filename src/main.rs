use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use assetprep::fetch::{self, HttpSource};
use assetprep::placeholder::{self, PlaceholderRenderer};
use assetprep::Config;

#[derive(Parser, Debug)]
#[command(name = "assetprep", about = "Prepare static image assets: placeholders and downloads")]
struct Cli {
    /// Configuration file; built-in defaults apply when absent.
    #[arg(long, default_value = "assetprep.toml")]
    config: PathBuf,

    /// Override the output root from the config.
    #[arg(long)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate placeholder images for every catalog entry.
    Placeholders,
    /// Download real images, falling back to generated badges.
    Fetch,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default(&cli.config)?;
    if let Some(root) = cli.root {
        config.output_root = root;
    }

    let renderer = PlaceholderRenderer::new(&config);

    match cli.command {
        Some(Command::Placeholders) => run_placeholders(&renderer, &config)?,
        Some(Command::Fetch) => run_fetch(&renderer, &config)?,
        // No subcommand: the full workflow, placeholders then real images.
        None => {
            run_placeholders(&renderer, &config)?;
            println!();
            run_fetch(&renderer, &config)?;
        }
    }
    Ok(())
}

fn run_placeholders(
    renderer: &PlaceholderRenderer,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🎨 Creating placeholder images...\n");
    let written = placeholder::generate_all(renderer, config)?;
    println!("\n✨ Done, {} placeholders created!", written);
    println!("💡 These are stand-ins; replace them with real artwork later.");
    Ok(())
}

fn run_fetch(
    renderer: &PlaceholderRenderer,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("🖼️  Downloading real images...");
    let source = HttpSource::new(config)?;
    let summary = fetch::run(&source, renderer, config)?;
    println!(
        "\n✨ Done: {} downloaded, {} skipped, {} filled with fallbacks.",
        summary.downloaded, summary.skipped, summary.backfilled
    );
    Ok(())
}
