use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// atelier - localized freelance site with a contact relay
#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Localized marketing site and contact relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Write sitemap.xml to a file, or stdout when no output is given
    Sitemap {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = atelier::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    atelier::observability::init_observability(
        "atelier",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Serve { host, port } => atelier::server::serve(config, host, port).await,
        Commands::Sitemap { output } => sitemap_command(config, output),
    };

    atelier::observability::shutdown_observability();

    result
}

fn sitemap_command(config: atelier::Config, output: Option<PathBuf>) -> Result<()> {
    let router = atelier_locale::LocaleRouter::new(config.locales.clone())?;
    let xml = atelier::routes::render_sitemap(&config.site, &router)?;

    match output {
        Some(path) => {
            std::fs::write(&path, xml)?;
            tracing::info!(path = %path.display(), "Sitemap written");
        }
        None => println!("{xml}"),
    }

    Ok(())
}
