mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "frame-usage")]
#[command(about = "Farcaster frame showing a user's hub storage usage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the frame HTTP server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Print the stats record carried by an image token
    Decode { token: String },
    /// Render the usage chart for an image token
    Render {
        token: String,
        #[arg(short, long)]
        output: PathBuf,
        /// Write SVG markup instead of PNG
        #[arg(long)]
        svg: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Decode { token } => commands::render::run_decode(&token)?,
        Commands::Render { token, output, svg } => {
            commands::render::run_render(&token, &output, svg)?;
        },
    }

    Ok(())
}
