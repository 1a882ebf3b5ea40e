mod commands;
mod live;
mod server;
mod telemetry;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use render_modes_core::PageId;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "render-modes")]
#[command(version, about = "Demo site for static, dynamic and timed-regeneration rendering", long_about = None)]
struct Cli {
    /// Path to site.toml (defaults apply when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Serve the site, honoring each page's rendering policy
    Serve {
        /// Port to serve on (overrides site.toml)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Prerender static and interval pages to a directory
    Build {
        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render a single page to stdout
    Render {
        /// Page to render: home, about, dashboard or news
        page: PageId,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,
    },

    /// Validate the compiled-in page catalog
    Validate,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "render-modes", &mut io::stdout());
        return Ok(());
    }

    let config = commands::load_config(cli.config.as_deref())?;
    telemetry::init(&config.logging)?;

    match cli.command {
        Command::Serve { port } => commands::serve::run(config, port).await,
        Command::Build { output } => commands::build::run(output).await,
        Command::Render { page, format } => commands::render::run(&config, page, format).await,
        Command::Validate => commands::validate::run().await,
        Command::Completions { .. } => Ok(()),
    }
}
