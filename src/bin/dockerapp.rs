use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use opskit::cli::{self, GlobalArgs};
use opskit::commands::{Command, ScaffoldCommand};
use opskit::logging::init_logging;
use opskit::scaffold::{AppKind, Scaffolder};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dockerapp")]
#[command(about = "Scaffold a docker compose project under ~/dockerApp")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// WhatsApp HTTP API gateway (devlikeapro/waha)
    Waha(AppArgs),

    /// Workflow automation (n8nio/n8n)
    N8n(AppArgs),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Waha(_) => "waha",
            Commands::N8n(_) => "n8n",
            Commands::Completions { .. } => "completions",
        }
    }
}

#[derive(Args)]
struct AppArgs {
    /// Application name, used as directory and container name
    #[arg(short, long)]
    name: Option<String>,

    /// Host port published for the application
    #[arg(short, long)]
    port: Option<String>,

    /// Base directory instead of the home directory
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli: Cli = cli::parse();
    let subcommand = cli.command.name();

    if let Err(e) = run(cli).await {
        cli::exit_with_usage_error::<Cli>(&e, subcommand);
    }
}

async fn run(cli: Cli) -> Result<()> {
    init_logging(&cli.global, env!("CARGO_CRATE_NAME"))?;

    let (kind, args) = match cli.command {
        Commands::Waha(args) => (AppKind::Waha, args),
        Commands::N8n(args) => (AppKind::N8n, args),
        Commands::Completions { shell } => {
            cli::print_completions::<Cli>(shell, "dockerapp");
            return Ok(());
        }
    };

    let scaffolder = match args.root {
        Some(root) => Scaffolder::new(root),
        None => Scaffolder::from_home()?,
    };

    ScaffoldCommand {
        kind,
        name: args.name.unwrap_or_default(),
        port: args.port.unwrap_or_default(),
    }
    .execute(&scaffolder)
    .await
}
