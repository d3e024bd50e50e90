use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use opskit::cli::{self, GlobalArgs};
use opskit::commands::*;
use opskit::dns::{DnsConfig, NewRecord};
use opskit::logging::init_logging;
use opskit_cloudflare::{CloudflareClient, RecordType};

#[derive(Parser)]
#[command(name = "cfdns")]
#[command(about = "Manage the DNS records of a Cloudflare zone")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// API token (defaults to $CLOUDFLARE_API_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Zone id (defaults to $CLOUDFLARE_ZONE_ID)
    #[arg(long, global = true)]
    zone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every record of the zone
    List {
        /// Only records of this type
        #[arg(short = 't', long = "type")]
        record_type: Option<RecordType>,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Show one record
    Get { id: String },

    /// Create a record and print its id
    Add {
        #[arg(value_name = "TYPE")]
        record_type: RecordType,

        name: String,

        content: String,

        /// Time to live in seconds (1 = automatic)
        #[arg(long)]
        ttl: Option<u32>,

        /// Route traffic through Cloudflare's proxy
        #[arg(long)]
        proxied: bool,

        /// MX priority
        #[arg(long)]
        priority: Option<u16>,
    },

    /// Change fields of a record, e.g. `content=8.8.8.8 proxied=true`
    Update {
        id: String,

        #[arg(value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Delete a record and print its id
    Delete { id: String },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() {
    let cli: Cli = cli::parse();

    if let Err(e) = run(cli).await {
        cli::exit_with_error(&e);
    }
}

async fn run(cli: Cli) -> Result<()> {
    init_logging(&cli.global, env!("CARGO_CRATE_NAME"))?;

    if let Commands::Completions { shell } = cli.command {
        cli::print_completions::<Cli>(shell, "cfdns");
        return Ok(());
    }

    let config = DnsConfig::resolve(cli.token, cli.zone)?;
    tracing::debug!(?config, "resolved configuration");
    let client = CloudflareClient::new(config.client_config());

    match cli.command {
        Commands::List { record_type, json } => {
            ListRecordsCommand { record_type, json }
                .execute(&client)
                .await
        }
        Commands::Get { id } => GetRecordCommand { id }.execute(&client).await,
        Commands::Add {
            record_type,
            name,
            content,
            ttl,
            proxied,
            priority,
        } => {
            let record = NewRecord {
                record_type,
                name,
                content,
                ttl,
                proxied: proxied.then_some(true),
                priority,
            };
            AddRecordCommand { record }.execute(&client).await
        }
        Commands::Update { id, fields } => {
            UpdateRecordCommand { id, fields }.execute(&client).await
        }
        Commands::Delete { id } => DeleteRecordCommand { id }.execute(&client).await,
        Commands::Completions { .. } => Ok(()),
    }
}
