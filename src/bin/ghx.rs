use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use opskit::cli::{self, GlobalArgs};
use opskit::exec::Logger;
use opskit::commands::validators;
use opskit::commands::*;
use opskit::github::{CreateRepoParams, GhClient, SortOrder, Visibility};
use opskit::logging::init_logging;
use opskit::menu::{Menu, strip_line_ending};
use opskit::utils::filters::{RepoQuery, UpdateWindow};
use std::io::{self, BufRead, Read, Write};

#[derive(Parser)]
#[command(name = "ghx")]
#[command(about = "Manage GitHub repositories, secrets and variables through gh")]
#[command(long_about = "Manage GitHub repositories, secrets and variables through gh.\n\nRun without a sub-command to open the interactive menu.")]
#[command(version)]
#[command(allow_external_subcommands = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// gh executable to run (defaults to $GHX_GH_BIN, then gh from PATH)
    #[arg(long, global = true, value_name = "PATH")]
    gh_bin: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List repositories with optional filtering and ordering
    List {
        /// Owner (user or organisation) to list instead of the authenticated user
        #[arg(long)]
        owner: Option<String>,

        /// Only repositories with this visibility
        #[arg(long, value_enum)]
        visibility: Option<Visibility>,

        /// Only repositories updated within the last N months (30-day months)
        #[arg(long, value_name = "MONTHS", conflicts_with = "updated_before")]
        updated_within: Option<u32>,

        /// Only repositories last updated more than N months ago
        #[arg(long, value_name = "MONTHS")]
        updated_before: Option<u32>,

        /// Order by last update
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Create a repository
    Create {
        name: String,

        #[arg(long, value_enum, default_value_t = Visibility::Private)]
        visibility: Visibility,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a repository (owner/name, or name for your own account)
    Delete {
        repo: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage Actions secrets
    Secret {
        #[command(subcommand)]
        command: SecretCommands,
    },

    /// Manage Actions variables
    Variable {
        #[command(subcommand)]
        command: VariableCommands,
    },

    /// Open the interactive menu
    Menu,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Subcommand)]
enum SecretCommands {
    /// List secret names
    List {
        #[arg(short, long)]
        repo: String,

        #[arg(long)]
        json: bool,
    },

    /// Set a secret; the value is read from stdin unless --value is given
    Set {
        name: String,

        #[arg(short, long)]
        repo: String,

        #[arg(long)]
        value: Option<String>,
    },

    /// Delete a secret
    Delete {
        name: String,

        #[arg(short, long)]
        repo: String,
    },
}

#[derive(Subcommand)]
enum VariableCommands {
    /// List variables with their values
    List {
        #[arg(short, long)]
        repo: String,

        #[arg(long)]
        json: bool,
    },

    /// Set a variable
    Set {
        name: String,

        #[arg(long)]
        value: String,

        #[arg(short, long)]
        repo: String,
    },

    /// Delete a variable
    Delete {
        name: String,

        #[arg(short, long)]
        repo: String,
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
    let client = GhClient::system(cli.gh_bin);

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            Menu::new(&client, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::External(args)) => {
            tracing::debug!(?args, "unrecognised sub-command");
            Cli::command().print_help()?;
        }
        Some(Commands::Completions { shell }) => {
            cli::print_completions::<Cli>(shell, "ghx");
        }
        Some(Commands::List {
            owner,
            visibility,
            updated_within,
            updated_before,
            sort,
            json,
        }) => {
            validators::validate_months("--updated-within", updated_within)?;
            validators::validate_months("--updated-before", updated_before)?;

            let window = updated_within
                .map(UpdateWindow::Within)
                .or(updated_before.map(UpdateWindow::Before));
            let query = RepoQuery {
                visibility: visibility.map(|v| v.as_str().to_string()),
                window,
                sort,
            };
            ListReposCommand { owner, query, json }
                .execute(&client)
                .await?;
        }
        Some(Commands::Create {
            name,
            visibility,
            description,
        }) => {
            let mut params = CreateRepoParams::new(name, visibility);
            if let Some(description) = description {
                params = params.with_description(description);
            }
            CreateRepoCommand { params }.execute(&client).await?;
        }
        Some(Commands::Delete { repo, yes }) => {
            if !yes && !confirm(&format!("Delete {}? This cannot be undone [y/N] ", repo))? {
                Logger.warn(&repo, "Cancelled");
                return Ok(());
            }
            DeleteRepoCommand { repo }.execute(&client).await?;
        }
        Some(Commands::Secret { command }) => match command {
            SecretCommands::List { repo, json } => {
                ListSecretsCommand { repo, json }.execute(&client).await?
            }
            SecretCommands::Set { name, repo, value } => {
                let value = match value {
                    Some(value) => value,
                    None => read_secret_value()?,
                };
                SetSecretCommand { repo, name, value }
                    .execute(&client)
                    .await?
            }
            SecretCommands::Delete { name, repo } => {
                DeleteSecretCommand { repo, name }.execute(&client).await?
            }
        },
        Some(Commands::Variable { command }) => match command {
            VariableCommands::List { repo, json } => {
                ListVariablesCommand { repo, json }.execute(&client).await?
            }
            VariableCommands::Set { name, value, repo } => {
                SetVariableCommand { repo, name, value }
                    .execute(&client)
                    .await?
            }
            VariableCommands::Delete { name, repo } => {
                DeleteVariableCommand { repo, name }
                    .execute(&client)
                    .await?
            }
        },
    }

    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Whole of stdin with one trailing newline removed
fn read_secret_value() -> Result<String> {
    let mut value = String::new();
    io::stdin()
        .read_to_string(&mut value)
        .context("Failed to read secret value from stdin")?;
    Ok(strip_line_ending(value))
}
