//! deepnote-launcher - command-line host for the Deepnote launcher
//!
//! ```bash
//! deepnote-launcher auth set dn_XXXX
//! deepnote-launcher search churn --category favorites
//! deepnote-launcher search churn --open 1
//! deepnote-launcher ai "plot revenue by month"
//! ```

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args, Parser, Subcommand};

use deepnote_launcher::config::{self, Config};
use deepnote_launcher::credentials::{
    ApiKey, ChainedCredentials, CredentialProvider, EnvCredentials, KeyringCredentials,
    API_KEY_ENV_VAR,
};
use deepnote_launcher::error::ResultExt;
use deepnote_launcher::host::{Host, SystemHost, Toast};
use deepnote_launcher::projects::{
    Category, DeepnoteClient, ProjectBrowser, RowModel, COPY_ID_ACTION, COPY_URL_ACTION,
};
use deepnote_launcher::{logging, prompt, state, terminal};

#[derive(Parser, Debug)]
#[command(
    name = "deepnote-launcher",
    version,
    about = "Search Deepnote projects and forward prompts to Deepnote AI"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search projects by name
    Search(SearchArgs),
    /// Open the Deepnote AI notebook with a prompt
    Ai {
        /// Prompt text; words are joined with spaces
        prompt: Vec<String>,
    },
    /// Manage the stored API key
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("row_action").args(["open", "copy_id", "copy_url"])))]
struct SearchArgs {
    /// Case-insensitive text matched against project names
    query: Option<String>,

    /// Category filter; remembered for the next run
    #[arg(short, long, value_enum)]
    category: Option<Category>,

    /// Open the N-th result (data app URL for data apps)
    #[arg(long, value_name = "N")]
    open: Option<usize>,

    /// Copy the N-th result's project ID
    #[arg(long, value_name = "N")]
    copy_id: Option<usize>,

    /// Copy the N-th result's project URL
    #[arg(long, value_name = "N")]
    copy_url: Option<usize>,

    /// Print rows as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum AuthAction {
    /// Store an API key in the system keyring
    Set { key: String },
    /// Remove the stored API key
    Clear,
    /// Show where the API key is read from
    Status,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = logging::init();
    let config = config::load_config();
    let host = SystemHost;

    match run(cli, &config, &host) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {:#}", e);
            eprintln!("  details in {}", logging::log_path().display());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config, host: &dyn Host) -> Result<ExitCode> {
    match cli.command {
        Command::Search(args) => run_search(args, config, host),
        Command::Ai { prompt } => {
            let prompt = prompt.join(" ");
            // Failures are already shown as a notice
            let forwarded =
                prompt::forward_prompt(host, config.get_prompt_notebook_url(), &prompt).log_err();
            Ok(match forwarded {
                Some(_) => ExitCode::SUCCESS,
                None => ExitCode::FAILURE,
            })
        }
        Command::Auth { action } => run_auth(action, config, host),
    }
}

fn run_search(args: SearchArgs, config: &Config, host: &dyn Host) -> Result<ExitCode> {
    let category = match args.category {
        Some(category) => {
            state::save_last_category(category);
            category
        }
        None => state::load_last_category().unwrap_or_else(|| config.get_default_category()),
    };

    let mut browser = ProjectBrowser::new(category);
    browser.set_search_text(args.query.as_deref().unwrap_or_default());

    let credentials = ChainedCredentials::system(config.get_keyring_service());
    let client = DeepnoteClient::new(config.get_projects_endpoint());
    if !browser.activate(&credentials, &client, host) || browser.last_fetch_failed() {
        return Ok(ExitCode::FAILURE);
    }

    let rows = browser.rows();

    if let Some((index, title)) = requested_action(&args) {
        let row = pick_row(&rows, index)?;
        let action = match title {
            Some(title) => row.action_titled(title),
            None => row.primary_action(),
        }
        .with_context(|| format!("Row {} has no such action", index))?;

        return Ok(match browser.perform(action, host).log_err() {
            Some(()) => ExitCode::SUCCESS,
            None => ExitCode::FAILURE,
        });
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize rows")?
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{}",
        terminal::format_header(browser.category(), browser.search_text(), rows.len())
    );
    if rows.is_empty() {
        println!("{}", terminal::format_empty(browser.search_text()));
    }
    for (i, row) in rows.iter().enumerate() {
        println!("{}", terminal::format_row(i + 1, row));
    }
    Ok(ExitCode::SUCCESS)
}

/// 1-based row index and action title (`None` = primary action)
fn requested_action(args: &SearchArgs) -> Option<(usize, Option<&'static str>)> {
    args.open
        .map(|n| (n, None))
        .or(args.copy_id.map(|n| (n, Some(COPY_ID_ACTION))))
        .or(args.copy_url.map(|n| (n, Some(COPY_URL_ACTION))))
}

fn pick_row(rows: &[RowModel], index: usize) -> Result<&RowModel> {
    if index == 0 || index > rows.len() {
        bail!("No project at position {} ({} shown)", index, rows.len());
    }
    Ok(&rows[index - 1])
}

fn run_auth(action: AuthAction, config: &Config, host: &dyn Host) -> Result<ExitCode> {
    let keyring = KeyringCredentials::new(config.get_keyring_service());
    match action {
        AuthAction::Set { key } => {
            let Some(api_key) = ApiKey::new(&key) else {
                bail!("API key must not be empty");
            };
            keyring.store(&api_key)?;
            host.show_toast(Toast::success("API key saved"));
        }
        AuthAction::Clear => {
            keyring.clear()?;
            host.show_toast(Toast::success("API key removed"));
        }
        AuthAction::Status => {
            let source = if EnvCredentials::default().credential().is_some() {
                Some(format!("environment ({})", API_KEY_ENV_VAR))
            } else if keyring.credential().is_some() {
                Some(format!("keyring ({})", config.get_keyring_service()))
            } else {
                None
            };
            match source {
                Some(source) => println!("API key: set, read from {}", source),
                None => {
                    println!("API key: not set");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
