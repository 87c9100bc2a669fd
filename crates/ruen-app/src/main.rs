use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use ruen_config::{Config, SourceKind};
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod io;
pub mod lookup;
pub mod profile;
pub mod state;
pub mod status;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::events::history::{entry_document, nth_entry};
use self::events::lookup::{describe, error_status, outcome_status};
use self::events::text_input::{HELP, convert_line};
use self::state::AppState;
use self::status::Status;
use self::ui::{OutputFormat, history_listing};

#[derive(Parser)]
#[command(name = "ruen", version, about = "Russian-English dictionary lookup")]
struct Cli {
    /// JSON profile, defaults to ./ruen.json when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Dictionary source to query
    #[arg(long, global = true)]
    source: Option<SourceKind>,
    /// History file location
    #[arg(long, global = true)]
    history: Option<PathBuf>,
    /// Do not read or write history
    #[arg(long, global = true)]
    no_history: bool,
    /// Do not copy results to the clipboard
    #[arg(long, global = true)]
    no_copy: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a word typed on an English keyboard layout
    Lookup {
        text: Vec<String>,
        /// Input is already Cyrillic, skip keyboard conversion
        #[arg(long)]
        raw: bool,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Print the keyboard conversion only
    Translit { text: Vec<String> },
    /// List past lookups, newest first
    History {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one history entry (1 = newest)
    Show {
        index: usize,
        /// Markdown export instead of the stored rendering
        #[arg(long)]
        markdown: bool,
    },
    /// Prompt loop
    Interactive {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(kind) = self.source {
            config.source.kind = kind;
        }
        if let Some(path) = &self.history {
            config.history.path = path.clone();
        }
        if self.no_history {
            config.history.enabled = false;
        }
        if self.no_copy {
            config.auto_copy = false;
        }
    }
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let (mut config, profile) = profile::load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_tracing(&config.log_level);
    match profile {
        Some(path) => tracing::info!("Loaded profile {}", path.display()),
        None => tracing::debug!("No profile found, configured from environment"),
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run(cli.command, config));

    // stdin reads park a blocking thread that never returns on its own
    runtime.shutdown_timeout(Duration::from_millis(100));
    result
}

async fn run(command: Command, config: Config) -> anyhow::Result<()> {
    match command {
        Command::Translit { text } => {
            println!("{}", convert_line(&text.join(" ")));
        }
        Command::Lookup { text, raw, format } => {
            let text = text.join(" ");
            let word = if raw { text } else { convert_line(&text) };

            let state = AppState::new(config, format)?;
            eprintln!("-- {}", Status::LookingUp(&word));

            match state.lookup.lookup(&word).await {
                Ok(outcome) => {
                    println!("{}", describe(&outcome, format));
                    eprintln!("-- {}", outcome_status(&outcome));
                }
                Err(e) => {
                    eprintln!("-- {}", error_status(&e));
                    return Err(e.into());
                }
            }
        }
        Command::History { limit } => {
            let state = AppState::new(config, OutputFormat::default())?;
            println!("{}", history_listing(&state.lookup.history()?, limit));
        }
        Command::Show { index, markdown } => {
            let format = if markdown {
                OutputFormat::Markdown
            } else {
                OutputFormat::Rich
            };
            let state = AppState::new(config, format)?;

            match nth_entry(&state, index)? {
                Some(entry) => println!("{}", entry_document(&entry, format)),
                None => anyhow::bail!("No history entry #{index}"),
            }
        }
        Command::Interactive { format } => {
            let state = Arc::new(AppState::new(config, format)?);
            interactive(state).await?;
        }
    }

    Ok(())
}

async fn interactive(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let tasks = controller.spawn_tasks();

    eprintln!("-- {}", Status::Ready);
    eprintln!("-- {HELP}");

    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    controller.run(tasks, ctrl_c).await;
    Ok(())
}
