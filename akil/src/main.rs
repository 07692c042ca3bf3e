use std::path::PathBuf;

use akil::commands::{
    account::AccountCommand,
    board::{self, BookmarksCommand},
};
use akil_models::session::Session;
use akil_utils::akil_version;
use anyhow::{anyhow, Context};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = akil_config::load(&cli.config_paths()).context("Failed to load config")?;
    let session = cli.session()?;

    match cli.command {
        Command::Jobs { search } => board::jobs(config, session, search).await?,
        Command::Job { id } => board::job(config, id).await?,
        Command::Bookmarks { command } => command.invoke(config, session).await?,
        Command::Account { command } => command.invoke(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = akil_version())]
struct Cli {
    /// Config file path(s); later files override earlier ones
    #[arg(long, env = "AKIL_CONFIG", global = true)]
    config: Vec<PathBuf>,

    /// Bearer token of the authenticated session
    #[arg(long, env = "AKIL_ACCESS_TOKEN", global = true, hide_env_values = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn config_paths(&self) -> Vec<PathBuf> {
        if self.config.is_empty() {
            vec![akil_config::DEFAULT_CONFIG_PATH.into()]
        } else {
            self.config.clone()
        }
    }

    /// The session is owned by the identity collaborator; the CLI only carries
    /// its bearer token between invocations.
    fn session(&self) -> anyhow::Result<Session> {
        Ok(match &self.access_token {
            Some(access_token) => Session::authenticated(
                access_token
                    .clone()
                    .try_into()
                    .map_err(|err| anyhow!("Invalid access token: {err}"))?,
            ),
            None => Session::Unauthenticated,
        })
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List job postings
    #[command(aliases(["ls", "j"]))]
    Jobs {
        /// Only show jobs whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show a single job posting
    Job {
        /// Id of the job posting
        id: String,
    },
    /// Manage bookmarks
    #[command(aliases(["b"]))]
    Bookmarks {
        #[command(subcommand)]
        command: BookmarksCommand,
    },
    /// Manage the account
    #[command(aliases(["a"]))]
    Account {
        #[command(subcommand)]
        command: AccountCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
