use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use todo_core::{seed_persons, Config, TaskStore};

mod people;
mod render;
mod repl;

use people::PeopleArgs;
use repl::Session;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "In-memory task manager", long_about = None, version)]
struct Cli {
    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive task menu (default)
    Interactive,
    /// Filter the built-in user/admin records
    People(PeopleArgs),
    /// Print the effective configuration as TOML
    Config {
        /// Print built-in defaults instead
        #[arg(long)]
        default: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display())),
        None => Config::load().wrap_err("failed to load config"),
    }
}

fn init_tracing(config: &Config, verbose: bool) {
    let level = if verbose { "debug" } else { config.log.level.as_str() };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config, cli.verbose);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            tracing::info!("starting interactive session");
            let stdin = io::stdin();
            let mut session = Session::new(TaskStore::new(), &config, stdin.lock(), io::stdout());
            session.run()?;
        }
        Commands::People(args) => {
            let persons = seed_persons();
            let mut stdout = io::stdout().lock();
            people::run(&args, &persons, &mut stdout)?;
            stdout.flush()?;
        }
        Commands::Config { default } => {
            let text = if default {
                Config::default_config_string()
            } else {
                config.to_toml_string()
            };
            print!("{text}");
        }
    }

    Ok(())
}
