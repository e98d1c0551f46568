//! The command-line client: the only place that reads the environment,
//! prints, or decides exit codes.

mod args;
mod print;

use args::{BenchTarget, Cli, Commands};
use cheeper::api::{BenchMode, CheeperApi};
use cheeper::config::CheeperConfig;
use cheeper::error::{CheeperError, Result, StoreContext};
use cheeper::store::fs_backend::FsBackend;
use cheeper::store;
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const STORE_ENV: &str = "CHEEPER_STORE";
const HOME_ENV: &str = "CHEEPER_HOME";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let api = init_api(&cli)?;
    dispatch(&api, cli.command)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "cheeper=debug" } else { "cheeper=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

struct Dirs {
    config: PathBuf,
    data: PathBuf,
}

fn dirs() -> Result<Dirs> {
    if let Ok(home) = std::env::var(HOME_ENV) {
        let home = PathBuf::from(home);
        return Ok(Dirs {
            config: home.clone(),
            data: home.join("store"),
        });
    }

    let proj_dirs = ProjectDirs::from("com", "cheeper", "cheeper")
        .ok_or_else(|| CheeperError::Config("could not determine home directory".to_string()))?;
    Ok(Dirs {
        config: proj_dirs.config_dir().to_path_buf(),
        data: proj_dirs.data_dir().to_path_buf(),
    })
}

fn init_api(cli: &Cli) -> Result<CheeperApi<FsBackend>> {
    let dirs = dirs()?;
    let config = CheeperConfig::load(&dirs.config)?;

    let explicit = cli.store.clone().or_else(|| std::env::var(STORE_ENV).ok());
    let uri = config.resolve_store_uri(explicit, &dirs.data);

    let handle = store::connect(&uri).during("connect")?;
    Ok(CheeperApi::new(handle, config))
}

fn dispatch(api: &CheeperApi<FsBackend>, command: Commands) -> Result<()> {
    match command {
        Commands::AddTestData { num_users } => {
            let report = api.generate_test_data(num_users)?;
            print::print_report(&report);
        }
        Commands::CreateUser { login, name } => {
            let user = api.create_user(&name, &login)?;
            print::print_user(&user);
        }
        Commands::CreateMessage { login, text } => {
            let message = api.add_message(&login, &text)?;
            print::print_info(&format!("Message {} posted", message.id));
        }
        Commands::CreateFriendship { login, friend } => {
            api.add_friendship(&login, &friend)?;
            print::print_info(&format!("{} is now friends with {}", login, friend));
        }
        Commands::FriendNames { login } => {
            print::print_names(&api.friend_names(&login)?);
        }
        Commands::CountFriends { login } => {
            print::print_count(api.count_friends(&login)?);
        }
        Commands::Messages { login, start, end } => {
            print::print_messages(&api.messages_in_window(&login, &start, &end)?);
        }
        Commands::Bench { target, counts } => match target {
            BenchTarget::Insert => {
                let times = api.benchmark_series(BenchMode::Insert, &counts)?;
                print::print_times("writing", &times);
            }
            BenchTarget::Read => {
                let times = api.benchmark_series(BenchMode::Read, &counts)?;
                print::print_times("reading", &times);
            }
            BenchTarget::All => {
                let (writes, reads) = api.benchmark_all(&counts)?;
                print::print_times("writing", &writes);
                print::print_times("reading", &reads);
            }
        },
    }
    Ok(())
}
