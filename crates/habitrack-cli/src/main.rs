use clap::{Parser, Subcommand};
use habitrack_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "habitrack", version, about = "Habitrack CLI")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a habit
    Add(commands::habit::AddArgs),
    /// Delete every habit with the given name
    Delete {
        /// Habit name
        name: String,
    },
    /// Complete today's task for a habit
    Complete {
        /// Habit name
        name: String,
    },
    /// List habits
    List {
        /// Only habits with this periodicity (daily or weekly)
        #[arg(long)]
        periodicity: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Longest streak overall, or for one habit
    Streak {
        /// Habit name
        name: Option<String>,
    },
    /// Rewrite the store file, optionally to another path
    Save {
        /// Destination (defaults to the store file)
        #[arg(long)]
        to: Option<std::path::PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_env("HABITRACK_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    // Config commands must work even when the config file is broken.
    if let Commands::Config { action } = command {
        return commands::config::run(action);
    }
    if let Commands::Completions { shell } = command {
        commands::completions::run(shell);
        return Ok(());
    }

    let config = Config::load()?;
    init_tracing(&config);
    let mut store = commands::open_store(&config)?;

    match command {
        Commands::Add(args) => commands::habit::add(&mut store, args),
        Commands::Delete { name } => commands::habit::delete(&mut store, &name),
        Commands::Complete { name } => commands::habit::complete(&mut store, &name),
        Commands::List { periodicity, json } => {
            commands::habit::list(&mut store, periodicity.as_deref(), json)
        }
        Commands::Streak { name } => commands::streak::run(&store, name.as_deref()),
        Commands::Save { to } => commands::habit::save(&store, to.as_deref()),
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
