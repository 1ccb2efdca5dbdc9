use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qboard::repo::Repository;
use qboard::store::QuestionStore;
use qboard::ui::Shell;

#[derive(Parser)]
#[command(name = "qboard")]
#[command(about = "Local question and answer board")]
struct Cli {
    /// Store file to use instead of the platform data directory
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive board (the default)
    Open,
    /// Print the store location and exit
    Path,
}

/// Initialize tracing to stderr so board output on stdout stays clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "qboard=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => QuestionStore::default_path()?,
    };

    match cli.command {
        Some(Commands::Path) => {
            println!("{}", store_path.display());
        }
        Some(Commands::Open) | None => {
            tracing::info!("opening question board at {}", store_path.display());

            let repo = Repository::open(QuestionStore::open(store_path))?;
            Shell::new(repo).run()?;
        }
    }

    Ok(())
}
