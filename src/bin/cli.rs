//! evalstore CLI
//!
//! Command-line access to a local eval run store.

use std::fs;
use std::io;

use clap::{Parser, Subcommand};
use evalstore::config::DEFAULT_ROOT_NAME;
use evalstore::{Config, EvalRun, EvalRunStore, EvalStoreError, ListQuery, SyncPolicy};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// evalstore CLI
#[derive(Parser, Debug)]
#[command(name = "evalstore")]
#[command(about = "Store, list and delete evaluation run records")]
#[command(version)]
struct Args {
    /// Store root directory
    #[arg(short, long, default_value = DEFAULT_ROOT_NAME)]
    root: String,

    /// fsync every write
    #[arg(long)]
    sync: bool,

    /// Pretty-print record files and output
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Save a run from a JSON file ("-" reads stdin)
    Save {
        /// Path to the run document
        file: String,
    },

    /// Print a run by ID
    Load {
        /// The run ID
        id: String,
    },

    /// List indexed run keys
    List {
        /// Only keys with this actionRef
        #[arg(short, long)]
        action_ref: Option<String>,
    },

    /// Delete a run
    #[command(alias = "del")]
    Delete {
        /// The run ID
        id: String,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,evalstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> evalstore::Result<()> {
    let sync_policy = if args.sync {
        SyncPolicy::EveryWrite
    } else {
        SyncPolicy::Never
    };

    let config = Config::builder()
        .root_dir(&args.root)
        .sync_policy(sync_policy)
        .pretty_records(args.pretty)
        .build();

    let store = EvalRunStore::open(config)?;

    match args.command {
        Commands::Save { file } => {
            let text = if file == "-" {
                io::read_to_string(io::stdin())?
            } else {
                fs::read_to_string(&file)?
            };
            let run = EvalRun::parse_json(&text)
                .map_err(|e| EvalStoreError::InvalidRun(e.to_string()))?;
            store.save(&run)?;
            tracing::info!("Saved eval run {}", run.id());
        }
        Commands::Load { id } => {
            let run = store.load(&id)?;
            print_json(&run, args.pretty)?;
        }
        Commands::List { action_ref } => {
            let query = match action_ref {
                Some(action_ref) => ListQuery::action_ref(action_ref),
                None => ListQuery::all(),
            };
            let result = store.list(&query)?;
            print_json(&result, args.pretty)?;
        }
        Commands::Delete { id } => {
            store.delete(&id)?;
            tracing::info!("Deleted eval run {}", id);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> evalstore::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| EvalStoreError::Serialization(e.to_string()))?;

    println!("{}", text);
    Ok(())
}
