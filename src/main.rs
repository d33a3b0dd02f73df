// ===== introspect/src/main.rs =====
use clap::{Parser, Subcommand};
use introspect::i18n::Lang;
use introspect::store::Store;
use introspect::IntroResult;
use std::path::PathBuf;
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Personal introspection journal with pattern analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the JSON store; defaults to the per-user data directory.
    #[arg(global = true, long)]
    store: Option<PathBuf>,

    #[arg(global = true, long, value_enum, default_value_t)]
    lang: Lang,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log a new thought.
    Add(cmd::add::AddArgs),
    /// Browse, filter and sort logged thoughts.
    List(cmd::list::ListArgs),
    /// Render the pattern dashboard (treemap + bar chart).
    Stats(cmd::stats::StatsArgs),
    /// Update an existing thought.
    Edit(cmd::manage::EditArgs),
    /// Delete one thought.
    Delete(cmd::manage::DeleteArgs),
    /// Vote on how often a thought recurs.
    Vote(cmd::manage::VoteArgs),
    /// Delete every thought. Requires --confirm DELETE.
    Clear(cmd::manage::ClearArgs),
    /// Print the full record set as a backup payload.
    Export(cmd::data::ExportArgs),
    /// Replace the record set from a backup payload.
    Import(cmd::data::ImportArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = run(cli) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> IntroResult<()> {
    let path = cli.store.clone().unwrap_or_else(Store::default_path);
    let store = Store::new(&path);
    let mut journal = store.load()?;
    let lang = cli.lang;

    let mutated = match cli.command {
        Commands::Add(args) => cmd::add::run(args, &mut journal, lang)?,
        Commands::List(args) => {
            cmd::list::run(args, &journal, lang);
            false
        }
        Commands::Stats(args) => {
            cmd::stats::run(args, &journal, lang)?;
            false
        }
        Commands::Edit(args) => cmd::manage::run_edit(args, &mut journal, lang)?,
        Commands::Delete(args) => cmd::manage::run_delete(args, &mut journal, lang)?,
        Commands::Vote(args) => cmd::manage::run_vote(args, &mut journal)?,
        Commands::Clear(args) => cmd::manage::run_clear(args, &mut journal, lang)?,
        Commands::Export(args) => {
            cmd::data::run_export(args, &journal)?;
            false
        }
        Commands::Import(args) => cmd::data::run_import(args, &mut journal, lang)?,
    };

    if mutated {
        store.save(&journal)?;
    }
    Ok(())
}
