use clap::Args;
use introspect::i18n::{tr, Lang};
use introspect::journal::Journal;
use introspect::store;
use introspect::{IntroResult, IntrospectError};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Write the backup payload to a file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// File holding a previously exported backup payload.
    pub file: PathBuf,
}

pub fn run_export(args: ExportArgs, journal: &Journal) -> IntroResult<()> {
    let payload = store::export_string(journal)?;
    match args.out {
        Some(path) => {
            fs::write(&path, &payload)?;
            println!("Exported {} thoughts to {}", journal.len(), path.display());
        }
        None => println!("{}", payload),
    }
    Ok(())
}

/// Import replaces the full record set rather than merging.
pub fn run_import(args: ImportArgs, journal: &mut Journal, lang: Lang) -> IntroResult<bool> {
    let raw = fs::read_to_string(&args.file)?;
    let thoughts = store::import_str(&raw).map_err(|e| match e {
        IntrospectError::Validation(_) => {
            IntrospectError::Validation(tr(lang, "err_invalid_format").to_string())
        }
        other => other,
    })?;
    let count = thoughts.len();
    *journal = Journal::from_thoughts(thoughts);
    println!("✅ {} ({} thoughts)", tr(lang, "msg_import_success"), count);
    Ok(true)
}
