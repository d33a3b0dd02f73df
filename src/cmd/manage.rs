use clap::Args;
use introspect::confirm::{self, ConfirmGate, Poke};
use introspect::i18n::{tr, Lang};
use introspect::journal::Journal;
use introspect::model::Classification;
use introspect::{IntroResult, IntrospectError};
use std::io::BufRead;
use std::time::Instant;

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    pub id: u64,

    #[arg(long)]
    pub content: Option<String>,

    #[arg(long)]
    pub cause: Option<String>,

    #[arg(long, value_enum)]
    pub nature: Option<Classification>,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    pub id: u64,

    /// Skip the interactive confirmation.
    #[arg(long)]
    pub yes: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

#[derive(Args, Debug, Clone)]
pub struct VoteArgs {
    pub id: u64,

    #[arg(value_enum)]
    pub direction: VoteDirection,
}

#[derive(Args, Debug, Clone)]
pub struct ClearArgs {
    /// The confirmation phrase; must be exactly DELETE.
    #[arg(long)]
    pub confirm: String,
}

pub fn run_edit(args: EditArgs, journal: &mut Journal, lang: Lang) -> IntroResult<bool> {
    journal.edit(
        args.id,
        args.content.as_deref(),
        args.cause.as_deref(),
        args.nature,
    )?;
    println!("✅ {}", tr(lang, "msg_updated"));
    Ok(true)
}

pub fn run_delete(args: DeleteArgs, journal: &mut Journal, lang: Lang) -> IntroResult<bool> {
    if !args.yes && !confirm_interactively(lang)? {
        return Ok(false);
    }
    let removed = journal.remove(args.id)?;
    println!("🗑  Deleted thought {}", removed.id);
    Ok(true)
}

pub fn run_vote(args: VoteArgs, journal: &mut Journal) -> IntroResult<bool> {
    let delta = match args.direction {
        VoteDirection::Up => 1,
        VoteDirection::Down => -1,
    };
    let score = journal.vote(args.id, delta)?;
    println!("Recurrence score for {} is now {}", args.id, score);
    Ok(true)
}

pub fn run_clear(args: ClearArgs, journal: &mut Journal, lang: Lang) -> IntroResult<bool> {
    if !confirm::phrase_matches(&args.confirm) {
        return Err(IntrospectError::Validation(
            tr(lang, "placeholder_delete").to_string(),
        ));
    }
    journal.clear();
    println!("{}", tr(lang, "msg_all_deleted"));
    Ok(true)
}

/// Arm the confirm gate, then wait for a bare Enter. Any other input
/// cancels; an Enter after the window lapses re-arms instead of acting.
fn confirm_interactively(lang: Lang) -> IntroResult<bool> {
    let mut gate = ConfirmGate::new();
    gate.poke(Instant::now());
    println!(
        "{} Press Enter within {}s to confirm; anything else cancels.",
        tr(lang, "btn_sure"),
        confirm::CONFIRM_WINDOW.as_secs()
    );

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    if !line.trim().is_empty() {
        println!("Cancelled.");
        return Ok(false);
    }

    match gate.poke(Instant::now()) {
        Poke::Confirmed => Ok(true),
        _ => {
            println!("Confirmation window expired; nothing deleted.");
            Ok(false)
        }
    }
}
