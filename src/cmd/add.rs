use clap::Args;
use introspect::i18n::{tr, Lang};
use introspect::journal::Journal;
use introspect::model::Classification;
use introspect::IntroResult;

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// The thought itself.
    pub content: String,

    /// Root cause label, e.g. Needs, Habits, Environment, Unknown.
    #[arg(short, long)]
    pub cause: String,

    /// Qualitative nature of the thought.
    #[arg(short, long, value_enum)]
    pub nature: Classification,
}

pub fn run(args: AddArgs, journal: &mut Journal, lang: Lang) -> IntroResult<bool> {
    let thought = journal.add(&args.content, &args.cause, args.nature)?;
    println!("✅ {} (id {})", tr(lang, "msg_saved"), thought.id);
    Ok(true)
}
