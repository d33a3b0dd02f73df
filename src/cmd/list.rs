use crate::reports;
use clap::Args;
use introspect::i18n::{tr, Lang};
use introspect::journal::Journal;
use introspect::model::SortMode;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Substring filter across content, root cause and nature.
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    pub sort: SortMode,

    /// Redact thought content in the output.
    #[arg(long)]
    pub private: bool,
}

pub fn run(args: ListArgs, journal: &Journal, lang: Lang) {
    println!("\n{}", tr(lang, "section_recent_thoughts"));

    if journal.is_empty() {
        println!("{}", tr(lang, "empty_history"));
        return;
    }

    let rows = journal.select(args.search.as_deref(), args.sort);
    if rows.is_empty() {
        println!("{}", tr(lang, "empty_search_results"));
        return;
    }

    reports::print_list(&rows, lang, args.private);
}
