use crate::reports;
use clap::Args;
use introspect::i18n::{tr, Lang};
use introspect::journal::Journal;
use introspect::stats;
use introspect::stats::treemap::{self, Rect};
use introspect::IntroResult;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsBy {
    Cause,
    Nature,
}

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Show only one section; both are shown by default.
    #[arg(long, value_enum)]
    pub by: Option<StatsBy>,

    /// Treemap grid width in character cells.
    #[arg(long, default_value_t = 64)]
    pub width: usize,

    /// Treemap grid height in character cells.
    #[arg(long, default_value_t = 16)]
    pub height: usize,
}

pub fn run(args: StatsArgs, journal: &Journal, lang: Lang) -> IntroResult<()> {
    // Stats are never computed over an empty record set; that contract is
    // enforced here at the boundary, not inside the layout engine.
    if journal.is_empty() {
        println!("{}", tr(lang, "empty_log_to_see"));
        return Ok(());
    }

    println!("\n📊 {}", tr(lang, "section_patterns_title"));

    if args.by != Some(StatsBy::Nature) {
        println!("\n--- {} ---", tr(lang, "subtitle_root_cause"));
        let tally = journal.tally_root_causes();
        let nodes = treemap::layout(&tally, Rect::ROOT)?;
        print!("{}", reports::render_treemap(&nodes, args.width, args.height));
        println!("{}", reports::treemap_legend(&nodes));
    }

    if args.by != Some(StatsBy::Cause) {
        println!("\n--- {} ---", tr(lang, "subtitle_nature"));
        let bars = stats::bars(&journal.tally_natures())?;
        println!("{}", reports::render_bars(&bars, 40));
    }

    Ok(())
}
