//! Duel command - Alternate strikes until one character falls.

use anyhow::Result;
use clap::Args;

use acco_core::{Arena, GameCharacterFactory, GameCharacterKind};

use super::Context;

#[derive(Args)]
pub struct DuelArgs {
    /// Kind of the opening character
    opener: GameCharacterKind,

    /// Kind of the challenger
    challenger: GameCharacterKind,

    /// Strike limit (overrides the config file)
    #[arg(long)]
    max_rounds: Option<u32>,
}

pub fn execute(args: DuelArgs, ctx: &Context) -> Result<()> {
    let arena = match args.max_rounds {
        Some(rounds) => Arena::new(rounds),
        None => Arena::from_config(&ctx.config),
    };

    let mut opener = GameCharacterFactory::make(args.opener);
    let mut challenger = GameCharacterFactory::make(args.challenger);
    let summary = arena.duel(&mut opener, &mut challenger);

    let mut lines: Vec<String> = summary
        .log
        .iter()
        .enumerate()
        .map(|(i, outcome)| match outcome.report() {
            Some(report) => format!("Round {}: {}", i + 1, report),
            None => format!("Round {}: no one defeated", i + 1),
        })
        .collect();
    lines.push(match &summary.winner {
        Some(winner) => format!("🏆 {} wins after {} round(s)", winner, summary.rounds),
        None => format!("⏱️  No winner after {} round(s)", summary.rounds),
    });

    ctx.emit(&summary, &lines)
}
