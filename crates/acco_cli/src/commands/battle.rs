//! Battle command - One strike between two fresh characters.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::info;

use acco_core::{battle, BattleOutcome, CharacterSnapshot, GameCharacter, GameCharacterFactory, GameCharacterKind};

use super::Context;

#[derive(Args)]
pub struct BattleArgs {
    /// Kind of the striking character (elf, giant, wizard)
    first: GameCharacterKind,

    /// Kind of the defending character
    second: GameCharacterKind,
}

#[derive(Serialize)]
struct BattleReport {
    outcome: BattleOutcome,
    first: CharacterSnapshot,
    second: CharacterSnapshot,
}

pub fn execute(args: BattleArgs, ctx: &Context) -> Result<()> {
    info!("Battle: {} vs {}", args.first, args.second);

    let first = GameCharacterFactory::make(args.first);
    let mut second = GameCharacterFactory::make(args.second);
    let outcome = battle(&first, &mut second);

    let mut lines = vec![
        format!("⚔️  {} strikes {} for {}", first.name(), second.name(), first.attack_points()),
        format!("   {} has {} hit point(s) left", second.name(), second.hit_points()),
    ];
    lines.push(outcome.report().unwrap_or_else(|| "No one was defeated.".to_string()));

    let report = BattleReport {
        outcome,
        first: first.snapshot(),
        second: second.snapshot(),
    };
    ctx.emit(&report, &lines)
}
