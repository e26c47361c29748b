//! Repeated battles between two characters until one falls.
//!
//! Each round is one [`battle`] call. The striker alternates, with the first
//! combatant opening, so a duel is a sequence of asymmetric strikes rather
//! than a different combat rule.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::battle::{battle, BattleOutcome};
use crate::character::{CharacterSnapshot, GameCharacter};
use crate::config::PlaygroundConfig;
use crate::error::CoreResult;

/// Default strike limit for a duel.
pub const DEFAULT_MAX_ROUNDS: u32 = 20;

/// Summary of a finished duel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelSummary {
    /// Name of the surviving character, `None` if the round limit was hit.
    pub winner: Option<String>,
    /// Number of strikes performed.
    pub rounds: u32,
    /// Outcome of every strike, in order.
    pub log: Vec<BattleOutcome>,
    /// Final stats of both combatants, opener first.
    pub combatants: Vec<CharacterSnapshot>,
}

impl DuelSummary {
    /// Render the summary as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs duels with a fixed strike limit.
#[derive(Debug, Clone)]
pub struct Arena {
    max_rounds: u32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl Arena {
    /// Create an arena with the given strike limit (at least one strike).
    pub fn new(max_rounds: u32) -> Self {
        Self {
            max_rounds: max_rounds.max(1),
        }
    }

    /// Create an arena using the configured strike limit.
    pub fn from_config(config: &PlaygroundConfig) -> Self {
        Self::new(config.arena_max_rounds)
    }

    /// Strike limit applied to each duel.
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Duel until a defeat is reported or the round limit is reached.
    pub fn duel<A, B>(&self, opener: &mut A, challenger: &mut B) -> DuelSummary
    where
        A: GameCharacter + ?Sized,
        B: GameCharacter + ?Sized,
    {
        info!("Duel: {} vs {}", opener.name(), challenger.name());

        let mut log = Vec::new();
        let mut winner = None;
        let mut rounds = 0;

        while rounds < self.max_rounds {
            rounds += 1;
            let opener_strikes = rounds % 2 == 1;

            let (outcome, striker, defender) = if opener_strikes {
                let outcome = battle(&*opener, &mut *challenger);
                (outcome, opener.name().to_string(), challenger.name().to_string())
            } else {
                let outcome = battle(&*challenger, &mut *opener);
                (outcome, challenger.name().to_string(), opener.name().to_string())
            };
            debug!("Round {}: {:?}", rounds, outcome);

            let decided = match &outcome {
                BattleOutcome::SecondDefeated { .. } => Some(striker),
                BattleOutcome::FirstDefeated { .. } => Some(defender),
                BattleOutcome::Undecided => None,
            };
            log.push(outcome);

            if decided.is_some() {
                winner = decided;
                break;
            }
        }

        match &winner {
            Some(name) => info!("{} wins after {} round(s)", name, rounds),
            None => warn!("Duel ended without a winner after {} round(s)", rounds),
        }

        DuelSummary {
            winner,
            rounds,
            log,
            combatants: vec![opener.snapshot(), challenger.snapshot()],
        }
    }
}
