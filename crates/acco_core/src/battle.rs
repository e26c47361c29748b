//! Single-strike battle resolution.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::character::GameCharacter;

/// Result of one [`battle`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BattleOutcome {
    /// The defending character was driven to zero hit points or below.
    SecondDefeated { name: String },
    /// The defender survived but the attacker was already down.
    FirstDefeated { name: String },
    /// Nobody is defeated. No report is produced.
    Undecided,
}

impl BattleOutcome {
    /// Name of the defeated character, if any.
    pub fn defeated(&self) -> Option<&str> {
        match self {
            Self::SecondDefeated { name } | Self::FirstDefeated { name } => Some(name),
            Self::Undecided => None,
        }
    }

    /// The defeat report, or `None` when the exchange produced no report.
    pub fn report(&self) -> Option<String> {
        self.defeated().map(|name| format!("{} defeated!", name))
    }

    /// Whether someone was defeated.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Undecided)
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.defeated() {
            Some(name) => write!(f, "{} defeated!", name),
            None => Ok(()),
        }
    }
}

/// Pit two characters against each other, the first striking first.
///
/// Only `first` strikes: `second` loses `first.attack_points()` hit points.
/// If that takes `second` to zero or below it is reported defeated and
/// `first` is not examined. Otherwise `first` is reported defeated only if
/// its hit points were already at zero or below. There is no counter-strike
/// and nothing stops an already-defeated character from being hit again.
pub fn battle<A, B>(first: &A, second: &mut B) -> BattleOutcome
where
    A: GameCharacter + ?Sized,
    B: GameCharacter + ?Sized,
{
    let remaining = second.hit_points() - first.attack_points();
    second.set_hit_points(remaining);
    debug!(
        "{} strikes {} for {} ({} hit points left)",
        first.name(),
        second.name(),
        first.attack_points(),
        remaining
    );

    let outcome = if second.is_defeated() {
        BattleOutcome::SecondDefeated {
            name: second.name().to_string(),
        }
    } else if first.is_defeated() {
        BattleOutcome::FirstDefeated {
            name: first.name().to_string(),
        }
    } else {
        BattleOutcome::Undecided
    };

    if let Some(report) = outcome.report() {
        info!("{}", report);
    }

    outcome
}
