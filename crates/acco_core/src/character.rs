//! Game characters and their factory.
//!
//! Callers only ever see `impl GameCharacter`: the concrete variant behind a
//! character is private to this module, and the trait is sealed so no other
//! crate can add kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;

/// The closed set of character kinds the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCharacterKind {
    Elf,
    Giant,
    Wizard,
}

impl GameCharacterKind {
    /// All kinds, in declaration order.
    pub const ALL: [GameCharacterKind; 3] = [Self::Elf, Self::Giant, Self::Wizard];

    /// Display name shared by every character of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Elf => "Elf",
            Self::Giant => "Giant",
            Self::Wizard => "Wizard",
        }
    }

    fn starting_hit_points(&self) -> i32 {
        match self {
            Self::Elf => 3,
            Self::Giant => 10,
            Self::Wizard => 5,
        }
    }

    fn attack_points(&self) -> i32 {
        match self {
            Self::Elf => 10,
            Self::Giant => 3,
            Self::Wizard => 5,
        }
    }
}

impl fmt::Display for GameCharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameCharacterKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "elf" => Ok(Self::Elf),
            "giant" => Ok(Self::Giant),
            "wizard" => Ok(Self::Wizard),
            _ => Err(CoreError::UnknownCharacterKind(s.to_string())),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Capability surface of a character.
///
/// Hit points are the only mutable stat. Nothing clamps them at zero, so a
/// defeated character can keep losing points.
pub trait GameCharacter: sealed::Sealed + fmt::Debug {
    fn name(&self) -> &str;

    fn hit_points(&self) -> i32;

    fn set_hit_points(&mut self, hit_points: i32);

    fn attack_points(&self) -> i32;

    /// A character is defeated once its hit points reach zero or below.
    fn is_defeated(&self) -> bool {
        self.hit_points() <= 0
    }

    /// Capture the current stats.
    fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            name: self.name().to_string(),
            hit_points: self.hit_points(),
            attack_points: self.attack_points(),
            defeated: self.is_defeated(),
        }
    }
}

/// Point-in-time view of a character's stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub name: String,
    pub hit_points: i32,
    pub attack_points: i32,
    pub defeated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stats {
    hit_points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Character {
    Elf(Stats),
    Giant(Stats),
    Wizard(Stats),
}

impl Character {
    fn kind(&self) -> GameCharacterKind {
        match self {
            Self::Elf(_) => GameCharacterKind::Elf,
            Self::Giant(_) => GameCharacterKind::Giant,
            Self::Wizard(_) => GameCharacterKind::Wizard,
        }
    }

    fn stats(&self) -> &Stats {
        match self {
            Self::Elf(stats) | Self::Giant(stats) | Self::Wizard(stats) => stats,
        }
    }

    fn stats_mut(&mut self) -> &mut Stats {
        match self {
            Self::Elf(stats) | Self::Giant(stats) | Self::Wizard(stats) => stats,
        }
    }
}

impl sealed::Sealed for Character {}

impl GameCharacter for Character {
    fn name(&self) -> &str {
        self.kind().name()
    }

    fn hit_points(&self) -> i32 {
        self.stats().hit_points
    }

    fn set_hit_points(&mut self, hit_points: i32) {
        self.stats_mut().hit_points = hit_points;
    }

    fn attack_points(&self) -> i32 {
        self.kind().attack_points()
    }
}

/// Static factory for game characters.
pub struct GameCharacterFactory;

impl GameCharacterFactory {
    /// Build a fresh character of the given kind with its starting stats.
    pub fn make(kind: GameCharacterKind) -> impl GameCharacter {
        let stats = Stats {
            hit_points: kind.starting_hit_points(),
        };
        debug!("Making character: {}", kind);

        match kind {
            GameCharacterKind::Elf => Character::Elf(stats),
            GameCharacterKind::Giant => Character::Giant(stats),
            GameCharacterKind::Wizard => Character::Wizard(stats),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_elf() {
        let elf = GameCharacterFactory::make(GameCharacterKind::Elf);
        assert_eq!(elf.name(), "Elf");
        assert_eq!(elf.hit_points(), 3);
        assert_eq!(elf.attack_points(), 10);
    }

    #[test]
    fn test_make_giant() {
        let giant = GameCharacterFactory::make(GameCharacterKind::Giant);
        assert_eq!(giant.name(), "Giant");
        assert_eq!(giant.hit_points(), 10);
        assert_eq!(giant.attack_points(), 3);
    }

    #[test]
    fn test_make_wizard() {
        let wizard = GameCharacterFactory::make(GameCharacterKind::Wizard);
        assert_eq!(wizard.name(), "Wizard");
        assert_eq!(wizard.hit_points(), 5);
        assert_eq!(wizard.attack_points(), 5);
    }

    #[test]
    fn test_hit_points_are_not_clamped() {
        let mut elf = GameCharacterFactory::make(GameCharacterKind::Elf);
        elf.set_hit_points(-7);
        assert_eq!(elf.hit_points(), -7);
        assert!(elf.is_defeated());
        assert_eq!(elf.attack_points(), 10);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("elf".parse::<GameCharacterKind>().unwrap(), GameCharacterKind::Elf);
        assert_eq!(" Giant ".parse::<GameCharacterKind>().unwrap(), GameCharacterKind::Giant);
        assert_eq!("WIZARD".parse::<GameCharacterKind>().unwrap(), GameCharacterKind::Wizard);

        let err = "orc".parse::<GameCharacterKind>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownCharacterKind(ref s) if s == "orc"));
    }

    #[test]
    fn test_snapshot() {
        let wizard = GameCharacterFactory::make(GameCharacterKind::Wizard);
        let snapshot = wizard.snapshot();
        assert_eq!(
            snapshot,
            CharacterSnapshot {
                name: "Wizard".to_string(),
                hit_points: 5,
                attack_points: 5,
                defeated: false,
            }
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&GameCharacterKind::Giant).unwrap();
        assert_eq!(json, "\"giant\"");
    }
}
