//! # acco_core
//!
//! A LIFO stack container, a turn-based battle simulator, and the small
//! companion models that go with them.
//!
//! This crate provides:
//! - **Stack**: a generic LIFO container exposing only push/pop/peek/count
//! - **Characters**: an opaque factory for Elves, Giants and Wizards
//! - **Battle**: a single asymmetric strike resolution plus an arena duel
//! - **Accounts**: bank accounts with a deprecated legacy API alongside the current one
//! - **Roster**: id-keyed student ownership with non-owning partner links
//! - **Logger**: a process-wide logger with a single point of construction
//! - **Text**: character histograms and word utilities
//!
//! ## Example
//!
//! ```rust
//! use acco_core::{battle, BattleOutcome, GameCharacter, GameCharacterFactory, GameCharacterKind};
//!
//! let elf = GameCharacterFactory::make(GameCharacterKind::Elf);
//! let mut giant = GameCharacterFactory::make(GameCharacterKind::Giant);
//!
//! let outcome = battle(&elf, &mut giant);
//! assert_eq!(outcome.to_string(), "Giant defeated!");
//! assert_eq!(giant.hit_points(), 0);
//! assert!(matches!(outcome, BattleOutcome::SecondDefeated { .. }));
//! ```

pub mod accounts;
pub mod arena;
pub mod battle;
pub mod character;
pub mod config;
pub mod error;
pub mod logger;
pub mod roster;
pub mod stack;
pub mod text;

pub use accounts::{create_account, Account, BasicAccount, Check, CheckingAccount, Dollars, SavingsAccount};
pub use arena::{Arena, DuelSummary};
pub use battle::{battle, BattleOutcome};
pub use character::{CharacterSnapshot, GameCharacter, GameCharacterFactory, GameCharacterKind};
pub use config::PlaygroundConfig;
pub use error::{CoreError, CoreResult};
pub use logger::{LogEntry, Logger};
pub use roster::{Grade, Roster, Student, StudentId};
pub use stack::Stack;
pub use text::{char_histogram, invert_name, render_histogram, reverse_words, split_components, word_count, CharCount};
