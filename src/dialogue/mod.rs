//! # Dialogue Module
//!
//! Runtime conversation for settlement NPCs.
//!
//! World generation only attaches a canned line set to each NPC. Anything
//! richer goes through a [`DialogueProvider`], which the game layer picks:
//! [`CannedDialogue`] cycles the built-in lines, [`CliDialogueProvider`] asks an
//! external assistant command and falls back to the canned lines.

pub mod canned;
pub mod cli;
pub mod provider;

pub use canned::*;
pub use cli::*;
pub use provider::*;
