//! Dialogue provider seam.

use crate::game::Biome;
use serde::{Deserialize, Serialize};

/// What a provider knows about the conversation it is asked to continue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogueContext {
    /// Display name of the speaking NPC
    pub npc_name: String,
    /// Settlement the NPC lives in
    pub settlement: Option<String>,
    pub biome: Option<Biome>,
    /// Last thing the player said, if anything
    pub player_message: Option<String>,
    /// How many lines this NPC has already spoken in the conversation
    pub turn: usize,
}

impl DialogueContext {
    pub fn new(npc_name: impl Into<String>) -> Self {
        Self {
            npc_name: npc_name.into(),
            ..Self::default()
        }
    }

    pub fn in_settlement(mut self, settlement: impl Into<String>, biome: Biome) -> Self {
        self.settlement = Some(settlement.into());
        self.biome = Some(biome);
        self
    }

    pub fn with_player_message(mut self, message: impl Into<String>) -> Self {
        self.player_message = Some(message.into());
        self
    }

    pub fn at_turn(mut self, turn: usize) -> Self {
        self.turn = turn;
        self
    }
}

/// Produces an NPC's next line.
///
/// Providers never fail: whatever goes wrong internally, the caller receives
/// something the NPC can say.
#[allow(async_fn_in_trait)]
pub trait DialogueProvider {
    async fn get_line(&self, npc_type: &str, context: &DialogueContext) -> String;

    /// Name used in logs.
    fn provider_name(&self) -> &'static str;
}
